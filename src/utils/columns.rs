use std::borrow::Cow;

use crate::models::SortValue;
use crate::sort_state::SortState;

pub struct ColDef<T> {
    pub id: &'static str,
    pub title: &'static str,
    pub sortable: bool,
    /// value accessor, used for display and as the fallback sort value
    pub accessor: for<'a> fn(&'a T) -> Cow<'a, str>,
    /// typed sort value, optional. If None, the accessor string is compared
    pub sort_key: Option<fn(&T) -> SortValue>,
}

impl<T> ColDef<T> {
    #[inline]
    pub fn value(&self, row: &T) -> SortValue {
        match self.sort_key {
            Some(f) => f(row),
            // owned copy per row and key; `SortState::apply` extracts each value once
            None => SortValue::Str((self.accessor)(row).into_owned()),
        }
    }
}

/// Look up a sortable column by id.
pub fn find_col<'c, T>(cols: &'c [ColDef<T>], id: &str) -> Option<&'c ColDef<T>> {
    cols.iter().find(|c| c.id == id && c.sortable)
}

/// Sort `rows` by a state keyed on column ids. Ids missing from `cols`, or
/// not sortable, never reorder rows.
pub fn apply_cols<T: Clone>(state: &SortState<&'static str>, rows: &[T], cols: &[ColDef<T>]) -> Vec<T> {
    state.apply(rows, |row, id| match find_col(cols, id) {
        Some(col) => col.value(row),
        None => SortValue::Null,
    })
}

/// Header labels for every column in table order.
pub fn header_labels<T>(state: &SortState<&'static str>, cols: &[ColDef<T>]) -> Vec<String> {
    cols.iter().map(|c| state.header_label(&c.id, c.title)).collect()
}
