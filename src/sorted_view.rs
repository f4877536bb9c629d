use std::fmt::Debug;
use std::hash::Hash;
use std::sync::Arc;

use tracing::debug;

use crate::models::{SortKey, SortValue};
use crate::sort_state::SortState;

/// Rows plus their sorted view, recomputed only when the rows or the active
/// sort keys changed since the last [`compute`](Self::compute).
pub struct SortedView<T, C> {
    rows: Vec<Arc<T>>,
    view: Vec<Arc<T>>,
    generation: u64,
    computed: Option<(u64, Vec<SortKey<C>>)>,
}

impl<T, C> Default for SortedView<T, C> {
    fn default() -> Self {
        Self { rows: Vec::new(), view: Vec::new(), generation: 0, computed: None }
    }
}

impl<T, C> SortedView<T, C>
where
    C: Eq + Hash + Clone + Debug,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the rows, invalidating the current view.
    pub fn set_rows(&mut self, records: Vec<T>) {
        self.rows = records.into_iter().map(Arc::new).collect();
        self.generation += 1;
    }

    /// Sort the rows under `state` unless the last result is still valid.
    /// Returns whether a sort actually ran.
    pub fn compute<F>(&mut self, state: &SortState<C>, extract: F) -> bool
    where
        F: Fn(&T, &C) -> SortValue,
    {
        let keys = state.keys();
        if let Some((generation, last)) = &self.computed
            && *generation == self.generation
            && *last == keys
        {
            return false;
        }

        debug!(generation = self.generation, "sorted view recomputed");
        self.view = state.apply(&self.rows, |row, col| extract(&**row, col));
        self.computed = Some((self.generation, keys));
        true
    }

    pub fn with_view<R, F>(&self, f: F) -> R
    where
        F: FnOnce(&[Arc<T>]) -> R,
    {
        f(&self.view)
    }

    pub fn get(&self, index: usize) -> Option<Arc<T>> {
        self.view.get(index).cloned()
    }

    pub fn len(&self) -> usize {
        self.view.len()
    }

    pub fn is_empty(&self) -> bool {
        self.view.is_empty()
    }
}
