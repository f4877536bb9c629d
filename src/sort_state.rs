use std::cmp::Ordering;
use std::fmt::Debug;
use std::hash::Hash;

use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::models::{SortDir, SortIndicator, SortKey, SortValue};

/// Prioritized multi-column sort state owned by a single view.
///
/// Active columns are kept in priority order: the entry at index `i` has
/// priority `i + 1`. Removing an entry shifts everything behind it, so
/// priorities stay `1..=N` without explicit renumbering.
///
/// Each column cycles `unsorted -> asc -> desc -> unsorted` on
/// [`toggle_column`](Self::toggle_column).
#[derive(Debug, Clone)]
pub struct SortState<C: Eq + Hash> {
    keys: IndexMap<C, SortDir>,
}

impl<C: Eq + Hash> Default for SortState<C> {
    fn default() -> Self {
        Self { keys: IndexMap::new() }
    }
}

impl<C> SortState<C>
where
    C: Eq + Hash + Clone + Debug,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance `column` one step through its sort cycle.
    pub fn toggle_column(&mut self, column: C) {
        match self.keys.get_index_of(&column) {
            None => {
                trace!(?column, priority = self.keys.len() + 1, "sort column added");
                self.keys.insert(column, SortDir::Asc);
            }
            Some(idx) if self.keys[idx] == SortDir::Asc => {
                trace!(?column, priority = idx + 1, "sort column flipped to desc");
                self.keys[idx] = self.keys[idx].toggle();
            }
            Some(idx) => {
                trace!(?column, priority = idx + 1, "sort column removed");
                self.keys.shift_remove_index(idx);
            }
        }
    }

    /// Add `column` with `dir` unless it is already active. Used to replay a
    /// configured default order through the normal toggle cycle.
    pub fn seed(&mut self, column: C, dir: SortDir) {
        if self.keys.contains_key(&column) {
            debug!(?column, "sort column already active, seed ignored");
            return;
        }
        self.toggle_column(column.clone());
        if dir == SortDir::Desc {
            self.toggle_column(column);
        }
    }

    pub fn clear(&mut self) {
        trace!(removed = self.keys.len(), "sort state cleared");
        self.keys.clear();
    }

    pub fn indicator_for(&self, column: &C) -> Option<SortIndicator> {
        self.keys
            .get_full(column)
            .map(|(idx, _, dir)| SortIndicator { dir: *dir, priority: idx + 1 })
    }

    pub fn direction_of(&self, column: &C) -> Option<SortDir> {
        self.keys.get(column).copied()
    }

    /// Snapshot of the active keys in priority order.
    pub fn keys(&self) -> Vec<SortKey<C>> {
        self.keys
            .iter()
            .enumerate()
            .map(|(idx, (column, dir))| SortKey { column: column.clone(), dir: *dir, priority: idx + 1 })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// More than one key is active, so headers should show priority badges.
    pub fn is_multi(&self) -> bool {
        self.keys.len() > 1
    }

    /// Header text for `column`: bare title, title with a direction glyph, or
    /// title with glyph and superscript priority when several keys are active.
    pub fn header_label(&self, column: &C, title: &str) -> String {
        match self.indicator_for(column) {
            None => title.to_owned(),
            Some(ind) if self.is_multi() => format!("{title}{}", ind.badge()),
            Some(ind) => format!("{title}{}", ind.glyph()),
        }
    }

    /// Composite comparison of two rows: keys are evaluated in priority order
    /// and the first non-equal result wins.
    pub fn compare<T, F>(&self, a: &T, b: &T, extract: F) -> Ordering
    where
        F: Fn(&T, &C) -> SortValue,
    {
        self.keys
            .iter()
            .map(|(column, dir)| extract(a, column).ordering(&extract(b, column), *dir))
            .find(|ord| ord.is_ne())
            .unwrap_or(Ordering::Equal)
    }

    /// Stable sort of `rows` into a new vector. `rows` itself is untouched and
    /// an empty state returns the rows in their input order.
    pub fn apply<T, F>(&self, rows: &[T], extract: F) -> Vec<T>
    where
        T: Clone,
        F: Fn(&T, &C) -> SortValue,
    {
        debug!(rows = rows.len(), keys = self.keys.len(), "apply sort");
        if self.keys.is_empty() {
            return rows.to_vec();
        }

        // extract each value once instead of per comparison
        let mut decorated: Vec<(Vec<SortValue>, &T)> = rows
            .iter()
            .map(|row| (self.keys.keys().map(|column| extract(row, column)).collect(), row))
            .collect();
        decorated.sort_by(|(a, _), (b, _)| {
            a.iter()
                .zip(b)
                .zip(self.keys.values())
                .map(|((va, vb), dir)| va.ordering(vb, *dir))
                .find(|ord| ord.is_ne())
                .unwrap_or(Ordering::Equal)
        });
        decorated.into_iter().map(|(_, row)| row.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        a: Option<u64>,
        b: &'static str,
        c: &'static str,
    }

    fn row(a: u64, b: &'static str, c: &'static str) -> Row {
        Row { a: Some(a), b, c }
    }

    fn extract(row: &Row, col: &&str) -> SortValue {
        match *col {
            "a" => row.a.into(),
            "b" => row.b.into(),
            "c" => row.c.into(),
            _ => SortValue::Null,
        }
    }

    fn priorities(state: &SortState<&'static str>) -> Vec<(&'static str, usize)> {
        state.keys().into_iter().map(|k| (k.column, k.priority)).collect()
    }

    fn assert_contiguous(state: &SortState<&'static str>) {
        let got: Vec<usize> = state.keys().iter().map(|k| k.priority).collect();
        let want: Vec<usize> = (1..=state.len()).collect();
        assert_eq!(got, want);
    }

    #[test]
    fn test_toggle_cycle() {
        let mut state = SortState::new();
        assert_eq!(state.indicator_for(&"a"), None);

        state.toggle_column("a");
        assert_eq!(state.indicator_for(&"a"), Some(SortIndicator { dir: SortDir::Asc, priority: 1 }));
        state.toggle_column("a");
        assert_eq!(state.indicator_for(&"a"), Some(SortIndicator { dir: SortDir::Desc, priority: 1 }));
        state.toggle_column("a");
        assert_eq!(state.indicator_for(&"a"), None);
        assert!(state.is_empty());
    }

    #[test]
    fn test_priorities_contiguous_after_every_toggle() {
        let mut state = SortState::new();
        let clicks = ["a", "b", "c", "b", "a", "d", "b", "a", "c", "c", "e", "d", "d", "a", "b"];
        for col in clicks {
            state.toggle_column(col);
            assert_contiguous(&state);
            let mut cols: Vec<_> = state.keys().into_iter().map(|k| k.column).collect();
            let len = cols.len();
            cols.sort();
            cols.dedup();
            assert_eq!(cols.len(), len, "duplicate column in {:?}", state);
        }
    }

    #[test]
    fn test_triple_toggle_restores_others() {
        let mut state = SortState::new();
        state.toggle_column("a");
        state.toggle_column("b");
        state.toggle_column("b");
        let before = priorities(&state);

        for _ in 0..3 {
            state.toggle_column("c");
        }
        assert_eq!(state.indicator_for(&"c"), None);
        assert_eq!(priorities(&state), before);
        assert_eq!(state.direction_of(&"b"), Some(SortDir::Desc));
    }

    #[test]
    fn test_remove_middle_priority() {
        let mut state = SortState::new();
        state.toggle_column("a");
        state.toggle_column("b");
        state.toggle_column("c");
        assert_eq!(priorities(&state), vec![("a", 1), ("b", 2), ("c", 3)]);

        state.toggle_column("b");
        state.toggle_column("b");
        assert_eq!(priorities(&state), vec![("a", 1), ("c", 2)]);
        assert_eq!(state.indicator_for(&"c").map(|i| i.priority), Some(2));
        assert_eq!(state.indicator_for(&"a"), Some(SortIndicator { dir: SortDir::Asc, priority: 1 }));
    }

    #[test]
    fn test_indicator_untouched_column() {
        let mut state = SortState::new();
        assert_eq!(state.indicator_for(&"z"), None);
        state.toggle_column("a");
        state.toggle_column("b");
        state.toggle_column("a");
        state.clear();
        state.toggle_column("c");
        assert_eq!(state.indicator_for(&"z"), None);
    }

    #[test]
    fn test_clear() {
        let mut state = SortState::new();
        state.toggle_column("a");
        state.toggle_column("b");
        state.clear();
        assert!(state.is_empty());
        assert!(state.keys().is_empty());
        // starts from priority 1 again
        state.toggle_column("b");
        assert_eq!(priorities(&state), vec![("b", 1)]);
    }

    #[test]
    fn test_apply_empty_is_identity() {
        let rows = vec![row(3, "x", "p"), row(1, "y", "q"), row(2, "z", "r")];
        let state: SortState<&str> = SortState::new();
        assert_eq!(state.apply(&rows, extract), rows);
    }

    #[test]
    fn test_apply_stable() {
        let rows = vec![row(1, "x", ""), row(1, "y", "")];
        let mut state = SortState::new();
        state.toggle_column("a");
        let sorted = state.apply(&rows, extract);
        assert_eq!(sorted, vec![row(1, "x", ""), row(1, "y", "")]);

        state.toggle_column("a");
        let sorted = state.apply(&rows, extract);
        assert_eq!(sorted, vec![row(1, "x", ""), row(1, "y", "")]);
    }

    #[test]
    fn test_apply_composite() {
        let rows = vec![row(2, "1", "p"), row(1, "2", "q"), row(1, "1", "r")];
        let mut state = SortState::new();
        state.toggle_column("a");
        state.toggle_column("b");
        let sorted = state.apply(&rows, extract);
        assert_eq!(sorted, vec![row(1, "1", "r"), row(1, "2", "q"), row(2, "1", "p")]);
        assert_eq!(rows[0], row(2, "1", "p"), "input must not be reordered");

        // b desc as secondary
        state.toggle_column("b");
        let sorted = state.apply(&rows, extract);
        assert_eq!(sorted, vec![row(1, "2", "q"), row(1, "1", "r"), row(2, "1", "p")]);
    }

    #[test]
    fn test_apply_signed_zero_stable() {
        let rows = vec![(0.0, "first"), (-0.0, "second"), (-1.0, "third")];
        let mut state = SortState::new();
        state.toggle_column("n");
        let extract = |r: &(f64, &'static str), _: &&'static str| SortValue::from(r.0);

        let names: Vec<_> = state.apply(&rows, extract).into_iter().map(|r| r.1).collect();
        assert_eq!(names, vec!["third", "first", "second"]);

        state.toggle_column("n");
        let names: Vec<_> = state.apply(&rows, extract).into_iter().map(|r| r.1).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_apply_missing_last() {
        let missing = Row { a: None, b: "m", c: "" };
        let rows = vec![missing.clone(), row(2, "x", ""), row(5, "y", "")];
        let mut state = SortState::new();

        state.toggle_column("a");
        let sorted = state.apply(&rows, extract);
        assert_eq!(sorted, vec![row(2, "x", ""), row(5, "y", ""), missing.clone()]);

        state.toggle_column("a");
        let sorted = state.apply(&rows, extract);
        assert_eq!(sorted, vec![row(5, "y", ""), row(2, "x", ""), missing]);
    }

    #[test]
    fn test_apply_unknown_column_keeps_order() {
        let rows = vec![row(2, "x", ""), row(1, "y", "")];
        let mut state = SortState::new();
        state.toggle_column("nope");
        assert_eq!(state.indicator_for(&"nope").map(|i| i.priority), Some(1));
        assert_eq!(state.apply(&rows, extract), rows);
    }

    #[test]
    fn test_compare_matches_apply() {
        let rows = vec![row(2, "1", "p"), row(1, "2", "q"), row(1, "1", "r")];
        let mut state = SortState::new();
        state.toggle_column("a");
        state.toggle_column("b");
        let mut in_place = rows.clone();
        in_place.sort_by(|x, y| state.compare(x, y, extract));
        assert_eq!(in_place, state.apply(&rows, extract));
    }

    #[test]
    fn test_twenty_keys() {
        let mut state: SortState<usize> = SortState::new();
        for col in 0..20 {
            state.toggle_column(col);
        }
        // flip every odd column to desc, then drop every column divisible by 3
        for col in (1..20).step_by(2) {
            state.toggle_column(col);
        }
        for col in (0..20).step_by(3) {
            state.toggle_column(col);
            if state.direction_of(&col) == Some(SortDir::Desc) {
                state.toggle_column(col);
            }
        }
        let keys = state.keys();
        assert_eq!(keys.len(), 13);
        assert!(keys.iter().enumerate().all(|(i, k)| k.priority == i + 1));
        assert!(keys.iter().all(|k| k.column % 3 != 0));

        // rows are bit patterns, column i reads bit i
        let rows: Vec<u32> = (0..256).rev().collect();
        let sorted = state.apply(&rows, |r: &u32, col: &usize| SortValue::from((r >> (col % 8)) & 1));
        for pair in sorted.windows(2) {
            let ord = state.compare(&pair[0], &pair[1], |r: &u32, col: &usize| {
                SortValue::from((r >> (col % 8)) & 1)
            });
            assert_ne!(ord, Ordering::Greater);
        }
    }

    #[test]
    fn test_seed() {
        let mut state = SortState::new();
        state.seed("status", SortDir::Asc);
        state.seed("score", SortDir::Desc);
        state.seed("status", SortDir::Desc);
        assert_eq!(
            state.keys(),
            vec![
                SortKey { column: "status", dir: SortDir::Asc, priority: 1 },
                SortKey { column: "score", dir: SortDir::Desc, priority: 2 },
            ]
        );
    }

    #[test]
    fn test_header_label() {
        let mut state = SortState::new();
        assert_eq!(state.header_label(&"score", "Score"), "Score");
        state.toggle_column("score");
        assert_eq!(state.header_label(&"score", "Score"), "Score▲");
        state.toggle_column("name");
        state.toggle_column("name");
        assert_eq!(state.header_label(&"score", "Score"), "Score▲¹");
        assert_eq!(state.header_label(&"name", "Name"), "Name▼²");
        assert_eq!(state.header_label(&"email", "Email"), "Email");
    }
}
