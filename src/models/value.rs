use std::cmp::Ordering;

use time::OffsetDateTime;

use crate::models::SortDir;

/// A column value as seen by the sort engine.
///
/// The set of kinds is closed so that every pair of values has a defined order:
/// numbers by magnitude, strings lexicographically, dates chronologically.
/// Values of different kinds order by kind (`Number < Str < Date`).
/// `Null` and NaN are missing and always land after present values, whatever
/// the direction, see [`SortValue::ordering`].
#[derive(Debug, Clone)]
pub enum SortValue {
    Null,
    Number(f64),
    Str(String),
    Date(OffsetDateTime),
}

impl SortValue {
    #[inline]
    pub fn is_missing(&self) -> bool {
        match self {
            SortValue::Null => true,
            SortValue::Number(n) => n.is_nan(),
            _ => false,
        }
    }

    fn rank(&self) -> u8 {
        match self {
            SortValue::Number(_) => 0,
            SortValue::Str(_) => 1,
            SortValue::Date(_) => 2,
            SortValue::Null => 3,
        }
    }

    /// Compare under `dir`, keeping missing values last in both directions.
    #[inline]
    pub fn ordering(&self, other: &Self, dir: SortDir) -> Ordering {
        match (self.is_missing(), other.is_missing()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => {
                let ord = self.cmp(other);
                match dir {
                    SortDir::Asc => ord,
                    SortDir::Desc => ord.reverse(),
                }
            }
        }
    }
}

impl Ord for SortValue {
    fn cmp(&self, other: &Self) -> Ordering {
        use SortValue::*;
        match (self, other) {
            // -0.0 and 0.0 tie, total_cmp alone would split them
            (Number(a), Number(b)) if a == b => Ordering::Equal,
            (Number(a), Number(b)) => a.total_cmp(b),
            (Str(a), Str(b)) => a.cmp(b),
            (Date(a), Date(b)) => a.cmp(b),
            (a, b) => a.rank().cmp(&b.rank()),
        }
    }
}

impl PartialOrd for SortValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for SortValue {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SortValue {}

impl From<f64> for SortValue {
    fn from(value: f64) -> Self {
        SortValue::Number(value)
    }
}

impl From<u64> for SortValue {
    fn from(value: u64) -> Self {
        SortValue::Number(value as f64)
    }
}

impl From<i64> for SortValue {
    fn from(value: i64) -> Self {
        SortValue::Number(value as f64)
    }
}

impl From<u32> for SortValue {
    fn from(value: u32) -> Self {
        SortValue::Number(value.into())
    }
}

impl From<i32> for SortValue {
    fn from(value: i32) -> Self {
        SortValue::Number(value.into())
    }
}

impl From<&str> for SortValue {
    fn from(value: &str) -> Self {
        SortValue::Str(value.to_owned())
    }
}

impl From<String> for SortValue {
    fn from(value: String) -> Self {
        SortValue::Str(value)
    }
}

impl From<OffsetDateTime> for SortValue {
    fn from(value: OffsetDateTime) -> Self {
        SortValue::Date(value)
    }
}

impl<T: Into<SortValue>> From<Option<T>> for SortValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(SortValue::Null)
    }
}
