use serde::{Deserialize, Serialize};
use strum::Display;

use crate::utils::symbols::{superscript, triangle};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDir {
    #[default]
    #[strum(to_string = "asc")]
    Asc,
    #[strum(to_string = "desc")]
    Desc,
}

impl SortDir {
    #[inline]
    pub fn toggle(self) -> Self {
        match self {
            SortDir::Asc => SortDir::Desc,
            SortDir::Desc => SortDir::Asc,
        }
    }
}

/// One active sort key. `priority` is 1-based, 1 is evaluated first.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SortKey<C> {
    pub column: C,
    pub dir: SortDir,
    pub priority: usize,
}

/// What a column header needs to draw its sort marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SortIndicator {
    pub dir: SortDir,
    pub priority: usize,
}

impl SortIndicator {
    pub fn glyph(&self) -> &'static str {
        match self.dir {
            SortDir::Asc => triangle::UP,
            SortDir::Desc => triangle::DOWN,
        }
    }

    /// Glyph followed by the superscript priority, e.g. `▼²`.
    pub fn badge(&self) -> String {
        format!("{}{}", self.glyph(), superscript(self.priority))
    }
}
