//! Prioritized multi-column sorting for tabular views.
//!
//! A [`SortState`] tracks which columns are sorted, in which direction and with
//! which priority. Clicking a header maps to [`SortState::toggle_column`], and
//! [`SortState::apply`] produces the stably sorted rows.

pub mod config;
pub mod logging;
pub mod models;
pub mod sort_state;
pub mod sorted_view;
pub mod utils;

pub use models::{SortDir, SortIndicator, SortKey, SortValue};
pub use sort_state::SortState;
pub use sorted_view::SortedView;
