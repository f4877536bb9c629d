mod lead;
mod sort;
mod value;

pub use lead::{LEAD_COLS, Lead, LeadStatus};
pub use sort::{SortDir, SortIndicator, SortKey};
pub use value::SortValue;
