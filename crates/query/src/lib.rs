//! Date-range filtering, text filtering and pagination over a loaded dataset.

pub mod aggregation;
pub mod pagination;
pub mod paginator;
pub mod state;
pub mod validation;

pub use aggregation::count_outcomes;
pub use pagination::{page_range, total_pages};
pub use paginator::Paginator;
pub use state::ViewState;
pub use validation::{PageOutOfRange, ReportQuery, normalize_filter, validate_page};
