//! Replyscope dataset: record model, positional row mapping and loading.
//!
//! The backing collection is a JSON array of rows. Each row is mapped into a
//! [`ReplyRecord`] through a [`FieldLayout`], so the same record model serves
//! every dataset variant regardless of column offsets.

/// Date parsing and inclusive date windows
pub mod dates;
/// Positional row layouts per dataset variant
pub mod layout;
/// Dataset loading
pub mod loader;
/// Record model
pub mod models;

pub use dates::{DateWindow, parse_timestamp};
pub use layout::{ColumnLabels, DatasetKind, FieldLayout};
pub use loader::{Dataset, load_or_empty};
pub use models::ReplyRecord;
