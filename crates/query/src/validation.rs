//! Query parameters and page validation

use dataset::DateWindow;

/// Parameters for one filter/paginate call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportQuery {
    /// Inclusive start date
    pub start_date: String,
    /// Inclusive end date (the whole day is included)
    pub end_date: String,
    /// Optional case-insensitive substring matched against the identifier
    pub filter: Option<String>,
    /// 1-based page number
    pub page: u64,
}

impl ReportQuery {
    /// Query for the first page of `[start_date, end_date]` with no text filter.
    pub fn new(start_date: impl Into<String>, end_date: impl Into<String>) -> Self {
        Self { start_date: start_date.into(), end_date: end_date.into(), filter: None, page: 1 }
    }

    /// Set the identifier filter.
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    /// Set the requested page.
    pub fn with_page(mut self, page: u64) -> Self {
        self.page = page;
        self
    }

    /// Date window of this query, `None` when a bound cannot be parsed.
    pub fn date_window(&self) -> Option<DateWindow> {
        DateWindow::from_inclusive_dates(&self.start_date, &self.end_date)
    }

    /// Lowercased filter text, `None` when the filter matches everything.
    pub fn filter_needle(&self) -> Option<String> {
        normalize_filter(self.filter.as_deref())
    }
}

/// Lowercase a filter; absent or empty filters match everything.
pub fn normalize_filter(filter: Option<&str>) -> Option<String> {
    filter.filter(|f| !f.is_empty()).map(str::to_lowercase)
}

/// Requested page lies outside `[1, total_pages]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("page {requested} is outside 1..={total_pages}")]
pub struct PageOutOfRange {
    /// Page that was asked for
    pub requested: u64,
    /// Number of pages available
    pub total_pages: u64,
}

/// Check that `page` is within `[1, total_pages]`.
pub const fn validate_page(page: u64, total_pages: u64) -> Result<u64, PageOutOfRange> {
    if page < 1 || page > total_pages {
        return Err(PageOutOfRange { requested: page, total_pages });
    }
    Ok(page)
}
