//! Filter/paginate core

use dataset::{Dataset, DatasetKind, ReplyRecord};
use report_types::PageResponse;
use tracing::{info, warn};

use crate::{
    aggregation::count_outcomes,
    pagination::{page_range, total_pages},
    validation::ReportQuery,
};

/// Filters a record set by date window and identifier text, then cuts one
/// page out of the filtered result.
///
/// Filtering always happens before slicing, and the win/loss counts cover
/// the whole filtered set rather than the current page. The requested page
/// is passed through unchanged; a page outside `[1, total_pages]` yields an
/// empty `data` list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    page_size: u64,
    with_stats: bool,
}

impl Paginator {
    /// Paginator with the given page size and win/loss counts enabled.
    pub const fn new(page_size: u64) -> Self {
        Self { page_size: if page_size == 0 { 1 } else { page_size }, with_stats: true }
    }

    /// Paginator using the default page size of a dataset variant.
    pub const fn for_kind(kind: DatasetKind) -> Self {
        Self::new(kind.default_page_size())
    }

    /// Enable or disable win/loss counts.
    pub const fn with_stats(mut self, enabled: bool) -> Self {
        self.with_stats = enabled;
        self
    }

    /// Records matching the query's date window and filter, in source order.
    pub fn filter<'a>(&self, records: &'a [ReplyRecord], query: &ReportQuery) -> Vec<&'a ReplyRecord> {
        let Some(window) = query.date_window() else {
            return Vec::new();
        };
        let needle = query.filter_needle();
        records
            .iter()
            .filter(|r| window.matches(&r.date))
            .filter(|r| needle.as_deref().is_none_or(|n| r.identifier_contains(n)))
            .collect()
    }

    /// Filter `records` and return the requested page.
    pub fn filter_and_paginate(&self, records: &[ReplyRecord], query: &ReportQuery) -> PageResponse {
        let filtered = self.filter(records, query);
        let total_entries = filtered.len() as u64;
        let data = filtered[page_range(query.page, self.page_size, filtered.len())]
            .iter()
            .map(|r| (*r).clone())
            .collect();
        let stats = self.with_stats.then(|| count_outcomes(filtered.iter().copied()));

        PageResponse {
            data,
            total_pages: total_pages(total_entries, self.page_size),
            current_page: query.page,
            total_entries,
            wins: stats.map(|s| s.wins),
            losses: stats.map(|s| s.losses),
        }
    }

    /// Page over a loaded dataset. An unavailable dataset yields an empty,
    /// single-page result instead of an error.
    pub fn page(&self, dataset: &Dataset, query: &ReportQuery) -> PageResponse {
        if !dataset.is_available() {
            warn!("Record collection unavailable, returning empty page");
            return PageResponse::empty(1, self.with_stats);
        }
        let page = self.filter_and_paginate(dataset.records(), query);
        info!(
            total_entries = page.total_entries,
            page = page.current_page,
            total_pages = page.total_pages,
            count = page.data.len(),
            "Returning page"
        );
        page
    }
}

impl Default for Paginator {
    fn default() -> Self {
        Self::for_kind(DatasetKind::default())
    }
}
