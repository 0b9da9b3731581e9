//! Caller-owned view state for paging through a report

use dataset::Dataset;
use report_types::PageResponse;
use tracing::warn;

use crate::{
    paginator::Paginator,
    validation::{PageOutOfRange, ReportQuery, validate_page},
};

/// Current query and pagination position of a report view.
///
/// The view starts on page one with a single page; every refresh replaces the
/// pagination position with the one reported by the paginator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    query: ReportQuery,
    current_page: u64,
    total_pages: u64,
}

impl ViewState {
    /// Create a view for `query`, positioned on page one.
    pub const fn new(query: ReportQuery) -> Self {
        Self { query, current_page: 1, total_pages: 1 }
    }

    /// The query the view is built from.
    pub const fn query(&self) -> &ReportQuery {
        &self.query
    }

    /// Page shown by the last refresh.
    pub const fn current_page(&self) -> u64 {
        self.current_page
    }

    /// Page count reported by the last refresh.
    pub const fn total_pages(&self) -> u64 {
        self.total_pages
    }

    /// Recompute `page` of the view and record the new position.
    pub fn refresh(&mut self, paginator: &Paginator, dataset: &Dataset, page: u64) -> PageResponse {
        self.query.page = page;
        let response = paginator.page(dataset, &self.query);
        self.current_page = response.current_page;
        self.total_pages = response.total_pages;
        response
    }

    /// Move to `new_page`, rejecting pages outside `[1, total_pages]`.
    ///
    /// The view is left untouched when the page is rejected.
    pub fn change_page(
        &mut self,
        paginator: &Paginator,
        dataset: &Dataset,
        new_page: u64,
    ) -> Result<PageResponse, PageOutOfRange> {
        let page = validate_page(new_page, self.total_pages)?;
        Ok(self.refresh(paginator, dataset, page))
    }

    /// Open the view on `page`.
    ///
    /// An unavailable dataset always shows its single empty page, whatever
    /// page was asked for. Otherwise pages outside `[1, total_pages]` are
    /// rejected and the view stays on page one.
    pub fn open_page(
        &mut self,
        paginator: &Paginator,
        dataset: &Dataset,
        page: u64,
    ) -> Result<PageResponse, PageOutOfRange> {
        let first = self.refresh(paginator, dataset, 1);
        if page == 1 {
            return Ok(first);
        }
        if !dataset.is_available() {
            warn!(requested = page, "Record collection unavailable, showing page 1");
            return Ok(first);
        }
        self.change_page(paginator, dataset, page)
    }

    /// Advance to the next page, if there is one.
    pub fn next_page(&mut self, paginator: &Paginator, dataset: &Dataset) -> Option<PageResponse> {
        self.change_page(paginator, dataset, self.current_page.saturating_add(1)).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dataset::ReplyRecord;

    fn dataset(n: usize) -> Dataset {
        Dataset::new(
            (0..n)
                .map(|i| ReplyRecord {
                    date: "2024-03-10".to_owned(),
                    identifier: format!("c{i}"),
                    ..Default::default()
                })
                .collect(),
        )
    }

    #[test]
    fn test_refresh_updates_position() {
        let data = dataset(5);
        let paginator = Paginator::new(2);
        let mut view = ViewState::new(ReportQuery::new("2024-03-10", "2024-03-10"));

        let page = view.refresh(&paginator, &data, 1);
        assert_eq!(page.data.len(), 2);
        assert_eq!(view.current_page(), 1);
        assert_eq!(view.total_pages(), 3);
        assert!(!page.has_previous());
        assert!(page.has_next());
    }

    #[test]
    fn test_change_page_rejects_out_of_range() {
        let data = dataset(5);
        let paginator = Paginator::new(2);
        let mut view = ViewState::new(ReportQuery::new("2024-03-10", "2024-03-10"));
        view.refresh(&paginator, &data, 1);

        assert!(view.change_page(&paginator, &data, 0).is_err());
        let err = view.change_page(&paginator, &data, 4).unwrap_err();
        assert_eq!(err, PageOutOfRange { requested: 4, total_pages: 3 });
        assert_eq!(view.current_page(), 1);

        let page = view.change_page(&paginator, &data, 3).unwrap();
        assert_eq!(page.data.len(), 1);
        assert_eq!(page.data[0].identifier, "c4");
        assert!(page.has_previous());
        assert!(!page.has_next());
    }

    #[test]
    fn test_next_page_walks_all_pages() {
        let data = dataset(7);
        let paginator = Paginator::new(3);
        let mut view = ViewState::new(ReportQuery::new("2024-03-10", "2024-03-10"));

        let mut seen = view.refresh(&paginator, &data, 1).data.len();
        while let Some(page) = view.next_page(&paginator, &data) {
            seen += page.data.len();
        }
        assert_eq!(seen, 7);
        assert_eq!(view.current_page(), 3);
    }

    #[test]
    fn test_open_page() {
        let data = dataset(5);
        let paginator = Paginator::new(2);
        let mut view = ViewState::new(ReportQuery::new("2024-03-10", "2024-03-10"));

        let page = view.open_page(&paginator, &data, 2).unwrap();
        assert_eq!(page.data[0].identifier, "c2");
        assert_eq!(view.current_page(), 2);

        let err = view.open_page(&paginator, &data, 4).unwrap_err();
        assert_eq!(err, PageOutOfRange { requested: 4, total_pages: 3 });
        assert_eq!(view.current_page(), 1);
    }

    #[test]
    fn test_open_page_on_unavailable_dataset_shows_empty_first_page() {
        let paginator = Paginator::new(3);
        let mut view = ViewState::new(ReportQuery::new("2024-03-10", "2024-03-10"));
        let page = view.open_page(&paginator, &Dataset::unavailable(), 2).unwrap();
        assert_eq!(page, PageResponse::empty(1, true));
        assert_eq!(view.current_page(), 1);
    }

    #[test]
    fn test_unavailable_dataset_has_single_page() {
        let paginator = Paginator::new(3);
        let mut view = ViewState::new(ReportQuery::new("2024-03-10", "2024-03-10"));
        let page = view.refresh(&paginator, &Dataset::unavailable(), 1);
        assert!(page.data.is_empty());
        assert_eq!(view.total_pages(), 1);
        assert!(view.next_page(&paginator, &Dataset::unavailable()).is_none());
    }
}
