//! Data types for Replyscope reports.
//!
//! These structs define the page view produced by the query layer and
//! consumed by the renderers. They live in a separate crate so that renderers
//! can depend on them without pulling in the filtering implementation.

#![allow(missing_docs)]

pub use dataset::ReplyRecord;

use serde::Serialize;
use serde_with::skip_serializing_none;

/// Win/loss counts over a filtered record set.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct OutcomeStats {
    pub wins: u64,
    pub losses: u64,
}

impl OutcomeStats {
    pub const fn total(&self) -> u64 {
        self.wins + self.losses
    }
}

/// One page of filtered records plus pagination metadata.
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PageResponse {
    pub data: Vec<ReplyRecord>,
    pub total_pages: u64,
    pub current_page: u64,
    pub total_entries: u64,
    pub wins: Option<u64>,
    pub losses: Option<u64>,
}

impl PageResponse {
    /// Empty single-page result, with zeroed stats when `with_stats` is set.
    pub fn empty(current_page: u64, with_stats: bool) -> Self {
        let stats = with_stats.then(OutcomeStats::default);
        Self {
            data: Vec::new(),
            total_pages: 1,
            current_page,
            total_entries: 0,
            wins: stats.map(|s| s.wins),
            losses: stats.map(|s| s.losses),
        }
    }

    /// Win/loss counts when the dataset variant reports them.
    pub fn stats(&self) -> Option<OutcomeStats> {
        match (self.wins, self.losses) {
            (Some(wins), Some(losses)) => Some(OutcomeStats { wins, losses }),
            _ => None,
        }
    }

    /// Whether a Previous control leads anywhere.
    pub const fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    /// Whether a Next control leads anywhere.
    pub const fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_page_response_serialization_with_stats() {
        let page = PageResponse {
            data: vec![ReplyRecord {
                date: "2024-01-01".to_owned(),
                identifier: "X".to_owned(),
                first_value: Some("5".to_owned()),
                first_time: None,
                final_value: None,
                final_time: None,
            }],
            total_pages: 1,
            current_page: 1,
            total_entries: 1,
            wins: Some(1),
            losses: Some(0),
        };
        let expected = json!({
            "data": [{
                "date": "2024-01-01",
                "identifier": "X",
                "first_value": "5",
                "first_time": null,
                "final_value": null,
                "final_time": null
            }],
            "total_pages": 1,
            "current_page": 1,
            "total_entries": 1,
            "wins": 1,
            "losses": 0
        });
        assert_eq!(serde_json::to_value(&page).unwrap(), expected);
    }

    #[test]
    fn test_page_response_without_stats_omits_counts() {
        let page = PageResponse::empty(1, false);
        let expected = json!({
            "data": [],
            "total_pages": 1,
            "current_page": 1,
            "total_entries": 0
        });
        assert_eq!(serde_json::to_value(&page).unwrap(), expected);
        assert_eq!(page.stats(), None);
    }

    #[test]
    fn test_empty_page_with_stats() {
        let page = PageResponse::empty(3, true);
        assert_eq!(page.stats(), Some(OutcomeStats { wins: 0, losses: 0 }));
        assert_eq!(page.current_page, 3);
        assert!(page.has_previous());
        assert!(!page.has_next());
    }
}
