use serde::Serialize;

/// A single dated record with its first and final reply outcome.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct ReplyRecord {
    /// Date the record was observed, as found in the source row
    pub date: String,
    /// Contract name or token address
    pub identifier: String,
    /// Value of the first reply (or first profit), if any
    pub first_value: Option<String>,
    /// Time of the first reply
    pub first_time: Option<String>,
    /// Value of the final reply (or final profit), if any
    pub final_value: Option<String>,
    /// Time of the final reply
    pub final_time: Option<String>,
}

impl ReplyRecord {
    /// A record counts as a win when its first value is present and non-empty.
    pub fn is_win(&self) -> bool {
        self.first_value.as_deref().is_some_and(|v| !v.is_empty())
    }

    /// Case-insensitive substring match against the identifier.
    ///
    /// `needle` must already be lowercased.
    pub fn identifier_contains(&self, needle: &str) -> bool {
        self.identifier.to_lowercase().contains(needle)
    }
}
