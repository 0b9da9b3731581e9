use serde_json::Value;

use crate::ReplyRecord;

/// Column positions of each record field inside a source row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldLayout {
    /// Index of the date column
    pub date: usize,
    /// Index of the identifier column
    pub identifier: usize,
    /// Index of the first value column
    pub first_value: usize,
    /// Index of the first time column
    pub first_time: usize,
    /// Index of the final value column
    pub final_value: usize,
    /// Index of the final time column
    pub final_time: usize,
}

impl FieldLayout {
    /// Contract dataset: `[date, contract, first, first_time, final, final_time]`.
    pub const CONTRACT: Self = Self::with_offset(0);
    /// Token dataset carries one extra leading column.
    pub const TOKEN: Self = Self::with_offset(1);

    /// Six consecutive columns starting at `offset`.
    pub const fn with_offset(offset: usize) -> Self {
        Self {
            date: offset,
            identifier: offset + 1,
            first_value: offset + 2,
            first_time: offset + 3,
            final_value: offset + 4,
            final_time: offset + 5,
        }
    }

    /// Map a positional row into a [`ReplyRecord`].
    ///
    /// Missing or `null` cells become `None`; a missing date or identifier
    /// becomes an empty string.
    pub fn map_row(&self, row: &[Value]) -> ReplyRecord {
        ReplyRecord {
            date: cell(row, self.date).unwrap_or_default(),
            identifier: cell(row, self.identifier).unwrap_or_default(),
            first_value: cell(row, self.first_value),
            first_time: cell(row, self.first_time),
            final_value: cell(row, self.final_value),
            final_time: cell(row, self.final_time),
        }
    }
}

fn cell(row: &[Value], idx: usize) -> Option<String> {
    match row.get(idx)? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Header labels shown for each column of the results table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnLabels {
    /// Date column
    pub date: &'static str,
    /// Identifier column
    pub identifier: &'static str,
    /// First value column
    pub first_value: &'static str,
    /// First time column
    pub first_time: &'static str,
    /// Final value column
    pub final_value: &'static str,
    /// Final time column
    pub final_time: &'static str,
}

/// Known dataset variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DatasetKind {
    /// Contracts with first/final replies
    #[default]
    Contract,
    /// Token addresses with first/final profits
    Token,
}

impl DatasetKind {
    /// Row layout for this variant.
    pub const fn layout(self) -> FieldLayout {
        match self {
            Self::Contract => FieldLayout::CONTRACT,
            Self::Token => FieldLayout::TOKEN,
        }
    }

    /// Number of rows rendered per page unless overridden.
    pub const fn default_page_size(self) -> u64 {
        match self {
            Self::Contract => 100,
            Self::Token => 25,
        }
    }

    /// Table header labels.
    pub const fn labels(self) -> ColumnLabels {
        match self {
            Self::Contract => ColumnLabels {
                date: "Date",
                identifier: "Contract",
                first_value: "First Reply",
                first_time: "First Reply Time",
                final_value: "Final Reply",
                final_time: "Final Reply Time",
            },
            Self::Token => ColumnLabels {
                date: "Date",
                identifier: "Token Address",
                first_value: "First Profit",
                first_time: "First Profit Time",
                final_value: "Final Profit",
                final_time: "Final Profit Time",
            },
        }
    }

    /// Human readable name used in page titles.
    pub const fn title(self) -> &'static str {
        match self {
            Self::Contract => "Contract Replies",
            Self::Token => "Token Profits",
        }
    }
}
