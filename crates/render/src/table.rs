//! Results table

use dataset::{ColumnLabels, ReplyRecord};

use crate::escape::escape_html;

/// Text shown for missing or empty cells.
pub const PLACEHOLDER: &str = "N/A";

const COLUMNS: usize = 6;

/// Render the results table for one page of records.
///
/// Rows get a `win` or `loss` class depending on the first value.
pub fn render_table(rows: &[ReplyRecord], labels: &ColumnLabels) -> String {
    let headers = [
        labels.date,
        labels.identifier,
        labels.first_value,
        labels.first_time,
        labels.final_value,
        labels.final_time,
    ]
    .iter()
    .map(|h| format!("<th>{}</th>", escape_html(h)))
    .collect::<String>();

    let body = if rows.is_empty() {
        format!(r#"<tr><td colspan="{COLUMNS}" class="empty">No records found</td></tr>"#)
    } else {
        rows.iter().map(render_row).collect::<Vec<_>>().join("\n")
    };

    format!(
        r#"<table id="data-table">
<thead><tr>{headers}</tr></thead>
<tbody>
{body}
</tbody>
</table>"#
    )
}

fn render_row(record: &ReplyRecord) -> String {
    let class = if record.is_win() { "win" } else { "loss" };
    let cells = [
        Some(record.date.as_str()),
        Some(record.identifier.as_str()),
        record.first_value.as_deref(),
        record.first_time.as_deref(),
        record.final_value.as_deref(),
        record.final_time.as_deref(),
    ]
    .into_iter()
    .map(|value| format!("<td>{}</td>", cell(value)))
    .collect::<String>();
    format!(r#"<tr class="{class}">{cells}</tr>"#)
}

fn cell(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => escape_html(v),
        _ => PLACEHOLDER.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dataset::DatasetKind;

    #[test]
    fn test_row_uses_placeholder_and_class() {
        let record = ReplyRecord {
            date: "2024-01-02".to_owned(),
            identifier: "Y".to_owned(),
            final_value: Some(String::new()),
            ..Default::default()
        };
        let html = render_row(&record);
        assert!(html.starts_with(r#"<tr class="loss">"#));
        assert_eq!(html.matches("<td>N/A</td>").count(), 4);
    }

    #[test]
    fn test_table_headers_follow_labels() {
        let html = render_table(&[], &DatasetKind::Token.labels());
        assert!(html.contains("<th>Token Address</th>"));
        assert!(html.contains("<th>First Profit</th>"));
        assert!(html.contains("No records found"));
    }

    #[test]
    fn test_table_escapes_identifiers() {
        let record = ReplyRecord {
            date: "2024-01-01".to_owned(),
            identifier: "<script>".to_owned(),
            first_value: Some("5".to_owned()),
            ..Default::default()
        };
        let html = render_table(&[record], &DatasetKind::Contract.labels());
        assert!(html.contains(r#"<tr class="win">"#));
        assert!(html.contains("<td>&lt;script&gt;</td>"));
        assert!(!html.contains("<script>"));
    }
}
