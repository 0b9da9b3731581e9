//! Full report page

use dataset::ColumnLabels;
use eyre::{Result, WrapErr};
use query::ReportQuery;
use report_types::{OutcomeStats, PageResponse};

use crate::{
    chart::render_pie_chart,
    controls::{PageLinks, render_pagination},
    escape::escape_html,
    table::render_table,
};

/// Static description of the report being rendered.
#[derive(Debug, Clone, Copy)]
pub struct ReportMeta<'a> {
    /// Page heading and `<title>`
    pub title: &'a str,
    /// Table header labels
    pub labels: ColumnLabels,
}

/// Render one page as a self-contained HTML document.
pub fn render_html_page(
    page: &PageResponse,
    query: &ReportQuery,
    meta: &ReportMeta<'_>,
    links: PageLinks,
) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{title}</title>
<style>{css}</style>
</head>
<body>
<div class="container">
{header}
{stats}
{table}
{pagination}
</div>
</body>
</html>
"#,
        title = escape_html(meta.title),
        css = inline_css(),
        header = render_header(page, query, meta.title),
        stats = page.stats().map(render_stats).unwrap_or_default(),
        table = render_table(&page.data, &meta.labels),
        pagination = render_pagination(page, links),
    )
}

/// Render one page as pretty-printed JSON.
pub fn render_json(page: &PageResponse) -> Result<String> {
    serde_json::to_string_pretty(page).wrap_err("failed to serialize page")
}

fn render_header(page: &PageResponse, query: &ReportQuery, title: &str) -> String {
    let filter = query
        .filter
        .as_deref()
        .filter(|f| !f.is_empty())
        .map(|f| format!(r#", filter <code>{}</code>"#, escape_html(f)))
        .unwrap_or_default();
    format!(
        r#"<header>
<h1>{title}</h1>
<p class="meta">{start} to {end}{filter}: {entries} entries</p>
</header>"#,
        title = escape_html(title),
        start = escape_html(&query.start_date),
        end = escape_html(&query.end_date),
        entries = page.total_entries,
    )
}

fn render_stats(stats: OutcomeStats) -> String {
    format!(
        r#"<section class="stats">
<div class="stat-card win"><h3>Wins</h3><span id="wins">{wins}</span></div>
<div class="stat-card loss"><h3>Losses</h3><span id="losses">{losses}</span></div>
<div id="pie-chart">{chart}</div>
</section>"#,
        wins = stats.wins,
        losses = stats.losses,
        chart = render_pie_chart(stats),
    )
}

fn inline_css() -> &'static str {
    r#"
* { box-sizing: border-box; margin: 0; padding: 0; }
body { font-family: system-ui, -apple-system, 'Segoe UI', sans-serif; color: #111827; background: #ffffff; line-height: 1.5; }
.container { max-width: 1400px; margin: 0 auto; padding: 2rem; }
header { margin-bottom: 1.5rem; padding-bottom: 1rem; border-bottom: 2px solid #e5e7eb; }
header .meta { color: #6b7280; font-size: 0.875rem; }
.stats { display: flex; gap: 1rem; align-items: center; margin-bottom: 1.5rem; }
.stat-card { background: #f9fafb; padding: 1rem; border-radius: 0.5rem; min-width: 140px; }
.stat-card.win { border-left: 4px solid #2ecc71; }
.stat-card.loss { border-left: 4px solid #e74c3c; }
.stat-card span { font-size: 1.5rem; font-weight: 700; }
table { width: 100%; border-collapse: collapse; margin-bottom: 1rem; }
th { text-align: left; padding: 0.5rem; font-size: 0.875rem; border-bottom: 2px solid #e5e7eb; }
td { padding: 0.5rem; font-size: 0.875rem; border-bottom: 1px solid #e5e7eb; }
tr.win td { background: #eafaf1; }
tr.loss td { background: #fdedec; }
td.empty { text-align: center; color: #6b7280; }
#pagination { display: flex; gap: 1rem; align-items: center; justify-content: center; }
.page-link.disabled, button[disabled] { color: #9ca3af; }
"#
}
