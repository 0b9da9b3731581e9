//! Renderers for Replyscope pages: a self-contained HTML report with a
//! results table, win/loss panel, pie chart and pagination controls, plus a
//! JSON rendering of the same page.

pub mod chart;
pub mod controls;
pub mod escape;
pub mod page;
pub mod site;
pub mod table;

pub use controls::PageLinks;
pub use page::{ReportMeta, render_html_page, render_json};
pub use site::{page_file_name, write_site};
