//! Previous/Next pagination controls

use report_types::PageResponse;

use crate::site::page_file_name;

/// How the Previous/Next controls point at other pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageLinks {
    /// Plain buttons carrying the target page in `data-page`, for a single
    /// standalone page.
    #[default]
    Buttons,
    /// Links to sibling `page-N.html` files written by the site writer.
    Files,
}

/// Render the controls for `page`.
///
/// Previous is disabled on the first page and Next on the last one.
pub fn render_pagination(page: &PageResponse, links: PageLinks) -> String {
    let (current, total) = (page.current_page, page.total_pages);
    let previous = control("Previous", current.saturating_sub(1), !page.has_previous(), links);
    let next = control("Next", current.saturating_add(1), !page.has_next(), links);
    format!(
        r#"<nav id="pagination">
{previous}
<span>Page {current} of {total}</span>
{next}
</nav>"#
    )
}

fn control(label: &str, target: u64, disabled: bool, links: PageLinks) -> String {
    match (links, disabled) {
        (PageLinks::Buttons, true) => format!("<button disabled>{label}</button>"),
        (PageLinks::Buttons, false) => format!(r#"<button data-page="{target}">{label}</button>"#),
        (PageLinks::Files, true) => format!(r#"<span class="page-link disabled">{label}</span>"#),
        (PageLinks::Files, false) => {
            format!(r#"<a class="page-link" href="{}">{label}</a>"#, page_file_name(target))
        }
    }
}
