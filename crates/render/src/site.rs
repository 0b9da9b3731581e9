//! Multi-page report writer

use std::{
    fs,
    path::{Path, PathBuf},
};

use dataset::Dataset;
use eyre::{Result, WrapErr};
use query::{Paginator, ViewState};
use tracing::info;

use crate::{
    controls::PageLinks,
    page::{ReportMeta, render_html_page},
};

/// File name of a page inside a written site.
pub fn page_file_name(page: u64) -> String {
    format!("page-{page}.html")
}

/// Write every page of `view` into `dir` as `page-1.html .. page-N.html`,
/// with Previous/Next linking the files together.
///
/// The view is walked from page one; on return it rests on the last page.
pub fn write_site(
    dir: &Path,
    dataset: &Dataset,
    paginator: &Paginator,
    view: &mut ViewState,
    meta: &ReportMeta<'_>,
) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)
        .wrap_err_with(|| format!("failed to create output directory {}", dir.display()))?;

    let mut written = Vec::new();
    let mut page = view.refresh(paginator, dataset, 1);
    loop {
        let path = dir.join(page_file_name(page.current_page));
        let html = render_html_page(&page, view.query(), meta, PageLinks::Files);
        fs::write(&path, html).wrap_err_with(|| format!("failed to write {}", path.display()))?;
        written.push(path);

        match view.next_page(paginator, dataset) {
            Some(next) => page = next,
            None => break,
        }
    }

    info!(pages = written.len(), dir = %dir.display(), "Wrote report pages");
    Ok(written)
}
