//! Entrypoint.

use std::{fs, io::Write};

use clap::Parser;
use config::{Opts, OutputFormat};
use dataset::load_or_empty;
use dotenvy::dotenv;
use eyre::WrapErr;
use query::{Paginator, ReportQuery, ViewState};
use render::{PageLinks, ReportMeta, render_html_page, render_json, write_site};
use tracing::info;
use tracing_subscriber::filter::EnvFilter;

fn main() -> eyre::Result<()> {
    if let Ok(custom_env_file) = std::env::var("ENV_FILE") {
        dotenvy::from_filename(custom_env_file)?;
    } else {
        // Try the default .env file, and ignore if it doesn't exist.
        dotenv().ok();
    }

    let opts = Opts::parse();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let kind = opts.data.kind();
    info!(data_file = %opts.data.data_file.display(), layout = ?kind, "Replyscope starting");

    let dataset = load_or_empty(&opts.data.data_file, kind.layout());
    let paginator =
        Paginator::new(opts.data.effective_page_size()).with_stats(!opts.data.no_stats);
    let meta = ReportMeta { title: kind.title(), labels: kind.labels() };

    let mut query = ReportQuery::new(opts.query.start_date, opts.query.end_date);
    if let Some(filter) = opts.query.filter {
        query = query.with_filter(filter);
    }
    let mut view = ViewState::new(query);

    if let Some(dir) = &opts.output.all_pages {
        write_site(dir, &dataset, &paginator, &mut view, &meta)?;
        return Ok(());
    }

    let page = view.open_page(&paginator, &dataset, opts.query.page)?;

    let rendered = match opts.output.format {
        OutputFormat::Html => render_html_page(&page, view.query(), &meta, PageLinks::Buttons),
        OutputFormat::Json => render_json(&page)?,
    };

    match &opts.output.output {
        Some(path) => {
            fs::write(path, rendered)
                .wrap_err_with(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), "Wrote page");
        }
        None => std::io::stdout().lock().write_all(rendered.as_bytes())?,
    }
    Ok(())
}
