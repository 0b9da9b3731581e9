//! Replyscope configuration
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use dataset::DatasetKind;

/// Dataset variant selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LayoutArg {
    /// `[date, contract, first, first_time, final, final_time]`
    #[default]
    Contract,
    /// Token rows with one extra leading column
    Token,
}

impl From<LayoutArg> for DatasetKind {
    fn from(value: LayoutArg) -> Self {
        match value {
            LayoutArg::Contract => Self::Contract,
            LayoutArg::Token => Self::Token,
        }
    }
}

/// Output format of a single rendered page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Self-contained HTML document
    #[default]
    Html,
    /// Serialized page response
    Json,
}

/// Dataset configuration options
#[derive(Debug, Clone, Parser)]
pub struct DataOpts {
    /// Path to the dataset (JSON array of rows)
    #[clap(long, env = "REPLYSCOPE_DATA_FILE")]
    pub data_file: PathBuf,
    /// Dataset variant, which selects column positions and labels
    #[clap(long, env = "REPLYSCOPE_LAYOUT", value_enum, default_value_t = LayoutArg::Contract)]
    pub layout: LayoutArg,
    /// Records per page (defaults to 100 for contracts, 25 for tokens)
    #[clap(long, env = "REPLYSCOPE_PAGE_SIZE", value_parser = clap::value_parser!(u64).range(1..))]
    pub page_size: Option<u64>,
    /// Leave out the win/loss panel and pie chart
    #[clap(long)]
    pub no_stats: bool,
}

impl DataOpts {
    /// Selected dataset variant.
    pub fn kind(&self) -> DatasetKind {
        self.layout.into()
    }

    /// Page size, falling back to the variant default.
    pub fn effective_page_size(&self) -> u64 {
        self.page_size.unwrap_or_else(|| self.kind().default_page_size())
    }
}

/// Query options
#[derive(Debug, Clone, Parser)]
pub struct QueryOpts {
    /// Inclusive start date (e.g. 2024-01-01)
    #[clap(long, env = "REPLYSCOPE_START_DATE")]
    pub start_date: String,
    /// Inclusive end date; the whole day is included
    #[clap(long, env = "REPLYSCOPE_END_DATE")]
    pub end_date: String,
    /// Case-insensitive substring matched against the contract or token address
    #[clap(long)]
    pub filter: Option<String>,
    /// Page to render, starting at 1
    #[clap(long, default_value = "1", value_parser = clap::value_parser!(u64).range(1..))]
    pub page: u64,
}

/// Output options
#[derive(Debug, Clone, Parser)]
pub struct OutputOpts {
    /// Output format for a single page
    #[clap(long, value_enum, default_value_t = OutputFormat::Html)]
    pub format: OutputFormat,
    /// File to write the page to (stdout when absent)
    #[clap(long, conflicts_with = "all_pages")]
    pub output: Option<PathBuf>,
    /// Write every page as linked HTML files into this directory
    #[clap(long, env = "REPLYSCOPE_SITE_DIR")]
    pub all_pages: Option<PathBuf>,
}

/// CLI options for replyscope
#[derive(Debug, Clone, Parser)]
#[clap(name = "replyscope", about = "Render first/final reply records as paginated HTML reports")]
pub struct Opts {
    /// Dataset configuration
    #[clap(flatten)]
    pub data: DataOpts,

    /// Query configuration
    #[clap(flatten)]
    pub query: QueryOpts,

    /// Output configuration
    #[clap(flatten)]
    pub output: OutputOpts,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const BASE: [&str; 7] = [
        "replyscope",
        "--data-file",
        "db.json",
        "--start-date",
        "2024-01-01",
        "--end-date",
        "2024-01-31",
    ];

    #[test]
    fn test_verify_cli() {
        use clap::CommandFactory;
        Opts::command().debug_assert()
    }

    #[test]
    #[serial]
    fn test_defaults() {
        let opts = Opts::try_parse_from(BASE).unwrap();
        assert_eq!(opts.data.kind(), DatasetKind::Contract);
        assert_eq!(opts.data.effective_page_size(), 100);
        assert_eq!(opts.query.page, 1);
        assert_eq!(opts.query.filter, None);
        assert_eq!(opts.output.format, OutputFormat::Html);
        assert!(!opts.data.no_stats);
    }

    #[test]
    #[serial]
    fn test_token_layout_page_size() {
        let args = BASE.iter().copied().chain(["--layout", "token"]);
        let opts = Opts::try_parse_from(args).unwrap();
        assert_eq!(opts.data.kind(), DatasetKind::Token);
        assert_eq!(opts.data.effective_page_size(), 25);

        let args = BASE.iter().copied().chain(["--layout", "token", "--page-size", "10"]);
        let opts = Opts::try_parse_from(args).unwrap();
        assert_eq!(opts.data.effective_page_size(), 10);
    }

    #[test]
    #[serial]
    fn test_rejects_page_zero_and_page_size_zero() {
        let args = BASE.iter().copied().chain(["--page", "0"]);
        assert!(Opts::try_parse_from(args).is_err());

        let args = BASE.iter().copied().chain(["--page-size", "0"]);
        assert!(Opts::try_parse_from(args).is_err());
    }

    #[test]
    #[serial]
    fn test_output_conflicts_with_all_pages() {
        let args = BASE.iter().copied().chain(["--output", "a.html", "--all-pages", "site"]);
        assert!(Opts::try_parse_from(args).is_err());
    }

    #[test]
    #[serial]
    fn test_env_fallback() {
        // SAFETY: serialized with every other test that parses options.
        unsafe {
            std::env::set_var("REPLYSCOPE_LAYOUT", "token");
            std::env::set_var("REPLYSCOPE_PAGE_SIZE", "7");
        }
        let opts = Opts::try_parse_from(BASE);
        unsafe {
            std::env::remove_var("REPLYSCOPE_LAYOUT");
            std::env::remove_var("REPLYSCOPE_PAGE_SIZE");
        }
        let opts = opts.unwrap();
        assert_eq!(opts.data.kind(), DatasetKind::Token);
        assert_eq!(opts.data.effective_page_size(), 7);
    }
}
