//! filetally - usage report of a directory tree by file type and year.
//!
//! Usage:
//!   filetally <ROOT> [OUTPUT]        Scan ROOT, print tables, write CSV
//!   filetally <ROOT> --format json   Print the grouped views as JSON
//!   filetally --help                 Show help

use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::{Parser, ValueEnum};
use color_eyre::eyre::{Context, Result};
use tracing_subscriber::EnvFilter;

use filetally_analyze::{ReportViews, RunStats, Survey};
use filetally_report::{DEFAULT_OUTPUT_FILE, Report};
use filetally_scan::{ScanConfig, ScanProgress};

#[derive(Parser)]
#[command(
    name = "filetally",
    version,
    about = "Report file counts, sizes and document page metrics by type and year",
    long_about = "filetally walks a directory tree and reports, per file extension and per \
                  modification year, how many files there are, how many bytes they take and \
                  how many pages, slides, rows and columns the office documents hold.\n\n\
                  Tables are printed to the console and the same figures are written to a \
                  CSV file."
)]
struct Cli {
    /// Directory to scan
    root: PathBuf,

    /// CSV report to write (replaced if it exists)
    #[arg(default_value = DEFAULT_OUTPUT_FILE)]
    output: PathBuf,

    /// Console output format
    #[arg(short, long, default_value = "text")]
    format: OutputFormat,

    /// Include hidden files and directories (default)
    #[arg(long, overrides_with = "no_hidden")]
    hidden: bool,

    /// Skip hidden files and directories
    #[arg(long, overrides_with = "hidden")]
    no_hidden: bool,

    /// Follow symbolic links
    #[arg(short = 'L', long)]
    follow_symlinks: bool,

    /// Maximum directory depth to descend
    #[arg(short = 'd', long)]
    max_depth: Option<u32>,

    /// Skip entries whose name matches this glob (repeatable)
    #[arg(short, long = "ignore", value_name = "GLOB")]
    ignore: Vec<String>,

    /// Do not print the progress line
    #[arg(short, long)]
    quiet: bool,

    /// Log every extracted metric
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = ScanConfig::builder()
        .root(cli.root.clone())
        .include_hidden(cli.hidden || !cli.no_hidden)
        .follow_symlinks(cli.follow_symlinks)
        .max_depth(cli.max_depth)
        .ignore_patterns(cli.ignore.clone())
        .build()
        .wrap_err("Invalid scan options")?;

    run(&cli, &config)
}

/// Install the stderr log subscriber. `RUST_LOG` overrides the level.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

/// Scan, print and save the report.
fn run(cli: &Cli, config: &ScanConfig) -> Result<()> {
    let start = Instant::now();
    let survey = Survey::new();

    eprintln!("Scanning {}...", config.root.display());

    let aggregator = if cli.quiet {
        survey.run(config)
    } else {
        let result = survey.run_with_progress(config, print_progress);
        eprintln!();
        result
    }
    .wrap_err("Scan failed")?;

    let views = ReportViews::build(&aggregator);
    let report = Report::from_views(&views);

    match cli.format {
        OutputFormat::Text => {
            report
                .render_console(std::io::stdout().lock())
                .wrap_err("Failed to print report")?;
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&views)?);
        }
    }

    report
        .save_csv(&cli.output)
        .wrap_err_with(|| format!("Failed to write report to {}", cli.output.display()))?;

    print_footer(aggregator.stats(), start, &cli.output);
    Ok(())
}

/// Overwrite the progress line with the current file.
fn print_progress(progress: &ScanProgress) {
    let mut err = std::io::stderr().lock();
    let _ = write!(err, "\r\x1b[K{}", progress_line(progress));
    let _ = err.flush();
}

fn progress_line(progress: &ScanProgress) -> String {
    let mut line = format!(
        " {} files, {} ({:.0}/s)",
        progress.files_scanned,
        format_size(progress.bytes_scanned),
        progress.files_per_second()
    );
    if progress.errors_count > 0 {
        line.push_str(&format!(", {} errors", progress.errors_count));
    }
    line.push_str("  ");
    line.push_str(&truncate(&progress.current_path.display().to_string(), 60));
    line
}

fn print_footer(stats: &RunStats, start: Instant, output: &Path) {
    eprintln!();
    eprintln!(
        " Scanned {} files ({}) in {:.2}s",
        stats.files_seen,
        format_size(stats.bytes_seen),
        start.elapsed().as_secs_f64()
    );
    if stats.undated_files > 0 {
        eprintln!(
            " {} file(s) without a modification time were left out",
            stats.undated_files
        );
    }
    if stats.extraction_failures > 0 {
        eprintln!(
            " {} document(s) could not be read; counted with zero pages",
            stats.extraction_failures
        );
    }
    if stats.walk_warnings > 0 {
        eprintln!(" {} entr(ies) could not be read", stats.walk_warnings);
    }
    eprintln!(" Report written to {}", output.display());
}

/// Format size in human-readable form.
fn format_size(bytes: u64) -> String {
    humansize::format_size(bytes, humansize::BINARY)
}

/// Keep the tail of a long path.
fn truncate(s: &str, max_len: usize) -> String {
    let len = s.chars().count();
    if len <= max_len {
        s.to_string()
    } else {
        let tail: String = s.chars().skip(len - (max_len - 1)).collect();
        format!("…{tail}")
    }
}
