//! paper-radar CLI - ranked paper digest renderer
//!
//! Turns the pending paper queue (or a JSON paper list) into dated Markdown
//! and HTML digests.

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use paper_radar::{
    load_papers, parse_date, render_document, run_digest, write_html, write_markdown,
    DigestOptions, DocumentFormat, RenderOptions, ScoredPaper,
};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Ranked paper digests in Markdown and HTML
#[derive(Parser)]
#[command(
    name = "paper-radar",
    version,
    about = "Render ranked research-paper digests",
    long_about = "paper-radar - ranked research-paper digests.\n\n\
                  Renders queued papers to a dated Markdown digest and an optional\n\
                  print-friendly HTML digest.\n\n\
                  Usage:\n  \
                  paper-radar digest --top 20 --html     Digest the pending queue\n  \
                  paper-radar render --input papers.json Render a paper list without touching state"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a digest from the pending queue and drop the digested papers from it
    Digest {
        /// State file path
        #[arg(long, default_value = paper_radar::state::DEFAULT_STATE_PATH)]
        state: PathBuf,

        /// Output directory
        #[arg(short, long, default_value = paper_radar::digest::DEFAULT_OUTPUT_DIR)]
        out: PathBuf,

        /// Digest date (YYYY-MM-DD, default: today)
        #[arg(long)]
        date: Option<String>,

        /// Maximum number of papers (0 = all pending)
        #[arg(long, default_value = "0")]
        top: usize,

        /// Also write the HTML digest
        #[arg(long)]
        html: bool,

        /// Print the outcome as JSON
        #[arg(long)]
        json: bool,
    },

    /// Render a JSON list of scored papers without touching state
    Render {
        /// JSON file with an array of scored papers
        #[arg(short, long)]
        input: PathBuf,

        /// Output directory
        #[arg(short, long, default_value = paper_radar::digest::DEFAULT_OUTPUT_DIR)]
        out: PathBuf,

        /// Digest date (YYYY-MM-DD, default: today)
        #[arg(long)]
        date: Option<String>,

        /// Also write the HTML digest (with --stdout: print HTML instead of Markdown)
        #[arg(long)]
        html: bool,

        /// Print to stdout instead of writing files
        #[arg(long)]
        stdout: bool,

        /// Document title
        #[arg(long)]
        title: Option<String>,
    },

    /// Show version information
    Version,
}

fn main() {
    init_tracing();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

/// Logs go to stderr so stdout stays machine-readable.
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("paper_radar=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Digest {
            state,
            out,
            date,
            top,
            html,
            json,
        } => {
            let mut options = DigestOptions::new()
                .with_state_path(state)
                .with_output_dir(out)
                .with_top_n(top);
            if let Some(date) = date {
                options = options.with_date(parse_date(&date)?);
            }
            if html {
                options = options.with_html();
            }

            let outcome = run_digest(&options)?;

            if json {
                let value = serde_json::json!({
                    "markdown": outcome.markdown_path.display().to_string(),
                    "html": outcome.html_path.as_ref().map(|p| p.display().to_string()),
                    "papers": outcome.count,
                });
                println!("{}", serde_json::to_string_pretty(&value)?);
            } else {
                println!("digest={} papers={}", outcome, outcome.count);
            }
        }

        Commands::Render {
            input,
            out,
            date,
            html,
            stdout,
            title,
        } => {
            let date = match date {
                Some(date) => parse_date(&date)?,
                None => DigestOptions::default().date,
            };
            let mut options = RenderOptions::default();
            if let Some(title) = title {
                options = options.with_title(title);
            }

            let pb = create_spinner("Loading papers...");
            let papers = load_papers(&input)?;
            tracing::info!(input = %input.display(), papers = papers.len(), "loaded papers");
            pb.set_message(format!("Rendering {} papers...", papers.len()));

            if stdout {
                let format = if html {
                    DocumentFormat::Html
                } else {
                    DocumentFormat::Markdown
                };
                let document = render_document(format, date, &papers, &options);
                pb.finish_and_clear();
                let mut handle = io::stdout().lock();
                write!(handle, "{}", document.content)?;
            } else {
                let paths = write_digest_files(&out, date, &papers, &options, html)?;
                pb.finish_and_clear();
                for path in paths {
                    println!(
                        "{} Rendered {} papers: {}",
                        "✓".green().bold(),
                        papers.len(),
                        path.display()
                    );
                }
            }
        }

        Commands::Version => {
            print_version();
        }
    }

    Ok(())
}

/// Writes `<date>.md`, plus `<date>.html` when `html` is set.
fn write_digest_files(
    out: &Path,
    date: NaiveDate,
    papers: &[ScoredPaper],
    options: &RenderOptions,
    html: bool,
) -> paper_radar::Result<Vec<PathBuf>> {
    let mut paths = vec![write_markdown(out, date, papers, options)?];
    if html {
        paths.push(write_html(out, date, papers, options)?);
    }
    Ok(paths)
}

fn print_version() {
    println!("{} {}", "paper-radar".green().bold(), env!("CARGO_PKG_VERSION"));
    println!("Ranked research-paper digests in Markdown and HTML");
}

fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
            .template("{spinner:.blue} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}
