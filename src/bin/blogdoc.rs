/// Extract a blog article's body and export it as `.docx`.
///
/// Usage:
///   blogdoc extract <URL> [--head-cut N] [--tail-cut N] [--docx out.docx]
///   blogdoc build --input edited.txt [--output out.docx]
///   blogdoc keywords [--locale en]
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use blogdoc::fetch::HttpFetcher;
use blogdoc::{extract, fetch_and_extract, keywords, Config, Download, Locale, Profile};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "blogdoc",
    about = "Extract the body of a blog article and save it as a Word document",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch a URL, extract its body and print the editable text
    Extract {
        /// Article URL
        #[arg(required_unless_present = "html_file")]
        url: Option<String>,

        /// Read markup from a local file instead of fetching the URL
        #[arg(long)]
        html_file: Option<PathBuf>,

        /// Lines to drop from the start of the body
        #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(u16).range(0..=100))]
        head_cut: u16,

        /// Lines to drop from the end of the body
        #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(u16).range(0..=100))]
        tail_cut: u16,

        /// keyword-filter or structural-cleanup
        #[arg(long, default_value = "keyword-filter")]
        profile: Profile,

        /// Locale of the target site (ja, en)
        #[arg(long, env = "BLOGDOC_LOCALE", default_value = "ja")]
        locale: Locale,

        /// Extra exclude keyword (repeatable)
        #[arg(long = "exclude", value_name = "KEYWORD")]
        exclude: Vec<String>,

        /// Do not use the locale's default exclude keywords
        #[arg(long)]
        no_default_keywords: bool,

        /// Override the extracted title
        #[arg(long)]
        title: Option<String>,

        /// Write the editable text here instead of stdout
        #[arg(long)]
        text_out: Option<PathBuf>,

        /// Also write the document; a directory gets `<title>.docx` inside it
        #[arg(long)]
        docx: Option<PathBuf>,
    },

    /// Build a document from a (possibly edited) text file
    Build {
        /// Text file; a leading title marker line sets the title
        #[arg(short, long)]
        input: PathBuf,

        /// Title when the text has no marker line
        #[arg(long)]
        title: Option<String>,

        #[arg(long, env = "BLOGDOC_LOCALE", default_value = "ja")]
        locale: Locale,

        /// Output path or directory (default: current directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List the default exclude keywords
    Keywords {
        #[arg(long, env = "BLOGDOC_LOCALE", default_value = "ja")]
        locale: Locale,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("blogdoc=info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Extract {
            url,
            html_file,
            head_cut,
            tail_cut,
            profile,
            locale,
            exclude,
            no_default_keywords,
            title,
            text_out,
            docx,
        } => {
            let mut config = Config::new(locale)
                .with_profile(profile)
                .with_head_cut(head_cut.into())
                .with_tail_cut(tail_cut.into());
            if no_default_keywords {
                config = config.with_exclude_keywords(exclude);
            } else {
                config = config.with_extra_keywords(exclude);
            }

            let mut result = match html_file {
                Some(path) => {
                    let html = read_html(&path)?;
                    extract(&html, &config)
                }
                None => {
                    let url = url.context("an article URL or --html-file is required")?;
                    let fetcher = HttpFetcher::new()?;
                    fetch_and_extract(&fetcher, &url, &config)
                        .with_context(|| format!("failed to fetch or extract {url}"))?
                }
            };
            if let Some(title) = title {
                result.title = title;
            }
            tracing::info!(title = %result.title, lines = result.lines.len(), "extracted");

            let full_text = result.full_text();
            match text_out {
                Some(path) => fs::write(&path, &full_text)
                    .with_context(|| format!("write {}", path.display()))?,
                None => println!("{full_text}"),
            }

            if let Some(target) = docx {
                let download = Download::from_edited(&result.title, &full_text, locale)?;
                write_download(&download, &target)?;
            }
            Ok(())
        }
        Commands::Build {
            input,
            title,
            locale,
            output,
        } => {
            let text = fs::read_to_string(&input)
                .with_context(|| format!("read {}", input.display()))?;
            let fallback = title.unwrap_or_else(|| locale.title_fallback().to_string());
            let download = Download::from_edited(&fallback, &text, locale)?;
            let target = output.unwrap_or_else(|| PathBuf::from("."));
            write_download(&download, &target)
        }
        Commands::Keywords { locale } => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            for keyword in keywords::get_keywords(locale) {
                writeln!(out, "{keyword}")?;
            }
            Ok(())
        }
    }
}

/// Read an HTML file, falling back to Latin-1 when it is not UTF-8.
fn read_html(path: &Path) -> Result<String> {
    let raw = fs::read(path).with_context(|| format!("read {}", path.display()))?;
    Ok(match String::from_utf8(raw) {
        Ok(s) => s,
        Err(e) => e.into_bytes().iter().map(|&b| b as char).collect(),
    })
}

fn write_download(download: &Download, target: &Path) -> Result<()> {
    let path = download
        .write_to(target)
        .with_context(|| format!("write {}", target.display()))?;
    tracing::info!(path = %path.display(), bytes = download.bytes.len(), "wrote document");
    Ok(())
}
