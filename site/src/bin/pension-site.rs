//! # pension-site
//!
//! Static renderer for the Pension & ISA marketing site.
//!
//! ```bash
//! pension-site build --out-dir dist     # write every route as HTML
//! pension-site render /features         # print one route's document
//! pension-site routes                   # show the route table
//! ```

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use pension_site::export::{document_path, export_site};
use pension_site::{Page, SiteConfig, render_path};

#[derive(Parser, Debug)]
#[command(name = "pension-site")]
#[command(about = "Render the Pension & ISA site to static HTML")]
#[command(version)]
struct Args {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    /// TOML config file (defaults apply when omitted)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write one HTML document per route
    Build {
        /// Output directory (overrides `out_dir` from the config)
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },
    /// Print the document for a single path to stdout
    Render {
        /// Request path, e.g. `/features`
        path: String,
    },
    /// List the route table
    Routes,
}

fn load_config(path: Option<&PathBuf>) -> Result<SiteConfig> {
    match path {
        Some(path) => SiteConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display())),
        None => Ok(SiteConfig::default()),
    }
}

fn run(args: Args) -> Result<()> {
    let mut config = load_config(args.config.as_ref())?;
    let mut stdout = std::io::stdout().lock();

    match args.command {
        Command::Build { out_dir } => {
            if let Some(out_dir) = out_dir {
                config.out_dir = out_dir;
            }
            let files = export_site(&config).context("exporting site")?;
            for file in &files {
                let route = file.page.map_or("-", Page::pattern);
                writeln!(stdout, "{:<10} {} ({} bytes)", route, file.path.display(), file.bytes)?;
            }
        }
        Command::Render { path } => {
            let page = Page::resolve(&path);
            info!(path = %path, route = page.pattern(), "rendering");
            writeln!(stdout, "{}", render_path(&path, &config))?;
        }
        Command::Routes => {
            for page in Page::ALL {
                writeln!(
                    stdout,
                    "{:<10} {}",
                    page.pattern(),
                    document_path(page).display()
                )?;
            }
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[pension-site] Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
