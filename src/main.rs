//! Paper Dashboard - Main Entry Point
//!
//! This is the main entry point for the paper dashboard application.
//! The actual implementation is in the `paper_dashboard` library.

use anyhow::Result;
use clap::{CommandFactory, Parser};
use mcp_attr::server::serve_stdio;
use paper_dashboard::logging::init_logging;
use paper_dashboard::{DashboardSettings, PaperServerHandler};
use std::path::PathBuf;
use tracing::info;

/// Paper Dashboard - searchable reading list and charts via Model Context Protocol
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the papers JSON file
    file: PathBuf,

    /// Path to a TOML settings file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the dashboard to stdout and exit instead of serving MCP
    #[arg(long)]
    print: bool,

    /// Title search applied to the printed dashboard
    #[arg(long, requires = "print")]
    query: Option<String>,

    /// Category applied to the printed dashboard
    #[arg(long, requires = "print")]
    category: Option<String>,

    /// Default log level when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Check if no arguments were provided (except the program name)
    if std::env::args().len() == 1 {
        // No arguments provided, show help and exit with error code
        let mut cmd = Args::command();
        cmd.print_help().ok();
        println!(); // Add a newline after help
        std::process::exit(2);
    }

    let args = Args::parse();
    init_logging(&args.log_level)?;

    let settings = match &args.config {
        Some(path) => DashboardSettings::load(path)?,
        None => DashboardSettings::default(),
    };
    // Storage already logged the failure; exit without a second report
    let Ok(handler) = PaperServerHandler::load(&args.file, settings).await else {
        std::process::exit(1);
    };

    if args.print {
        if args.query.is_some() || args.category.is_some() {
            handler
                .apply_filter(args.query, args.category)
                .map_err(|e| anyhow::anyhow!("{e:?}"))?;
        }
        print!("{}", handler.render_dashboard());
        return Ok(());
    }

    info!(file = %args.file.display(), "serving paper dashboard over stdio");
    serve_stdio(handler).await?;
    Ok(())
}
