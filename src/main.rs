mod assemble;
mod cli;
mod commands;
mod error;
mod mcp;
mod page_range;
mod paths;
mod pdf;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};

/// Environment variable holding an env_logger filter, e.g. `debug`.
const LOG_ENV: &str = "PDF_TOOLS_LOG";

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    // stderr only: stdout carries the MCP transport
    env_logger::Builder::from_env(env_logger::Env::new().filter_or(LOG_ENV, default_level))
        .target(env_logger::Target::Stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let cwd = std::env::current_dir().context("Failed to determine working directory")?;

    match cli.command {
        Commands::Split {
            input,
            pages,
            output,
        } => {
            let options = commands::split::SplitOptions {
                input,
                pages,
                output,
            };
            commands::split::run(&options)?;
        }
        Commands::Merge { inputs, output } => {
            let options = commands::merge::MergeOptions { inputs, output };
            commands::merge::run(&options, &cwd)?;
        }
        Commands::Info { path } => {
            commands::info::run(&path)?;
        }
        Commands::List { dir, recursive } => {
            let options = commands::list::ListOptions {
                dir: dir.unwrap_or_else(|| cwd.clone()),
                recursive,
            };
            commands::list::run(&options)?;
        }
        Commands::Mcp => {
            mcp::run_server(cwd).await?;
        }
    }

    Ok(())
}
