//! MCP Forge - Command-line tool for generating MCP server skeletons.
//!
//! Scans a web project for route declarations and writes an MCP manifest, a server stub
//! and an HTML report into the output directory.
//!
//! # Usage
//!
//! ```bash
//! mcp-forge [OPTIONS] [PROJECT_PATH]
//! ```
//!
//! # Examples
//!
//! Scan an Express project:
//! ```bash
//! mcp-forge ./my-express-app -o ./mcp-out
//! ```
//!
//! Force decorator-style analysis and write a YAML manifest:
//! ```bash
//! mcp-forge ./my-fastapi-app --prefer python -f yaml
//! ```
//!
//! Run the built-in self-test:
//! ```bash
//! mcp-forge --selftest
//! ```

use anyhow::Result;
use clap::Parser;
use log::info;
use mcp_forge::cli;

fn main() -> Result<()> {
    let args = cli::CliArgs::parse();

    let log_level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .init();

    info!("MCP Forge starting...");

    let args = cli::parse_args_from_parsed(args)?;
    cli::run(args)?;

    Ok(())
}
