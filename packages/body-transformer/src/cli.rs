//! Command-line interface for the body transformer.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use console::style;

use crate::error::{Result, TransformError};
use crate::filters::{apply, default_content_filters};
use crate::transformer::transform_body;

/// Body Transformer - Rewrite article body XML into externally presentable HTML.
#[derive(Parser)]
#[command(name = "body-transformer")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Transform a content body for external consumers.
    Transform {
        /// Body file (default: read from stdin)
        input: Option<PathBuf>,

        /// Output file (default: write to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Reduce a content body to plain text using the default content filters.
    Filter {
        /// Body file (default: read from stdin)
        input: Option<PathBuf>,

        /// Output file (default: write to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    execute(Cli::parse())
}

/// Execute a parsed command line.
pub fn execute(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Transform { input, output } => {
            transform_command(input.as_deref(), output.as_deref())
        }
        Commands::Filter { input, output } => filter_command(input.as_deref(), output.as_deref()),
    }
}

/// Execute the transform command.
fn transform_command(input: Option<&Path>, output: Option<&Path>) -> Result<()> {
    validate_output(output)?;
    let body = read_input(input)?;

    tracing::info!(bytes = body.len(), "Transforming body");
    let transformed = transform_body(&body)?;

    write_output(&transformed, output)
}

/// Execute the filter command.
fn filter_command(input: Option<&Path>, output: Option<&Path>) -> Result<()> {
    validate_output(output)?;
    let body = read_input(input)?;

    tracing::info!(bytes = body.len(), "Filtering body");
    let text = apply(&body, &default_content_filters());

    write_output(&text, output)
}

/// Check that the output file can be created before doing any work.
fn validate_output(output: Option<&Path>) -> Result<()> {
    let Some(parent) = output
        .and_then(Path::parent)
        .filter(|p| !p.as_os_str().is_empty())
    else {
        return Ok(());
    };

    if !parent.is_dir() {
        return Err(TransformError::Io(io::Error::new(
            io::ErrorKind::NotFound,
            format!("Output directory does not exist: {}", parent.display()),
        )));
    }
    Ok(())
}

fn read_input(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => Ok(io::read_to_string(io::stdin())?),
    }
}

fn write_output(text: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, text)?;
            println!("{} {}", style("Saved to:").green().bold(), path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}
