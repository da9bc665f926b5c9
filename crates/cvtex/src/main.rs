//! cvtex CLI - Harvard-style resume builder.
//!
//! Provides commands for:
//! - `render`: Build the PDF (and optionally DOCX) from a structured resume
//! - `latex`: Write the LaTeX source without compiling it
//! - `words`: Check a text's word count against the configured target

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{LatexArgs, RenderArgs, WordsArgs};
use output::Output;

/// cvtex - Harvard-style resume builder.
#[derive(Parser)]
#[command(name = "cvtex", version, about)]
struct Cli {
    /// Log every pipeline stage at info level.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the resume and compile it to PDF.
    Render(RenderArgs),
    /// Render the resume to a .tex file only.
    Latex(LatexArgs),
    /// Count words in a text file and compare with the target.
    Words(WordsArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Render(args) => args.execute(),
        Commands::Latex(args) => args.execute(),
        Commands::Words(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
