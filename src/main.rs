//! Command-line entry point for the token build.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use mm_primitives::{flatten, overview, preview, primitives, scss, Group};

#[derive(Parser)]
#[command(name = "mm-primitives", about = "Design token build and inspection", version)]
struct Cli {
    /// Load the token tree from a JSON file instead of the built-in set
    #[arg(short, long, global = true, value_name = "FILE")]
    tokens: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write the flattened variables to an SCSS file
    Build {
        /// Output path for the generated stylesheet
        #[arg(short, long, default_value = "dist/styles.scss")]
        output: PathBuf,
    },
    /// Print the flattened variable declarations to stdout
    List,
    /// Show an aligned token listing with color swatches
    Preview,
    /// Show a grouped overview, one section per category
    Overview,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let tokens = load_tokens(cli.tokens.as_deref())?;

    match cli.command {
        Command::Build { output } => {
            scss::write(&tokens, &output)
                .with_context(|| format!("failed to build {}", output.display()))?;
            eprintln!("wrote {}", output.display());
        }
        Command::List => {
            let entries = flatten(&tokens)?;
            print!("{}", scss::render(&entries));
        }
        Command::Preview => {
            print!("{}", preview::render(&tokens)?);
        }
        Command::Overview => {
            print!("{}", overview::render(&tokens)?);
        }
    }
    Ok(())
}

fn load_tokens(path: Option<&std::path::Path>) -> anyhow::Result<Group> {
    match path {
        Some(path) => {
            let source = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            let tokens = Group::from_json(&source)
                .with_context(|| format!("invalid token tree in {}", path.display()))?;
            Ok(tokens)
        }
        None => Ok(primitives().clone()),
    }
}
