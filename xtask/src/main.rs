mod cmd;
mod repo;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Repository maintenance tasks", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the local quality gate (fetch/check/test/fmt/clippy/build).
    Preflight {
        /// Skip the release build step.
        #[arg(long)]
        quick: bool,
    },
    /// Print the RSR checklist as a Markdown table.
    Checklist {
        /// Write to this file instead of stdout (relative to repository root)
        #[arg(long, value_name = "PATH")]
        out: Option<std::path::PathBuf>,
    },
}

fn main() {
    if let Err(err) = real_main() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn real_main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Preflight { quick } => {
            cmd::preflight::run(quick)?;
        }
        Command::Checklist { out } => {
            cmd::checklist::run(out)?;
        }
    }
    Ok(())
}
