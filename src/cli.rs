use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "question_import")]
#[command(about = "Extract questions from documents and bulk-import them as CSV")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Turn a text document into a `<name>_qa_transformed.csv` file
    Extract {
        input: PathBuf,
        /// Defaults to OUTPUT_DIR
        #[arg(long)]
        output_dir: Option<PathBuf>,
    },
    /// Create one question per CSV row in the given question set
    Import {
        input: PathBuf,
        #[arg(long)]
        set: i64,
        /// Offline category table (TOML); fetched from the API when omitted
        #[arg(long)]
        categories: Option<PathBuf>,
        /// Parse and report without submitting anything
        #[arg(long, default_value_t = false)]
        dry_run: bool,
    },
    /// List available question sets
    Sets,
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Extract { .. } => "extract",
            Command::Import { .. } => "import",
            Command::Sets => "sets",
        }
    }
}
