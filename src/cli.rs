use std::path::PathBuf;

use clap::{CommandFactory, Parser};
use clap_complete::Shell;

#[derive(Debug, Parser)]
#[command(
    name = "quaero",
    about = "Answer questions from a directory of text files via TF-IDF"
)]
pub struct Cli {
    /// Directory containing the .txt corpus
    #[arg(required_unless_present = "completions")]
    pub corpus: Option<PathBuf>,

    /// The query; read interactively from stdin when omitted
    #[arg(short, long)]
    pub query: Option<String>,

    /// Number of files to keep from the first ranking stage
    #[arg(short = 'f', long, default_value = "1")]
    pub files: usize,

    /// Number of sentences to print
    #[arg(short = 'n', long, default_value = "1")]
    pub sentences: usize,

    /// Print the matched filenames before the sentences
    #[arg(long)]
    pub show_files: bool,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,

    /// Increase log verbosity (can be repeated: -v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Generate shell completions and exit
    #[arg(long, value_enum, hide = true)]
    pub completions: Option<Shell>,
}

/// Generate shell completions and print to stdout.
pub fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "quaero", &mut std::io::stdout());
}
