use std::io::{BufRead, Write};

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;

use cli::Cli;
use quaero::{
    corpus,
    error::{self, Error},
    search::{self, SearchParams},
};

fn init_tracing(verbose: u8) {
    let filter = if let Ok(env) = std::env::var("QUAERO_LOG") {
        EnvFilter::new(env)
    } else {
        match verbose {
            0 => EnvFilter::new("warn"),
            1 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn main() -> error::Result<()> {
    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        cli::generate_completions(shell);
        return Ok(());
    }

    init_tracing(cli.verbose);

    // `required_unless_present` guarantees the corpus path is set here.
    let corpus_dir = cli.corpus.as_deref().ok_or_else(|| {
        Error::Config("corpus directory is required".to_string())
    })?;
    let corpus = corpus::load_corpus(corpus_dir)?;

    let query = match cli.query {
        Some(q) => q,
        None => prompt_query()?,
    };

    let params = SearchParams {
        query,
        file_matches: cli.files,
        sentence_matches: cli.sentences,
    };
    let outcome = search::execute_search(&params, &corpus)?;

    if cli.json {
        search::format_json(&outcome)?;
    } else {
        search::format_human(&outcome, cli.show_files);
    }

    Ok(())
}

/// Read one line of free-text query from standard input.
fn prompt_query() -> error::Result<String> {
    print!("Query: ");
    std::io::stdout().flush()?;

    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;

    let query = line.trim();
    if query.is_empty() {
        return Err(Error::Config("no query provided".to_string()));
    }
    Ok(query.to_string())
}
