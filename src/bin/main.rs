use clap::Parser;
use std::path::Path;
use std::process::ExitCode;

use subgram_core::{report, SubgramEngine};

/// Subanagram retrieval: find every word in a word list formable from a
/// subset of the query's letters.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Single-word string for which subanagrams are retrieved from the word list
    input: String,

    /// Word list from which subanagrams are retrieved (one word per line)
    #[arg(short = 'l', long, default_value = "corncob_lowercase.txt")]
    listpath: String,

    /// Location of the persisted signature index
    #[arg(long, default_value = "lookup.bin")]
    index: String,
}

fn main() -> ExitCode {
    init_logger();

    if let Err(e) = try_main() {
        // Nonzero exit with a diagnostic; never silently print an empty
        // result set when the dictionary itself is the problem.
        eprintln!("Error: {e}");
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Core CLI logic:
/// 1. Parse arguments.
/// 2. Load the cached index, or (re)build it from the word list.
/// 3. Retrieve the subanagram set for the input.
/// 4. Print the results grouped by word length, longest to shortest.
fn try_main() -> Result<(), subgram_core::IndexError> {
    let cli = Cli::parse();

    let engine = SubgramEngine::load_or_build(Path::new(&cli.index), Path::new(&cli.listpath))?;
    let results = engine.subanagrams(&cli.input);

    log::info!("{} subanagrams found for '{}'", results.len(), cli.input);
    print!("{}", report::render(&cli.input, &results));
    Ok(())
}

fn init_logger() {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(log::LevelFilter::Warn)
        .format_timestamp(None)
        .format_target(false);

    // Let RUST_LOG override our defaults if explicitly set
    if let Ok(spec) = std::env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    builder.init();
}
