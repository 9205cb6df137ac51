//! Word Families - CLI
//!
//! Partition word lists by a guessed letter and inspect the resulting families.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use word_families::{
    commands::{narrow_words, partition_words, sample_biggest},
    core::{AllocFailure, DEFAULT_GROWTH_INCREMENT, FamilyConfig},
    output::{print_narrow_result, print_partition_result, print_sample_result},
    partition::Partitioner,
    wordlists::{load_from_file, normalize_letter, words_of_length},
};

#[derive(Parser)]
#[command(
    name = "word_families",
    about = "Partition word lists into families by where a guessed letter first occurs",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Word list file, one word per line
    #[arg(short = 'w', long, global = true, default_value = "words.txt")]
    words: String,

    /// Only use words of this length (default: length of the first word)
    #[arg(short = 'l', long, global = true)]
    length: Option<usize>,

    /// Slots added to a family's storage each time it fills up
    #[arg(long, global = true, default_value_t = DEFAULT_GROWTH_INCREMENT)]
    increment: usize,

    /// Seed for random sampling (default: seeded from the OS)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Abort instead of reporting an error when storage cannot be allocated
    #[arg(long, global = true)]
    abort_on_alloc_failure: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Partition the word list by one letter
    Partition {
        /// The guessed letter
        letter: char,

        /// Print every family with its words
        #[arg(long)]
        full: bool,
    },

    /// Apply letters in order, keeping the biggest family each time
    Narrow {
        /// Letters to apply, e.g. "etaoin"
        letters: String,
    },

    /// Draw random words from the biggest family for a letter
    Sample {
        /// The guessed letter
        letter: char,

        /// Number of words to draw
        #[arg(short = 'n', long, default_value = "5")]
        count: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = family_config(&cli)?;
    let mut partitioner = match cli.seed {
        Some(seed) => Partitioner::with_seed(config, seed),
        None => Partitioner::new(config),
    };

    let words = load_words(&cli.words, cli.length)?;
    log::info!("loaded {} words from {}", words.len(), cli.words);

    match cli.command {
        Commands::Partition { letter, full } => {
            let result = partition_words(&partitioner, &words, normalize_letter(letter))?;
            print_partition_result(&result, full);
        }
        Commands::Narrow { letters } => {
            let letters: String = letters.chars().map(normalize_letter).collect();
            let result = narrow_words(&partitioner, words, &letters)?;
            print_narrow_result(&result);
        }
        Commands::Sample { letter, count } => {
            let letter = normalize_letter(letter);
            let result = sample_biggest(&mut partitioner, &words, letter, count)?;
            print_sample_result(&result);
        }
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn family_config(cli: &Cli) -> Result<FamilyConfig> {
    let policy = if cli.abort_on_alloc_failure {
        AllocFailure::Abort
    } else {
        AllocFailure::Propagate
    };
    let config = FamilyConfig::new(cli.increment).context("invalid --increment")?;
    Ok(config.with_alloc_failure(policy))
}

/// Load the word list and reduce it to a single word length
fn load_words(path: &str, length: Option<usize>) -> Result<Vec<String>> {
    let words =
        load_from_file(path).with_context(|| format!("failed to read word list {path}"))?;

    let Some(length) = length.or_else(|| words.first().map(String::len)) else {
        bail!("word list {path} is empty");
    };

    let words = words_of_length(words, length);
    if words.is_empty() {
        bail!("no words of length {length} in {path}");
    }
    Ok(words)
}
