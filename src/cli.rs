use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

use crackdict::{DEFAULT_CHARSET, DEFAULT_MAX_LENGTH};

#[derive(Parser)]
#[command(name = "crackdict")]
#[command(version)]
#[command(about = "Wordlist generator for password auditing - Educational use only", long_about = None)]
pub struct Args {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Save a JSON run report to this file
    #[arg(long, global = true, value_name = "FILE")]
    pub report: Option<PathBuf>,

    /// Generation mode
    #[command(subcommand)]
    pub mode: Mode,
}

#[derive(Subcommand)]
pub enum Mode {
    /// Expand keywords with leet, symbols and numeric suffixes
    ///
    /// Example: crackdict auto john smith 1985 --leet --special --max-length 12
    Auto {
        /// Keywords to expand (whitespace separated values are split)
        #[arg(value_name = "WORDS")]
        words: Vec<String>,

        /// Read additional keywords from a file, one per line
        #[arg(long, value_name = "FILE")]
        seeds_file: Option<PathBuf>,

        /// Output file (truncated if it exists)
        #[arg(short, long, default_value = "wordlist.txt")]
        output: PathBuf,

        /// Append special symbols to every variant
        #[arg(short, long)]
        special: bool,

        /// Add leet-speak variants (a->4, e->3, i->1, o->0, s->5, t->7)
        #[arg(short, long)]
        leet: bool,

        /// Drop candidates matching this regular expression anywhere
        #[arg(short, long, value_name = "REGEX")]
        exclude: Option<String>,

        /// Maximum candidate length, clamped to 1-50
        #[arg(short, long, default_value_t = DEFAULT_MAX_LENGTH)]
        max_length: usize,

        /// Disable numeric suffixes
        #[arg(long)]
        no_numbers: bool,

        /// Number of worker threads (default: CPU count)
        #[arg(short, long)]
        threads: Option<usize>,
    },

    /// Enumerate every combination of a charset over a length range
    ///
    /// Example: crackdict manual --charset abc123 --min 4 --max 6
    Manual {
        /// Characters to combine
        #[arg(short, long, default_value = DEFAULT_CHARSET)]
        charset: String,

        /// Minimum length
        #[arg(long, default_value_t = 1)]
        min: usize,

        /// Maximum length
        #[arg(long, default_value_t = DEFAULT_MAX_LENGTH)]
        max: usize,

        /// Output file (truncated if it exists)
        #[arg(short, long, default_value = "wordlist.txt")]
        output: PathBuf,

        /// Add special symbols to the charset
        #[arg(short, long)]
        special: bool,

        /// Add leet-speak variants of every combination
        #[arg(short, long)]
        leet: bool,

        /// Drop combinations matching this regular expression anywhere
        #[arg(short, long, value_name = "REGEX")]
        exclude: Option<String>,

        /// Allow maximum lengths above 50
        #[arg(short, long)]
        yes: bool,
    },
}
