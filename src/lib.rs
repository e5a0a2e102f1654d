/*!
 * CrackDict - wordlist generation for password auditing
 *
 * Two pipelines share the leet expander and the output sink:
 * - automatic: keyword seeds expanded with leet, symbols and numeric suffixes
 * - manual: every combination of a charset over a length range
 */

// Core library modules
pub mod automatic;
pub mod config;
pub mod error;
pub mod estimate;
pub mod expand;
pub mod leet;
pub mod manual;
pub mod progress;
pub mod report;
pub mod sink;

// Re-exports
pub use config::{
    clamp_max_length, clamp_workers, AutomaticConfig, Exclusion, ManualConfig, DEFAULT_CHARSET,
    DEFAULT_MAX_LENGTH, DIGITS, MAX_LENGTH_LIMIT, SYMBOLS,
};
pub use error::{GenError, Result};
pub use estimate::{estimate_automatic, estimate_manual, format_count};
pub use expand::{for_each_combination, generate_combinations};
pub use leet::{apply_leet, LEET_MAP};
pub use progress::{NoProgress, ProgressEvent, ProgressReporter, RunState};
pub use report::{RunReport, RunStats};
pub use sink::OutputSink;
