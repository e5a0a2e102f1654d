/*!
 * Manual mode: exhaustive charset combinations
 *
 * Lengths are processed in ascending order on the calling thread. Each
 * combination is produced lazily, filtered against the exclusion pattern,
 * optionally leet-expanded and written straight away; the full product is
 * never held in memory.
 */

use std::io::Write;
use std::time::Instant;

use log::{debug, info, warn};

use crate::config::ManualConfig;
use crate::error::{GenError, Result};
use crate::expand::fixed_length_strings;
use crate::leet::apply_leet;
use crate::progress::{ProgressEvent, ProgressReporter, RunState};
use crate::report::RunStats;
use crate::sink::OutputSink;

/// How many combinations are produced between two stop-flag checks
const STOP_CHECK_INTERVAL: u64 = 1 << 16;

/// Enumerate every combination of the configured charset and write it to `sink`
pub fn run<W, P>(
    config: &ManualConfig,
    sink: &OutputSink<W>,
    state: &RunState,
    progress: &P,
) -> Result<RunStats>
where
    W: Write,
    P: ProgressReporter + ?Sized,
{
    if config.min_length == 0 || config.min_length > config.max_length {
        return Err(GenError::InvalidLengthRange {
            min: config.min_length,
            max: config.max_length,
        });
    }

    let alphabet: Vec<char> = config.alphabet.chars().collect();
    let total = (config.max_length - config.min_length + 1) as u64;
    let start = Instant::now();
    let mut produced: u64 = 0;

    info!(
        "Enumerating {} characters, lengths {}..={}",
        alphabet.len(),
        config.min_length,
        config.max_length
    );
    progress.report(ProgressEvent::Started { total });

    for (index, length) in (config.min_length..=config.max_length).enumerate() {
        let before = sink.lines_written();

        for candidate in fixed_length_strings(&alphabet, length) {
            produced += 1;
            if produced % STOP_CHECK_INTERVAL == 0 && !state.is_running() {
                sink.flush()?;
                warn!("Manual run stopped during length {}", length);
                return Err(GenError::Cancelled {
                    lines_written: sink.lines_written(),
                });
            }

            if config.exclude.excludes(&candidate) {
                continue;
            }

            if config.leet {
                for variant in apply_leet(&candidate, true) {
                    if variant.chars().count() <= config.max_length {
                        sink.write_line(&variant)?;
                    }
                }
            } else {
                sink.write_line(&candidate)?;
            }
        }

        debug!(
            "Length {} produced {} lines",
            length,
            sink.lines_written() - before
        );
        progress.report(ProgressEvent::Advanced {
            completed: index as u64 + 1,
            total,
        });

        if !state.is_running() && length < config.max_length {
            sink.flush()?;
            warn!("Manual run stopped after length {}", length);
            return Err(GenError::Cancelled {
                lines_written: sink.lines_written(),
            });
        }
    }

    sink.flush()?;
    progress.report(ProgressEvent::Finished { completed: total });

    let stats = RunStats::new(total, sink.lines_written(), start.elapsed());
    info!(
        "Manual run finished: {} lines in {:.2}s",
        stats.lines_written, stats.duration_secs
    );
    Ok(stats)
}
