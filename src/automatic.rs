/*!
 * Automatic mode: keyword expansion across a worker pool
 *
 * Seeds are independent units of work. Each worker expands one seed into
 * its full batch and writes that batch to the shared sink as a contiguous
 * block. Blocks from different seeds land in completion order.
 */

use std::io::Write;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use log::{debug, info, warn};
use parking_lot::Mutex;
use rayon::prelude::*;

use crate::config::AutomaticConfig;
use crate::error::{GenError, Result};
use crate::expand::generate_combinations;
use crate::progress::{ProgressEvent, ProgressReporter, RunState};
use crate::report::RunStats;
use crate::sink::OutputSink;

/// Expand every seed and write the results to `sink`.
///
/// The first failing worker aborts the run; lines already handed to the
/// sink are flushed and left in place. Batches still in flight when a write
/// fails are dropped: the sink refuses them once it has failed.
pub fn run<S, W, P>(
    seeds: &[S],
    config: &AutomaticConfig,
    sink: &OutputSink<W>,
    state: &RunState,
    progress: &P,
) -> Result<RunStats>
where
    S: AsRef<str> + Sync,
    W: Write + Send,
    P: ProgressReporter + ?Sized,
{
    if seeds.is_empty() {
        return Err(GenError::NoSeeds);
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.workers)
        .thread_name(|i| format!("crackdict-worker-{}", i))
        .build()
        .map_err(|e| GenError::WorkerPool(e.to_string()))?;

    let total = seeds.len() as u64;
    let completed = AtomicU64::new(0);
    let first_failure: Mutex<Option<GenError>> = Mutex::new(None);
    let start = Instant::now();

    info!(
        "Expanding {} seeds with {} workers (max length {})",
        total, config.workers, config.max_length
    );
    progress.report(ProgressEvent::Started { total });

    let result = pool.install(|| {
        seeds.par_iter().try_for_each(|seed| {
            if !state.is_running() {
                return Err(GenError::Cancelled {
                    lines_written: sink.lines_written(),
                });
            }

            let seed = seed.as_ref();
            let batch = generate_combinations(seed, config);
            if let Err(e) = sink.write_batch(&batch) {
                return Err(match e {
                    GenError::SinkFailed => e,
                    e => {
                        warn!("Write failed while storing seed '{}': {}", seed, e);
                        first_failure.lock().get_or_insert(e);
                        GenError::SinkFailed
                    }
                });
            }

            let done = completed.fetch_add(1, Ordering::Relaxed) + 1;
            debug!("Seed '{}' produced {} candidates", seed, batch.len());
            progress.report(ProgressEvent::Advanced {
                completed: done,
                total,
            });
            Ok(())
        })
    });

    // Report the write error that poisoned the sink, not a refused batch
    let result = result.map_err(|e| first_failure.into_inner().unwrap_or(e));

    match result {
        Ok(()) => {
            sink.flush()?;
            let completed = completed.load(Ordering::Relaxed);
            progress.report(ProgressEvent::Finished { completed });

            let stats = RunStats::new(completed, sink.lines_written(), start.elapsed());
            info!(
                "Automatic run finished: {} lines in {:.2}s",
                stats.lines_written, stats.duration_secs
            );
            Ok(stats)
        }
        Err(GenError::Cancelled { .. }) => {
            sink.flush()?;
            warn!(
                "Automatic run stopped after {} of {} seeds",
                completed.load(Ordering::Relaxed),
                total
            );
            Err(GenError::Cancelled {
                lines_written: sink.lines_written(),
            })
        }
        Err(e) => {
            if let Err(flush_err) = sink.flush() {
                warn!("Flush after failure also failed: {}", flush_err);
            }
            Err(e)
        }
    }
}
