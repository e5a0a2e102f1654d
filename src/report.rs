/*!
 * Run statistics and the optional JSON run report
 */

use std::path::Path;
use std::time::Duration;

use serde::Serialize;

use crate::error::Result;

/// Outcome of a completed pipeline run
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RunStats {
    /// Seeds (automatic) or lengths (manual) fully processed
    pub units_completed: u64,
    pub lines_written: u64,
    pub duration_secs: f64,
    pub lines_per_second: f64,
}

impl RunStats {
    pub fn new(units_completed: u64, lines_written: u64, elapsed: Duration) -> Self {
        let duration_secs = elapsed.as_secs_f64();
        let lines_per_second = if duration_secs > 0.0 {
            lines_written as f64 / duration_secs
        } else {
            0.0
        };

        Self {
            units_completed,
            lines_written,
            duration_secs,
            lines_per_second,
        }
    }
}

/// Serializable summary of a run: what was asked for and what came out
#[derive(Debug, Serialize)]
pub struct RunReport<'a, C: Serialize> {
    pub version: &'static str,
    pub mode: &'static str,
    pub output: &'a Path,
    pub config: &'a C,
    pub stats: RunStats,
}

impl<'a, C: Serialize> RunReport<'a, C> {
    pub fn new(mode: &'static str, output: &'a Path, config: &'a C, stats: RunStats) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION"),
            mode,
            output,
            config,
            stats,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }
}
