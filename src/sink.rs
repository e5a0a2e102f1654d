/*!
 * Line-oriented output sink
 *
 * One candidate per line, newline terminated. The writer sits behind a
 * mutex so concurrent workers serialize their writes; a batch is written
 * under a single lock acquisition and therefore stays contiguous.
 *
 * The first failed write poisons the sink: later batches are refused
 * without touching the writer.
 */

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use parking_lot::Mutex;

use crate::error::{GenError, Result};

const BUFFER_CAPACITY: usize = 1 << 20;

pub struct OutputSink<W: Write> {
    writer: Mutex<BufWriter<W>>,
    lines: AtomicU64,
    failed: AtomicBool,
}

impl OutputSink<File> {
    /// Create (or truncate) the file at `path`
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path)?;
        Ok(Self::new(file))
    }
}

impl<W: Write> OutputSink<W> {
    pub fn new(inner: W) -> Self {
        Self::with_capacity(BUFFER_CAPACITY, inner)
    }

    pub fn with_capacity(capacity: usize, inner: W) -> Self {
        Self {
            writer: Mutex::new(BufWriter::with_capacity(capacity, inner)),
            lines: AtomicU64::new(0),
            failed: AtomicBool::new(false),
        }
    }

    pub fn write_line(&self, line: &str) -> Result<()> {
        self.write_lines(std::iter::once(line))
    }

    /// Write all lines of `batch` as one contiguous block
    pub fn write_batch<S: AsRef<str>>(&self, batch: &[S]) -> Result<()> {
        if batch.is_empty() {
            return Ok(());
        }
        self.write_lines(batch.iter().map(AsRef::as_ref))
    }

    fn write_lines<'a, I>(&self, lines: I) -> Result<()>
    where
        I: Iterator<Item = &'a str>,
    {
        let mut writer = self.writer.lock();
        if self.failed.load(Ordering::Acquire) {
            return Err(GenError::SinkFailed);
        }

        let mut count = 0u64;
        let result = lines.into_iter().try_for_each(|line| -> io::Result<()> {
            writer.write_all(line.as_bytes())?;
            writer.write_all(b"\n")?;
            count += 1;
            Ok(())
        });
        self.lines.fetch_add(count, Ordering::Relaxed);

        if let Err(e) = result {
            self.failed.store(true, Ordering::Release);
            return Err(e.into());
        }
        Ok(())
    }

    /// Whether a write has already failed
    pub fn is_failed(&self) -> bool {
        self.failed.load(Ordering::Acquire)
    }

    pub fn flush(&self) -> Result<()> {
        self.writer.lock().flush()?;
        Ok(())
    }

    /// Lines accepted so far (including those still buffered)
    pub fn lines_written(&self) -> u64 {
        self.lines.load(Ordering::Relaxed)
    }

    /// Flush and hand back the underlying writer
    pub fn finish(self) -> Result<W> {
        let writer = self.writer.into_inner();
        writer.into_inner().map_err(|e| e.into_error().into())
    }
}

/// Writers with injected failures for exercising error paths
#[cfg(test)]
pub(crate) mod test_support {
    use std::io::{self, Write};
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    use parking_lot::Mutex;

    /// Accepts whole writes until `budget` bytes would be exceeded, then fails.
    /// With `fail_once` it recovers after the first failure.
    #[derive(Clone)]
    pub(crate) struct FlakyWriter {
        data: Arc<Mutex<Vec<u8>>>,
        budget: usize,
        fail_once: bool,
        tripped: Arc<AtomicBool>,
    }

    impl FlakyWriter {
        pub(crate) fn failing_after(budget: usize) -> Self {
            Self {
                data: Arc::new(Mutex::new(Vec::new())),
                budget,
                fail_once: false,
                tripped: Arc::new(AtomicBool::new(false)),
            }
        }

        pub(crate) fn failing_once_after(budget: usize) -> Self {
            Self {
                fail_once: true,
                ..Self::failing_after(budget)
            }
        }

        pub(crate) fn contents(&self) -> String {
            String::from_utf8(self.data.lock().clone()).unwrap()
        }

        /// Complete lines received so far
        pub(crate) fn lines(&self) -> Vec<String> {
            let text = self.contents();
            let complete = text.rfind('\n').map_or(0, |i| i + 1);
            text[..complete].lines().map(str::to_string).collect()
        }
    }

    impl Write for FlakyWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            let mut data = self.data.lock();
            let recovered = self.fail_once && self.tripped.load(Ordering::SeqCst);
            if !recovered && data.len() + buf.len() > self.budget {
                self.tripped.store(true, Ordering::SeqCst);
                return Err(io::Error::other("no space left on device"));
            }
            data.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::FlakyWriter;
    use super::*;

    #[test]
    fn test_failed_write_poisons_sink() {
        let writer = FlakyWriter::failing_once_after(6);
        let sink = OutputSink::with_capacity(4, writer.clone());

        sink.write_line("alpha").unwrap();
        let err = sink.write_line("beta").unwrap_err();
        assert!(matches!(err, GenError::Io(_)));
        assert!(sink.is_failed());

        // The writer would accept again, but the sink refuses
        let err = sink.write_batch(&["gamma", "delta"]).unwrap_err();
        assert!(matches!(err, GenError::SinkFailed));
        assert_eq!(sink.lines_written(), 1);

        sink.finish().unwrap();
        assert_eq!(writer.contents(), "alpha\n");
    }

    #[test]
    fn test_lines_are_newline_terminated() {
        let sink = OutputSink::new(Vec::new());
        sink.write_line("alpha").unwrap();
        sink.write_batch(&["beta", "gamma"]).unwrap();
        assert_eq!(sink.lines_written(), 3);

        let bytes = sink.finish().unwrap();
        assert_eq!(String::from_utf8(bytes).unwrap(), "alpha\nbeta\ngamma\n");
    }

    #[test]
    fn test_empty_batch_writes_nothing() {
        let sink = OutputSink::new(Vec::new());
        sink.write_batch::<String>(&[]).unwrap();
        assert_eq!(sink.lines_written(), 0);
        assert!(sink.finish().unwrap().is_empty());
    }

    #[test]
    fn test_concurrent_batches_stay_contiguous() {
        let sink = OutputSink::new(Vec::new());

        std::thread::scope(|scope| {
            for worker in 0..4 {
                let sink = &sink;
                scope.spawn(move || {
                    for round in 0..50 {
                        let batch: Vec<String> =
                            (0..20).map(|i| format!("w{}-r{}-{}", worker, round, i)).collect();
                        sink.write_batch(&batch).unwrap();
                    }
                });
            }
        });

        assert_eq!(sink.lines_written(), 4 * 50 * 20);
        let text = String::from_utf8(sink.finish().unwrap()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4000);

        for block in lines.chunks(20) {
            let prefix = block[0].rsplit_once('-').unwrap().0;
            for (i, line) in block.iter().enumerate() {
                assert_eq!(*line, format!("{}-{}", prefix, i));
            }
        }
    }
}
