//! Access counters for profiling the image operations.
//!
//! Every operation that touches the elements of a row (RAW pixels or stored
//! run lengths) reports those accesses to an [`Instrumentation`] context that
//! the caller creates once and passes down explicitly. The counters have no
//! effect on results; they only make the cost of each operation observable.

use log::info;
use std::cell::Cell;
use std::time::{Duration, Instant};

/// Number of counters kept by an [`Instrumentation`] context.
pub const NUM_COUNTERS: usize = 1;

/// The individual counters.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Counter {
    /// Pixel-array accesses: RAW pixels read or written and RLE row elements
    /// copied or compared.
    PixMem = 0,
}

impl Counter {
    pub const ALL: [Counter; NUM_COUNTERS] = [Counter::PixMem];

    pub fn name(self) -> &'static str {
        match self {
            Counter::PixMem => "pixmem",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// A counting context shared by all operations of one run.
///
/// Counters live in `Cell`s so the context can be passed as `&Instrumentation`
/// alongside shared borrows of the images. The context is not `Sync`.
#[derive(Debug)]
pub struct Instrumentation {
    counts: [Cell<u64>; NUM_COUNTERS],
    started: Cell<Instant>,
}

impl Default for Instrumentation {
    fn default() -> Self {
        Self::new()
    }
}

impl Instrumentation {
    /// Creates a context with all counters at zero and the clock started.
    pub fn new() -> Self {
        Self {
            counts: std::array::from_fn(|_| Cell::new(0)),
            started: Cell::new(Instant::now()),
        }
    }

    /// Adds `n` accesses to `counter`.
    #[inline]
    pub fn record(&self, counter: Counter, n: u64) {
        let cell = &self.counts[counter.index()];
        cell.set(cell.get().saturating_add(n));
    }

    /// Adds `n` pixel-array accesses. Shorthand for the hot paths.
    #[inline]
    pub fn pixmem(&self, n: usize) {
        self.record(Counter::PixMem, n as u64);
    }

    pub fn count(&self, counter: Counter) -> u64 {
        self.counts[counter.index()].get()
    }

    /// Zeroes every counter and restarts the clock.
    pub fn reset(&self) {
        for cell in &self.counts {
            cell.set(0);
        }
        self.started.set(Instant::now());
    }

    /// Time elapsed since creation or the last [`reset`](Self::reset).
    pub fn elapsed(&self) -> Duration {
        self.started.get().elapsed()
    }

    /// Logs the elapsed time and every counter at `info` level.
    pub fn log_summary(&self) {
        let mut line = format!("time = {:.6}s", self.elapsed().as_secs_f64());
        for counter in Counter::ALL {
            line.push_str(&format!(" {} = {}", counter.name(), self.count(counter)));
        }
        info!("{}", line);
    }
}
