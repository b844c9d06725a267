//! Periodic progress display fed by snapshots the search publishes
//!
//! The search never shares its live arrays. At checkpoints it copies the grid
//! into a mutex-guarded snapshot using `try_lock`, skipping the checkpoint if
//! the reporter happens to hold the lock, so publishing never blocks. Each new
//! best placement is also sent over an unbounded queue, so the reporter prints
//! every improvement in order however quickly they arrive. Between messages
//! the reporter redraws the latest snapshot on a fixed interval.

use crate::io::configuration::SPINNER_TICK_MS;
use crate::io::error::{Result, reporter_error};
use crate::spatial::HeightGrid;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::sync::{Arc, LazyLock, Mutex, PoisonError, TryLockError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Copy of the search state at one checkpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressSnapshot {
    /// Live grid at the checkpoint
    pub grid: HeightGrid,
    /// Markers on the live grid
    pub card: usize,
    /// Best cardinality recorded so far
    pub best_card: usize,
    /// Cells visited so far
    pub nodes: u64,
    /// Number of snapshots published, 0 before the first one
    pub sequence: u64,
}

impl ProgressSnapshot {
    /// Multi-line summary: the grid followed by `result: <card> | <best>`
    pub fn summary(&self) -> String {
        let mut lines = self.grid.render_rows();
        lines.push(format!(
            "result: {} | {} ({} cells visited)",
            self.card, self.best_card, self.nodes
        ));
        lines.join("\n")
    }
}

/// A complete grid that strictly improved the best cardinality
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BestAnnouncement {
    /// Markers on the new best grid
    pub card: usize,
    /// Copy of the new best grid
    pub grid: HeightGrid,
}

impl BestAnnouncement {
    /// Banner line followed by the grid rows
    pub fn summary(&self) -> String {
        let mut lines = vec![format!("----- BEST ! ----- {}", self.card)];
        lines.extend(self.grid.render_rows());
        lines.join("\n")
    }
}

/// Message queued for the progress reporter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReporterMessage {
    /// A new best placement was recorded
    Best(BestAnnouncement),
    /// The search has finished
    Stop,
}

/// Search-side handle: a snapshot slot plus the reporter's message queue
#[derive(Debug, Clone)]
pub struct SnapshotChannel {
    shared: Arc<Mutex<ProgressSnapshot>>,
    messages: Sender<ReporterMessage>,
}

impl SnapshotChannel {
    /// Create a channel for an `order`×`order` grid and the receiving end of its queue
    pub fn new(order: usize) -> (Self, Receiver<ReporterMessage>) {
        let (messages, received) = mpsc::channel();
        let channel = Self {
            shared: Arc::new(Mutex::new(ProgressSnapshot {
                grid: HeightGrid::new(order),
                card: 0,
                best_card: 0,
                nodes: 0,
                sequence: 0,
            })),
            messages,
        };
        (channel, received)
    }

    /// Publish the current search state unless the reader holds the lock
    ///
    /// Returns whether the snapshot was updated.
    pub fn publish(&self, grid: &HeightGrid, card: usize, best_card: usize, nodes: u64) -> bool {
        let mut snapshot = match self.shared.try_lock() {
            Ok(guard) => guard,
            Err(TryLockError::Poisoned(poisoned)) => poisoned.into_inner(),
            Err(TryLockError::WouldBlock) => return false,
        };
        snapshot.grid.copy_from(grid);
        snapshot.card = card;
        snapshot.best_card = best_card;
        snapshot.nodes = nodes;
        snapshot.sequence += 1;
        true
    }

    /// Queue a new best grid holding `card` markers
    ///
    /// Returns whether the receiving end is still listening.
    pub fn announce_best(&self, grid: &HeightGrid, card: usize) -> bool {
        self.messages
            .send(ReporterMessage::Best(BestAnnouncement {
                card,
                grid: grid.clone(),
            }))
            .is_ok()
    }

    /// Latest published snapshot, or `None` before the first publication
    pub fn latest(&self) -> Option<ProgressSnapshot> {
        let snapshot = self.shared.lock().unwrap_or_else(PoisonError::into_inner);
        (snapshot.sequence > 0).then(|| snapshot.clone())
    }
}

static SPINNER_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{spinner:.cyan} [{elapsed_precise}] {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

/// Background thread printing announcements and redrawing the latest snapshot
pub struct ProgressReporter {
    stop: Sender<ReporterMessage>,
    handle: JoinHandle<()>,
}

impl ProgressReporter {
    /// Start the reporter on the queue returned by [`SnapshotChannel::new`], redrawing every `interval`
    ///
    /// # Errors
    ///
    /// Returns an error if the thread cannot be spawned
    pub fn spawn(
        channel: SnapshotChannel,
        messages: Receiver<ReporterMessage>,
        interval: Duration,
    ) -> Result<Self> {
        let stop = channel.messages.clone();
        let handle = thread::Builder::new()
            .name("progress".to_string())
            .spawn(move || {
                let bar = ProgressBar::new_spinner();
                bar.set_style(SPINNER_STYLE.clone());
                bar.set_message("searching");
                bar.enable_steady_tick(Duration::from_millis(SPINNER_TICK_MS));

                loop {
                    match messages.recv_timeout(interval) {
                        Ok(ReporterMessage::Best(announcement)) => {
                            bar.println(announcement.summary());
                        }
                        Ok(ReporterMessage::Stop) | Err(RecvTimeoutError::Disconnected) => break,
                        Err(RecvTimeoutError::Timeout) => {
                            if let Some(snapshot) = channel.latest() {
                                bar.set_message(snapshot.summary());
                            }
                        }
                    }
                }
                bar.finish_and_clear();
            })
            .map_err(|error| reporter_error(&error))?;

        Ok(Self { stop, handle })
    }

    /// Stop the reporter once it has printed every queued announcement
    ///
    /// # Errors
    ///
    /// Returns an error if the reporter thread panicked
    pub fn finish(self) -> Result<()> {
        // A failed send means the thread already exited; join reports why
        let _ = self.stop.send(ReporterMessage::Stop);
        self.handle.join().map_err(|payload| {
            let reason = payload
                .downcast_ref::<&str>()
                .map_or("progress thread panicked", |message| *message);
            reporter_error(&reason)
        })
    }
}
