use std::fs;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use log::warn;

/// Where the viewer is in its refresh cycle.
///
/// `Stalled` is terminal: once a read fails, no deadline is armed again and
/// the displayed content stays frozen at the last successful read. Only
/// recreating the viewer restarts polling.
enum Phase {
    Polling { next_tick: Instant },
    Stalled,
}

/// One file bound to one text buffer, re-read on a fixed interval.
///
/// Every refresh is a full read-and-replace. There is no offset tracking and
/// no incremental tailing; the whole file is read into memory each tick.
pub struct Viewer {
    path: PathBuf,
    interval: Duration,
    contents: String,
    phase: Phase,
}

impl Viewer {
    /// Bind `path` and perform the first refresh immediately, before any wait.
    /// The path is not validated up front; a missing file simply makes the
    /// first refresh fail and the viewer starts out stalled.
    pub fn new(path: impl Into<PathBuf>, interval: Duration) -> Self {
        let mut viewer = Self {
            path: path.into(),
            interval,
            contents: String::new(),
            phase: Phase::Stalled,
        };
        viewer.refresh();
        viewer
    }

    /// Run one refresh if the deadline has passed. Returns whether a refresh
    /// happened. Called once per frame by the app.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.phase {
            Phase::Polling { next_tick } if now >= next_tick => {
                self.refresh();
                true
            }
            _ => false,
        }
    }

    /// Read the whole file and replace the displayed text. The next deadline
    /// is set after the read completes, so a slow read lengthens the
    /// effective period rather than piling up ticks.
    fn refresh(&mut self) {
        match fs::read_to_string(&self.path) {
            Ok(text) => {
                self.contents = text;
                self.phase = Phase::Polling {
                    next_tick: Instant::now() + self.interval,
                };
            }
            Err(e) => {
                warn!("couldn't read {}: {}", self.path.display(), e);
                self.phase = Phase::Stalled;
            }
        }
    }

    /// Time left until the next tick, or `None` when stalled (no deadline
    /// armed). The app uses this to schedule the next repaint.
    pub fn time_until_next(&self, now: Instant) -> Option<Duration> {
        match self.phase {
            Phase::Polling { next_tick } => Some(next_tick.saturating_duration_since(now)),
            Phase::Stalled => None,
        }
    }

    #[cfg(test)]
    pub fn is_stalled(&self) -> bool {
        matches!(self.phase, Phase::Stalled)
    }

    #[cfg(test)]
    pub fn contents(&self) -> &str {
        &self.contents
    }

    /// Mutable access for the text widget. Manual edits survive only until
    /// the next successful refresh overwrites them.
    pub fn contents_mut(&mut self) -> &mut String {
        &mut self.contents
    }
}
