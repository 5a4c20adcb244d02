//! Snapshot history of one composition session.
//!
//! Each snapshot is the best known reading of the kana currently being
//! composed. The sequence only grows by [`KanaHistory::push`] and only
//! shrinks from the end, which keeps adjacent snapshots distinct.


use tracing::{debug, trace};

#[derive(Debug, Clone, Default)]
pub struct KanaHistory {
    snapshots: Vec<String>,
    /// Set after an anomaly; the next finalize resolves nothing.
    stopped: bool,
}

impl KanaHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshots(&self) -> &[String] {
        &self.snapshots
    }

    pub fn last(&self) -> Option<&str> {
        self.snapshots.last().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    pub fn set_stopped(&mut self, stopped: bool) {
        self.stopped = stopped;
    }

    /// Append `candidate` unless it is empty or equal to the last snapshot.
    /// Returns whether the history grew.
    pub fn push(&mut self, candidate: &str) -> bool {
        if candidate.is_empty() || self.last() == Some(candidate) {
            return false;
        }
        debug!(candidate, len = self.snapshots.len() + 1, "history push");
        self.snapshots.push(candidate.to_string());
        true
    }

    /// Roll the history back so that `candidate` is the latest state.
    ///
    /// If `candidate` was recorded before, everything after its last
    /// occurrence is discarded. Otherwise the last snapshot is dropped and, when
    /// `candidate` is non-empty, the new last snapshot is replaced by it.
    pub fn remove(&mut self, candidate: &str) {
        match self.snapshots.iter().rposition(|s| s == candidate) {
            Some(index) => self.truncate_after(index),
            None => {
                self.snapshots.pop();
                if !candidate.is_empty() {
                    self.replace_last(candidate);
                }
            }
        }
        debug!(candidate, len = self.snapshots.len(), "history remove");
    }

    /// Keep snapshots up to and including `index`.
    fn truncate_after(&mut self, index: usize) {
        self.snapshots.truncate(index + 1);
    }

    /// Overwrite the last snapshot. Only called with a candidate that is not
    /// present anywhere in the history, so it cannot equal its neighbour.
    fn replace_last(&mut self, candidate: &str) {
        if let Some(last) = self.snapshots.last_mut() {
            candidate.clone_into(last);
        }
    }

    pub fn clear(&mut self) {
        self.snapshots.clear();
        self.stopped = false;
    }

    /// Resolve the session into one string and clear it.
    ///
    /// Returns `None` when the history is empty or stopped; the history is
    /// cleared either way.
    pub fn finalize(&mut self) -> Option<String> {
        let resolved = if self.stopped {
            debug!(len = self.snapshots.len(), "finalize suppressed (stopped)");
            None
        } else {
            resolve(self.snapshots.as_slice())
        };
        self.clear();
        resolved
    }
}

/// Collapse a snapshot sequence into the finalized reading.
///
/// Lengths rise while one phrase is typed. A strict drop below the running
/// maximum marks the snapshot before it as a completed phrase; the running
/// maximum restarts at zero from the next snapshot. The last snapshot is
/// always the final phrase.
///
/// ```
/// use kana_core::resolve;
///
/// let snapshots = ["と", "とう", "とうきょう", "と", "とっきょ"];
/// assert_eq!(resolve(&snapshots).as_deref(), Some("とうきょうとっきょ"));
/// ```
pub fn resolve<S: AsRef<str>>(snapshots: &[S]) -> Option<String> {
    let last = snapshots.last()?;
    let mut parts: Vec<&str> = Vec::new();
    let mut max_len = 0;

    for (i, snapshot) in snapshots.iter().enumerate() {
        let len = snapshot.as_ref().chars().count();
        if max_len < len {
            max_len = len;
        } else if len < max_len {
            // i > 0 here: max_len is only non-zero after at least one snapshot.
            let peak = snapshots[i - 1].as_ref();
            trace!(peak, at = i, "phrase boundary");
            parts.push(peak);
            max_len = 0;
        }
    }
    parts.push(last.as_ref());

    Some(parts.concat())
}
