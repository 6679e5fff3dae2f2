//! Linear undo/redo history over configuration snapshots.

use crate::background::BackgroundConfig;

/// Past/future stacks of configuration snapshots.
///
/// `past` runs oldest to most recent, `future` most-recently-undone to
/// oldest-undone. Entries carry no identity beyond their position. The
/// history is strictly linear: recording a fresh snapshot discards
/// everything in `future`, so no redo survives a new edit.
#[derive(Debug, Default)]
pub struct History {
    past: Vec<BackgroundConfig>,
    future: Vec<BackgroundConfig>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the pre-mutation configuration.
    ///
    /// Clears `future`; a subsequent redo is unavailable until a later
    /// undo repopulates it.
    pub fn record(&mut self, current: BackgroundConfig) {
        self.past.push(current);
        self.future.clear();
    }

    /// Step backward.
    ///
    /// Pops the most recent `past` entry, parks `current` on `future`, and
    /// returns the popped entry as the configuration to apply. With an
    /// empty `past` this is a safe no-op returning `None` — callers are
    /// expected to disable the control, but the stack does not assume they
    /// checked.
    pub fn undo(&mut self, current: BackgroundConfig) -> Option<BackgroundConfig> {
        let previous = self.past.pop()?;
        self.future.push(current);
        Some(previous)
    }

    /// Step forward; symmetric with [`History::undo`].
    pub fn redo(&mut self, current: BackgroundConfig) -> Option<BackgroundConfig> {
        let next = self.future.pop()?;
        self.past.push(current);
        Some(next)
    }

    /// Whether an undo would apply anything.
    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    /// Whether a redo would apply anything.
    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// Number of undoable snapshots.
    pub fn depth(&self) -> usize {
        self.past.len()
    }
}
