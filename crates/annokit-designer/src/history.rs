//! Linear undo/redo history of shape-list snapshots
//!
//! The history is a list of immutable snapshots plus a cursor pointing at the
//! one currently shown. Undo and redo only move the cursor; pushing while the
//! cursor is behind the tip discards every snapshot after it, so there is
//! never more than one redo branch.

/// Default maximum number of snapshots kept (`0` keeps every snapshot).
pub const DEFAULT_MAX_DEPTH: usize = 0;

/// Snapshot history with a movable cursor.
#[derive(Debug, Clone)]
pub struct History<T> {
    entries: Vec<T>,
    cursor: usize,
    max_depth: usize,
}

impl<T: Clone> History<T> {
    /// Create a history seeded with `initial`, keeping at most `max_depth`
    /// snapshots (`0` = unbounded).
    pub fn new(initial: T, max_depth: usize) -> Self {
        Self {
            entries: vec![initial],
            cursor: 0,
            max_depth,
        }
    }

    /// Record a new snapshot after the cursor and make it current.
    pub fn push(&mut self, snapshot: T) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(snapshot);
        self.cursor = self.entries.len() - 1;

        if self.max_depth > 0 && self.entries.len() > self.max_depth {
            let excess = self.entries.len() - self.max_depth;
            self.entries.drain(..excess);
            self.cursor -= excess;
            tracing::trace!("History trimmed {} oldest snapshot(s)", excess);
        }
    }

    /// Step back one snapshot. Returns the new current snapshot, or `None`
    /// when already at the oldest one.
    pub fn undo(&mut self) -> Option<&T> {
        if !self.can_undo() {
            return None;
        }
        self.cursor -= 1;
        Some(&self.entries[self.cursor])
    }

    /// Step forward one snapshot. Returns the new current snapshot, or
    /// `None` when already at the newest one.
    pub fn redo(&mut self) -> Option<&T> {
        if !self.can_redo() {
            return None;
        }
        self.cursor += 1;
        Some(&self.entries[self.cursor])
    }

    /// Replace the whole history with a single snapshot.
    pub fn reset(&mut self, snapshot: T) {
        self.entries.clear();
        self.entries.push(snapshot);
        self.cursor = 0;
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    /// The snapshot at the cursor.
    pub fn current(&self) -> &T {
        &self.entries[self.cursor]
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of snapshots held, including the current one.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }
}
