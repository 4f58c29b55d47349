//! Linear undo/redo history of ink-layer snapshots.
//!
//! The last entry always mirrors the committed ink layer. Undo moves that entry
//! to the front of the redo buffer and exposes the one beneath it; redo moves it
//! back. Starting new work drops everything in the redo buffer.

use crate::draw::RasterSnapshot;
use std::collections::VecDeque;

/// Undo/redo stacks of raster snapshots.
///
/// The initial snapshot is held outside the stack so it can never be undone
/// or evicted; the history therefore always has at least one entry.
#[derive(Debug)]
pub struct History {
    /// Blank-canvas snapshot taken at initialization
    initial: RasterSnapshot,
    /// Snapshots committed after `initial`, oldest first
    entries: Vec<RasterSnapshot>,
    /// Undone snapshots, next-to-redo first
    redo: VecDeque<RasterSnapshot>,
    /// Maximum number of entries including `initial` (0 = unbounded)
    max_depth: usize,
}

impl History {
    /// Creates a history seeded with the blank-canvas snapshot.
    ///
    /// A non-zero `max_depth` below 2 is raised to 2 so one stroke can always be undone.
    pub fn new(initial: RasterSnapshot, max_depth: usize) -> Self {
        let max_depth = if max_depth == 0 { 0 } else { max_depth.max(2) };
        Self {
            initial,
            entries: Vec::new(),
            redo: VecDeque::new(),
            max_depth,
        }
    }

    /// Number of history entries, counting the initial snapshot.
    pub fn len(&self) -> usize {
        self.entries.len() + 1
    }

    /// Always false; kept for API symmetry with collections.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Number of snapshots waiting to be redone.
    pub fn redo_len(&self) -> usize {
        self.redo.len()
    }

    pub fn can_undo(&self) -> bool {
        !self.entries.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// The snapshot that currently represents the committed raster.
    pub fn current(&self) -> &RasterSnapshot {
        self.entries.last().unwrap_or(&self.initial)
    }

    /// Records a newly committed raster state and invalidates redo.
    pub fn push(&mut self, snapshot: RasterSnapshot) {
        self.redo.clear();
        self.entries.push(snapshot);

        if self.max_depth > 0 {
            let overflow = self.len().saturating_sub(self.max_depth);
            if overflow > 0 {
                self.entries.drain(..overflow);
                log::debug!("History capped at {} entries; dropped {overflow}", self.max_depth);
            }
        }
    }

    /// Drops all redoable snapshots.
    pub fn clear_redo(&mut self) {
        if !self.redo.is_empty() {
            log::debug!("Discarding {} redo snapshot(s)", self.redo.len());
            self.redo.clear();
        }
    }

    /// The snapshot [`undo`](Self::undo) would restore, without moving anything.
    pub fn undo_target(&self) -> Option<&RasterSnapshot> {
        match self.entries.len() {
            0 => None,
            1 => Some(&self.initial),
            n => self.entries.get(n - 2),
        }
    }

    /// The snapshot [`redo`](Self::redo) would restore, without moving anything.
    pub fn redo_target(&self) -> Option<&RasterSnapshot> {
        self.redo.front()
    }

    /// Steps back one entry and returns the snapshot to restore.
    ///
    /// Returns `None` (and changes nothing) when only the initial snapshot remains.
    pub fn undo(&mut self) -> Option<&RasterSnapshot> {
        let undone = self.entries.pop()?;
        self.redo.push_front(undone);
        Some(self.current())
    }

    /// Re-applies the most recently undone entry and returns the snapshot to restore.
    ///
    /// Returns `None` when there is nothing to redo.
    pub fn redo(&mut self) -> Option<&RasterSnapshot> {
        let next = self.redo.pop_front()?;
        self.entries.push(next);
        Some(self.current())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::InkLayer;
    use crate::draw::color::WHITE;

    fn snapshots(count: usize) -> (RasterSnapshot, Vec<RasterSnapshot>) {
        let layer = InkLayer::new(16, 16).unwrap();
        let blank = layer.snapshot().unwrap();
        let mut out = Vec::new();
        for i in 0..count {
            let y = 2.0 + i as f64 * 3.0;
            layer.stroke_segment((0.0, y), (16.0, y), WHITE, 2.0);
            out.push(layer.snapshot().unwrap());
        }
        (blank, out)
    }

    #[test]
    fn undo_on_initial_snapshot_is_a_no_op() {
        let (blank, _) = snapshots(0);
        let mut history = History::new(blank.clone(), 0);
        assert!(!history.is_empty());
        assert!(!history.can_undo());
        assert!(history.undo_target().is_none());
        assert!(history.undo().is_none());
        assert_eq!(history.len(), 1);
        assert_eq!(history.current(), &blank);
        assert_eq!(history.redo_len(), 0);
    }

    #[test]
    fn undo_then_redo_returns_to_the_same_snapshot() {
        let (blank, snaps) = snapshots(3);
        let mut history = History::new(blank, 0);
        for snap in &snaps {
            history.push(snap.clone());
        }

        assert_eq!(history.undo(), Some(&snaps[1]));
        assert_eq!(history.redo(), Some(&snaps[2]));
        assert_eq!(history.len(), 4);
        assert!(!history.can_redo());
    }

    #[test]
    fn snapshots_live_in_exactly_one_stack() {
        let (blank, snaps) = snapshots(2);
        let mut history = History::new(blank.clone(), 0);
        history.push(snaps[0].clone());
        history.push(snaps[1].clone());

        history.undo();
        history.undo();
        assert_eq!(history.len(), 1);
        assert_eq!(history.redo_len(), 2);
        assert_eq!(history.current(), &blank);

        history.redo();
        assert_eq!(history.len(), 2);
        assert_eq!(history.redo_len(), 1);
    }

    #[test]
    fn push_after_undo_clears_redo() {
        let (blank, snaps) = snapshots(2);
        let mut history = History::new(blank, 0);
        history.push(snaps[0].clone());
        history.undo();
        assert!(history.can_redo());

        history.push(snaps[1].clone());
        assert!(!history.can_redo());
        assert!(history.redo().is_none());
    }

    #[test]
    fn depth_cap_keeps_initial_snapshot() {
        let (blank, snaps) = snapshots(5);
        let mut history = History::new(blank.clone(), 3);
        for snap in &snaps {
            history.push(snap.clone());
        }
        assert_eq!(history.len(), 3);
        assert_eq!(history.current(), &snaps[4]);

        history.undo();
        history.undo();
        assert_eq!(history.current(), &blank);
        assert!(history.undo().is_none());
    }

    #[test]
    fn tiny_cap_still_allows_one_undo() {
        let (blank, snaps) = snapshots(2);
        let mut history = History::new(blank.clone(), 1);
        history.push(snaps[0].clone());
        history.push(snaps[1].clone());
        assert_eq!(history.len(), 2);
        assert_eq!(history.undo(), Some(&blank));
    }

    #[test]
    fn targets_match_what_undo_and_redo_return() {
        let (blank, snaps) = snapshots(2);
        let mut history = History::new(blank.clone(), 0);
        history.push(snaps[0].clone());
        history.push(snaps[1].clone());
        assert!(history.can_undo());
        assert!(history.redo_target().is_none());

        assert_eq!(history.undo_target(), Some(&snaps[0]));
        assert_eq!(history.len(), 3);
        assert_eq!(history.undo(), Some(&snaps[0]));

        assert_eq!(history.undo_target(), Some(&blank));
        assert_eq!(history.redo_target(), Some(&snaps[1]));
        assert_eq!(history.redo_len(), 1);
        assert_eq!(history.redo(), Some(&snaps[1]));
    }
}
