use std::path::{Path, PathBuf};

use crate::draw::Shape;
use crate::export::{self, ExportError, ExportSettings};
use log::{debug, info, warn};

use super::{DrawingSurface, GestureState};

impl DrawingSurface {
    /// Steps the ink layer back one history entry.
    ///
    /// Returns `false` (and changes nothing) when only the initial snapshot
    /// remains or a gesture is in progress. A snapshot that fails to restore
    /// also leaves the history untouched. Shapes are unaffected.
    pub fn undo(&mut self) -> bool {
        if !matches!(self.state, GestureState::Idle) {
            debug!("Undo ignored during {:?}", self.state);
            return false;
        }
        let Some(snapshot) = self.history.undo_target() else {
            debug!("Nothing to undo");
            return false;
        };
        // History only moves once the ink actually shows the target.
        if let Err(err) = self.ink.restore(snapshot) {
            warn!("Failed to restore ink snapshot on undo: {err}");
            return false;
        }
        self.history.undo();
        self.redraw();
        true
    }

    /// Re-applies the most recently undone snapshot.
    ///
    /// Returns `false` when the redo buffer is empty or a gesture is in progress.
    /// A failed restore leaves the snapshot in the redo buffer.
    pub fn redo(&mut self) -> bool {
        if !matches!(self.state, GestureState::Idle) {
            debug!("Redo ignored during {:?}", self.state);
            return false;
        }
        let Some(snapshot) = self.history.redo_target() else {
            debug!("Nothing to redo");
            return false;
        };
        if let Err(err) = self.ink.restore(snapshot) {
            warn!("Failed to restore ink snapshot on redo: {err}");
            return false;
        }
        self.history.redo();
        self.redraw();
        true
    }

    /// Wipes the board: drops every shape and blanks the ink layer.
    ///
    /// The blank ink is pushed onto the history, so `undo` brings the previous
    /// ink back (shapes stay gone) and any pending redo is discarded.
    /// Ignored while a gesture is in progress.
    pub fn clear(&mut self) -> bool {
        if !matches!(self.state, GestureState::Idle) {
            debug!("Clear ignored during {:?}", self.state);
            return false;
        }
        self.ink.clear();
        let blank = match self.ink.snapshot() {
            Ok(blank) => blank,
            Err(err) => {
                warn!("Failed to snapshot cleared ink: {err}");
                if let Err(err) = self.ink.restore(self.history.current()) {
                    warn!("Failed to restore ink after aborted clear: {err}");
                }
                return false;
            }
        };
        let dropped = self.shapes.len();
        self.shapes.clear();
        self.history.push(blank);
        info!("Board cleared ({dropped} shape(s) removed)");
        self.redraw();
        true
    }

    /// Deletes the shape selected by the active transform gesture.
    ///
    /// Ends the gesture. Returns `None` when nothing is selected.
    pub fn delete_selected(&mut self) -> Option<Shape> {
        let index = self.selected_index()?;
        self.state = GestureState::Idle;
        self.remove_shape(index)
    }

    pub(super) fn remove_shape(&mut self, index: usize) -> Option<Shape> {
        if index >= self.shapes.len() {
            return None;
        }
        let shape = self.shapes.remove(index);
        debug!("Deleted {} at index {index}", shape.kind());
        self.redraw();
        Some(shape)
    }

    /// Encodes the composed canvas (background included) as PNG bytes.
    pub fn encode_png(&self) -> Result<Vec<u8>, ExportError> {
        export::encode_png(&self.canvas)
    }

    /// Writes the canvas to the configured directory under the fixed filename.
    pub fn export_png(&self, settings: &ExportSettings) -> Result<PathBuf, ExportError> {
        let path = export::save_png(&self.canvas, settings)?;
        info!("Exported board to {}", path.display());
        Ok(path)
    }

    /// Writes the canvas to an explicit path.
    pub fn export_png_to(&self, path: &Path) -> Result<PathBuf, ExportError> {
        let path = export::save_png_to(&self.canvas, path)?;
        info!("Exported board to {}", path.display());
        Ok(path)
    }
}
