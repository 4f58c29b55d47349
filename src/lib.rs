//! Library exports for the whiteboard drawing engine.
//!
//! Exposes the drawing surface (shapes, freehand ink, undo/redo, PNG export),
//! the chat panel collaborator and the configuration types so that the CLI
//! binary, the schema dumper and tests share one implementation.

pub mod chat;
pub mod config;
pub mod draw;
pub mod export;
pub mod history;
pub mod input;
pub mod script;
pub mod util;

pub use config::Config;
pub use input::DrawingSurface;
