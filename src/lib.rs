pub mod command;
pub mod config;
pub mod editor;
pub mod errors;
pub mod menu;
pub mod node;
mod runner;
pub mod ui;

pub use crate::editor::CursorBuffer;
use crate::errors::EditorError;

pub fn run() -> Result<(), EditorError> {
    runner::run()
}
