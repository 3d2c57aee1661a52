//! Command handlers exposed to the UI host

pub mod editor;
pub mod recording;

pub use editor::EditorState;
pub use recording::RecorderState;
