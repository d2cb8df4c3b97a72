//! Board presentation.
//!
//! This module turns a fetch cycle into DOM output:
//! - Loading view with optional simulated progress
//! - The populated board (categories, articles, source domains)
//! - The "no data" message and the error block
//!
//! # Module Structure
//!
//! - `presenter` - State machine owning the container for one fetch cycle
//! - `board` - Renderer for validated payloads
//! - `status` - Loading, empty and error views
//! - `progress` - Simulated progress and its timer
//! - `styling` - Class names and inline style roles
//! - `messages` - User-visible strings

mod board;
mod messages;
mod presenter;
mod progress;
mod status;
mod styling;

// Re-export the public API
pub use board::Renderer;
pub use messages::Messages;
pub use presenter::{LoadError, Presenter, PresenterOptions, RenderState};
pub use progress::{Phase, ProgressOptions, ProgressTimer, SimulatedProgress};
pub use status::{
    empty_view, error_view, loading_view, update_progress, PROGRESS_BAR_ID,
    PROGRESS_MESSAGE_ID, PROGRESS_TEXT_ID,
};
pub use styling::{Role, StyleMode};
