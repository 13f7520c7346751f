//! State management types for the canvas.
//!
//! This module contains all state-related types including:
//! - Region geometry and the selection mode
//! - The region store and its active region
//! - The annotation panel
//! - Canvas actions and the reducer that applies them

mod canvas;
mod panel;
mod store;
mod types;

pub use canvas::*;
pub use panel::*;
pub use store::*;
pub use types::*;
