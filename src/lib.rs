//! Region annotation canvas: an in-memory region store, a selection mode
//! toggle and a question panel, driven through explicit actions.
//!
//! The slint shell in `main.rs` is a thin layer over this library.

pub mod config;
pub mod error;
pub mod overlay;
pub mod providers;
pub mod state;

pub use error::CanvasError;
pub use providers::{CannedAnswerer, DemoGeometry, GeometryProvider, QuestionAnswerer};
pub use state::{
    Action, AnnotationPanel, Canvas, CanvasState, Geometry, Point, Polygon, Rect, Region,
    RegionKind, RegionStore, SelectionMode, Services, reduce,
};
