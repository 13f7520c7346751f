//! Collaborators injected into the canvas: where new region geometry comes
//! from, and who answers questions.
//!
//! The demo implementations return fixed values. A drawing tool or an
//! inference backend plugs in by implementing the same traits.

use crate::state::{Geometry, Point, Polygon, Rect, Region, SelectionMode};

/// Answer returned by [`CannedAnswerer`] for every non-empty question.
pub const CANNED_ANSWER: &str = "This appears to be a mountain landscape with a lake in the foreground. The mountains have snow-capped peaks and there are some trees visible around the lake's edge. The image shows a beautiful natural scene, likely taken in a national park or wilderness area.";

/// Supplies the geometry of the next region for a selection mode.
pub trait GeometryProvider {
    fn geometry_for(&self, mode: SelectionMode) -> Geometry;
}

/// Produces an answer for a question, optionally about the active region.
pub trait QuestionAnswerer {
    fn answer(&self, question: &str, region: Option<&Region>) -> String;
}

/// Fixed demo shapes: a 200x150 box, or a four-point diamond.
#[derive(Debug, Clone, Copy, Default)]
pub struct DemoGeometry;

impl DemoGeometry {
    pub fn rectangle() -> Rect {
        Rect::new(100.0, 100.0, 200.0, 150.0)
    }

    pub fn polygon() -> Polygon {
        Polygon::new(vec![
            Point::new(400.0, 150.0),
            Point::new(500.0, 200.0),
            Point::new(450.0, 300.0),
            Point::new(350.0, 250.0),
        ])
    }
}

impl GeometryProvider for DemoGeometry {
    fn geometry_for(&self, mode: SelectionMode) -> Geometry {
        match mode {
            SelectionMode::Rectangle => Geometry::Rectangle(Self::rectangle()),
            SelectionMode::Polygon => Geometry::Polygon(Self::polygon()),
        }
    }
}

/// Stub answerer. Ignores the question and the region.
#[derive(Debug, Clone, Copy, Default)]
pub struct CannedAnswerer;

impl QuestionAnswerer for CannedAnswerer {
    fn answer(&self, _question: &str, _region: Option<&Region>) -> String {
        CANNED_ANSWER.to_string()
    }
}

impl<F> GeometryProvider for F
where
    F: Fn(SelectionMode) -> Geometry,
{
    fn geometry_for(&self, mode: SelectionMode) -> Geometry {
        self(mode)
    }
}
