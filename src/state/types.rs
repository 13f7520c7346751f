//! Geometry and region types shared across the canvas.

use crate::error::CanvasError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A 2D point in image coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// An axis-aligned box in image coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Smallest box enclosing all `points`, or `None` when there are none.
    ///
    /// Points must be finite: NaN coordinates are skipped by the min/max fold.
    pub fn enclosing(points: &[Point]) -> Option<Self> {
        if points.is_empty() {
            return None;
        }

        let min_x = points.iter().map(|p| p.x).fold(f32::INFINITY, f32::min);
        let max_x = points.iter().map(|p| p.x).fold(f32::NEG_INFINITY, f32::max);
        let min_y = points.iter().map(|p| p.y).fold(f32::INFINITY, f32::min);
        let max_y = points.iter().map(|p| p.y).fold(f32::NEG_INFINITY, f32::max);

        Some(Self::new(min_x, min_y, max_x - min_x, max_y - min_y))
    }

    /// Edges are inclusive.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }
}

/// Closed polygon with its bounding box computed once at construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Polygon {
    points: Vec<Point>,
    bounds: Rect,
}

impl Polygon {
    /// Non-finite points are dropped so the bounds contain every kept point.
    pub fn new(points: Vec<Point>) -> Self {
        let total = points.len();
        let points: Vec<Point> = points.into_iter().filter(Point::is_finite).collect();
        if points.len() != total {
            log::warn!("Dropped {} non-finite polygon point(s)", total - points.len());
        }

        let bounds = Rect::enclosing(&points).unwrap_or_default();
        Self { points, bounds }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum Geometry {
    Rectangle(Rect),
    Polygon(Polygon),
}

impl Geometry {
    pub fn kind(&self) -> RegionKind {
        match self {
            Geometry::Rectangle(_) => RegionKind::Rectangle,
            Geometry::Polygon(_) => RegionKind::Polygon,
        }
    }

    /// The box a region occupies on screen: the rectangle itself, or the
    /// polygon's bounds.
    pub fn frame(&self) -> Rect {
        match self {
            Geometry::Rectangle(rect) => *rect,
            Geometry::Polygon(polygon) => polygon.bounds(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegionKind {
    Rectangle,
    Polygon,
}

impl RegionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RegionKind::Rectangle => "rectangle",
            RegionKind::Polygon => "polygon",
        }
    }
}

impl fmt::Display for RegionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shape kind produced by the next create action.
///
/// Deserializes through [`FromStr`], so config files accept the same
/// spellings as the UI.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum SelectionMode {
    #[default]
    Rectangle,
    Polygon,
}

impl SelectionMode {
    pub fn region_kind(&self) -> RegionKind {
        match self {
            SelectionMode::Rectangle => RegionKind::Rectangle,
            SelectionMode::Polygon => RegionKind::Polygon,
        }
    }

    pub fn as_str(&self) -> &'static str {
        self.region_kind().as_str()
    }
}

impl FromStr for SelectionMode {
    type Err = CanvasError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rectangle" => Ok(SelectionMode::Rectangle),
            "polygon" | "lasso" => Ok(SelectionMode::Polygon),
            _ => Err(CanvasError::UnknownSelectionMode(s.to_string())),
        }
    }
}

impl TryFrom<String> for SelectionMode {
    type Error = CanvasError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for SelectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A shape overlay on the image. The kind is derived from the geometry so the
/// two can never disagree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Region {
    pub id: String,
    #[serde(flatten)]
    pub geometry: Geometry,
}

impl Region {
    pub fn new(id: impl Into<String>, geometry: Geometry) -> Self {
        Self {
            id: id.into(),
            geometry,
        }
    }

    pub fn kind(&self) -> RegionKind {
        self.geometry.kind()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polygon_bounds_enclose_points() {
        let polygon = Polygon::new(vec![
            Point::new(400.0, 150.0),
            Point::new(500.0, 200.0),
            Point::new(450.0, 300.0),
            Point::new(350.0, 250.0),
        ]);

        assert_eq!(polygon.bounds(), Rect::new(350.0, 150.0, 150.0, 150.0));
        assert!(polygon.points().iter().all(|p| polygon.bounds().contains(*p)));
    }

    #[test]
    fn non_finite_points_are_dropped() {
        let polygon = Polygon::new(vec![
            Point::new(f32::NAN, 1.0),
            Point::new(2.0, 3.0),
            Point::new(6.0, f32::INFINITY),
            Point::new(4.0, 7.0),
        ]);

        assert_eq!(polygon.points(), [Point::new(2.0, 3.0), Point::new(4.0, 7.0)]);
        assert_eq!(polygon.bounds(), Rect::new(2.0, 3.0, 2.0, 4.0));
        assert!(polygon.points().iter().all(|p| polygon.bounds().contains(*p)));
    }

    #[test]
    fn selection_mode_deserializes_like_from_str() {
        #[derive(Deserialize)]
        struct Wrapper {
            mode: SelectionMode,
        }

        for (text, expected) in [
            ("rectangle", SelectionMode::Rectangle),
            ("Polygon", SelectionMode::Polygon),
            ("LASSO", SelectionMode::Polygon),
        ] {
            let parsed: Wrapper = serde_json::from_str(&format!("{{\"mode\": \"{text}\"}}")).unwrap();
            assert_eq!(parsed.mode, expected);
        }
        assert!(serde_json::from_str::<Wrapper>(r#"{"mode": "circle"}"#).is_err());
        assert_eq!(serde_json::to_string(&SelectionMode::Polygon).unwrap(), "\"polygon\"");
    }

    #[test]
    fn empty_polygon_has_zero_bounds() {
        let polygon = Polygon::new(Vec::new());
        assert_eq!(polygon.bounds(), Rect::default());
    }

    #[test]
    fn selection_mode_parses_ui_labels() {
        assert_eq!("rectangle".parse::<SelectionMode>().unwrap(), SelectionMode::Rectangle);
        assert_eq!("Lasso".parse::<SelectionMode>().unwrap(), SelectionMode::Polygon);
        assert_eq!(" polygon ".parse::<SelectionMode>().unwrap(), SelectionMode::Polygon);
        assert!(matches!(
            "circle".parse::<SelectionMode>(),
            Err(CanvasError::UnknownSelectionMode(s)) if s == "circle"
        ));
    }

    #[test]
    fn region_serializes_with_type_and_data() {
        let region = Region::new(
            "region_1",
            Geometry::Rectangle(Rect::new(100.0, 100.0, 200.0, 150.0)),
        );
        let json = serde_json::to_value(&region).unwrap();

        assert_eq!(json["id"], "region_1");
        assert_eq!(json["type"], "rectangle");
        assert_eq!(json["data"]["width"], 200.0);
    }
}
