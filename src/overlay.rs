//! Display data derived from the region store.

use crate::state::{Geometry, Point, Rect, RegionKind, RegionStore};

/// How one region is drawn over the image.
#[derive(Debug, Clone, PartialEq)]
pub struct Overlay {
    pub id: String,
    pub kind: RegionKind,
    /// Screen box: the rectangle itself or the polygon's bounds.
    pub frame: Rect,
    pub active: bool,
    /// Closed outline relative to the frame origin; empty for rectangles.
    pub path_commands: String,
}

/// One overlay per region, in store order.
pub fn overlays(store: &RegionStore) -> Vec<Overlay> {
    store
        .iter()
        .map(|region| {
            let frame = region.geometry.frame();
            let path_commands = match &region.geometry {
                Geometry::Rectangle(_) => String::new(),
                Geometry::Polygon(polygon) => {
                    let local: Vec<Point> = polygon
                        .points()
                        .iter()
                        .map(|p| Point::new(p.x - frame.x, p.y - frame.y))
                        .collect();
                    path_commands(&local)
                }
            };

            Overlay {
                id: region.id.clone(),
                kind: region.kind(),
                frame,
                active: store.is_active(&region.id),
                path_commands,
            }
        })
        .collect()
}

/// Generate SVG path commands for a closed outline through `vertices`.
pub fn path_commands(vertices: &[Point]) -> String {
    let Some(first) = vertices.first() else {
        return String::new();
    };

    let mut commands = format!("M {} {}", first.x, first.y);
    for vertex in vertices.iter().skip(1) {
        commands.push_str(&format!(" L {} {}", vertex.x, vertex.y));
    }
    commands.push_str(" Z");
    commands
}
