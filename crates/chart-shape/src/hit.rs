// File: crates/chart-shape/src/hit.rs
// Summary: Hit testing of rendered shape nodes against a pointer position.

use crate::geometry::{Point, Rect};
use crate::scale::ScaleResolver;
use crate::series::Datum;
use crate::shape::GeometryEngine;
use crate::types::{BUBBLE_HIT_FACTOR, STEP_SENSITIVITY};

/// Marker element kinds treated as data points.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkerKind {
    Circle,
    Rect,
    Polygon,
    Ellipse,
    Use,
}

/// A rendered node as seen by hit testing.
#[derive(Clone, Debug, PartialEq)]
pub enum ShapeNode {
    /// Point marker centred at `center`; `radius` is its drawn radius (0 when unknown).
    Marker { kind: MarkerKind, center: Point, radius: f64 },
    /// A path element. Bars carry their bounding box.
    Path { bar: Option<Rect> },
    /// Anything else (text, groups).
    Other,
}

impl<'a, S: ScaleResolver + ?Sized> GeometryEngine<'a, S> {
    /// Whether `pointer` is within the node drawn for `d`. Hidden series never match.
    pub fn is_within_shape(&self, node: &ShapeNode, d: &Datum, pointer: Point) -> bool {
        if !self.data.is_visible(&d.id) {
            return false;
        }

        match node {
            ShapeNode::Marker { center, radius, .. } => {
                if self.classifier.is_step_type(d) {
                    let y = self.y_scale(&d.id, false).apply(d.number());
                    self.is_within_step(pointer, y)
                } else {
                    let r = if self.classifier.is_bubble_type(d) {
                        self.point_select_r(*radius) * BUBBLE_HIT_FACTOR
                    } else {
                        0.0
                    };
                    self.is_within_circle(*center, pointer, r)
                }
            }
            // lines and areas are hit-tested natively by the renderer
            ShapeNode::Path { bar: Some(bounds) } => self.is_within_bar(bounds, pointer),
            ShapeNode::Path { bar: None } => true,
            ShapeNode::Other => false,
        }
    }

    pub fn is_within_step(&self, pointer: Point, y: f64) -> bool {
        (y - pointer.y).abs() < STEP_SENSITIVITY
    }

    /// Distance test; a zero radius falls back to the configured point sensitivity.
    pub fn is_within_circle(&self, center: Point, pointer: Point, r: f64) -> bool {
        let r = if r > 0.0 { r } else { self.config.point_sensitivity };
        center.distance(pointer) < r
    }

    pub fn is_within_bar(&self, bounds: &Rect, pointer: Point) -> bool {
        bounds.contains_with_margin(pointer, self.config.bar_sensitivity)
    }

    /// Radius of a selected point: the configured select radius, else four times the drawn radius.
    pub fn point_select_r(&self, radius: f64) -> f64 {
        self.config.point_select_r.unwrap_or(radius * 4.0)
    }
}
