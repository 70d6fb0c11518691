pub mod chain;
pub mod curve;
pub mod offset;
pub mod region;

pub use chain::{find_chains, Chain, POINT_MATCH_DISTANCE};
pub use curve::Curve;
pub use offset::{offset_chain, offset_region};
pub use region::Region;

use kurbo::{Arc, Circle, Line, Point, Vec2};
use serde::{Deserialize, Serialize};

/// Flat list of layered segments, the input model for chain discovery.
///
/// Insertion order is preserved; layers come into existence the first time a
/// segment is added under their name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Drawing {
    curves: Vec<(String, Curve)>,
}

impl Drawing {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, layer: impl Into<String>, curve: Curve) {
        self.curves.push((layer.into(), curve));
    }

    pub fn add_line(&mut self, layer: impl Into<String>, p0: (f64, f64), p1: (f64, f64)) {
        self.add(
            layer,
            Curve::Line(Line::new(Point::new(p0.0, p0.1), Point::new(p1.0, p1.1))),
        );
    }

    /// Circular arc around `center`, angles in radians.
    pub fn add_arc(
        &mut self,
        layer: impl Into<String>,
        center: (f64, f64),
        radius: f64,
        start_angle: f64,
        sweep_angle: f64,
    ) {
        self.add(
            layer,
            Curve::Arc(Arc {
                center: Point::new(center.0, center.1),
                radii: Vec2::new(radius, radius),
                start_angle,
                sweep_angle,
                x_rotation: 0.0,
            }),
        );
    }

    pub fn add_circle(&mut self, layer: impl Into<String>, center: (f64, f64), radius: f64) {
        self.add(
            layer,
            Curve::Circle(Circle::new(Point::new(center.0, center.1), radius)),
        );
    }

    /// Axis-aligned rectangle as four line segments, counter-clockwise from
    /// `origin`.
    pub fn add_rect(&mut self, layer: impl Into<String>, origin: (f64, f64), width: f64, height: f64) {
        let layer = layer.into();
        let (x, y) = origin;
        self.add_line(layer.clone(), (x, y), (x + width, y));
        self.add_line(layer.clone(), (x + width, y), (x + width, y + height));
        self.add_line(layer.clone(), (x + width, y + height), (x, y + height));
        self.add_line(layer, (x, y + height), (x, y));
    }

    pub fn curves(&self) -> impl Iterator<Item = &(String, Curve)> {
        self.curves.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }
}
