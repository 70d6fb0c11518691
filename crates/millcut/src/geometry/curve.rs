use kurbo::{Arc, Circle, Line, Point, Vec2};
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

/// One segment of a drawing. Arcs are circular (equal radii).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Curve {
    Line(Line),
    Arc(Arc),
    Circle(Circle),
}

impl Curve {
    pub fn length(&self) -> f64 {
        match self {
            Curve::Line(line) => (line.p1 - line.p0).hypot(),
            Curve::Arc(arc) => arc.sweep_angle.abs() * arc.radii.x,
            Curve::Circle(circle) => TAU * circle.radius,
        }
    }

    pub fn start(&self) -> Point {
        match self {
            Curve::Line(line) => line.p0,
            Curve::Arc(arc) => arc_point(arc, arc.start_angle),
            Curve::Circle(circle) => circle.center + Vec2::new(circle.radius, 0.0),
        }
    }

    pub fn end(&self) -> Point {
        match self {
            Curve::Line(line) => line.p1,
            Curve::Arc(arc) => arc_point(arc, arc.start_angle + arc.sweep_angle),
            Curve::Circle(_) => self.start(),
        }
    }

    /// Whether the segment closes on itself without neighbours.
    pub fn is_closed(&self) -> bool {
        matches!(self, Curve::Circle(_))
    }

    /// Point at `distance` along the segment, clamped to its length.
    pub fn point_along(&self, distance: f64) -> Point {
        let length = self.length();
        let t = if length > 0.0 {
            (distance / length).clamp(0.0, 1.0)
        } else {
            0.0
        };
        match self {
            Curve::Line(line) => line.p0 + (line.p1 - line.p0) * t,
            Curve::Arc(arc) => arc_point(arc, arc.start_angle + arc.sweep_angle * t),
            Curve::Circle(circle) => {
                let angle = TAU * t;
                circle.center + Vec2::new(angle.cos(), angle.sin()) * circle.radius
            }
        }
    }

    pub fn reversed(&self) -> Curve {
        match self {
            Curve::Line(line) => Curve::Line(Line::new(line.p1, line.p0)),
            Curve::Arc(arc) => Curve::Arc(Arc {
                center: arc.center,
                radii: arc.radii,
                start_angle: arc.start_angle + arc.sweep_angle,
                sweep_angle: -arc.sweep_angle,
                x_rotation: arc.x_rotation,
            }),
            Curve::Circle(circle) => Curve::Circle(*circle),
        }
    }
}

fn arc_point(arc: &Arc, angle: f64) -> Point {
    let local = Vec2::new(angle.cos() * arc.radii.x, angle.sin() * arc.radii.y);
    let (sin_rot, cos_rot) = arc.x_rotation.sin_cos();
    arc.center
        + Vec2::new(
            local.x * cos_rot - local.y * sin_rot,
            local.x * sin_rot + local.y * cos_rot,
        )
}
