use super::curve::Curve;
use super::Drawing;
use kurbo::{Line, Point};

/// Maximum endpoint distance for two segments to count as connected.
pub const POINT_MATCH_DISTANCE: f64 = 0.005;

/// An ordered, directed traversal of connected segments.
///
/// Chains are derived from a drawing once and then only sampled; executors
/// work on their own deep copy.
#[derive(Debug, Clone)]
pub struct Chain {
    links: Vec<Curve>,
    pub endless: bool,
    pub path_length: f64,
}

impl Chain {
    pub fn new(links: Vec<Curve>, endless: bool) -> Self {
        let path_length = links.iter().map(Curve::length).sum();
        Self {
            links,
            endless,
            path_length,
        }
    }

    /// Closed chain of line segments through `points` (a trailing duplicate
    /// of the first point is dropped).
    pub fn from_loop(points: &[Point]) -> Self {
        let mut points = points.to_vec();
        if points.len() > 1 && (points[0] - points[points.len() - 1]).hypot() < 1e-9 {
            points.pop();
        }
        let links = points
            .iter()
            .zip(points.iter().cycle().skip(1))
            .take(points.len())
            .map(|(a, b)| Curve::Line(Line::new(*a, *b)))
            .collect();
        Self::new(links, true)
    }

    pub fn links(&self) -> &[Curve] {
        &self.links
    }

    fn divisions(&self, tolerance: f64) -> usize {
        // Floor, clamped so a chain shorter than the tolerance still yields
        // one division instead of dividing by zero.
        ((self.path_length / tolerance).floor() as usize).max(1)
    }

    /// Point at `distance` along the whole chain.
    pub fn point_at(&self, distance: f64) -> Point {
        let mut remaining = distance.max(0.0);
        for link in &self.links {
            let len = link.length();
            if remaining <= len {
                return link.point_along(remaining);
            }
            remaining -= len;
        }
        self.links
            .last()
            .map(|link| link.end())
            .unwrap_or(Point::ZERO)
    }

    /// Uniform arc-length samples at roughly `tolerance` spacing.
    ///
    /// Endless chains get an explicit copy of the first point appended so
    /// the emitter produces a return-to-start move.
    pub fn to_points(&self, tolerance: f64) -> Vec<Point> {
        let divisions = self.divisions(tolerance);
        let spacing = self.path_length / divisions as f64;
        let mut points: Vec<Point> = (0..divisions)
            .map(|i| self.point_at(i as f64 * spacing))
            .collect();
        if self.endless {
            points.push(points[0]);
        } else {
            points.push(self.point_at(self.path_length));
        }
        points
    }

    /// Key vertices: segment endpoints, with curved segments subdivided at
    /// the sampling spacing. Minimizes segment count for straight geometry.
    pub fn to_key_points(&self, tolerance: f64) -> Vec<Point> {
        let divisions = self.divisions(tolerance);
        let spacing = self.path_length / divisions as f64;
        let mut points = Vec::new();
        for link in &self.links {
            match link {
                Curve::Line(_) => points.push(link.start()),
                _ => {
                    let len = link.length();
                    let steps = ((len / spacing).ceil() as usize).max(1);
                    for step in 0..steps {
                        points.push(link.point_along(len * step as f64 / steps as f64));
                    }
                }
            }
        }
        if self.endless {
            let first = points[0];
            points.push(first);
        } else if let Some(last) = self.links.last() {
            points.push(last.end());
        }
        points
    }
}

/// Discover connected chains per layer, in drawing insertion order.
///
/// Segments connect when their endpoints match within
/// [`POINT_MATCH_DISTANCE`]; a chain whose two free ends meet is endless.
pub fn find_chains(drawing: &Drawing) -> Vec<(String, Vec<Chain>)> {
    let mut layers: Vec<(String, Vec<&Curve>)> = Vec::new();
    for (layer, curve) in drawing.curves() {
        match layers.iter_mut().find(|(name, _)| name == layer) {
            Some((_, curves)) => curves.push(curve),
            None => layers.push((layer.clone(), vec![curve])),
        }
    }

    layers
        .into_iter()
        .map(|(layer, curves)| {
            let chains = link_chains(&curves);
            (layer, chains)
        })
        .collect()
}

fn matches(a: Point, b: Point) -> bool {
    (a - b).hypot() <= POINT_MATCH_DISTANCE
}

fn link_chains(curves: &[&Curve]) -> Vec<Chain> {
    let mut used = vec![false; curves.len()];
    let mut chains = Vec::new();

    for seed in 0..curves.len() {
        if used[seed] {
            continue;
        }
        used[seed] = true;

        if curves[seed].is_closed() {
            chains.push(Chain::new(vec![curves[seed].clone()], true));
            continue;
        }

        let mut links = vec![curves[seed].clone()];

        // Grow at the tail, then at the head.
        loop {
            let tail = links.last().expect("chain has a seed").end();
            let Some(next) = take_matching(curves, &mut used, tail) else {
                break;
            };
            links.push(next);
        }
        loop {
            let head = links.first().expect("chain has a seed").start();
            let Some(prev) = take_matching(curves, &mut used, head) else {
                break;
            };
            links.insert(0, prev.reversed());
        }

        let head = links.first().expect("chain has a seed").start();
        let tail = links.last().expect("chain has a seed").end();
        let endless = links.len() > 1 && matches(head, tail);
        chains.push(Chain::new(links, endless));
    }

    chains
}

/// Claim the first unused open segment touching `at`, oriented to start there.
fn take_matching(curves: &[&Curve], used: &mut [bool], at: Point) -> Option<Curve> {
    for (index, curve) in curves.iter().enumerate() {
        if used[index] || curve.is_closed() {
            continue;
        }
        if matches(curve.start(), at) {
            used[index] = true;
            return Some((*curve).clone());
        }
        if matches(curve.end(), at) {
            used[index] = true;
            return Some(curve.reversed());
        }
    }
    None
}
