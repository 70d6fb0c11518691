use super::chain::Chain;
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A named collection of closed loops, as produced by geometry construction
/// or by the offset engine. Keys are stable `"{chain}_{loop}"` identifiers.
///
/// An empty region is the non-error signal that an offset consumed the
/// entire area.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Region {
    loops: BTreeMap<String, Vec<Point>>,
}

impl Region {
    pub fn new() -> Self {
        Self::default()
    }

    /// Region holding one loop under the key `"0_0"`.
    pub fn single(points: Vec<Point>) -> Self {
        let mut region = Self::new();
        region.insert_loop("0_0", points);
        region
    }

    pub fn insert_loop(&mut self, key: impl Into<String>, points: Vec<Point>) {
        self.loops.insert(key.into(), points);
    }

    pub fn is_empty(&self) -> bool {
        self.loops.is_empty()
    }

    pub fn len(&self) -> usize {
        self.loops.len()
    }

    pub fn loops(&self) -> impl Iterator<Item = (&String, &Vec<Point>)> {
        self.loops.iter()
    }

    /// Each loop as an endless chain, in key order.
    pub fn chains(&self) -> Vec<Chain> {
        self.loops
            .values()
            .map(|points| Chain::from_loop(points))
            .collect()
    }

    pub fn bounding_box(&self) -> Option<Rect> {
        let mut bbox: Option<Rect> = None;
        for points in self.loops.values() {
            for point in points {
                let r = Rect::from_points(*point, *point);
                bbox = Some(match bbox {
                    Some(acc) => acc.union(r),
                    None => r,
                });
            }
        }
        bbox
    }

    /// X coordinates where the horizontal line at `y` crosses the region
    /// boundary, sorted ascending. Even-odd pairing of the result yields the
    /// in-region spans; the half-open edge rule keeps shared vertices from
    /// being counted twice.
    pub fn scanline_crossings(&self, y: f64) -> Vec<f64> {
        let mut crossings = Vec::new();
        for points in self.loops.values() {
            if points.len() < 2 {
                continue;
            }
            let closed = (points[0] - points[points.len() - 1]).hypot() < 1e-9;
            let count = if closed {
                points.len() - 1
            } else {
                points.len()
            };
            for i in 0..count {
                let p0 = points[i];
                let p1 = points[(i + 1) % count];
                if p0.y == p1.y {
                    continue;
                }
                let y_min = p0.y.min(p1.y);
                let y_max = p0.y.max(p1.y);
                if y >= y_min && y < y_max {
                    let t = (y - p0.y) / (p1.y - p0.y);
                    crossings.push(p0.x + t * (p1.x - p0.x));
                }
            }
        }
        crossings.sort_by(|a, b| a.partial_cmp(b).expect("finite coordinates"));
        crossings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(x0: f64, y0: f64, size: f64) -> Vec<Point> {
        vec![
            Point::new(x0, y0),
            Point::new(x0 + size, y0),
            Point::new(x0 + size, y0 + size),
            Point::new(x0, y0 + size),
        ]
    }

    #[test]
    fn bounding_box_spans_all_loops() {
        let mut region = Region::new();
        region.insert_loop("0_0", square(0.0, 0.0, 10.0));
        region.insert_loop("0_1", square(20.0, 5.0, 10.0));
        let bbox = region.bounding_box().expect("non-empty");
        assert_eq!(bbox.min_x(), 0.0);
        assert_eq!(bbox.max_x(), 30.0);
        assert_eq!(bbox.max_y(), 15.0);
    }

    #[test]
    fn crossings_pair_up_inside_a_square() {
        let region = Region::single(square(0.0, 0.0, 10.0));
        let crossings = region.scanline_crossings(5.0);
        assert_eq!(crossings, vec![0.0, 10.0]);
        assert!(region.scanline_crossings(15.0).is_empty());
    }

    #[test]
    fn hole_splits_the_span() {
        let mut region = Region::new();
        region.insert_loop("0_0", square(0.0, 0.0, 30.0));
        region.insert_loop("0_1", square(10.0, 10.0, 10.0));
        let crossings = region.scanline_crossings(15.0);
        assert_eq!(crossings, vec![0.0, 10.0, 20.0, 30.0]);
    }

    #[test]
    fn empty_region_signals_no_material() {
        let region = Region::new();
        assert!(region.is_empty());
        assert!(region.bounding_box().is_none());
    }
}
