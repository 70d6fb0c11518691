use crate::geometry::{offset_chain, Chain, Region};
use crate::motion::{Axes, Program};
use crate::passes::passes;
use crate::types::Operation;
use anyhow::Result;
use clipper2::JoinType;
use kurbo::Point;
use tracing::debug;

/// Clear the interior of a closed chain with concentric rings, stitched into
/// one continuous path so the tool never lifts inside a pass.
///
/// Ring k sits `tool_radius * (k + 1) + stock_to_leave` inside the boundary;
/// rings are generated until the inward offset collapses. A region too small
/// for even the first ring produces no motion and an empty region.
pub fn generate_pocket_toolpath(
    chain: &Chain,
    op: &Operation,
    stock_to_leave: f64,
    program: &mut Program,
) -> Result<Region> {
    op.validate()?;

    let rings = collect_rings(chain, op, stock_to_leave);
    if rings.is_empty() {
        debug!("no rings fit inside the profile, skipping pocket");
        return Ok(Region::new());
    }
    debug!(rings = rings.len(), "stitching pocket rings");

    let mut region = Region::new();
    let mut ring_paths: Vec<Vec<Point>> = Vec::new();
    for (ring_index, loops) in rings.iter().enumerate() {
        for (loop_index, points) in loops.iter().enumerate() {
            region.insert_loop(format!("{ring_index}_{loop_index}"), points.clone());
            ring_paths.push(points.clone());
        }
    }

    let path = stitch_rings(&ring_paths);

    program.rapid(Axes::z(op.z_safe));
    for z in passes(op.depth, op.pass_depth()) {
        program.rapid(Axes::xy(path[0].x, path[0].y));
        program.feed(op.plunge_feed());
        program.cut(Axes::z(-z));
        program.feed(op.feed_rate);
        for point in &path[1..] {
            program.cut(Axes::xy(point.x, point.y));
        }
        program.rapid(Axes::z(op.z_safe));
    }

    Ok(region)
}

/// Concentric inward rings, outermost first. Each ring is the loops of one
/// offset pass, sampled at the operation tolerance.
fn collect_rings(chain: &Chain, op: &Operation, stock_to_leave: f64) -> Vec<Vec<Vec<Point>>> {
    let mut rings = Vec::new();
    for k in 0.. {
        let inset = op.tool.radius() * (k + 1) as f64 + stock_to_leave;
        let offset = offset_chain(chain, -inset, JoinType::Round, op.tolerance);
        if offset.is_empty() {
            break;
        }
        let loops: Vec<Vec<Point>> = offset
            .chains()
            .iter()
            .map(|c| c.to_points(op.tolerance))
            .collect();
        rings.push(loops);
    }
    rings
}

/// Join closed rings into one continuous path, innermost ring first.
///
/// Each subsequent (outer) ring is rotated to start at its point nearest the
/// current path end, walked fully around and closed, so consecutive rings
/// connect by a jump no longer than the ring spacing.
pub fn stitch_rings(rings: &[Vec<Point>]) -> Vec<Point> {
    let mut path: Vec<Point> = Vec::new();
    for ring in rings.iter().rev() {
        if path.is_empty() {
            path.extend_from_slice(ring);
            continue;
        }

        let mut open = ring.clone();
        if open.len() > 1 && (open[0] - open[open.len() - 1]).hypot() < 1e-9 {
            open.pop();
        }
        if open.is_empty() {
            continue;
        }

        let anchor = *path.last().expect("path is non-empty");
        let mut best = 0;
        let mut best_dist = f64::INFINITY;
        for (index, point) in open.iter().enumerate() {
            let dist = (*point - anchor).hypot2();
            if dist < best_dist {
                best_dist = dist;
                best = index;
            }
        }

        path.extend_from_slice(&open[best..]);
        path.extend_from_slice(&open[..best]);
        path.push(open[best]);
    }
    path
}
