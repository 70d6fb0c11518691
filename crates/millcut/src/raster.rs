use crate::geometry::{offset_chain, Chain, Region};
use crate::motion::{Axes, Program};
use crate::passes::passes;
use crate::types::Operation;
use anyhow::Result;
use clipper2::JoinType;
use kurbo::Point;
use tracing::debug;

/// One horizontal cut of a raster fill, directed origin to end.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanSegment {
    pub origin: Point,
    pub end: Point,
}

/// Clear the interior of a closed chain with horizontal back-and-forth
/// lines spaced one tool radius apart.
///
/// The boundary is first inset by `tool_radius + stock_to_leave`; if that
/// offset collapses, no motion is emitted and the returned region is empty.
pub fn generate_parallel_toolpath(
    chain: &Chain,
    op: &Operation,
    stock_to_leave: f64,
    program: &mut Program,
) -> Result<Region> {
    op.validate()?;

    let inset = offset_chain(
        chain,
        -(op.tool.radius() + stock_to_leave),
        JoinType::Round,
        op.tolerance,
    );
    if inset.is_empty() {
        debug!("offset consumed the profile, skipping parallel clear");
        return Ok(inset);
    }

    program.rapid(Axes::z(op.z_safe));
    for (_, points) in inset.loops() {
        let sub_region = Region::single(points.clone());
        let segments = raster_region(&sub_region, op.tool.radius());
        debug!(segments = segments.len(), "rastering loop");

        for z in passes(op.depth, op.pass_depth()) {
            for segment in &segments {
                program.rapid(Axes::xy(segment.origin.x, segment.origin.y));
                program.feed(op.plunge_feed());
                program.cut(Axes::z(-z));
                program.feed(op.feed_rate);
                program.cut(Axes::xy(segment.end.x, segment.end.y));
                program.rapid(Axes::z(op.z_safe));
            }
        }
    }

    Ok(inset)
}

/// Horizontal in-region spans at `margin` spacing, direction alternating
/// per scanline so consecutive cuts run boustrophedon.
///
/// `ceil(height / margin)` lines are placed starting one unit below the
/// region's minimum Y, stepping up by `margin` each time.
pub fn raster_region(region: &Region, margin: f64) -> Vec<ScanSegment> {
    let Some(bbox) = region.bounding_box() else {
        return Vec::new();
    };

    let count = (bbox.height() / margin).ceil() as usize;
    let base = bbox.min_y() - 1.0;
    let mut segments = Vec::new();

    for i in 0..count {
        let y = base + (i + 1) as f64 * margin;
        let crossings = region.scanline_crossings(y);
        for pair in crossings.chunks_exact(2) {
            // Even-indexed segments are reversed: the first cut runs right
            // to left, the next left to right, and so on.
            let (origin, end) = if segments.len() % 2 == 0 {
                (pair[1], pair[0])
            } else {
                (pair[0], pair[1])
            };
            segments.push(ScanSegment {
                origin: Point::new(origin, y),
                end: Point::new(end, y),
            });
        }
    }

    segments
}
