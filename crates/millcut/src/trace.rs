use crate::geometry::{Chain, Region};
use crate::motion::{Axes, Program};
use crate::passes::passes;
use crate::types::Operation;
use anyhow::Result;
use tracing::debug;

/// Run the tool center directly along a chain, without any radius
/// compensation. Engraving and decorative scoring.
pub fn generate_trace_toolpath(
    chain: &Chain,
    op: &Operation,
    program: &mut Program,
) -> Result<Region> {
    op.validate()?;

    let points = chain.to_key_points(op.tolerance);
    debug!(points = points.len(), "tracing chain");

    program.rapid(Axes::z(op.z_safe));
    for z in passes(op.depth, op.pass_depth()) {
        program.rapid(Axes::xy(points[0].x, points[0].y));
        program.feed(op.plunge_feed());
        program.cut(Axes::z(-z));
        program.feed(op.feed_rate);
        for point in &points[1..] {
            program.cut(Axes::xy(point.x, point.y));
        }
        program.rapid(Axes::z(op.z_safe));
    }

    Ok(Region::single(points))
}
