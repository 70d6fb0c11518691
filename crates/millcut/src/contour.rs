use crate::geometry::{offset_chain, Chain, Region};
use crate::motion::{Axes, Program};
use crate::passes::passes;
use crate::tabs::{partition_tabs, TabSection};
use crate::types::{Operation, Tabs};
use anyhow::Result;
use clipper2::JoinType;
use kurbo::Point;
use tracing::debug;

/// Cut along a chain with the tool offset by one radius, outside or inside
/// the profile. Optional tabs keep the part attached on the final passes.
///
/// If the inward offset consumes the whole profile (tool too large), no
/// motion is emitted and the returned region is empty.
pub fn generate_contour_toolpath(
    chain: &Chain,
    op: &Operation,
    outside: bool,
    tabs: Option<&Tabs>,
    program: &mut Program,
) -> Result<Region> {
    op.validate()?;

    let delta = if outside {
        op.tool.radius()
    } else {
        -op.tool.radius()
    };
    let offset = offset_chain(chain, delta, JoinType::Round, op.tolerance);
    if offset.is_empty() {
        debug!("offset consumed the profile, skipping contour");
        return Ok(offset);
    }

    program.rapid(Axes::z(op.z_safe));
    for contour in offset.chains() {
        match tabs {
            // Tabs need the dense uniform sampling so a tab's width maps to
            // a run of equally spaced points.
            Some(tabs) => {
                let points = contour.to_points(op.tolerance);
                cut_with_tabs(&points, op, tabs, program);
            }
            None => {
                let points = contour.to_key_points(op.tolerance);
                cut_plain(&points, op, program);
            }
        }
    }

    Ok(offset)
}

fn cut_plain(points: &[Point], op: &Operation, program: &mut Program) {
    for z in passes(op.depth, op.pass_depth()) {
        cut_pass_plain(points, op, z, program);
    }
}

fn cut_with_tabs(points: &[Point], op: &Operation, tabs: &Tabs, program: &mut Program) {
    // Passes at or above this depth clear the tab plane entirely and cut
    // normally. A tab exactly as tall as the remaining stock means no tab.
    let tab_start = op.depth - tabs.height;
    let tab_plane = -tab_start;
    let sections = partition_tabs(points, tabs, op.tolerance);

    for z in passes(op.depth, op.pass_depth()) {
        if z <= tab_start {
            cut_pass_plain(points, op, z, program);
            continue;
        }

        program.rapid(Axes::xy(points[0].x, points[0].y));
        for section in &sections {
            ride_tab(section, op, tab_plane, program);
            if !section.cut.is_empty() {
                program.feed(op.plunge_feed());
                program.cut(Axes::z(-z));
                program.feed(op.feed_rate);
                for point in &section.cut {
                    program.cut(Axes::xy(point.x, point.y));
                }
            }
        }
        program.rapid(Axes::z(op.z_safe));
    }
}

fn cut_pass_plain(points: &[Point], op: &Operation, z: f64, program: &mut Program) {
    program.rapid(Axes::xy(points[0].x, points[0].y));
    program.feed(op.plunge_feed());
    program.cut(Axes::z(-z));
    program.feed(op.feed_rate);
    for point in &points[1..] {
        program.cut(Axes::xy(point.x, point.y));
    }
    program.rapid(Axes::z(op.z_safe));
}

/// Retract (or plunge) to the tab plane and feed across the tab's points.
fn ride_tab(section: &TabSection, op: &Operation, tab_plane: f64, program: &mut Program) {
    if section.tab.is_empty() {
        return;
    }
    if program.last_z() != Some(tab_plane) {
        program.feed(op.plunge_feed());
        program.cut(Axes::z(tab_plane));
    }
    program.feed(op.feed_rate);
    for point in &section.tab {
        program.cut(Axes::xy(point.x, point.y));
    }
}
