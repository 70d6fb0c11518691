use crate::types::Tabs;
use kurbo::Point;

/// One tab interval of a contour: the points ridden at the tab plane,
/// followed by the points cut at full pass depth.
#[derive(Debug, Clone)]
pub struct TabSection {
    pub tab: Vec<Point>,
    pub cut: Vec<Point>,
}

/// Split a sampled contour into `tabs.amount` sections, each opening with a
/// run of tab points spanning roughly `tabs.width` of travel.
///
/// The split works in index space: samples are spaced at `tolerance`, so a
/// tab covers `ceil(width / tolerance)` consecutive samples. The first
/// section takes one extra sample so the plunge back down does not land on
/// the exact seam of the closing point. Concatenating every section in order
/// reproduces the input exactly.
pub fn partition_tabs(points: &[Point], tabs: &Tabs, tolerance: f64) -> Vec<TabSection> {
    let total = points.len();
    let interval = total / tabs.amount;
    let tab_duration = (tabs.width / tolerance).ceil() as usize;

    (0..tabs.amount)
        .map(|index| {
            let start = interval * index;
            let cut_end = if index + 1 == tabs.amount {
                total
            } else {
                interval * (index + 1)
            };
            let mut tab_end = start + tab_duration;
            if index == 0 {
                tab_end += 1;
            }
            let tab_end = tab_end.min(cut_end);
            TabSection {
                tab: points[start..tab_end].to_vec(),
                cut: points[tab_end..cut_end].to_vec(),
            }
        })
        .collect()
}
