/// Ordered target depths for a multi-pass cut.
///
/// `ceil(depth / depth_per_pass)` passes, each stepping down by
/// `depth_per_pass` and the last clamped to land on `depth` exactly.
/// Every executor shares this schedule.
pub fn passes(depth: f64, depth_per_pass: f64) -> Vec<f64> {
    debug_assert!(depth > 0.0 && depth_per_pass > 0.0);
    let count = (depth / depth_per_pass).ceil() as usize;
    (1..=count)
        .map(|pass| (pass as f64 * depth_per_pass).min(depth))
        .collect()
}
