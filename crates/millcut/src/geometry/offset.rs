use super::chain::Chain;
use super::region::Region;
use clipper2::{EndType, JoinType, One, Path, Paths, Point as ClipperPoint};
use kurbo::Point;

type IntPoint = ClipperPoint<One>;
type IntPath = Path<One>;
type IntPaths = Paths<One>;

/// Quantization grid: drawing units are scaled to thousandths before the
/// boolean/offset kernel runs, sidestepping floating-point robustness
/// failures inside it.
const QUANT_SCALE: f64 = 1000.0;
const MITER_LIMIT: f64 = 2.0;

/// Signed planar offset of a chain. Negative contracts, positive expands.
///
/// The chain is rasterized at `floor(path_length / tolerance)` divisions
/// (clamped to one), closed if endless, offset on the integer grid and
/// rescaled. Output loops are keyed `"0_{loop}"`. An empty region means the
/// offset consumed the entire area; that is a valid result, not an error.
pub fn offset_chain(chain: &Chain, delta: f64, join: JoinType, tolerance: f64) -> Region {
    let samples = chain.to_points(tolerance);
    let mut region = Region::new();
    for (index, points) in inflate_samples(&samples, chain.endless, delta, join)
        .into_iter()
        .enumerate()
    {
        region.insert_loop(format!("0_{index}"), points);
    }
    region
}

/// Signed planar offset of every loop in a region, loops offset
/// independently. Output keyed `"{chain}_{loop}"`.
pub fn offset_region(region: &Region, delta: f64, join: JoinType, tolerance: f64) -> Region {
    let mut out = Region::new();
    for (chain_index, chain) in region.chains().iter().enumerate() {
        let samples = chain.to_points(tolerance);
        for (loop_index, points) in inflate_samples(&samples, true, delta, join)
            .into_iter()
            .enumerate()
        {
            out.insert_loop(format!("{chain_index}_{loop_index}"), points);
        }
    }
    out
}

fn inflate_samples(samples: &[Point], closed: bool, delta: f64, join: JoinType) -> Vec<Vec<Point>> {
    let mut samples = samples.to_vec();
    // The kernel expects closed input without the explicit closing point.
    if closed && samples.len() > 1 && (samples[0] - samples[samples.len() - 1]).hypot() < 1e-9 {
        samples.pop();
    }
    if samples.len() < 2 {
        return Vec::new();
    }

    let path = IntPath::new(
        samples
            .iter()
            .map(|p| {
                IntPoint::from_scaled(
                    (p.x * QUANT_SCALE).round() as i64,
                    (p.y * QUANT_SCALE).round() as i64,
                )
            })
            .collect(),
    );
    let end_type = if closed {
        EndType::Polygon
    } else {
        EndType::Butt
    };

    let inflated = IntPaths::new(vec![path]).inflate(delta * QUANT_SCALE, join, end_type, MITER_LIMIT);

    inflated
        .iter()
        .map(|path| {
            path.iter()
                .map(|pt| {
                    Point::new(
                        pt.x_scaled() as f64 / QUANT_SCALE,
                        pt.y_scaled() as f64 / QUANT_SCALE,
                    )
                })
                .collect::<Vec<Point>>()
        })
        .filter(|points| points.len() >= 3)
        .collect()
}
