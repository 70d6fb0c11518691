use millcut::{
    find_chains, generate_pocket_toolpath, Chain, Drawing, MotionEvent, Operation,
    OperationKind, Program, Tool,
};

fn square_chain(size: f64) -> Chain {
    let mut drawing = Drawing::new();
    drawing.add_rect("cuts", (0.0, 0.0), size, size);
    find_chains(&drawing).remove(0).1.remove(0)
}

fn pocket_op(depth: f64, depth_per_pass: Option<f64>) -> Operation {
    Operation {
        id: None,
        tool: Tool::new(10.0),
        depth,
        depth_per_pass,
        z_safe: 5.0,
        feed_rate: 600.0,
        plunge_rate: None,
        tolerance: 1.0,
        layers: None,
        kind: OperationKind::Pocket {
            stock_to_leave: 0.0,
        },
    }
}

fn cut_xy(program: &Program) -> Vec<(f64, f64)> {
    program
        .events()
        .iter()
        .filter_map(|e| match e {
            MotionEvent::Cut {
                x: Some(x),
                y: Some(y),
                ..
            } => Some((*x, *y)),
            _ => None,
        })
        .collect()
}

#[test]
fn pocket_fills_the_square_with_rings() {
    let chain = square_chain(100.0);
    let op = pocket_op(5.0, None);
    let mut program = Program::new();
    let region = generate_pocket_toolpath(&chain, &op, 0.0, &mut program).unwrap();

    // Rings every tool radius until the offset collapses; a 100 square with
    // a 5 radius tool fits many.
    assert!(region.len() >= 8, "expected several rings, got {}", region.len());

    // The outermost ring stays one radius inside the boundary.
    let bbox = region.bounding_box().expect("rings exist");
    assert!((bbox.min_x() - 5.0).abs() < 0.05);
    assert!((bbox.max_x() - 95.0).abs() < 0.05);

    // Single plunge, everything at full depth.
    let plunges: Vec<f64> = program
        .events()
        .iter()
        .filter_map(|e| match e {
            MotionEvent::Cut {
                z: Some(z),
                x: None,
                y: None,
            } => Some(*z),
            _ => None,
        })
        .collect();
    assert_eq!(plunges, vec![-5.0]);
}

#[test]
fn stitched_path_never_lifts_inside_a_pass() {
    let chain = square_chain(100.0);
    let op = pocket_op(5.0, None);
    let mut program = Program::new();
    generate_pocket_toolpath(&chain, &op, 0.0, &mut program).unwrap();

    // Consecutive cutting moves stay close: ring sampling spacing along a
    // ring, at most a short diagonal hop between adjacent rings.
    let points = cut_xy(&program);
    assert!(points.len() > 100);
    let max_step = points
        .windows(2)
        .map(|w| ((w[1].0 - w[0].0).powi(2) + (w[1].1 - w[0].1).powi(2)).sqrt())
        .fold(0.0_f64, f64::max);
    assert!(max_step < 10.0, "tool jumped {max_step} inside a pass");
}

#[test]
fn region_too_small_for_a_ring_is_a_silent_no_op() {
    let chain = square_chain(8.0);
    let op = pocket_op(5.0, None);
    let mut program = Program::new();
    let region = generate_pocket_toolpath(&chain, &op, 0.0, &mut program).unwrap();

    assert!(region.is_empty());
    assert!(program.is_empty());
}

#[test]
fn stock_to_leave_pulls_rings_further_inside() {
    let chain = square_chain(100.0);
    let op = pocket_op(5.0, None);
    let mut program = Program::new();
    let region = generate_pocket_toolpath(&chain, &op, 2.0, &mut program).unwrap();

    let bbox = region.bounding_box().expect("rings exist");
    assert!((bbox.min_x() - 7.0).abs() < 0.05);
    assert!((bbox.max_x() - 93.0).abs() < 0.05);
}

#[test]
fn each_pass_replays_the_whole_stitched_path() {
    let chain = square_chain(60.0);
    let op = pocket_op(6.0, Some(2.0));
    let mut program = Program::new();
    generate_pocket_toolpath(&chain, &op, 0.0, &mut program).unwrap();

    let plunges: Vec<f64> = program
        .events()
        .iter()
        .filter_map(|e| match e {
            MotionEvent::Cut {
                z: Some(z),
                x: None,
                y: None,
            } => Some(*z),
            _ => None,
        })
        .collect();
    assert_eq!(plunges, vec![-2.0, -4.0, -6.0]);

    // Same number of cutting moves in every pass.
    let total = cut_xy(&program).len();
    assert_eq!(total % 3, 0);
}
