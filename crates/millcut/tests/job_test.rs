use millcut::{
    cnc, Drawing, MotionEvent, Operation, OperationKind, Program, Tool,
};

fn demo_drawing() -> Drawing {
    let mut drawing = Drawing::new();
    drawing.add_rect("cuts", (0.0, 0.0), 100.0, 100.0);
    drawing.add_line("engrave", (20.0, 20.0), (80.0, 20.0));
    drawing
}

fn op(id: &str, layers: Option<Vec<String>>, kind: OperationKind) -> Operation {
    Operation {
        id: Some(id.to_string()),
        tool: Tool::new(10.0),
        depth: 5.0,
        depth_per_pass: None,
        z_safe: 5.0,
        feed_rate: 600.0,
        plunge_rate: None,
        tolerance: 1.0,
        layers,
        kind,
    }
}

#[test]
fn region_keys_carry_operation_ordinal_and_id() {
    let drawing = demo_drawing();
    let operations = vec![
        op("first", None, OperationKind::Trace),
        op(
            "second",
            Some(vec!["cuts".to_string()]),
            OperationKind::Contour {
                outside: true,
                tabs: None,
            },
        ),
    ];
    let mut program = Program::new();
    let regions = cnc(&drawing, &operations, &mut program).unwrap();

    let mut keys: Vec<&String> = regions.keys().collect();
    keys.sort();
    assert_eq!(keys, vec!["contour_2_second", "trace_0_first", "trace_1_first"]);
    assert!(!program.is_empty());
}

#[test]
fn operations_without_layers_run_on_every_layer() {
    let drawing = demo_drawing();
    let operations = vec![op("all", None, OperationKind::Trace)];
    let mut program = Program::new();
    let regions = cnc(&drawing, &operations, &mut program).unwrap();
    assert_eq!(regions.len(), 2);
}

#[test]
fn layer_list_order_dictates_machining_order() {
    // The drawing declares "cuts" before "engrave"; the operation asks for
    // them the other way round and must be obeyed.
    let drawing = demo_drawing();
    let operations = vec![op(
        "ordered",
        Some(vec!["engrave".to_string(), "cuts".to_string()]),
        OperationKind::Trace,
    )];
    let mut program = Program::new();
    cnc(&drawing, &operations, &mut program).unwrap();

    let first_xy = program
        .events()
        .iter()
        .find_map(|e| match e {
            MotionEvent::Rapid {
                x: Some(x),
                y: Some(y),
                ..
            } => Some((*x, *y)),
            _ => None,
        })
        .expect("xy rapid");
    assert_eq!(first_xy, (20.0, 20.0), "engrave chain machined first");
}

#[test]
fn layer_listed_twice_is_machined_twice() {
    let drawing = demo_drawing();
    let operations = vec![op(
        "twice",
        Some(vec!["engrave".to_string(), "engrave".to_string()]),
        OperationKind::Trace,
    )];
    let mut program = Program::new();
    let regions = cnc(&drawing, &operations, &mut program).unwrap();
    assert_eq!(regions.len(), 2);
    assert!(regions.contains_key("trace_0_twice"));
    assert!(regions.contains_key("trace_1_twice"));
}

#[test]
fn unknown_layer_names_are_skipped() {
    let drawing = demo_drawing();
    let operations = vec![op(
        "ghost",
        Some(vec!["missing".to_string()]),
        OperationKind::Trace,
    )];
    let mut program = Program::new();
    let regions = cnc(&drawing, &operations, &mut program).unwrap();
    assert!(regions.is_empty());
    assert!(program.is_empty());
}

#[test]
fn auto_ids_keep_regions_distinct() {
    let drawing = demo_drawing();
    let mut trace = op("ignored", None, OperationKind::Trace);
    trace.id = None;
    let mut program = Program::new();
    let regions = cnc(&drawing, &[trace], &mut program).unwrap();
    assert_eq!(regions.len(), 2);
    for key in regions.keys() {
        assert!(key.starts_with("trace_"));
    }
}

#[test]
fn invalid_operation_fails_the_job_before_any_motion() {
    let drawing = demo_drawing();
    let good = op("good", None, OperationKind::Trace);
    let mut bad = op("bad", None, OperationKind::Trace);
    bad.depth = -1.0;

    let mut program = Program::new();
    let result = cnc(&drawing, &[good, bad], &mut program);
    assert!(result.is_err());
    assert!(program.is_empty());
}

#[test]
fn job_events_interleave_in_operation_order() {
    let drawing = demo_drawing();
    let operations = vec![
        op(
            "pocket",
            Some(vec!["cuts".to_string()]),
            OperationKind::Pocket {
                stock_to_leave: 0.0,
            },
        ),
        op(
            "outline",
            Some(vec!["cuts".to_string()]),
            OperationKind::Contour {
                outside: true,
                tabs: None,
            },
        ),
    ];
    let mut program = Program::new();
    let regions = cnc(&drawing, &operations, &mut program).unwrap();
    assert_eq!(regions.len(), 2);

    // The pocket's many plunged scan points come first; the final cutting
    // move belongs to the contour, out at the expanded boundary.
    let last_cut = program
        .events()
        .iter()
        .rev()
        .find_map(|e| match e {
            MotionEvent::Cut {
                x: Some(x),
                y: Some(y),
                ..
            } => Some((*x, *y)),
            _ => None,
        })
        .expect("cut moves exist");
    assert!(last_cut.0 < 0.0 || last_cut.0 > 100.0 || last_cut.1 < 0.0 || last_cut.1 > 100.0);
}
