use anyhow::{bail, Result};
use millcut::{
    cnc, post_process_grbl, Drawing, Operation, OperationKind, Program, Tabs, Tool,
};

/// Demo driver: machine a 100x100 square with the chosen operation and print
/// the resulting grbl program.
fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().collect();
    let command = args.get(1).map(String::as_str).unwrap_or("job");

    let mut drawing = Drawing::new();
    drawing.add_rect("cuts", (0.0, 0.0), 100.0, 100.0);

    let operations = match command {
        "contour" => vec![demo_op(OperationKind::Contour {
            outside: false,
            tabs: Some(Tabs {
                amount: 4,
                width: 4.0,
                height: 2.0,
            }),
        })],
        "pocket" => vec![demo_op(OperationKind::Pocket {
            stock_to_leave: 0.0,
        })],
        "parallel" => vec![demo_op(OperationKind::Parallel {
            stock_to_leave: 0.0,
        })],
        "trace" => vec![demo_op(OperationKind::Trace)],
        "job" => vec![
            demo_op(OperationKind::Pocket {
                stock_to_leave: 0.5,
            }),
            demo_op(OperationKind::Contour {
                outside: true,
                tabs: None,
            }),
        ],
        other => bail!("unknown command {other:?}, expected contour|pocket|parallel|trace|job"),
    };

    let mut program = Program::new();
    let regions = cnc(&drawing, &operations, &mut program)?;
    eprintln!("{} region(s), {} motion event(s)", regions.len(), program.len());

    println!("{}", post_process_grbl(&program));
    Ok(())
}

fn demo_op(kind: OperationKind) -> Operation {
    Operation {
        id: None,
        tool: Tool::new(10.0),
        depth: 6.0,
        depth_per_pass: Some(2.0),
        z_safe: 5.0,
        feed_rate: 600.0,
        plunge_rate: None,
        tolerance: 0.1,
        layers: None,
        kind,
    }
}
