use crate::motion::{MotionEvent, Program};
use std::fmt::Write;

/// Rendered G-code, one word-group per line.
#[derive(Debug, Clone, Default)]
pub struct GCode {
    pub lines: Vec<String>,
}

impl std::fmt::Display for GCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.lines.join("\n"))
    }
}

/// Render a motion program as grbl-flavoured G-code.
///
/// Absolute positioning, millimetres, XY plane. Feed rate changes are
/// buffered and emitted as an F word on the next cutting move, so rapids
/// never carry a feed.
pub fn post_process_grbl(program: &Program) -> GCode {
    let mut lines = vec!["G90".to_string(), "G21".to_string(), "G17".to_string()];
    let mut pending_feed: Option<f64> = None;
    let mut active_feed: Option<f64> = None;

    for event in program.events() {
        match event {
            MotionEvent::FeedRate { value } => pending_feed = Some(*value),
            MotionEvent::Rapid { x, y, z } => {
                lines.push(move_line("G0", *x, *y, *z, None));
            }
            MotionEvent::Cut { x, y, z } => {
                let feed = match pending_feed.take() {
                    Some(f) if active_feed != Some(f) => {
                        active_feed = Some(f);
                        Some(f)
                    }
                    _ => None,
                };
                lines.push(move_line("G1", *x, *y, *z, feed));
            }
        }
    }

    GCode { lines }
}

fn move_line(word: &str, x: Option<f64>, y: Option<f64>, z: Option<f64>, feed: Option<f64>) -> String {
    let mut line = word.to_string();
    if let Some(x) = x {
        write!(line, " X{x:.4}").expect("write to string");
    }
    if let Some(y) = y {
        write!(line, " Y{y:.4}").expect("write to string");
    }
    if let Some(z) = z {
        write!(line, " Z{z:.4}").expect("write to string");
    }
    if let Some(feed) = feed {
        write!(line, " F{feed:.1}").expect("write to string");
    }
    line
}
