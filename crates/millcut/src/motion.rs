use serde::{Deserialize, Serialize};

/// Sparse axis words for one motion event. Axes left `None` hold their
/// previous value on the machine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Axes {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub z: Option<f64>,
}

impl Axes {
    pub fn xy(x: f64, y: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            z: None,
        }
    }

    pub fn z(z: f64) -> Self {
        Self {
            x: None,
            y: None,
            z: Some(z),
        }
    }
}

/// One emitted machine motion, consumed strictly in emission order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MotionEvent {
    Rapid {
        x: Option<f64>,
        y: Option<f64>,
        z: Option<f64>,
    },
    Cut {
        x: Option<f64>,
        y: Option<f64>,
        z: Option<f64>,
    },
    FeedRate {
        value: f64,
    },
}

/// Records motion events and tracks the last emitted coordinate per axis.
///
/// Single writer, single reader, never concurrent; the last coordinate is
/// only consulted by the tab logic to skip redundant plunge moves.
#[derive(Debug, Clone, Default)]
pub struct Program {
    events: Vec<MotionEvent>,
    last: Axes,
    feed: Option<f64>,
}

impl Program {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rapid(&mut self, axes: Axes) {
        self.track(axes);
        self.events.push(MotionEvent::Rapid {
            x: axes.x,
            y: axes.y,
            z: axes.z,
        });
    }

    pub fn cut(&mut self, axes: Axes) {
        self.track(axes);
        self.events.push(MotionEvent::Cut {
            x: axes.x,
            y: axes.y,
            z: axes.z,
        });
    }

    /// Set the active feed rate. Repeats of the current rate are dropped.
    pub fn feed(&mut self, rate: f64) {
        if self.feed == Some(rate) {
            return;
        }
        self.feed = Some(rate);
        self.events.push(MotionEvent::FeedRate { value: rate });
    }

    fn track(&mut self, axes: Axes) {
        if axes.x.is_some() {
            self.last.x = axes.x;
        }
        if axes.y.is_some() {
            self.last.y = axes.y;
        }
        if axes.z.is_some() {
            self.last.z = axes.z;
        }
    }

    pub fn last_coord(&self) -> Axes {
        self.last
    }

    pub fn last_z(&self) -> Option<f64> {
        self.last.z
    }

    pub fn events(&self) -> &[MotionEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
