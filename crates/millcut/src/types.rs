use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// A cutting tool. The radius is derived, never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tool {
    pub diameter: f64,
}

impl Tool {
    pub fn new(diameter: f64) -> Self {
        Self { diameter }
    }

    pub fn radius(&self) -> f64 {
        self.diameter / 2.0
    }
}

/// Holding tabs (bridges) left uncut on a contour so the part stays attached.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Tabs {
    /// Number of tabs, spread evenly along the loop.
    pub amount: usize,
    /// Length of each tab along the cut direction, in drawing units.
    pub width: f64,
    /// Height of material left standing above the cut floor.
    pub height: f64,
}

/// What an operation does with each chain it is given.
///
/// Variants carry only their own fields; everything shared lives on
/// [`Operation`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum OperationKind {
    /// Follow the chain at ±tool radius, optionally leaving holding tabs.
    Contour {
        outside: bool,
        #[serde(default)]
        tabs: Option<Tabs>,
    },
    /// Clear the enclosed area with concentric rings stitched into one path.
    Pocket {
        #[serde(default)]
        stock_to_leave: f64,
    },
    /// Clear the enclosed area with alternating-direction scanlines.
    Parallel {
        #[serde(default)]
        stock_to_leave: f64,
    },
    /// Cut directly along the chain with no radius compensation.
    Trace,
}

impl OperationKind {
    pub fn name(&self) -> &'static str {
        match self {
            OperationKind::Contour { .. } => "contour",
            OperationKind::Pocket { .. } => "pocket",
            OperationKind::Parallel { .. } => "parallel",
            OperationKind::Trace => "trace",
        }
    }
}

/// A single machining operation applied to every chain on its target layers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Operation {
    /// Stable identifier used in output keys; auto-assigned a ULID when unset.
    #[serde(default)]
    pub id: Option<String>,
    pub tool: Tool,
    /// Total cut depth, positive, in drawing units below Z zero.
    pub depth: f64,
    /// Maximum depth removed per pass; defaults to `depth` (single pass).
    #[serde(default)]
    pub depth_per_pass: Option<f64>,
    /// Z height for rapid travel between cuts.
    pub z_safe: f64,
    pub feed_rate: f64,
    /// Feed rate for plunge moves; defaults to `round(feed_rate / 3)`.
    #[serde(default)]
    pub plunge_rate: Option<f64>,
    /// Linear sampling tolerance for this operation.
    pub tolerance: f64,
    /// Target layers; defaults to every discovered layer.
    #[serde(default)]
    pub layers: Option<Vec<String>>,
    #[serde(flatten)]
    pub kind: OperationKind,
}

impl Operation {
    /// Reject invalid configuration outright. Nothing here is ever clamped.
    pub fn validate(&self) -> Result<()> {
        if self.tool.diameter <= 0.0 {
            bail!("tool diameter must be positive, got {}", self.tool.diameter);
        }
        if self.depth <= 0.0 {
            bail!("depth must be positive, got {}", self.depth);
        }
        if let Some(dpp) = self.depth_per_pass {
            if dpp <= 0.0 {
                bail!("depth_per_pass must be positive, got {dpp}");
            }
        }
        if self.tolerance <= 0.0 {
            bail!("tolerance must be positive, got {}", self.tolerance);
        }
        if let OperationKind::Contour {
            tabs: Some(tabs), ..
        } = &self.kind
        {
            if tabs.amount == 0 {
                bail!("tab amount must be positive");
            }
            if tabs.width <= 0.0 || tabs.height <= 0.0 {
                bail!(
                    "tab width and height must be positive, got {}x{}",
                    tabs.width,
                    tabs.height
                );
            }
        }
        Ok(())
    }

    /// Depth removed per pass, with the single-pass default applied.
    pub fn pass_depth(&self) -> f64 {
        self.depth_per_pass.unwrap_or(self.depth)
    }

    /// Plunge feed rate, with the `feed_rate / 3` default applied.
    pub fn plunge_feed(&self) -> f64 {
        self.plunge_rate
            .unwrap_or_else(|| (self.feed_rate / 3.0).round())
    }
}
