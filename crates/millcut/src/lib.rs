mod contour;
mod geometry;
mod job;
mod motion;
mod passes;
mod pocket;
mod postprocessor;
mod raster;
mod tabs;
mod trace;
mod types;

pub use contour::generate_contour_toolpath;
pub use geometry::*;
pub use job::cnc;
pub use motion::{Axes, MotionEvent, Program};
pub use passes::passes;
pub use pocket::{generate_pocket_toolpath, stitch_rings};
pub use postprocessor::{post_process_grbl, GCode};
pub use raster::{generate_parallel_toolpath, raster_region, ScanSegment};
pub use tabs::{partition_tabs, TabSection};
pub use trace::generate_trace_toolpath;
pub use types::*;
