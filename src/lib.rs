//! Freehand pencil strokes with live smoothing.
//!
//! Pointer samples of a drag are collected by [`StrokeTracker`], turned into
//! cubic Bezier segments by the smoothing in [`smooth`], and redrawn in full by
//! [`SmoothCurveRenderer`] on every new sample against the last committed
//! pixels of a [`Surface`]. [`PencilTool`] ties these together behind the
//! press / motion / release interface a host application drives.

pub mod config;
pub mod draw;
pub mod error;
pub mod input;
pub mod options;
pub mod render;
pub mod smooth;
pub mod surface;
pub mod tool;
pub mod tracker;
pub mod types;

pub use error::Error;
pub use options::{resolve_style, PencilOperator, PencilOptions, PencilShape};
pub use render::SmoothCurveRenderer;
pub use surface::Surface;
pub use tool::{CommitSink, OperationLog, PencilTool, PointerButton, ToolInputs};
pub use tracker::StrokeTracker;
pub use types::{CapShape, CompositeOp, JoinShape, Operation, Point, Rgba, StrokeStyle, ToolId};
