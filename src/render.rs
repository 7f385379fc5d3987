// Renderer for pencil operations.
// Every call starts from the committed pixels and redraws the whole stroke,
// so repeated previews never pile up on top of each other.

use log::trace;

use crate::smooth::{polyline, smooth_path};
use crate::surface::Surface;
use crate::types::{Operation, ToolId};

pub struct SmoothCurveRenderer {
    tool_id: ToolId,
}

impl SmoothCurveRenderer {
    pub fn new(tool_id: ToolId) -> Self {
        Self { tool_id }
    }

    /// Draw `operation` onto `surface` and return how many segments were emitted.
    ///
    /// Operations from another tool, or with fewer than two points, are ignored
    /// and leave the surface untouched.
    pub fn render(&self, operation: &Operation, surface: &mut Surface) -> usize {
        if operation.tool_id != self.tool_id {
            trace!("ignoring operation from tool {:?}", operation.tool_id.0);
            return 0;
        }
        let Some(points) = operation.path.as_deref() else {
            return 0;
        };
        if points.len() < 2 {
            return 0;
        }

        surface.restore();

        let style = &operation.style;
        let mut ctx = surface.context(style);
        let segments = if style.smoothed {
            smooth_path(points, &mut ctx)
        } else {
            polyline(points, &mut ctx)
        };
        let drawn = ctx.stroke();
        trace!(
            "rendered {} points as {} segments (smoothed: {}, stroked: {})",
            points.len(),
            segments,
            style.smoothed,
            drawn
        );
        segments
    }
}
