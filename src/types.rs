// Core value types shared by the tracker, the renderer and the demo host.

use std::sync::Arc;

/// A sampled pointer position in surface pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance(self, other: Point) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

/// Straight (non-premultiplied) color, each channel in [0,1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba { r: 0.0, g: 0.0, b: 0.0, a: 1.0 };
    pub const WHITE: Rgba = Rgba { r: 1.0, g: 1.0, b: 1.0, a: 1.0 };

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_rgba8([r, g, b, a]: [u8; 4]) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    pub fn to_rgba8(self) -> [u8; 4] {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }
}

/// Line end shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapShape {
    Round,
    Square,
    Butt,
}

/// Shape of the corner where two segments meet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinShape {
    Round,
    Bevel,
    Miter,
}

/// How stroke pixels are combined with what is already on the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompositeOp {
    Over,
    Source,
    Clear,
    Difference,
}

/// Everything needed to stroke a path, fixed for one render call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    pub color: Rgba,
    pub line_width: f32,
    pub cap: CapShape,
    pub join: JoinShape,
    pub operator: CompositeOp,
    pub dashed: bool,
    pub smoothed: bool,
}

impl StrokeStyle {
    /// On/off dash lengths, both `2 × line_width`, or `None` for a solid line.
    pub fn dash_array(&self) -> Option<[f32; 2]> {
        self.dashed
            .then(|| [2.0 * self.line_width, 2.0 * self.line_width])
    }
}

/// Identifies which tool built an operation; renderers ignore foreign ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToolId(pub &'static str);

/// Snapshot of one stroke: who built it, how to draw it, and where.
/// Built fresh per input event, never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Operation {
    pub tool_id: ToolId,
    pub style: StrokeStyle,
    pub path: Option<Arc<[Point]>>,
}

impl Operation {
    /// Number of recorded points (0 when there is no path yet).
    pub fn point_count(&self) -> usize {
        self.path.as_deref().map_or(0, <[Point]>::len)
    }
}

/// Pixel buffer handed to minifb.
#[derive(Clone)]
pub struct FrameBuffer {
    pub width: usize,     // how wide the frame is on screen (pixels)
    pub height: usize,    // how tall the frame is on screen (pixels)
    pub pixels: Vec<u32>, // each entry is 0x00RRGGBB for minifb
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, pixels: vec![0u32; width * height] }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn style(dashed: bool, line_width: f32) -> StrokeStyle {
        StrokeStyle {
            color: Rgba::BLACK,
            line_width,
            cap: CapShape::Round,
            join: JoinShape::Round,
            operator: CompositeOp::Over,
            dashed,
            smoothed: true,
        }
    }

    #[test]
    fn dash_array_is_twice_the_width() {
        assert_eq!(style(true, 4.0).dash_array(), Some([8.0, 8.0]));
        assert_eq!(style(false, 4.0).dash_array(), None);
    }

    #[test]
    fn rgba8_conversion_keeps_channels() {
        let c = Rgba::from_rgba8([255, 128, 0, 64]);
        assert_eq!(c.to_rgba8(), [255, 128, 0, 64]);
    }

    #[test]
    fn operation_without_path_has_no_points() {
        let op = Operation { tool_id: ToolId("pencil"), style: style(false, 1.0), path: None };
        assert_eq!(op.point_count(), 0);
    }
}
