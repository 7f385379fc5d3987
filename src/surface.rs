// The raster surface the pencil draws on.
// Two pixel buffers: `current` (what you SEE, committed pixels plus the live
// preview stroke) and `committed` (pixels of finished strokes only).
// Restoring copies committed -> current; committing copies current -> committed.

use std::path::Path;

use tiny_skia::{
    BlendMode, LineCap, LineJoin, Paint, PathBuilder, Pixmap, Stroke, StrokeDash, Transform,
};

use crate::error::Error;
use crate::smooth::PathSink;
use crate::types::{CapShape, CompositeOp, FrameBuffer, JoinShape, Point, Rgba, StrokeStyle};

pub struct Surface {
    current: Pixmap,
    committed: Pixmap,
}

impl Surface {
    /// Allocate a `width × height` surface filled with `background`, already committed.
    pub fn new(width: u32, height: u32, background: Rgba) -> Result<Self, Error> {
        let mut current = Pixmap::new(width, height).ok_or_else(|| {
            Error::SurfaceInit(format!("cannot allocate a {width}x{height} pixmap"))
        })?;
        let [r, g, b, a] = background.to_rgba8();
        current.fill(tiny_skia::Color::from_rgba8(r, g, b, a));
        let committed = current.clone();
        Ok(Self { current, committed })
    }

    pub fn width(&self) -> u32 {
        self.current.width()
    }

    pub fn height(&self) -> u32 {
        self.current.height()
    }

    /// Throw away everything drawn since the last commit.
    /// Visual: the live preview stroke disappears.
    pub fn restore(&mut self) {
        self.current.data_mut().copy_from_slice(self.committed.data());
    }

    /// Make the current pixels the new baseline for `restore`.
    pub fn commit(&mut self) {
        self.committed.data_mut().copy_from_slice(self.current.data());
    }

    /// Wipe both buffers to `background`.
    pub fn clear(&mut self, background: Rgba) {
        let [r, g, b, a] = background.to_rgba8();
        self.current.fill(tiny_skia::Color::from_rgba8(r, g, b, a));
        self.commit();
    }

    /// Straight (non-premultiplied) RGBA of the current pixel at (x,y).
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        self.current.pixel(x, y).map(|p| {
            let c = p.demultiply();
            [c.red(), c.green(), c.blue(), c.alpha()]
        })
    }

    /// Raw premultiplied RGBA bytes of the current pixels.
    pub fn data(&self) -> &[u8] {
        self.current.data()
    }

    /// Copy the current pixels into a minifb frame, flattened over white.
    /// Visual: erased (transparent) areas show up as paper white.
    pub fn write_frame(&self, fb: &mut FrameBuffer) {
        let (w, h) = (self.width() as usize, self.height() as usize);
        if fb.width != w || fb.height != h {
            *fb = FrameBuffer::new(w, h);
        }
        for (dst, px) in fb.pixels.iter_mut().zip(self.current.data().chunks_exact(4)) {
            // premultiplied source over opaque white: c + (255 - a)
            let under = 255 - px[3] as u32;
            let r = px[0] as u32 + under;
            let g = px[1] as u32 + under;
            let b = px[2] as u32 + under;
            *dst = (r.min(255) << 16) | (g.min(255) << 8) | b.min(255);
        }
    }

    /// Write the current pixels to an image file (format chosen from the extension).
    pub fn save_png(&self, path: &Path) -> Result<(), Error> {
        let mut straight = Vec::with_capacity(self.current.data().len());
        for p in self.current.pixels() {
            let c = p.demultiply();
            straight.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
        }
        let img = image::RgbaImage::from_raw(self.width(), self.height(), straight)
            .ok_or_else(|| Error::Export("pixel buffer does not match surface size".into()))?;
        img.save(path)
            .map_err(|e| Error::Export(format!("{}: {e}", path.display())))
    }

    /// Acquire a drawing context configured for `style`. The context borrows
    /// the surface until it is stroked or dropped.
    pub fn context(&mut self, style: &StrokeStyle) -> DrawingContext<'_> {
        DrawingContext::new(&mut self.current, style)
    }
}

/// One render pass worth of drawing state: paint, stroke settings and the path
/// being built. Released (dropped) at the end of the pass.
pub struct DrawingContext<'a> {
    target: &'a mut Pixmap,
    builder: PathBuilder,
    paint: Paint<'static>,
    stroke: Stroke,
}

impl<'a> DrawingContext<'a> {
    fn new(target: &'a mut Pixmap, style: &StrokeStyle) -> Self {
        let mut paint = Paint::default();
        let [r, g, b, a] = style.color.to_rgba8();
        paint.set_color_rgba8(r, g, b, a);
        paint.blend_mode = blend_mode(style.operator);
        paint.anti_alias = true;

        let stroke = Stroke {
            width: style.line_width,
            line_cap: line_cap(style.cap),
            line_join: line_join(style.join),
            dash: style
                .dash_array()
                .and_then(|dashes| StrokeDash::new(dashes.to_vec(), 0.0)),
            ..Stroke::default()
        };

        Self { target, builder: PathBuilder::new(), paint, stroke }
    }

    /// Stroke everything emitted so far and release the context.
    /// Returns false when the path was empty/degenerate and nothing was drawn.
    pub fn stroke(self) -> bool {
        let Some(path) = self.builder.finish() else {
            return false;
        };
        self.target
            .stroke_path(&path, &self.paint, &self.stroke, Transform::identity(), None);
        true
    }
}

impl PathSink for DrawingContext<'_> {
    fn move_to(&mut self, p: Point) {
        self.builder.move_to(p.x, p.y);
    }

    fn line_to(&mut self, p: Point) {
        self.builder.line_to(p.x, p.y);
    }

    fn curve_to(&mut self, c1: Point, c2: Point, end: Point) {
        self.builder.cubic_to(c1.x, c1.y, c2.x, c2.y, end.x, end.y);
    }
}

fn blend_mode(op: CompositeOp) -> BlendMode {
    match op {
        CompositeOp::Over => BlendMode::SourceOver,
        CompositeOp::Source => BlendMode::Source,
        CompositeOp::Clear => BlendMode::Clear,
        CompositeOp::Difference => BlendMode::Difference,
    }
}

fn line_cap(cap: CapShape) -> LineCap {
    match cap {
        CapShape::Round => LineCap::Round,
        CapShape::Square => LineCap::Square,
        CapShape::Butt => LineCap::Butt,
    }
}

fn line_join(join: JoinShape) -> LineJoin {
    match join {
        JoinShape::Round => LineJoin::Round,
        JoinShape::Bevel => LineJoin::Bevel,
        JoinShape::Miter => LineJoin::Miter,
    }
}
