// Curve smoothing: turns a noisy polyline into one cubic Bezier per pair of
// consecutive points, with control points nudged along the direction of the
// neighbouring segments so the tangent stays continuous at every joint.
// Visual: the jagged mouse trail becomes a soft, flowing line.

use crate::types::Point;

/// How far (as a fraction of the current segment length) a control point is
/// pushed away from its anchor.
pub const CONTROL_COEF: f32 = 0.1;

/// Anything that accepts drawing commands: the tiny-skia path builder behind a
/// drawing context, or a plain `Vec<PathCommand>` recorder.
pub trait PathSink {
    fn move_to(&mut self, p: Point);
    fn line_to(&mut self, p: Point);
    fn curve_to(&mut self, c1: Point, c2: Point, end: Point);
}

/// A recorded drawing command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    CurveTo { c1: Point, c2: Point, end: Point },
}

impl PathSink for Vec<PathCommand> {
    fn move_to(&mut self, p: Point) {
        self.push(PathCommand::MoveTo(p));
    }

    fn line_to(&mut self, p: Point) {
        self.push(PathCommand::LineTo(p));
    }

    fn curve_to(&mut self, c1: Point, c2: Point, end: Point) {
        self.push(PathCommand::CurveTo { c1, c2, end });
    }
}

/// Project a control point from `b`, continuing the direction `a -> b`, by
/// `CONTROL_COEF * dist`.
///
/// A zero-length direction or zero distance collapses the control point onto `b`.
pub fn next_point(a: Point, b: Point, dist: f32) -> Point {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    if dist == 0.0 || (dx == 0.0 && dy == 0.0) || !dist.is_finite() {
        return b;
    }
    let angle = dy.atan2(dx);
    Point::new(
        b.x + angle.cos() * dist * CONTROL_COEF,
        b.y + angle.sin() * dist * CONTROL_COEF,
    )
}

/// Sliding 4-point window: previous-previous, previous, current, next.
#[derive(Debug, Clone, Copy, Default)]
struct ArcContext {
    p1: Option<Point>,
    p2: Option<Point>,
    p3: Option<Point>,
    p4: Option<Point>,
}

impl ArcContext {
    /// Slide the window by one; `next` becomes p4 (`None` flushes the tail).
    fn push(&mut self, next: Option<Point>) {
        self.p1 = self.p2;
        self.p2 = self.p3;
        self.p3 = self.p4;
        self.p4 = next;
    }

    /// Emit the p2 -> p3 segment if both ends are known. Returns true if
    /// a segment was emitted.
    fn emit<S: PathSink + ?Sized>(&self, sink: &mut S) -> bool {
        let (Some(p2), Some(p3)) = (self.p2, self.p3) else {
            return false;
        };
        let dist = p2.distance(p3);
        let (c1, c2) = match (self.p1, self.p4) {
            (None, None) => {
                // Two points only: not enough context for curvature.
                sink.move_to(p2);
                sink.line_to(p3);
                return true;
            }
            (None, Some(p4)) => (p2, next_point(p4, p3, dist)),
            (Some(p1), None) => (next_point(p1, p2, dist), p3),
            (Some(p1), Some(p4)) => (next_point(p1, p2, dist), next_point(p4, p3, dist)),
        };
        sink.move_to(p2);
        sink.curve_to(c1, c2, p3);
        true
    }
}

/// Emit the smoothed version of `points` into `sink`. Returns the number of
/// segments emitted, which is `points.len() - 1` for two or more points.
pub fn smooth_path<S: PathSink + ?Sized>(points: &[Point], sink: &mut S) -> usize {
    let mut window = ArcContext::default();
    let mut segments = 0;
    for &p in points {
        window.push(Some(p));
        if window.emit(sink) {
            segments += 1;
        }
    }
    window.push(None);
    if window.emit(sink) {
        segments += 1;
    }
    segments
}

/// Emit `points` as a raw polyline (straight segments only).
pub fn polyline<S: PathSink + ?Sized>(points: &[Point], sink: &mut S) -> usize {
    let Some((&first, rest)) = points.split_first() else {
        return 0;
    };
    if rest.is_empty() {
        return 0;
    }
    sink.move_to(first);
    for &p in rest {
        sink.line_to(p);
    }
    rest.len()
}
