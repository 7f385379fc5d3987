// Gesture bookkeeping: collects the points of one press-to-release drag and
// hands out immutable Operation snapshots of it.

use std::sync::Arc;

use log::debug;

use crate::types::{Operation, Point, StrokeStyle, ToolId};

#[derive(Debug, Clone, Copy, PartialEq)]
enum Gesture {
    Idle,
    Active { press: Point },
    Finished,
}

/// Owns the in-progress path. Append-only while a gesture is active,
/// reset wholesale by `begin`.
pub struct StrokeTracker {
    tool_id: ToolId,
    gesture: Gesture,
    style: Option<StrokeStyle>,
    points: Vec<Point>,
    snapshot: Option<Arc<[Point]>>,
}

impl StrokeTracker {
    pub fn new(tool_id: ToolId) -> Self {
        Self {
            tool_id,
            gesture: Gesture::Idle,
            style: None,
            points: Vec::new(),
            snapshot: None,
        }
    }

    /// Start a new gesture at `press` drawn with `style`.
    pub fn begin(&mut self, press: Point, style: StrokeStyle) {
        debug!("stroke begin at ({:.1}, {:.1})", press.x, press.y);
        self.gesture = Gesture::Active { press };
        self.style = Some(style);
        self.points.clear();
        self.snapshot = None;
    }

    /// Swap the style of the active gesture (options changed mid-drag).
    pub fn restyle(&mut self, style: StrokeStyle) {
        if self.is_active() {
            self.style = Some(style);
        }
    }

    /// Append `point`. The first call after `begin` also records the press
    /// point so a click-and-move already yields a two-point path.
    /// Returns `None` when no gesture is active.
    pub fn extend(&mut self, point: Point) -> Option<Operation> {
        let Gesture::Active { press } = self.gesture else {
            return None;
        };
        if self.points.is_empty() {
            self.points.push(press);
        }
        self.points.push(point);
        self.snapshot = None;
        self.operation()
    }

    /// Final extend, then mark the gesture finished. A release at the position
    /// of the last sample adds nothing; a click without movement yields no path.
    pub fn end(&mut self, point: Point) -> Option<Operation> {
        let Gesture::Active { press } = self.gesture else {
            return None;
        };
        let last = self.points.last().copied().unwrap_or(press);
        if last != point {
            self.extend(point);
        }
        let operation = self.operation();
        self.gesture = Gesture::Finished;
        debug!("stroke end with {} points", self.points.len());
        operation
    }

    /// Drop all gesture state.
    pub fn reset(&mut self) {
        self.gesture = Gesture::Idle;
        self.style = None;
        self.points.clear();
        self.snapshot = None;
    }

    pub fn is_active(&self) -> bool {
        matches!(self.gesture, Gesture::Active { .. })
    }

    pub fn is_finished(&self) -> bool {
        self.gesture == Gesture::Finished
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Current Operation snapshot. The path is `None` until the first sample
    /// after the press has been recorded.
    pub fn operation(&mut self) -> Option<Operation> {
        let style = self.style?;
        let path = if self.points.is_empty() {
            None
        } else {
            Some(
                self.snapshot
                    .get_or_insert_with(|| Arc::from(self.points.as_slice()))
                    .clone(),
            )
        };
        Some(Operation { tool_id: self.tool_id, style, path })
    }
}
