// The pencil tool as the host sees it: press / motion / release plus option
// setters. Glues the tracker (what was drawn) to the renderer (how it looks).

use log::debug;

use crate::options::{resolve_style, PencilOperator, PencilOptions, PencilShape};
use crate::render::SmoothCurveRenderer;
use crate::surface::Surface;
use crate::tracker::StrokeTracker;
use crate::types::{Operation, Point, Rgba, ToolId};

pub const PENCIL_ID: ToolId = ToolId("pencil");

/// Which pointer button started the gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
}

/// Values the host owns and passes in at press time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToolInputs {
    pub line_width: f32,
    pub primary_color: Rgba,
    pub secondary_color: Rgba,
}

impl ToolInputs {
    /// Line width to stroke with; non-positive or non-finite widths fall back to 1px.
    pub fn stroke_width(&self) -> f32 {
        usable_width(self.line_width)
    }

    pub fn color_for(&self, button: PointerButton) -> Rgba {
        match button {
            PointerButton::Primary => self.primary_color,
            PointerButton::Secondary => self.secondary_color,
        }
    }
}

/// A width that actually draws something: `width` if positive and finite, else 1px.
pub fn usable_width(width: f32) -> f32 {
    if width > 0.0 && width.is_finite() { width } else { 1.0 }
}

/// Receiver of finished strokes (the host's history).
pub trait CommitSink {
    fn commit(&mut self, surface: &mut Surface, operation: Operation);
}

/// Minimal history: keeps the committed pixels and every finished operation.
#[derive(Debug, Default)]
pub struct OperationLog {
    operations: Vec<Operation>,
}

impl OperationLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    pub fn clear(&mut self) {
        self.operations.clear();
    }
}

impl CommitSink for OperationLog {
    fn commit(&mut self, surface: &mut Surface, operation: Operation) {
        surface.commit();
        self.operations.push(operation);
    }
}

pub struct PencilTool {
    options: PencilOptions,
    tracker: StrokeTracker,
    renderer: SmoothCurveRenderer,
    color: Rgba,
    line_width: f32,
}

impl PencilTool {
    pub fn new(options: PencilOptions) -> Self {
        Self {
            options,
            tracker: StrokeTracker::new(PENCIL_ID),
            renderer: SmoothCurveRenderer::new(PENCIL_ID),
            color: Rgba::BLACK,
            line_width: 1.0,
        }
    }

    pub fn options(&self) -> &PencilOptions {
        &self.options
    }

    pub fn options_label(&self) -> &'static str {
        "Pencil options"
    }

    /// Status bar text for the current options.
    pub fn status_label(&self) -> String {
        self.options.status_label()
    }

    pub fn set_shape(&mut self, shape: PencilShape) {
        self.options.shape = shape;
        self.restyle();
    }

    pub fn set_operator(&mut self, operator: PencilOperator) {
        self.options.operator = operator;
        self.restyle();
    }

    pub fn set_dashed(&mut self, dashed: bool) {
        self.options.dashed = dashed;
        self.restyle();
    }

    pub fn set_smoothed(&mut self, smoothed: bool) {
        self.options.smoothed = smoothed;
        self.restyle();
    }

    fn restyle(&mut self) {
        let style = resolve_style(&self.options, self.color, self.line_width);
        self.tracker.restyle(style);
    }

    /// Start a gesture. The button picks the color.
    pub fn press(&mut self, point: Point, button: PointerButton, inputs: &ToolInputs) {
        self.color = inputs.color_for(button);
        self.line_width = inputs.stroke_width();
        let style = resolve_style(&self.options, self.color, self.line_width);
        debug!("pencil press {:?} width {}", button, self.line_width);
        self.tracker.begin(point, style);
    }

    /// Record a sample and redraw the live preview. Returns segments drawn.
    pub fn motion(&mut self, point: Point, surface: &mut Surface) -> usize {
        match self.tracker.extend(point) {
            Some(operation) => self.renderer.render(&operation, surface),
            None => 0,
        }
    }

    /// Finish the gesture, draw its final state and hand it to `sink`.
    /// Returns the committed operation's point count, or `None` if no gesture was active.
    pub fn release(
        &mut self,
        point: Point,
        surface: &mut Surface,
        sink: &mut dyn CommitSink,
    ) -> Option<usize> {
        let operation = self.tracker.end(point)?;
        self.tracker.reset();
        let points = operation.point_count();
        if points < 2 {
            // nothing visible was drawn; drop any preview leftovers
            surface.restore();
            debug!("pencil release without a stroke");
            return Some(points);
        }
        self.renderer.render(&operation, surface);
        sink.commit(surface, operation);
        Some(points)
    }

    /// Re-apply any operation (e.g. replayed from history) as a preview.
    pub fn apply(&self, operation: &Operation, surface: &mut Surface) -> usize {
        self.renderer.render(operation, surface)
    }

    pub fn is_drawing(&self) -> bool {
        self.tracker.is_active()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgba = Rgba::new(1.0, 0.0, 0.0, 1.0);
    const BLUE: Rgba = Rgba::new(0.0, 0.0, 1.0, 1.0);

    fn inputs() -> ToolInputs {
        ToolInputs { line_width: 4.0, primary_color: RED, secondary_color: BLUE }
    }

    fn drag(
        tool: &mut PencilTool,
        surface: &mut Surface,
        log: &mut OperationLog,
        button: PointerButton,
    ) {
        tool.press(Point::new(5.0, 20.0), button, &inputs());
        tool.motion(Point::new(15.0, 20.0), surface);
        tool.motion(Point::new(25.0, 20.0), surface);
        tool.release(Point::new(35.0, 20.0), surface, log);
    }

    #[test]
    fn secondary_button_uses_secondary_color() {
        let mut tool = PencilTool::new(PencilOptions::default());
        let mut surface = Surface::new(40, 40, Rgba::WHITE).unwrap();
        let mut log = OperationLog::new();
        drag(&mut tool, &mut surface, &mut log, PointerButton::Secondary);

        assert_eq!(log.operations().len(), 1);
        assert_eq!(log.operations()[0].style.color, BLUE);
        assert_eq!(surface.pixel(20, 20), Some([0, 0, 255, 255]));
    }

    #[test]
    fn committed_stroke_survives_the_next_preview() {
        let mut tool = PencilTool::new(PencilOptions::default());
        let mut surface = Surface::new(40, 40, Rgba::WHITE).unwrap();
        let mut log = OperationLog::new();
        drag(&mut tool, &mut surface, &mut log, PointerButton::Primary);

        tool.press(Point::new(5.0, 5.0), PointerButton::Primary, &inputs());
        tool.motion(Point::new(35.0, 5.0), &mut surface);
        assert_eq!(surface.pixel(20, 20), Some([255, 0, 0, 255]));
        assert_eq!(surface.pixel(20, 5), Some([255, 0, 0, 255]));
    }

    #[test]
    fn motion_before_press_draws_nothing() {
        let mut tool = PencilTool::new(PencilOptions::default());
        let mut surface = Surface::new(10, 10, Rgba::WHITE).unwrap();
        assert_eq!(tool.motion(Point::new(3.0, 3.0), &mut surface), 0);
        let mut log = OperationLog::new();
        assert!(tool.release(Point::new(3.0, 3.0), &mut surface, &mut log).is_none());
    }

    #[test]
    fn click_without_drag_commits_nothing() {
        let mut tool = PencilTool::new(PencilOptions::default());
        let mut surface = Surface::new(10, 10, Rgba::WHITE).unwrap();
        let mut log = OperationLog::new();
        tool.press(Point::new(4.0, 4.0), PointerButton::Primary, &inputs());
        assert_eq!(tool.release(Point::new(4.0, 4.0), &mut surface, &mut log), Some(0));
        assert!(log.operations().is_empty());
        assert!(!tool.is_drawing());
    }

    #[test]
    fn option_change_mid_gesture_applies_to_the_stroke() {
        let mut tool = PencilTool::new(PencilOptions::default());
        let mut surface = Surface::new(40, 40, Rgba::WHITE).unwrap();
        let mut log = OperationLog::new();
        tool.press(Point::new(5.0, 20.0), PointerButton::Primary, &inputs());
        tool.motion(Point::new(20.0, 20.0), &mut surface);
        tool.set_dashed(true);
        tool.set_shape(PencilShape::Thin);
        tool.release(Point::new(35.0, 20.0), &mut surface, &mut log);

        let style = log.operations()[0].style;
        assert_eq!(style.dash_array(), Some([8.0, 8.0]));
        assert_eq!(style.color, RED);
        assert_eq!(tool.status_label(), "Pencil - Thin - With dashes");
    }

    #[test]
    fn non_positive_width_still_draws_a_hairline() {
        for width in [0.0, -3.0, f32::NAN] {
            let mut tool = PencilTool::new(PencilOptions::default());
            let mut surface = Surface::new(40, 40, Rgba::WHITE).unwrap();
            let mut log = OperationLog::new();
            let bad = ToolInputs { line_width: width, ..inputs() };
            tool.press(Point::new(5.0, 20.5), PointerButton::Primary, &bad);
            tool.motion(Point::new(20.0, 20.5), &mut surface);
            tool.release(Point::new(35.0, 20.5), &mut surface, &mut log);

            assert_eq!(log.operations()[0].style.line_width, 1.0);
            assert_eq!(surface.pixel(20, 20), Some([255, 0, 0, 255]));
        }
    }

    #[test]
    fn labels_for_the_options_panel() {
        let mut tool = PencilTool::new(PencilOptions::default());
        assert_eq!(tool.options_label(), "Pencil options");
        assert_eq!(tool.status_label(), "Pencil - Round");
        tool.set_operator(PencilOperator::Difference);
        assert_eq!(tool.options().operator.label(), "Difference");
    }
}
