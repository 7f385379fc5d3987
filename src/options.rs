// Pencil options as the host exposes them (plain enumerated/boolean values)
// and the pure mapping from those values to a concrete StrokeStyle.

use serde::Deserialize;

use crate::types::{CapShape, CompositeOp, JoinShape, Rgba, StrokeStyle};

/// Brush tip selection. Visual: rounded, hairline-crisp or blocky stroke ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PencilShape {
    #[default]
    Round,
    Thin,
    Square,
}

impl PencilShape {
    pub fn cap_and_join(self) -> (CapShape, JoinShape) {
        match self {
            PencilShape::Round => (CapShape::Round, JoinShape::Round),
            PencilShape::Thin => (CapShape::Butt, JoinShape::Bevel),
            PencilShape::Square => (CapShape::Square, JoinShape::Miter),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PencilShape::Round => "Round",
            PencilShape::Thin => "Thin",
            PencilShape::Square => "Square",
        }
    }
}

/// Compositing mode selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PencilOperator {
    #[default]
    Normal,
    Difference,
    Source,
    Eraser,
}

impl PencilOperator {
    pub fn composite_op(self) -> CompositeOp {
        match self {
            PencilOperator::Normal => CompositeOp::Over,
            PencilOperator::Difference => CompositeOp::Difference,
            PencilOperator::Source => CompositeOp::Source,
            PencilOperator::Eraser => CompositeOp::Clear,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PencilOperator::Normal => "Classic",
            PencilOperator::Difference => "Difference",
            PencilOperator::Source => "Source color",
            PencilOperator::Eraser => "Eraser",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PencilOptions {
    pub shape: PencilShape,
    pub operator: PencilOperator,
    pub dashed: bool,
    pub smoothed: bool,
}

impl Default for PencilOptions {
    fn default() -> Self {
        Self {
            shape: PencilShape::Round,
            operator: PencilOperator::Normal,
            dashed: false,
            smoothed: true,
        }
    }
}

impl PencilOptions {
    /// Short text for the host's status bar, e.g. "Pencil - Round - With dashes".
    pub fn status_label(&self) -> String {
        let mut label = format!("Pencil - {}", self.shape.label());
        if self.dashed {
            label.push_str(" - With dashes");
        }
        label
    }
}

/// Turn option values plus the gesture's color and width into a stroke style.
pub fn resolve_style(options: &PencilOptions, color: Rgba, line_width: f32) -> StrokeStyle {
    let (cap, join) = options.shape.cap_and_join();
    StrokeStyle {
        color,
        line_width,
        cap,
        join,
        operator: options.operator.composite_op(),
        dashed: options.dashed,
        smoothed: options.smoothed,
    }
}
