// Turns polled mouse state (minifb only tells us "is the button down now?")
// into discrete press / motion / release events for the pencil tool.

use crate::tool::PointerButton;
use crate::types::Point;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Press { pos: Point, button: PointerButton },
    Motion { pos: Point },
    Release { pos: Point },
}

/// Snapshot of the pointer for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerState {
    pub pos: Option<Point>,
    pub primary_down: bool,
    pub secondary_down: bool,
}

#[derive(Debug, Default)]
pub struct PointerTracker {
    held: Option<PointerButton>,
    last_pos: Option<Point>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compare this frame's state with the previous one and report what changed.
    /// The button that started a drag owns it until released; the other button is ignored.
    pub fn update(&mut self, state: PointerState) -> Option<PointerEvent> {
        let pos = state.pos.or(self.last_pos);
        let event = match self.held {
            None => {
                let button = if state.primary_down {
                    Some(PointerButton::Primary)
                } else if state.secondary_down {
                    Some(PointerButton::Secondary)
                } else {
                    None
                };
                match (button, state.pos) {
                    (Some(button), Some(pos)) => {
                        self.held = Some(button);
                        Some(PointerEvent::Press { pos, button })
                    }
                    _ => None,
                }
            }
            Some(button) => {
                let still_down = match button {
                    PointerButton::Primary => state.primary_down,
                    PointerButton::Secondary => state.secondary_down,
                };
                match pos {
                    Some(pos) if !still_down => {
                        self.held = None;
                        Some(PointerEvent::Release { pos })
                    }
                    Some(pos) if Some(pos) != self.last_pos => Some(PointerEvent::Motion { pos }),
                    Some(_) => None,
                    None => {
                        if !still_down {
                            self.held = None;
                        }
                        None
                    }
                }
            }
        };
        if pos.is_some() {
            self.last_pos = pos;
        }
        event
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(x: f32, y: f32, primary: bool, secondary: bool) -> PointerState {
        PointerState {
            pos: Some(Point::new(x, y)),
            primary_down: primary,
            secondary_down: secondary,
        }
    }

    #[test]
    fn drag_produces_press_motion_release() {
        let mut t = PointerTracker::new();
        assert_eq!(t.update(at(1.0, 1.0, false, false)), None);
        assert_eq!(
            t.update(at(1.0, 1.0, true, false)),
            Some(PointerEvent::Press { pos: Point::new(1.0, 1.0), button: PointerButton::Primary })
        );
        assert_eq!(t.update(at(1.0, 1.0, true, false)), None);
        assert_eq!(
            t.update(at(4.0, 2.0, true, false)),
            Some(PointerEvent::Motion { pos: Point::new(4.0, 2.0) })
        );
        assert_eq!(
            t.update(at(4.0, 2.0, false, false)),
            Some(PointerEvent::Release { pos: Point::new(4.0, 2.0) })
        );
    }

    #[test]
    fn right_button_is_secondary_and_owns_the_drag() {
        let mut t = PointerTracker::new();
        assert!(matches!(
            t.update(at(0.0, 0.0, false, true)),
            Some(PointerEvent::Press { button: PointerButton::Secondary, .. })
        ));
        // pressing the other button meanwhile does not end the drag
        assert!(matches!(t.update(at(2.0, 0.0, true, true)), Some(PointerEvent::Motion { .. })));
        assert!(matches!(t.update(at(2.0, 0.0, true, false)), Some(PointerEvent::Release { .. })));
    }

    #[test]
    fn no_press_outside_the_window() {
        let mut t = PointerTracker::new();
        let state = PointerState { pos: None, primary_down: true, secondary_down: false };
        assert_eq!(t.update(state), None);
    }
}
