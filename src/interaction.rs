//! Drag-to-rotate interaction.
//!
//! The controller owns the cumulative rotation applied to the chart. Render
//! backends forward pointer events to it and redraw whenever a move reports
//! that the rotation changed.

use crate::geom::ScreenPoint;
use crate::transform::Transform;

/// Default tilt about the X axis so the initial view is not edge-on.
pub const INITIAL_TILT_DEGREES: f64 = 90.0;

/// Pointer drag state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragState {
    /// No drag in progress.
    Idle,
    /// A drag is in progress; `last` is the most recent pointer position.
    Dragging {
        /// Last recorded pointer position.
        last: ScreenPoint,
    },
}

/// Accumulates pointer drags into a rotation transform.
#[derive(Debug, Clone)]
pub struct RotationController {
    initial: Transform,
    rotation: Transform,
    drag: DragState,
    degrees_per_pixel: f64,
}

impl RotationController {
    /// Create a controller tilted by [`INITIAL_TILT_DEGREES`].
    pub fn new() -> Self {
        Self::with_tilt(INITIAL_TILT_DEGREES)
    }

    /// Create a controller with a custom initial tilt about the X axis.
    pub fn with_tilt(degrees: f64) -> Self {
        let initial = Transform::identity().compose(&Transform::rotate_x(degrees));
        Self {
            initial,
            rotation: initial,
            drag: DragState::Idle,
            degrees_per_pixel: 1.0,
        }
    }

    /// Scale pointer deltas before they become rotation angles.
    pub fn with_sensitivity(mut self, degrees_per_pixel: f64) -> Self {
        self.degrees_per_pixel = degrees_per_pixel;
        self
    }

    /// Current cumulative rotation.
    pub fn rotation(&self) -> Transform {
        self.rotation
    }

    /// Current drag state.
    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    /// Check whether a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragState::Dragging { .. })
    }

    /// Start a drag at `position`. Ignored while a drag is already active.
    pub fn pointer_down(&mut self, position: ScreenPoint) {
        if self.is_dragging() {
            return;
        }
        self.drag = DragState::Dragging { last: position };
    }

    /// Rotate by the delta since the last recorded position.
    ///
    /// Dragging right yaws right and dragging up pitches up. Returns `true`
    /// when the rotation changed and the chart needs a redraw.
    #[must_use]
    pub fn pointer_move(&mut self, position: ScreenPoint) -> bool {
        let DragState::Dragging { last } = self.drag else {
            return false;
        };
        let dx = (position.x - last.x) as f64 * self.degrees_per_pixel;
        let dy = (position.y - last.y) as f64 * self.degrees_per_pixel;
        self.drag = DragState::Dragging { last: position };
        self.rotation = self
            .rotation
            .compose(&Transform::rotate_y(dx))
            .compose(&Transform::rotate_x(-dy));
        true
    }

    /// End the drag. The accumulated rotation is kept.
    pub fn pointer_up(&mut self) {
        self.drag = DragState::Idle;
    }

    /// Return to the initial tilt and cancel any drag.
    pub fn reset(&mut self) {
        self.rotation = self.initial;
        self.drag = DragState::Idle;
    }
}

impl Default for RotationController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(rotation: Transform, dx: f64, dy: f64) -> Transform {
        rotation
            .compose(&Transform::rotate_y(dx))
            .compose(&Transform::rotate_x(-dy))
    }

    #[test]
    fn starts_idle_with_tilt() {
        let controller = RotationController::new();
        assert!(!controller.is_dragging());
        assert_eq!(controller.rotation(), Transform::rotate_x(90.0));
    }

    #[test]
    fn moves_use_delta_from_previous_position() {
        let mut controller = RotationController::new();
        let start = controller.rotation();

        controller.pointer_down(ScreenPoint::new(50.0, 50.0));
        assert!(controller.pointer_move(ScreenPoint::new(60.0, 55.0)));
        let after_first = step(start, 10.0, 5.0);
        assert_eq!(controller.rotation(), after_first);

        assert!(controller.pointer_move(ScreenPoint::new(45.0, 40.0)));
        let after_second = step(after_first, -15.0, -15.0);
        assert_eq!(controller.rotation(), after_second);
        assert_eq!(
            controller.drag_state(),
            DragState::Dragging {
                last: ScreenPoint::new(45.0, 40.0)
            }
        );
    }

    #[test]
    fn moves_while_idle_are_ignored() {
        let mut controller = RotationController::new();
        let before = controller.rotation();
        assert!(!controller.pointer_move(ScreenPoint::new(10.0, 10.0)));
        assert_eq!(controller.rotation(), before);
    }

    #[test]
    fn second_pointer_down_keeps_anchor() {
        let mut controller = RotationController::new();
        controller.pointer_down(ScreenPoint::new(0.0, 0.0));
        controller.pointer_down(ScreenPoint::new(100.0, 100.0));
        assert_eq!(
            controller.drag_state(),
            DragState::Dragging {
                last: ScreenPoint::new(0.0, 0.0)
            }
        );
    }

    #[test]
    fn pointer_up_keeps_rotation() {
        let mut controller = RotationController::new();
        controller.pointer_down(ScreenPoint::new(0.0, 0.0));
        assert!(controller.pointer_move(ScreenPoint::new(20.0, 0.0)));
        let rotated = controller.rotation();
        controller.pointer_up();
        assert!(!controller.is_dragging());
        assert_eq!(controller.rotation(), rotated);
        assert!(!controller.pointer_move(ScreenPoint::new(40.0, 0.0)));
        assert_eq!(controller.rotation(), rotated);
    }

    #[test]
    fn reset_restores_initial_tilt() {
        let mut controller = RotationController::with_tilt(30.0);
        controller.pointer_down(ScreenPoint::new(0.0, 0.0));
        assert!(controller.pointer_move(ScreenPoint::new(5.0, 7.0)));
        controller.reset();
        assert_eq!(controller.rotation(), Transform::rotate_x(30.0));
        assert!(!controller.is_dragging());
    }

    #[test]
    fn sensitivity_scales_angles() {
        let mut controller = RotationController::with_tilt(0.0).with_sensitivity(0.5);
        controller.pointer_down(ScreenPoint::new(0.0, 0.0));
        assert!(controller.pointer_move(ScreenPoint::new(20.0, 0.0)));
        assert_eq!(
            controller.rotation(),
            step(Transform::rotate_x(0.0), 10.0, 0.0)
        );
    }
}
