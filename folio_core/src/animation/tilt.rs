use std::time::Duration;

use serde::Serialize;

use super::Spring;
use crate::constants::TILT_MAX_ANGLE_DEG;
use crate::geometry::{Point, Rect};

/// Card rotation in degrees, ready for a 3D transform.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Rotation {
    pub x_deg: f32,
    pub y_deg: f32,
}

/// Maps `value` from `domain` onto `range`, clamped to the range ends.
pub fn linear_map(value: f32, domain: (f32, f32), range: (f32, f32)) -> f32 {
    let span = domain.1 - domain.0;
    if span == 0.0 {
        return range.0;
    }
    let t = ((value - domain.0) / span).clamp(0.0, 1.0);
    range.0 + (range.1 - range.0) * t
}

/// Pointer position relative to the center of `bounds`, in [-0.5, 0.5]
/// while the pointer is inside. Positions outside extrapolate.
pub fn normalized_offset(bounds: &Rect, pointer: Point) -> (f32, f32) {
    let nx = if bounds.width > 0.0 {
        (pointer.x - bounds.left()) / bounds.width - 0.5
    } else {
        0.0
    };
    let ny = if bounds.height > 0.0 {
        (pointer.y - bounds.top()) / bounds.height - 0.5
    } else {
        0.0
    };
    (nx, ny)
}

/// State for a tilt-responsive project card.
///
/// Pointer events retarget two springs; the render loop calls
/// [`TiltCard::update`] once per frame with the elapsed time.
#[derive(Debug, Clone)]
pub struct TiltCard {
    pub bounds: Rect,
    pub max_angle_deg: f32,
    x: Spring,
    y: Spring,
    is_hovered: bool,
}

impl TiltCard {
    pub fn new(bounds: Rect) -> Self {
        Self::with_spring(bounds, Spring::default(), TILT_MAX_ANGLE_DEG)
    }

    /// Uses `spring` as the template for both axes.
    pub fn with_spring(bounds: Rect, spring: Spring, max_angle_deg: f32) -> Self {
        Self {
            bounds,
            max_angle_deg,
            x: spring,
            y: spring,
            is_hovered: false,
        }
    }

    /// Retargets the springs toward the pointer.
    pub fn pointer_moved(&mut self, pointer: Point) {
        let (nx, ny) = normalized_offset(&self.bounds, pointer);
        self.is_hovered = true;
        self.x.set_target(nx);
        self.y.set_target(ny);
    }

    /// Relaxes the card back to flat, wherever the pointer was.
    pub fn pointer_left(&mut self) {
        self.is_hovered = false;
        self.x.set_target(0.0);
        self.y.set_target(0.0);
    }

    /// Advances both springs. Returns true while the card is still moving.
    pub fn update(&mut self, elapsed: Duration) -> bool {
        let moving_x = self.x.update(elapsed);
        let moving_y = self.y.update(elapsed);
        moving_x || moving_y
    }

    pub fn is_hovered(&self) -> bool {
        self.is_hovered
    }

    /// Raw spring targets, as last set by a pointer event.
    pub fn target_offset(&self) -> (f32, f32) {
        (self.x.target, self.y.target)
    }

    /// Smoothed offsets currently driving the rotation.
    pub fn smoothed_offset(&self) -> (f32, f32) {
        (self.x.position, self.y.position)
    }

    /// Horizontal pointer travel turns the card about its Y axis, vertical
    /// travel about its X axis with the sign flipped.
    pub fn rotation(&self) -> Rotation {
        let max = self.max_angle_deg;
        Rotation {
            x_deg: linear_map(self.y.position, (-0.5, 0.5), (max, -max)),
            y_deg: linear_map(self.x.position, (-0.5, 0.5), (-max, max)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settle(card: &mut TiltCard) {
        for _ in 0..600 {
            if !card.update(Duration::from_millis(16)) {
                break;
            }
        }
    }

    fn card() -> TiltCard {
        TiltCard::new(Rect::new(100.0, 50.0, 300.0, 200.0))
    }

    #[test]
    fn test_center_pointer_is_flat() {
        let mut card = card();
        card.pointer_moved(Point::new(250.0, 150.0));
        assert_eq!(card.target_offset(), (0.0, 0.0));
        settle(&mut card);
        assert_eq!(card.rotation(), Rotation { x_deg: 0.0, y_deg: 0.0 });
    }

    #[test]
    fn test_top_left_corner_tilts_toward_corner() {
        let mut card = card();
        card.pointer_moved(Point::new(100.0, 50.0));
        assert_eq!(card.target_offset(), (-0.5, -0.5));
        settle(&mut card);
        let rotation = card.rotation();
        assert!((rotation.x_deg - 7.5).abs() < 1e-3);
        assert!((rotation.y_deg + 7.5).abs() < 1e-3);
    }

    #[test]
    fn test_pointer_leave_relaxes_to_flat() {
        let mut card = card();
        card.pointer_moved(Point::new(400.0, 250.0));
        settle(&mut card);
        assert!(card.rotation().y_deg > 7.0);

        card.pointer_left();
        assert_eq!(card.target_offset(), (0.0, 0.0));
        assert!(!card.is_hovered());
        settle(&mut card);
        assert_eq!(card.smoothed_offset(), (0.0, 0.0));
    }

    #[test]
    fn test_springs_smooth_the_motion() {
        let mut card = card();
        card.pointer_moved(Point::new(400.0, 50.0));
        card.update(Duration::from_millis(16));
        let (sx, _) = card.smoothed_offset();
        assert!(sx > 0.0 && sx < 0.5);
    }

    #[test]
    fn test_outside_pointer_extrapolates() {
        let bounds = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert_eq!(normalized_offset(&bounds, Point::new(150.0, -50.0)), (1.0, -1.0));
    }

    #[test]
    fn test_linear_map_clamps_to_range() {
        assert_eq!(linear_map(0.0, (-0.5, 0.5), (7.5, -7.5)), 0.0);
        assert_eq!(linear_map(0.25, (-0.5, 0.5), (-7.5, 7.5)), 3.75);
        assert_eq!(linear_map(2.0, (-0.5, 0.5), (-7.5, 7.5)), 7.5);
    }
}
