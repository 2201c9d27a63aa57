use std::time::Duration;

use crate::constants::{
    SPRING_DAMPING, SPRING_MASS, SPRING_REST_DELTA, SPRING_REST_SPEED, SPRING_STIFFNESS,
    SPRING_SUBSTEP_SECS,
};

/// A damped spring that chases a target value over real time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    pub position: f32,
    pub velocity: f32,
    pub target: f32,
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
}

impl Default for Spring {
    fn default() -> Self {
        Self {
            position: 0.0,
            velocity: 0.0,
            target: 0.0,
            stiffness: SPRING_STIFFNESS,
            damping: SPRING_DAMPING,
            mass: SPRING_MASS,
        }
    }
}

impl Spring {
    /// Creates a new spring with custom parameters.
    pub fn new(stiffness: f32, damping: f32, mass: f32) -> Self {
        Self {
            stiffness,
            damping,
            mass: if mass > 0.0 { mass } else { SPRING_MASS },
            ..Default::default()
        }
    }

    /// Advances the spring by `elapsed`. Returns true if still animating.
    ///
    /// Integration runs in fixed substeps so a long frame cannot blow up
    /// the simulation.
    pub fn update(&mut self, elapsed: Duration) -> bool {
        if self.is_at_rest() {
            return false;
        }

        let mut remaining = elapsed.as_secs_f32();
        while remaining > 0.0 {
            let h = remaining.min(SPRING_SUBSTEP_SECS);
            let displacement = self.position - self.target;
            let force = -self.stiffness * displacement - self.damping * self.velocity;
            self.velocity += force / self.mass * h;
            self.position += self.velocity * h;
            remaining -= h;
        }

        // If very close to target and velocity is low, snap to target
        if self.is_at_rest() {
            self.position = self.target;
            self.velocity = 0.0;
            return false;
        }

        true
    }

    /// Sets the target value for the spring to animate towards.
    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    pub fn is_at_rest(&self) -> bool {
        (self.target - self.position).abs() < SPRING_REST_DELTA
            && self.velocity.abs() < SPRING_REST_SPEED
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_frames(spring: &mut Spring, frames: usize) {
        for _ in 0..frames {
            spring.update(Duration::from_millis(16));
        }
    }

    #[test]
    fn test_spring_settles_on_target() {
        let mut spring = Spring::default();
        spring.set_target(0.5);
        run_frames(&mut spring, 300);
        assert_eq!(spring.position, 0.5);
        assert_eq!(spring.velocity, 0.0);
        assert!(!spring.update(Duration::from_millis(16)));
    }

    #[test]
    fn test_spring_moves_toward_target() {
        let mut spring = Spring::default();
        spring.set_target(-0.5);
        assert!(spring.update(Duration::from_millis(16)));
        assert!(spring.position < 0.0);
        assert!(spring.position > -0.5);
    }

    #[test]
    fn test_resting_spring_does_not_animate() {
        let mut spring = Spring::default();
        assert!(!spring.update(Duration::from_millis(16)));
        assert_eq!(spring.position, 0.0);
    }

    #[test]
    fn test_single_long_frame_is_stable() {
        let mut spring = Spring::default();
        spring.set_target(0.5);
        spring.update(Duration::from_secs(10));
        assert!((spring.position - 0.5).abs() < SPRING_REST_DELTA);
    }
}
