//! Sun motion over time: the sun direction rotates about a fixed axis with a
//! fixed period, sweeping the same cone (a plane when the initial direction is
//! perpendicular to the axis) every orbit.

use glam::{Quat, Vec3};

/// The sun's path across the sky.
#[derive(Clone, Debug, PartialEq)]
pub struct SunOrbit {
    /// Unit sun direction at time zero.
    pub initial: Vec3,
    /// Unit rotation axis.
    pub axis: Vec3,
    /// Seconds per full orbit. Zero or negative keeps the sun still.
    pub period_seconds: f32,
}

impl SunOrbit {
    /// Create an orbit, normalizing `initial` and `axis`.
    ///
    /// A zero `initial` points the sun straight up (+Y); a zero `axis` keeps
    /// the sun still.
    pub fn new(initial: Vec3, axis: Vec3, period_seconds: f32) -> Self {
        Self {
            initial: initial.try_normalize().unwrap_or(Vec3::Y),
            axis: axis.try_normalize().unwrap_or(Vec3::ZERO),
            period_seconds,
        }
    }

    /// A sun that never moves.
    pub fn stationary(direction: Vec3) -> Self {
        Self::new(direction, Vec3::Y, 0.0)
    }

    /// Whether the sun moves at all.
    pub fn is_moving(&self) -> bool {
        self.period_seconds > 0.0 && self.axis != Vec3::ZERO
    }

    /// Orbit angle in radians at `time` seconds, wrapped to `[0, TAU)`.
    pub fn angle_at(&self, time: f32) -> f32 {
        if !self.is_moving() {
            return 0.0;
        }
        (time / self.period_seconds).rem_euclid(1.0) * std::f32::consts::TAU
    }

    /// Unit sun direction at `time` seconds.
    pub fn direction_at(&self, time: f32) -> Vec3 {
        if !self.is_moving() {
            return self.initial;
        }
        Quat::from_axis_angle(self.axis, self.angle_at(time)) * self.initial
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_direction_at_time_zero() {
        let orbit = SunOrbit::new(Vec3::new(0.2, 0.2, 0.96), Vec3::Y, 60.0);
        let dir = orbit.direction_at(0.0);
        assert!((dir - Vec3::new(0.2, 0.2, 0.96).normalize()).length() < 1e-6);
    }

    #[test]
    fn test_full_period_returns_to_start() {
        let orbit = SunOrbit::new(Vec3::new(1.0, 0.3, 0.0), Vec3::Y, 24.0);
        let start = orbit.direction_at(3.0);
        let later = orbit.direction_at(27.0);
        assert!((start - later).length() < 1e-4);
    }

    #[test]
    fn test_half_period_mirrors_across_axis() {
        let orbit = SunOrbit::new(Vec3::X, Vec3::Y, 10.0);
        let dir = orbit.direction_at(5.0);
        assert!((dir - Vec3::NEG_X).length() < 1e-5, "got {dir}");
    }

    #[test]
    fn test_orbit_stays_in_plane() {
        let orbit = SunOrbit::new(Vec3::Z, Vec3::X, 7.0);
        for i in 0..50 {
            let dir = orbit.direction_at(i as f32 * 0.37);
            assert!(dir.x.abs() < 1e-5, "left the YZ plane: {dir}");
            assert!((dir.length() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_stationary_sun() {
        let orbit = SunOrbit::stationary(Vec3::new(0.0, 5.0, 0.0));
        assert!(!orbit.is_moving());
        assert_eq!(orbit.direction_at(123.0), Vec3::Y);
        assert_eq!(orbit.angle_at(123.0), 0.0);
    }

    #[test]
    fn test_zero_axis_is_stationary() {
        let orbit = SunOrbit::new(Vec3::X, Vec3::ZERO, 10.0);
        assert!(!orbit.is_moving());
        assert_eq!(orbit.direction_at(4.0), Vec3::X);
    }

    #[test]
    fn test_negative_time_wraps() {
        let orbit = SunOrbit::new(Vec3::X, Vec3::Y, 8.0);
        let angle = orbit.angle_at(-2.0);
        assert!((angle - 0.75 * std::f32::consts::TAU).abs() < 1e-5);
    }
}
