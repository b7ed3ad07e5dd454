use crate::error::KinematicsError;
use crate::math::Vector2D;

#[cfg(feature = "debug")]
use tracing::trace;

/// Pull of 9.8 straight down. Identical to `Vector2D::new(9.8, -90.0)`.
pub const STANDARD_GRAVITY: Vector2D = Vector2D::from_parts(9.8, -90.0, 0.0, -9.8);

/// `velocity.y + 0.5 * acceleration.y * time^2`.
///
/// The first term is the vertical velocity itself, not a displacement; the
/// sum is returned as-is.
pub fn projectile_drop(velocity: &Vector2D, time: f64, acceleration: &Vector2D) -> f64 {
    let drop = velocity.y() + 0.5 * acceleration.y() * (time * time);

    #[cfg(feature = "debug")]
    trace!(time, drop, "projectile_drop");

    drop
}

/// `sqrt(2 * height / acceleration.y)`.
///
/// `height` and `acceleration.y` must share a sign. Under `STANDARD_GRAVITY`
/// that means a fall is given as a negative height.
pub fn time_to_fall(height: f64, acceleration: &Vector2D) -> Result<f64, KinematicsError> {
    if acceleration.y() == 0.0 {
        return Err(KinematicsError::DivisionByZero);
    }

    let radicand = 2.0 * height / acceleration.y();
    if radicand < 0.0 {
        return Err(KinematicsError::NegativeRadicand { radicand });
    }

    let time = radicand.sqrt();

    #[cfg(feature = "debug")]
    trace!(height, time, "time_to_fall");

    Ok(time)
}

/// `velocity.x + acceleration.x * height / acceleration.y`.
pub fn projectile_distance(
    velocity: &Vector2D,
    height: f64,
    acceleration: &Vector2D,
) -> Result<f64, KinematicsError> {
    if acceleration.y() == 0.0 {
        return Err(KinematicsError::DivisionByZero);
    }

    let distance = velocity.x() + acceleration.x() * height / acceleration.y();

    #[cfg(feature = "debug")]
    trace!(height, distance, "projectile_distance");

    Ok(distance)
}

#[derive(Clone, Copy, Debug)]
pub struct KinematicsConfig {
    /// Constant acceleration applied to every projectile.
    pub acceleration: Vector2D,
}

impl Default for KinematicsConfig {
    fn default() -> Self {
        Self {
            acceleration: STANDARD_GRAVITY,
        }
    }
}

/// The three formulas bound to one configured acceleration.
#[derive(Clone, Copy, Debug, Default)]
pub struct Kinematics {
    config: KinematicsConfig,
}

impl Kinematics {
    pub fn new(config: KinematicsConfig) -> Self {
        Self { config }
    }

    pub fn acceleration(&self) -> &Vector2D {
        &self.config.acceleration
    }

    pub fn projectile_drop(&self, velocity: &Vector2D, time: f64) -> f64 {
        projectile_drop(velocity, time, &self.config.acceleration)
    }

    pub fn time_to_fall(&self, height: f64) -> Result<f64, KinematicsError> {
        time_to_fall(height, &self.config.acceleration)
    }

    pub fn projectile_distance(&self, velocity: &Vector2D, height: f64) -> Result<f64, KinematicsError> {
        projectile_distance(velocity, height, &self.config.acceleration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-12;

    #[test]
    fn standard_gravity_matches_polar_constructor() {
        assert_eq!(STANDARD_GRAVITY, Vector2D::new(9.8, -90.0));
        assert_eq!(STANDARD_GRAVITY.x(), 0.0);
        assert_eq!(STANDARD_GRAVITY.y(), -9.8);
    }

    #[test]
    fn drop_adds_half_at_squared_to_vertical_velocity() {
        let velocity = Vector2D::from_components(3.0, 4.0);
        let drop = projectile_drop(&velocity, 2.0, &STANDARD_GRAVITY);
        assert!((drop - (4.0 - 0.5 * 9.8 * 4.0)).abs() < TOL);

        // No time elapsed leaves just the vertical velocity
        assert_eq!(projectile_drop(&velocity, 0.0, &STANDARD_GRAVITY), 4.0);
    }

    #[test]
    fn time_to_fall_with_matching_signs() {
        let up = Vector2D::from_components(0.0, 9.8);
        let t = time_to_fall(490.0, &up).unwrap();
        assert!((t - 10.0).abs() < TOL);

        let t = time_to_fall(-490.0, &STANDARD_GRAVITY).unwrap();
        assert!((t - 10.0).abs() < TOL);
    }

    #[test]
    fn time_to_fall_rejects_negative_radicand() {
        let down = Vector2D::from_components(0.0, -9.8);
        match time_to_fall(490.0, &down) {
            Err(KinematicsError::NegativeRadicand { radicand }) => {
                assert!((radicand + 100.0).abs() < TOL);
            }
            other => panic!("expected a domain error, got {other:?}"),
        }
    }

    #[test]
    fn time_to_fall_from_zero_height() {
        assert_eq!(time_to_fall(0.0, &STANDARD_GRAVITY), Ok(0.0));
    }

    #[test]
    fn zero_vertical_acceleration_is_an_error() {
        let sideways = Vector2D::from_components(3.0, 0.0);
        let velocity = Vector2D::from_components(20.0, 0.0);
        assert_eq!(time_to_fall(10.0, &sideways), Err(KinematicsError::DivisionByZero));
        assert_eq!(
            projectile_distance(&velocity, 10.0, &sideways),
            Err(KinematicsError::DivisionByZero)
        );
    }

    #[test]
    fn distance_without_lateral_acceleration() {
        let velocity = Vector2D::from_components(20.0, 0.0);
        let down = Vector2D::from_components(0.0, -9.8);
        assert_eq!(projectile_distance(&velocity, 100.0, &down), Ok(20.0));
    }

    #[test]
    fn distance_with_lateral_acceleration() {
        let velocity = Vector2D::from_components(20.0, 0.0);
        let accel = Vector2D::from_components(2.0, -4.0);
        // 20 + 2 * 100 / -4
        assert_eq!(projectile_distance(&velocity, 100.0, &accel), Ok(-30.0));
    }

    #[test]
    fn configured_kinematics_uses_its_acceleration() {
        let default = Kinematics::default();
        assert_eq!(*default.acceleration(), STANDARD_GRAVITY);

        let kinematics = Kinematics::new(KinematicsConfig {
            acceleration: Vector2D::from_components(1.0, 2.0),
        });
        let velocity = Vector2D::from_components(5.0, 1.0);
        assert_eq!(kinematics.projectile_drop(&velocity, 2.0), 1.0 + 0.5 * 2.0 * 4.0);
        assert_eq!(kinematics.time_to_fall(4.0), Ok(2.0));
        assert_eq!(kinematics.projectile_distance(&velocity, 4.0), Ok(7.0));
    }
}
