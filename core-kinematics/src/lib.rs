mod error;
mod kinematics;
mod math;

use wasm_bindgen::prelude::*;

pub use crate::error::KinematicsError;
pub use crate::kinematics::{
    projectile_distance, projectile_drop, time_to_fall, Kinematics, KinematicsConfig,
    STANDARD_GRAVITY,
};
pub use crate::math::{trace_equality, EqualityReport, Vector2D, EPSILON};

// --- JS FACADE ---
// Velocities cross the boundary in polar form (speed + launch angle in degrees),
// which is how a launch is usually described on the JS side.
#[wasm_bindgen]
pub struct ProjectileCalculator {
    kinematics: Kinematics,
}

#[wasm_bindgen]
impl ProjectileCalculator {
    #[wasm_bindgen(constructor)]
    pub fn new(accel_magnitude: f64, accel_direction: f64) -> ProjectileCalculator {
        // Panic hook for better error logging in browser console
        console_error_panic_hook::set_once();

        ProjectileCalculator {
            kinematics: Kinematics::new(KinematicsConfig {
                acceleration: Vector2D::new(accel_magnitude, accel_direction),
            }),
        }
    }

    pub fn with_standard_gravity() -> ProjectileCalculator {
        console_error_panic_hook::set_once();

        ProjectileCalculator {
            kinematics: Kinematics::default(),
        }
    }

    pub fn acceleration_x(&self) -> f64 {
        self.kinematics.acceleration().x()
    }

    pub fn acceleration_y(&self) -> f64 {
        self.kinematics.acceleration().y()
    }

    pub fn projectile_drop(&self, speed: f64, angle: f64, time: f64) -> f64 {
        self.kinematics.projectile_drop(&Vector2D::new(speed, angle), time)
    }

    /// Errors surface in JS as a thrown `Error` carrying the Rust message.
    pub fn time_to_fall(&self, height: f64) -> Result<f64, JsError> {
        Ok(self.kinematics.time_to_fall(height)?)
    }

    pub fn projectile_distance(&self, speed: f64, angle: f64, height: f64) -> Result<f64, JsError> {
        Ok(self
            .kinematics
            .projectile_distance(&Vector2D::new(speed, angle), height)?)
    }
}
