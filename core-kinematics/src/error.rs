use std::{error::Error, fmt::Display};

/// Failure modes of the closed-form kinematics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KinematicsError {
    /// The vertical component of the acceleration is zero.
    DivisionByZero,
    /// The value under a square root came out negative.
    NegativeRadicand { radicand: f64 },
}

impl Display for KinematicsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KinematicsError::DivisionByZero => {
                write!(f, "division by zero: vertical acceleration is 0")
            }
            KinematicsError::NegativeRadicand { radicand } => {
                write!(f, "math domain error: square root of negative value {radicand}")
            }
        }
    }
}

impl Error for KinematicsError {}
