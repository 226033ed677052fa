//! Error types for the particle field.

use std::fmt;

/// Errors raised when building or advancing a particle field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldError {
    /// The field needs at least one particle.
    InvalidParticleCount(u32),
    /// A numeric parameter is out of range or not finite.
    InvalidParameter { name: &'static str, value: f32 },
    /// A seeding buffer does not match the particle count.
    BufferLength { expected: usize, actual: usize },
    /// Elapsed time or frame input contains NaN or infinity.
    NonFiniteInput,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::InvalidParticleCount(n) => {
                write!(f, "Particle count must be positive, got {}", n)
            }
            FieldError::InvalidParameter { name, value } => {
                write!(f, "Invalid value for {}: {}", name, value)
            }
            FieldError::BufferLength { expected, actual } => write!(
                f,
                "Buffer holds {} particles but the field has {}",
                actual, expected
            ),
            FieldError::NonFiniteInput => write!(f, "Frame input must be finite"),
        }
    }
}

impl std::error::Error for FieldError {}
