//! Error types for physics operations.

use std::fmt;

use glam::Vec2;

/// Errors reported when a body is constructed with invalid parameters.
///
/// Everything past construction is handled defensively: unknown touch ids,
/// absent force slots and zero-length normalization are all no-ops.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PhysicsError {
    /// Mass must be positive and finite.
    InvalidMass(f32),
    /// Body size must have positive, finite extents.
    InvalidSize(Vec2),
}

impl fmt::Display for PhysicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhysicsError::InvalidMass(mass) => {
                write!(f, "mass must be positive and finite, got {}", mass)
            }
            PhysicsError::InvalidSize(size) => {
                write!(f, "size must have positive, finite extents, got {}", size)
            }
        }
    }
}

impl std::error::Error for PhysicsError {}
