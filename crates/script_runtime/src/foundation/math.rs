//! Math utilities and types
//!
//! Provides the fundamental math types the scripting surface works with.
//! Behaviours and components deal in plain position/rotation triples, so the
//! aliases below are the whole vocabulary.

pub use nalgebra::{Vector2, Vector3, Vector4};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 4D vector type
pub type Vec4 = Vector4<f32>;

/// Convert an angle in degrees to radians.
#[must_use]
pub fn radians(degrees: f32) -> f32 {
    degrees.to_radians()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_radians_conversion() {
        assert_relative_eq!(radians(180.0), std::f32::consts::PI, epsilon = 1e-6);
        assert_relative_eq!(radians(45.0), std::f32::consts::FRAC_PI_4, epsilon = 1e-6);
        assert_relative_eq!(radians(0.0), 0.0);
    }
}
