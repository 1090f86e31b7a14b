//! Transform component for scene objects
//!
//! Pure data component holding the spatial state behaviours read and write.
//! Rotation is an Euler-angle triple in radians rather than a quaternion:
//! the scripting contract accumulates per-axis angles without wraparound,
//! which a normalized quaternion cannot represent.

use crate::foundation::math::Vec3;

/// Spatial state of a scene object
///
/// Position, rotation, and scale are each replaced as whole triples; there
/// are no per-axis setters, so a transform never holds a partial update.
#[derive(Debug, Clone, PartialEq)]
pub struct TransformComponent {
    position: Vec3,
    /// Euler angles in radians, applied per axis
    rotation: Vec3,
    scale: Vec3,
}

impl Default for TransformComponent {
    fn default() -> Self {
        Self {
            position: Vec3::zeros(),
            rotation: Vec3::zeros(),
            scale: Vec3::new(1.0, 1.0, 1.0),
        }
    }
}

impl TransformComponent {
    /// Create an identity transform at the origin
    #[must_use]
    pub fn identity() -> Self {
        Self::default()
    }

    /// Create a transform with only position set
    #[must_use]
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Create a transform from full position, rotation, and scale
    #[must_use]
    pub const fn from_parts(position: Vec3, rotation: Vec3, scale: Vec3) -> Self {
        Self {
            position,
            rotation,
            scale,
        }
    }

    /// World space position
    #[must_use]
    pub const fn position(&self) -> Vec3 {
        self.position
    }

    /// Replace the position
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Euler rotation in radians
    #[must_use]
    pub const fn rotation(&self) -> Vec3 {
        self.rotation
    }

    /// Replace the rotation (Euler radians)
    pub fn set_rotation(&mut self, rotation: Vec3) {
        self.rotation = rotation;
    }

    /// Scale factors
    #[must_use]
    pub const fn scale(&self) -> Vec3 {
        self.scale
    }

    /// Replace the scale
    pub fn set_scale(&mut self, scale: Vec3) {
        self.scale = scale;
    }

    /// Builder pattern: set position
    #[must_use]
    pub const fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    /// Builder pattern: set rotation (Euler radians)
    #[must_use]
    pub const fn with_rotation(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    /// Builder pattern: set scale
    #[must_use]
    pub const fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_transform() {
        let transform = TransformComponent::identity();

        assert_eq!(transform.position(), Vec3::zeros());
        assert_eq!(transform.rotation(), Vec3::zeros());
        assert_eq!(transform.scale(), Vec3::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn test_from_position() {
        let position = Vec3::new(1.0, 2.0, 3.0);
        let transform = TransformComponent::from_position(position);

        assert_eq!(transform.position(), position);
        assert_eq!(transform.rotation(), Vec3::zeros());
        assert_eq!(transform.scale(), Vec3::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn test_setters_replace_whole_triples() {
        let mut transform = TransformComponent::identity();

        transform.set_position(Vec3::new(4.0, 5.0, 6.0));
        transform.set_rotation(Vec3::new(0.0, 0.0, 1.5));
        transform.set_scale(Vec3::new(2.0, 2.0, 2.0));

        assert_eq!(transform.position(), Vec3::new(4.0, 5.0, 6.0));
        assert_eq!(transform.rotation(), Vec3::new(0.0, 0.0, 1.5));
        assert_eq!(transform.scale(), Vec3::new(2.0, 2.0, 2.0));
    }

    #[test]
    fn test_builder_chain() {
        let transform = TransformComponent::identity()
            .with_position(Vec3::new(1.0, 0.0, 0.0))
            .with_rotation(Vec3::new(0.0, 1.0, 0.0))
            .with_scale(Vec3::new(1.0, 2.0, 3.0));

        assert_eq!(transform.position(), Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(transform.rotation(), Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(transform.scale(), Vec3::new(1.0, 2.0, 3.0));
    }
}
