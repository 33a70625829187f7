//! Vector types in their wire representation.
//!
//! Both types are `repr(C)` sequences of `f32`, so their little-endian byte
//! image is exactly what the movement block expects.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// 3D vector - position, offset, spline node.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Vector3 {
    /// X component
    pub x: f32,
    /// Y component
    pub y: f32,
    /// Z component
    pub z: f32,
}

impl Vector3 {
    /// Creates a new vector.
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Zero vector
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Size on the wire in bytes.
    pub const SIZE: usize = 12;

    /// Converts to array
    #[must_use]
    pub const fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    /// Distance squared (avoids sqrt)
    #[must_use]
    pub fn distance_squared(self, other: Self) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        dx * dx + dy * dy + dz * dz
    }

    /// Extends this vector with a facing angle.
    #[must_use]
    pub const fn with_orientation(self, orientation: f32) -> Vector4 {
        Vector4::new(self.x, self.y, self.z, orientation)
    }
}

/// A position plus facing angle (radians), the pose of a living entity.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Vector4 {
    /// X component
    pub x: f32,
    /// Y component
    pub y: f32,
    /// Z component
    pub z: f32,
    /// Facing angle in radians.
    pub orientation: f32,
}

impl Vector4 {
    /// Creates a new pose.
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32, orientation: f32) -> Self {
        Self { x, y, z, orientation }
    }

    /// Zero pose
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Size on the wire in bytes.
    pub const SIZE: usize = 16;

    /// Drops the facing angle.
    #[must_use]
    pub const fn position(self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_sizes_match_pod_sizes() {
        assert_eq!(std::mem::size_of::<Vector3>(), Vector3::SIZE);
        assert_eq!(std::mem::size_of::<Vector4>(), Vector4::SIZE);
    }

    #[test]
    fn test_pod_bytes_are_little_endian_floats() {
        let v = Vector4::new(1.0, -2.0, 0.5, 3.0);
        let bytes = bytemuck::bytes_of(&v);
        assert_eq!(&bytes[0..4], &1.0f32.to_le_bytes());
        assert_eq!(&bytes[4..8], &(-2.0f32).to_le_bytes());
        assert_eq!(&bytes[12..16], &3.0f32.to_le_bytes());
    }

    #[test]
    fn test_orientation_round_trip() {
        let p = Vector3::new(1.0, 2.0, 3.0);
        let pose = p.with_orientation(1.5);
        assert_eq!(pose.position(), p);
        assert_eq!(pose.orientation, 1.5);
        assert_eq!(p.distance_squared(Vector3::ZERO), 14.0);
    }

    #[test]
    fn test_pose_from_toml() {
        let pose: Vector4 = toml::from_str("x = 1.0\ny = 2.0\nz = 3.0\norientation = 0.25").unwrap();
        assert_eq!(pose, Vector4::new(1.0, 2.0, 3.0, 0.25));
    }
}
