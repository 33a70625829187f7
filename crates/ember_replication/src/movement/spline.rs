//! Spline path carried at the end of a living region.
//!
//! ```text
//! [flags u32][facing?][time passed u32][duration u32][id u32]
//! [duration mod f32][duration mod next f32][vertical accel f32]
//! [effect start u32][node count u32][nodes Vector3 * n][mode u8][final node Vector3]
//! ```

use ember_shared::Vector3;

use super::flags::SplineFlags;
use crate::protocol::WireWriter;

/// What the unit faces at the end of the spline.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum SplineFacing {
    /// No facing data.
    #[default]
    None,
    /// Faces a point.
    Point(Vector3),
    /// Faces another object.
    Target(u64),
    /// Faces an angle in radians.
    Angle(f32),
}

impl SplineFacing {
    /// Flag bit announcing this facing.
    #[must_use]
    pub const fn flag(self) -> SplineFlags {
        match self {
            Self::None => SplineFlags::EMPTY,
            Self::Point(_) => SplineFlags::FINAL_POINT,
            Self::Target(_) => SplineFlags::FINAL_TARGET,
            Self::Angle(_) => SplineFlags::FINAL_ANGLE,
        }
    }
}

/// A spline in progress.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SplineData {
    /// Spline flags. Facing bits are replaced by [`SplineData::facing`] on
    /// encode.
    pub flags: SplineFlags,
    /// Final facing.
    pub facing: SplineFacing,
    /// Milliseconds since the spline started.
    pub time_passed: u32,
    /// Total duration in milliseconds.
    pub duration: u32,
    /// Spline id.
    pub id: u32,
    /// Duration modifier.
    pub duration_mod: f32,
    /// Duration modifier for the next segment.
    pub duration_mod_next: f32,
    /// Vertical acceleration for parabolic splines.
    pub vertical_acceleration: f32,
    /// Effect start time.
    pub effect_start_time: u32,
    /// Path nodes. At most [`MAX_LIST_LEN`] are encoded.
    ///
    /// [`MAX_LIST_LEN`]: crate::protocol::MAX_LIST_LEN
    pub nodes: Vec<Vector3>,
    /// Interpolation mode.
    pub mode: u8,
    /// Destination.
    pub final_node: Vector3,
}

impl SplineData {
    /// Flags as written: the stored flags with the facing bits taken from
    /// the facing variant.
    #[must_use]
    pub fn wire_flags(&self) -> SplineFlags {
        self.flags.without(SplineFlags::FACING).with(self.facing.flag())
    }

    /// Writes the spline.
    pub fn encode(&self, out: &mut WireWriter) {
        out.write_u32(self.wire_flags().bits());
        match self.facing {
            SplineFacing::None => {}
            SplineFacing::Point(point) => out.write_pod(&point),
            SplineFacing::Target(guid) => out.write_u64(guid),
            SplineFacing::Angle(angle) => out.write_f32(angle),
        }
        out.write_u32(self.time_passed);
        out.write_u32(self.duration);
        out.write_u32(self.id);
        out.write_f32(self.duration_mod);
        out.write_f32(self.duration_mod_next);
        out.write_f32(self.vertical_acceleration);
        out.write_u32(self.effect_start_time);

        let count = out.write_count(self.nodes.len());
        for node in &self.nodes[..count] {
            out.write_pod(node);
        }
        out.write_u8(self.mode);
        out.write_pod(&self.final_node);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_facing_bits_follow_variant() {
        let spline = SplineData {
            flags: SplineFlags::FINAL_POINT | SplineFlags::CYCLIC,
            facing: SplineFacing::Angle(1.5),
            ..SplineData::default()
        };
        assert_eq!(spline.wire_flags(), SplineFlags::FINAL_ANGLE | SplineFlags::CYCLIC);
    }

    #[test]
    fn test_encoded_length() {
        let mut out = WireWriter::new();
        let spline = SplineData {
            facing: SplineFacing::Target(7),
            nodes: vec![Vector3::ZERO; 3],
            ..SplineData::default()
        };
        spline.encode(&mut out);
        // flags + target + 7 scalars + count + nodes + mode + final node
        assert_eq!(out.len(), 4 + 8 + 28 + 4 + 36 + 1 + 12);
        assert_eq!(&out.as_slice()[..4], &0x10000u32.to_le_bytes());
    }

    #[test]
    fn test_no_facing() {
        let mut out = WireWriter::new();
        SplineData::default().encode(&mut out);
        assert_eq!(out.len(), 4 + 28 + 4 + 1 + 12);
    }

    #[test]
    fn test_nodes_past_count_limit_are_dropped() {
        use crate::protocol::MAX_LIST_LEN;

        let mut out = WireWriter::new();
        let spline = SplineData {
            nodes: vec![Vector3::ZERO; MAX_LIST_LEN + 1],
            ..SplineData::default()
        };
        spline.encode(&mut out);
        assert_eq!(out.len(), 4 + 28 + 4 + 12 * MAX_LIST_LEN + 1 + 12);
        assert_eq!(&out.as_slice()[32..36], &[0xFF, 0xFF, 0, 0]);
    }
}
