//! # Movement Block
//!
//! Unlike values blocks, movement is not mask driven: flags select optional
//! regions that follow in a fixed order.
//!
//! ```text
//! [update flags u16]
//! one of: [living] | [position] | [stationary]
//! [high guid u32?][low guid u32?][attacking target packed?]
//! [transport time u32?][vehicle id u32 + orientation f32?][rotation u64?]
//! ```
//!
//! Each payload is an `Option`; the flags are derived from which payloads
//! are present, so a flag can never announce data that is not written.

use bytemuck::{Pod, Zeroable};
use ember_shared::{Guid, Vector3, Vector4};

use super::flags::{LivingFlags, UpdateFlags};
use super::spline::SplineData;
use crate::protocol::WireWriter;

/// Movement speeds and turn rates, always present in a living region.
///
/// Size: 36 bytes
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct MovementSpeeds {
    /// Walk speed.
    pub walk: f32,
    /// Run speed.
    pub run: f32,
    /// Backward run speed.
    pub run_back: f32,
    /// Swim speed.
    pub swim: f32,
    /// Backward swim speed.
    pub swim_back: f32,
    /// Flight speed.
    pub flight: f32,
    /// Backward flight speed.
    pub flight_back: f32,
    /// Turn rate in radians per second.
    pub turn_rate: f32,
    /// Pitch rate in radians per second.
    pub pitch_rate: f32,
}

impl MovementSpeeds {
    /// Stock speeds for an unbuffed character.
    pub const DEFAULT: Self = Self {
        walk: 2.5,
        run: 7.0,
        run_back: 4.5,
        swim: 4.722_222,
        swim_back: 2.5,
        flight: 7.0,
        flight_back: 4.5,
        turn_rate: std::f32::consts::PI,
        pitch_rate: std::f32::consts::PI,
    };
}

impl Default for MovementSpeeds {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Fields every living region carries.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LivingData {
    /// Client-relative timestamp in milliseconds.
    pub timestamp: u32,
    /// Position and orientation.
    pub pose: Vector4,
    /// Time spent falling. Written even when not falling.
    pub fall_time: f32,
    /// Speeds and rates.
    pub speeds: MovementSpeeds,
}

/// Jump or fall velocity.
///
/// Size: 16 bytes
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct FallData {
    /// Vertical speed.
    pub z_speed: f32,
    /// Cosine of the jump direction.
    pub cos_angle: f32,
    /// Sine of the jump direction.
    pub sin_angle: f32,
    /// Horizontal speed.
    pub xy_speed: f32,
}

/// Where a passenger sits on its transport.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TransportPassenger {
    /// Transport guid.
    pub guid: Guid,
    /// Offset from the transport origin.
    pub offset: Vector4,
    /// Transport time in milliseconds.
    pub timestamp: u32,
    /// Seat index.
    pub seat: u8,
}

/// Transport-relative position for non-living objects.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PositionData {
    /// Transport guid (empty when not on one).
    pub transport_guid: Guid,
    /// World position.
    pub position: Vector3,
    /// Offset on the transport.
    pub transport_offset: Vector3,
    /// Orientation.
    pub orientation: f32,
    /// Corpse orientation.
    pub corpse_orientation: f32,
}

/// Fixed position for stationary objects.
///
/// Size: 16 bytes
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct StationaryPosition {
    /// World position.
    pub position: Vector3,
    /// Orientation.
    pub orientation: f32,
}

/// Vehicle the object is.
///
/// Size: 8 bytes
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct VehicleData {
    /// Vehicle id.
    pub id: u32,
    /// Orientation.
    pub orientation: f32,
}

/// The living region: common fields plus flag-gated sub-blocks.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LivingMovement {
    flags: LivingFlags,
    data: LivingData,
    transport_time: Option<u32>,
    passenger: Option<TransportPassenger>,
    pitch: Option<f32>,
    fall: Option<FallData>,
    spline_elevation: Option<f32>,
    spline: Option<SplineData>,
}

impl LivingMovement {
    /// Creates a living region with no optional sub-blocks.
    #[must_use]
    pub fn new(data: LivingData) -> Self {
        Self {
            data,
            ..Self::default()
        }
    }

    /// Living flags as written.
    #[inline]
    #[must_use]
    pub const fn flags(&self) -> LivingFlags {
        self.flags
    }

    /// Common fields.
    #[inline]
    #[must_use]
    pub const fn data(&self) -> &LivingData {
        &self.data
    }

    /// Common fields, mutably.
    #[inline]
    pub fn data_mut(&mut self) -> &mut LivingData {
        &mut self.data
    }

    /// Adds movement-state flags (direction, walking, hover...).
    ///
    /// Flags that gate a payload are ignored here; use their setters so the
    /// flag and the payload stay together.
    pub fn insert_flags(&mut self, flags: LivingFlags) {
        let ignored = flags & LivingFlags::PAYLOAD;
        if !ignored.is_empty() {
            tracing::debug!(bits = ignored.bits(), "payload flags must be set through their setters");
        }
        self.flags.insert(flags.without(LivingFlags::PAYLOAD));
    }

    /// Removes movement-state flags. Payload flags are left alone.
    pub fn remove_flags(&mut self, flags: LivingFlags) {
        self.flags.remove(flags.without(LivingFlags::PAYLOAD));
    }

    /// Sets or clears interpolated transport time.
    ///
    /// Interpolated movement and passenger data are exclusive; setting one
    /// clears the other.
    pub fn set_transport_interpolated(&mut self, time: Option<u32>) {
        self.flags.set(LivingFlags::TRANSPORT_INTERPOLATED_MOVEMENT, time.is_some());
        self.transport_time = time;
        if time.is_some() {
            self.flags.remove(LivingFlags::ON_TRANSPORT);
            self.passenger = None;
        }
    }

    /// Sets or clears transport passenger data.
    pub fn set_transport_passenger(&mut self, passenger: Option<TransportPassenger>) {
        self.flags.set(LivingFlags::ON_TRANSPORT, passenger.is_some());
        self.passenger = passenger;
        if passenger.is_some() {
            self.flags.remove(LivingFlags::TRANSPORT_INTERPOLATED_MOVEMENT);
            self.transport_time = None;
        }
    }

    /// Sets or clears swimming, with its pitch.
    pub fn set_swimming(&mut self, pitch: Option<f32>) {
        self.set_pitch_flag(LivingFlags::SWIMMING, pitch);
    }

    /// Sets or clears flying, with its pitch.
    pub fn set_flying(&mut self, pitch: Option<f32>) {
        self.set_pitch_flag(LivingFlags::FLYING, pitch);
    }

    /// Sets or clears always-allow-pitching, with its pitch.
    pub fn set_always_allow_pitching(&mut self, pitch: Option<f32>) {
        self.set_pitch_flag(LivingFlags::ALWAYS_ALLOW_PITCHING, pitch);
    }

    // The three pitch flags share one value. It is dropped only once none
    // of them remains.
    fn set_pitch_flag(&mut self, flag: LivingFlags, pitch: Option<f32>) {
        self.flags.set(flag, pitch.is_some());
        if pitch.is_some() {
            self.pitch = pitch;
        } else if !self.flags.intersects(LivingFlags::PITCH) {
            self.pitch = None;
        }
    }

    /// Sets or clears fall data.
    pub fn set_falling(&mut self, fall: Option<FallData>) {
        self.flags.set(LivingFlags::FALLING, fall.is_some());
        self.fall = fall;
    }

    /// Sets or clears spline elevation.
    pub fn set_spline_elevation(&mut self, elevation: Option<f32>) {
        self.flags.set(LivingFlags::SPLINE_ELEVATION, elevation.is_some());
        self.spline_elevation = elevation;
    }

    /// Sets or clears the spline.
    pub fn set_spline(&mut self, spline: Option<SplineData>) {
        self.flags.set(LivingFlags::SPLINE_ENABLED, spline.is_some());
        self.spline = spline;
    }

    /// Current pitch, if any pitch flag is set.
    #[inline]
    #[must_use]
    pub const fn pitch(&self) -> Option<f32> {
        self.pitch
    }

    /// Current spline, if enabled.
    #[inline]
    #[must_use]
    pub fn spline(&self) -> Option<&SplineData> {
        self.spline.as_ref()
    }

    /// Writes the living region (everything after the update flags).
    pub fn encode(&self, out: &mut WireWriter) {
        out.write_u48(self.flags.bits());
        out.write_u32(self.data.timestamp);
        out.write_pod(&self.data.pose);

        if let Some(time) = self.transport_time {
            out.write_u32(time);
        }
        if let Some(passenger) = &self.passenger {
            out.write_packed_guid(passenger.guid);
            out.write_pod(&passenger.offset);
            out.write_u32(passenger.timestamp);
            out.write_u8(passenger.seat);
        }
        if let Some(pitch) = self.pitch {
            out.write_f32(pitch);
        }

        out.write_f32(self.data.fall_time);
        if let Some(fall) = &self.fall {
            out.write_pod(fall);
        }
        if let Some(elevation) = self.spline_elevation {
            out.write_f32(elevation);
        }

        out.write_pod(&self.data.speeds);
        if let Some(spline) = &self.spline {
            spline.encode(out);
        }
    }
}

/// A complete movement block.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MovementBlock {
    is_self: bool,
    living: Option<LivingMovement>,
    position: Option<PositionData>,
    stationary: Option<StationaryPosition>,
    high_guid: Option<u32>,
    low_guid: Option<u32>,
    attacking_target: Option<Guid>,
    transport_time: Option<u32>,
    vehicle: Option<VehicleData>,
    rotation: Option<u64>,
}

impl MovementBlock {
    /// Creates an empty block (flags `0x0000`, nothing else).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a block with a living region.
    #[must_use]
    pub fn living(living: LivingMovement) -> Self {
        let mut block = Self::new();
        block.set_living(Some(living));
        block
    }

    /// Update flags derived from the payloads present.
    #[must_use]
    pub fn flags(&self) -> UpdateFlags {
        let mut flags = UpdateFlags::EMPTY;
        flags.set(UpdateFlags::SELF, self.is_self);
        flags.set(UpdateFlags::LIVING, self.living.is_some());
        flags.set(UpdateFlags::POSITION, self.position.is_some());
        flags.set(UpdateFlags::STATIONARY_POSITION, self.stationary.is_some());
        flags.set(UpdateFlags::HIGH_GUID, self.high_guid.is_some());
        flags.set(UpdateFlags::LOW_GUID, self.low_guid.is_some());
        flags.set(UpdateFlags::HAS_ATTACKING_TARGET, self.attacking_target.is_some());
        flags.set(UpdateFlags::TRANSPORT, self.transport_time.is_some());
        flags.set(UpdateFlags::VEHICLE, self.vehicle.is_some());
        flags.set(UpdateFlags::ROTATION, self.rotation.is_some());
        flags
    }

    /// Marks the block as describing the receiver's own avatar.
    pub fn set_self(&mut self, is_self: bool) {
        self.is_self = is_self;
    }

    /// Sets or clears the living region. Setting it clears position and
    /// stationary data.
    pub fn set_living(&mut self, living: Option<LivingMovement>) {
        if living.is_some() {
            self.position = None;
            self.stationary = None;
        }
        self.living = living;
    }

    /// Sets or clears transport-relative position. Setting it clears the
    /// living region and stationary data.
    pub fn set_position(&mut self, position: Option<PositionData>) {
        if position.is_some() {
            self.living = None;
            self.stationary = None;
        }
        self.position = position;
    }

    /// Sets or clears stationary position. Setting it clears the living
    /// region and position data.
    pub fn set_stationary(&mut self, stationary: Option<StationaryPosition>) {
        if stationary.is_some() {
            self.living = None;
            self.position = None;
        }
        self.stationary = stationary;
    }

    /// Sets or clears the high guid.
    pub fn set_high_guid(&mut self, high: Option<u32>) {
        self.high_guid = high;
    }

    /// Sets or clears the low guid.
    pub fn set_low_guid(&mut self, low: Option<u32>) {
        self.low_guid = low;
    }

    /// Sets or clears the attacking target.
    pub fn set_attacking_target(&mut self, target: Option<Guid>) {
        self.attacking_target = target;
    }

    /// Sets or clears transport progress in milliseconds.
    pub fn set_transport_time(&mut self, time: Option<u32>) {
        self.transport_time = time;
    }

    /// Sets or clears vehicle data.
    pub fn set_vehicle(&mut self, vehicle: Option<VehicleData>) {
        self.vehicle = vehicle;
    }

    /// Sets or clears the packed local rotation.
    pub fn set_rotation(&mut self, rotation: Option<u64>) {
        self.rotation = rotation;
    }

    /// The living region, if set.
    #[inline]
    #[must_use]
    pub fn living_data(&self) -> Option<&LivingMovement> {
        self.living.as_ref()
    }

    /// The living region, mutably, if set.
    #[inline]
    pub fn living_mut(&mut self) -> Option<&mut LivingMovement> {
        self.living.as_mut()
    }

    /// Writes the block.
    pub fn encode(&self, out: &mut WireWriter) {
        out.write_u16(self.flags().bits());

        if let Some(living) = &self.living {
            living.encode(out);
        } else if let Some(position) = &self.position {
            out.write_packed_guid(position.transport_guid);
            out.write_pod(&position.position);
            out.write_pod(&position.transport_offset);
            out.write_f32(position.orientation);
            out.write_f32(position.corpse_orientation);
        } else if let Some(stationary) = &self.stationary {
            out.write_pod(stationary);
        }

        if let Some(high) = self.high_guid {
            out.write_u32(high);
        }
        if let Some(low) = self.low_guid {
            out.write_u32(low);
        }
        if let Some(target) = self.attacking_target {
            out.write_packed_guid(target);
        }
        if let Some(time) = self.transport_time {
            out.write_u32(time);
        }
        if let Some(vehicle) = &self.vehicle {
            out.write_pod(vehicle);
        }
        if let Some(rotation) = self.rotation {
            out.write_u64(rotation);
        }
    }

    /// Encodes the block on its own.
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = WireWriter::new();
        self.encode(&mut out);
        out.into_inner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COMMON_LIVING_LEN: usize = 6 + 4 + 16 + 4 + 36;

    fn living() -> LivingMovement {
        LivingMovement::new(LivingData {
            timestamp: 100,
            pose: Vector4::new(1.0, 2.0, 3.0, 0.5),
            fall_time: 0.0,
            speeds: MovementSpeeds::DEFAULT,
        })
    }

    #[test]
    fn test_empty_block() {
        assert_eq!(MovementBlock::new().to_bytes(), vec![0x00, 0x00]);
    }

    #[test]
    fn test_living_without_optional_blocks() {
        let block = MovementBlock::living(LivingMovement::new(LivingData {
            timestamp: 0x0102_0304,
            pose: Vector4::new(1.5, -2.0, 3.25, 0.5),
            fall_time: 12.0,
            speeds: MovementSpeeds {
                walk: 1.0,
                run: 2.0,
                run_back: 3.0,
                swim: 4.0,
                swim_back: 5.0,
                flight: 6.0,
                flight_back: 7.0,
                turn_rate: 8.0,
                pitch_rate: 9.0,
            },
        }));

        let mut expected = vec![0x20, 0x00];
        expected.extend_from_slice(&[0; 6]);
        expected.extend_from_slice(&[0x04, 0x03, 0x02, 0x01]);
        for v in [1.5f32, -2.0, 3.25, 0.5] {
            expected.extend_from_slice(&v.to_le_bytes());
        }
        expected.extend_from_slice(&12.0f32.to_le_bytes());
        for v in 1..=9u8 {
            expected.extend_from_slice(&f32::from(v).to_le_bytes());
        }

        let bytes = block.to_bytes();
        assert_eq!(bytes.len(), 2 + COMMON_LIVING_LEN);
        assert_eq!(bytes, expected);
    }

    #[test]
    fn test_living_flag_cleared_omits_region() {
        let mut block = MovementBlock::living(living());
        block.set_living(None);
        block.set_high_guid(Some(0xF130));
        let bytes = block.to_bytes();
        assert_eq!(bytes, [&0x10u16.to_le_bytes()[..], &0xF130u32.to_le_bytes()].concat());
    }

    #[test]
    fn test_gated_blocks_follow_flags() {
        let mut region = living();
        region.set_falling(Some(FallData {
            z_speed: -9.8,
            ..FallData::default()
        }));
        region.set_flying(Some(0.25));
        region.insert_flags(LivingFlags::FORWARD | LivingFlags::FALLING);

        let flags = region.flags();
        assert!(flags.contains(LivingFlags::FALLING | LivingFlags::FLYING | LivingFlags::FORWARD));

        let bytes = MovementBlock::living(region).to_bytes();
        assert_eq!(bytes.len(), 2 + COMMON_LIVING_LEN + 4 + 16);
        // pitch sits right after the pose
        assert_eq!(&bytes[28..32], &0.25f32.to_le_bytes());
        // fall time, then fall data
        assert_eq!(&bytes[36..40], &(-9.8f32).to_le_bytes());
    }

    #[test]
    fn test_pitch_survives_while_any_pitch_flag_remains() {
        let mut region = living();
        region.set_swimming(Some(0.1));
        region.set_flying(Some(0.2));
        region.set_swimming(None);
        assert_eq!(region.pitch(), Some(0.2));
        region.set_flying(None);
        assert_eq!(region.pitch(), None);
        assert!(!region.flags().intersects(LivingFlags::PITCH));
    }

    #[test]
    fn test_transport_modes_are_exclusive() {
        let mut region = living();
        region.set_transport_interpolated(Some(5));
        region.set_transport_passenger(Some(TransportPassenger::default()));
        assert!(!region.flags().contains(LivingFlags::TRANSPORT_INTERPOLATED_MOVEMENT));
        assert!(region.flags().contains(LivingFlags::ON_TRANSPORT));

        let bytes = MovementBlock::living(region).to_bytes();
        // packed empty guid + offset + time + seat
        assert_eq!(bytes.len(), 2 + COMMON_LIVING_LEN + 1 + 16 + 4 + 1);
    }

    #[test]
    fn test_exclusive_regions() {
        let mut block = MovementBlock::living(living());
        block.set_stationary(Some(StationaryPosition {
            position: Vector3::new(1.0, 1.0, 1.0),
            orientation: 0.0,
        }));
        assert_eq!(block.flags(), UpdateFlags::STATIONARY_POSITION);
        assert_eq!(block.to_bytes().len(), 2 + 16);

        block.set_position(Some(PositionData::default()));
        assert_eq!(block.flags(), UpdateFlags::POSITION);
        assert_eq!(block.to_bytes().len(), 2 + 1 + 12 + 12 + 4 + 4);
    }

    #[test]
    fn test_trailing_blocks_in_order() {
        let mut block = MovementBlock::new();
        block.set_self(true);
        block.set_rotation(Some(0x0102));
        block.set_low_guid(Some(7));
        block.set_attacking_target(Some(Guid::new(0x0100)));
        block.set_vehicle(Some(VehicleData { id: 3, orientation: 0.0 }));

        let bytes = block.to_bytes();
        let expected: Vec<u8> = [
            &(0x1u16 | 0x8 | 0x4 | 0x80 | 0x200).to_le_bytes()[..],
            &7u32.to_le_bytes(),
            &[0x02, 0x01],
            &3u32.to_le_bytes(),
            &0f32.to_le_bytes(),
            &0x0102u64.to_le_bytes(),
        ]
        .concat();
        assert_eq!(bytes, expected);
    }

    #[test]
    fn test_spline_written_last() {
        let mut region = living();
        region.set_spline(Some(SplineData::default()));
        let bytes = MovementBlock::living(region).to_bytes();
        assert_eq!(bytes.len(), 2 + COMMON_LIVING_LEN + 4 + 28 + 4 + 1 + 12);
    }
}
