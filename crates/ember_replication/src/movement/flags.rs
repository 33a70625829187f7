//! Flag sets that select the optional regions of a movement block.

/// Defines a transparent flag set over an integer.
macro_rules! wire_flags {
    (
        $(#[$attr:meta])*
        pub struct $name:ident: $ty:ty {
            $(
                $(#[$flag_attr:meta])*
                const $flag:ident = $value:expr;
            )*
        }
    ) => {
        $(#[$attr])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
        pub struct $name($ty);

        impl $name {
            /// No flags.
            pub const EMPTY: Self = Self(0);

            $(
                $(#[$flag_attr])*
                pub const $flag: Self = Self($value);
            )*

            /// Wraps raw bits. Unknown bits are kept.
            #[inline]
            #[must_use]
            pub const fn from_bits(bits: $ty) -> Self {
                Self(bits)
            }

            /// Raw bits.
            #[inline]
            #[must_use]
            pub const fn bits(self) -> $ty {
                self.0
            }

            /// Returns true if every flag in `other` is set.
            #[inline]
            #[must_use]
            pub const fn contains(self, other: Self) -> bool {
                self.0 & other.0 == other.0
            }

            /// Returns true if any flag in `other` is set.
            #[inline]
            #[must_use]
            pub const fn intersects(self, other: Self) -> bool {
                self.0 & other.0 != 0
            }

            /// Returns true if no flag is set.
            #[inline]
            #[must_use]
            pub const fn is_empty(self) -> bool {
                self.0 == 0
            }

            /// Returns `self` with `other` added.
            #[inline]
            #[must_use]
            pub const fn with(self, other: Self) -> Self {
                Self(self.0 | other.0)
            }

            /// Returns `self` with `other` removed.
            #[inline]
            #[must_use]
            pub const fn without(self, other: Self) -> Self {
                Self(self.0 & !other.0)
            }

            /// Adds `other`.
            #[inline]
            pub fn insert(&mut self, other: Self) {
                self.0 |= other.0;
            }

            /// Removes `other`.
            #[inline]
            pub fn remove(&mut self, other: Self) {
                self.0 &= !other.0;
            }

            /// Adds or removes `other`.
            #[inline]
            pub fn set(&mut self, other: Self, enabled: bool) {
                if enabled {
                    self.insert(other);
                } else {
                    self.remove(other);
                }
            }
        }

        impl core::ops::BitOr for $name {
            type Output = Self;
            fn bitor(self, other: Self) -> Self {
                Self(self.0 | other.0)
            }
        }

        impl core::ops::BitOrAssign for $name {
            fn bitor_assign(&mut self, other: Self) {
                self.0 |= other.0;
            }
        }

        impl core::ops::BitAnd for $name {
            type Output = Self;
            fn bitand(self, other: Self) -> Self {
                Self(self.0 & other.0)
            }
        }
    };
}

wire_flags! {
    /// Outer movement block flags (16 bits on the wire).
    pub struct UpdateFlags: u16 {
        /// The block describes the receiving client's own avatar.
        const SELF = 0x1;
        /// Transport progress follows.
        const TRANSPORT = 0x2;
        /// Attacking target guid follows.
        const HAS_ATTACKING_TARGET = 0x4;
        /// Low guid follows.
        const LOW_GUID = 0x8;
        /// High guid follows.
        const HIGH_GUID = 0x10;
        /// Living region follows.
        const LIVING = 0x20;
        /// Stationary position follows.
        const STATIONARY_POSITION = 0x40;
        /// Vehicle data follows.
        const VEHICLE = 0x80;
        /// Transport-relative position follows.
        const POSITION = 0x100;
        /// Packed rotation follows.
        const ROTATION = 0x200;
    }
}

wire_flags! {
    /// Living movement flags (48 bits on the wire).
    pub struct LivingFlags: u64 {
        /// Moving forward.
        const FORWARD = 0x1;
        /// Moving backward.
        const BACKWARD = 0x2;
        /// Strafing left.
        const STRAFE_LEFT = 0x4;
        /// Strafing right.
        const STRAFE_RIGHT = 0x8;
        /// Turning left.
        const LEFT = 0x10;
        /// Turning right.
        const RIGHT = 0x20;
        /// Pitching up.
        const PITCH_UP = 0x40;
        /// Pitching down.
        const PITCH_DOWN = 0x80;
        /// Walk mode.
        const WALKING = 0x100;
        /// Riding a transport; passenger data follows.
        const ON_TRANSPORT = 0x200;
        /// Gravity disabled.
        const DISABLE_GRAVITY = 0x400;
        /// Rooted.
        const ROOT = 0x800;
        /// Falling; fall data follows.
        const FALLING = 0x1000;
        /// Falling far.
        const FALLING_FAR = 0x2000;
        /// Stop pending.
        const PENDING_STOP = 0x4000;
        /// Strafe stop pending.
        const PENDING_STRAFE_STOP = 0x8000;
        /// Forward pending.
        const PENDING_FORWARD = 0x10000;
        /// Backward pending.
        const PENDING_BACKWARD = 0x20000;
        /// Strafe left pending.
        const PENDING_STRAFE_LEFT = 0x40000;
        /// Strafe right pending.
        const PENDING_STRAFE_RIGHT = 0x80000;
        /// Root pending.
        const PENDING_ROOT = 0x100000;
        /// Swimming; pitch follows.
        const SWIMMING = 0x200000;
        /// Ascending.
        const ASCENDING = 0x400000;
        /// Descending.
        const DESCENDING = 0x800000;
        /// Able to fly.
        const CAN_FLY = 0x1000000;
        /// Flying; pitch follows.
        const FLYING = 0x2000000;
        /// Spline elevation follows.
        const SPLINE_ELEVATION = 0x4000000;
        /// Spline data follows.
        const SPLINE_ENABLED = 0x8000000;
        /// Walking on water.
        const WATERWALKING = 0x10000000;
        /// Slow fall.
        const FALLING_SLOW = 0x20000000;
        /// Hovering.
        const HOVER = 0x40000000;
        /// Strafing disabled.
        const NO_STRAFE = 0x100000000;
        /// Jumping disabled.
        const NO_JUMPING = 0x200000000;
        /// Unknown.
        const UNKNOWN1 = 0x400000000;
        /// Turns at full speed.
        const FULL_SPEED_TURNING = 0x800000000;
        /// Pitches at full speed.
        const FULL_SPEED_PITCHING = 0x1000000000;
        /// Pitch allowed on land; pitch follows.
        const ALWAYS_ALLOW_PITCHING = 0x2000000000;
        /// Unknown.
        const UNKNOWN2 = 0x4000000000;
        /// Unknown.
        const UNKNOWN3 = 0x8000000000;
        /// Unknown.
        const UNKNOWN4 = 0x10000000000;
        /// Unknown.
        const UNKNOWN5 = 0x20000000000;
        /// Interpolated transport movement; transport time follows.
        const TRANSPORT_INTERPOLATED_MOVEMENT = 0x40000000000;
        /// Interpolated transport turning.
        const TRANSPORT_INTERPOLATED_TURNING = 0x80000000000;
        /// Interpolated transport pitching.
        const TRANSPORT_INTERPOLATED_PITCHING = 0x100000000000;
        /// Unknown.
        const UNKNOWN6 = 0x200000000000;
        /// Switching between swimming and flying.
        const TRANSITION_BETWEEN_SWIM_AND_FLY = 0x400000000000;
        /// Unknown.
        const UNKNOWN8 = 0x800000000000;
    }
}

impl LivingFlags {
    /// Any of these puts a pitch value on the wire.
    pub const PITCH: Self = Self(Self::SWIMMING.0 | Self::FLYING.0 | Self::ALWAYS_ALLOW_PITCHING.0);

    /// Flags that gate a payload. They are owned by the payload setters.
    pub const PAYLOAD: Self = Self(
        Self::TRANSPORT_INTERPOLATED_MOVEMENT.0
            | Self::ON_TRANSPORT.0
            | Self::PITCH.0
            | Self::FALLING.0
            | Self::SPLINE_ELEVATION.0
            | Self::SPLINE_ENABLED.0,
    );

    /// Bits that fit in the 48-bit wire field.
    pub const WIRE_MASK: u64 = (1 << 48) - 1;
}

wire_flags! {
    /// Spline movement flags.
    pub struct SplineFlags: u32 {
        /// Spline complete.
        const DONE = 0x100;
        /// Falling along the spline.
        const FALLING = 0x200;
        /// No spline.
        const NO_SPLINE = 0x400;
        /// Parabolic arc.
        const PARABOLIC = 0x800;
        /// Walk speed.
        const WALK_MODE = 0x1000;
        /// Flying.
        const FLYING = 0x2000;
        /// Orientation fixed.
        const ORIENTATION_FIXED = 0x4000;
        /// Faces a final point.
        const FINAL_POINT = 0x8000;
        /// Faces a final target.
        const FINAL_TARGET = 0x10000;
        /// Faces a final angle.
        const FINAL_ANGLE = 0x20000;
        /// Catmull-Rom interpolation.
        const CATMULLROM = 0x40000;
        /// Loops.
        const CYCLIC = 0x80000;
        /// Entering the loop.
        const ENTER_CYCLE = 0x100000;
        /// Plays an animation.
        const ANIMATION = 0x200000;
        /// Frozen.
        const FROZEN = 0x400000;
        /// Boarding a transport.
        const TRANSPORT_ENTER = 0x800000;
        /// Leaving a transport.
        const TRANSPORT_EXIT = 0x1000000;
    }
}

impl SplineFlags {
    /// Bits owned by the facing variant.
    pub const FACING: Self = Self(Self::FINAL_POINT.0 | Self::FINAL_TARGET.0 | Self::FINAL_ANGLE.0);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_clear() {
        let mut flags = UpdateFlags::EMPTY;
        flags.set(UpdateFlags::LIVING, true);
        flags |= UpdateFlags::SELF;
        assert_eq!(flags.bits(), 0x21);
        flags.set(UpdateFlags::LIVING, false);
        assert_eq!(flags, UpdateFlags::SELF);
    }

    #[test]
    fn test_pitch_group() {
        assert!(LivingFlags::PITCH.contains(LivingFlags::FLYING));
        assert!(LivingFlags::FLYING.with(LivingFlags::FORWARD).intersects(LivingFlags::PITCH));
        assert!(!LivingFlags::FORWARD.intersects(LivingFlags::PAYLOAD));
    }

    #[test]
    fn test_living_flags_fit_48_bits() {
        assert_eq!(LivingFlags::UNKNOWN8.bits() & !LivingFlags::WIRE_MASK, 0);
    }
}
