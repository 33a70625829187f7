//! # Movement Blocks
//!
//! Flag-driven encoding of position, living movement state and splines.

mod block;
mod flags;
mod spline;

pub use block::{
    FallData, LivingData, LivingMovement, MovementBlock, MovementSpeeds, PositionData,
    StationaryPosition, TransportPassenger, VehicleData,
};
pub use flags::{LivingFlags, SplineFlags, UpdateFlags};
pub use spline::{SplineData, SplineFacing};
