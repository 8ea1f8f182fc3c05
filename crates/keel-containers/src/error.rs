//! Container-specific error types.

use std::error::Error;
use std::fmt;

/// A fixed-capacity structure was asked to hold more than it can.
///
/// Returned by the non-growing containers ([`FixedArray`](crate::FixedArray)):
/// their capacity is part of the construction contract and there is
/// no resize operation by design.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CapacityError {
    /// The structure's fixed capacity.
    pub capacity: usize,
}

impl fmt::Display for CapacityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fixed capacity of {} exceeded", self.capacity)
    }
}

impl Error for CapacityError {}

/// Errors from the fixed-capacity maps.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MapError {
    /// The table already holds `capacity` entries; fixed-capacity
    /// maps never resize.
    Full {
        /// The table's capacity.
        capacity: usize,
    },
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Full { capacity } => {
                write!(f, "map is full: capacity {capacity}")
            }
        }
    }
}

impl Error for MapError {}
