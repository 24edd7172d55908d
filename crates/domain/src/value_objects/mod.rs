//! Value objects - Immutable objects defined by their attributes

mod booking_range;

pub use booking_range::{require_not_past, BookingRange, RangeViolation};
