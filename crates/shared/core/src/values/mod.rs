/// Timestamp value - nanoseconds on a monotonic timeline
///
/// Signed so that the difference between any two timestamps is representable
/// in either direction, and so an implementation may choose a signed epoch.
/// Only differences are meaningful; the zero point is opaque.
/// Future: could become a newtype with validation (unit discipline)
pub type Timestamp = i64;

/// Nanoseconds per microsecond
pub const NANOS_PER_MICRO: i64 = 1_000;

/// Nanoseconds per millisecond
pub const NANOS_PER_MILLI: i64 = 1_000_000;

/// Nanoseconds per second
pub const NANOS_PER_SEC: i64 = 1_000_000_000;
