//! Kairos Core Domain
//!
//! Pure domain types for the Kairos time kernel.
//! This crate contains no async, no I/O, and is 100% unit testable.

pub mod values;

// Re-export commonly used types at crate root
pub use values::{NANOS_PER_MICRO, NANOS_PER_MILLI, NANOS_PER_SEC, Timestamp};
