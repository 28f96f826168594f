//! Kairos Ports
//!
//! Port definitions (traits) for the Kairos time kernel.
//! These define the boundaries between domain logic and infrastructure.

mod clock;

pub use clock::Clock;
