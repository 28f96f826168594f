//! Kairos Clock Infrastructure
//!
//! Provides the two time sources behind the [`Clock`] port:
//!
//! ```text
//! Clock (port)
//!     │
//!     ├── RealClock     (hardware-backed monotonic timeline)
//!     │
//!     └── VirtualClock  (in-memory timeline, moves only on command)
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use kairos_clock::{Clock, RealClock, VirtualClock};
//!
//! // Production: readings track the platform monotonic clock
//! let clock = RealClock::new();
//! let t1 = clock.now();
//! // ... work ...
//! let elapsed_ns = clock.now() - t1;
//!
//! // Tests: time moves only when told to
//! let mut vc = VirtualClock::new(None);
//! vc.advance(1_000_000_000);     // forward one second
//! vc.set_time(5_000_000_000);    // jump to an absolute point
//! assert_eq!(vc.now(), 5_000_000_000);
//! ```
//!
//! Consumers that only read time should hold `&dyn Clock` (or a generic
//! bound) and stay agnostic of the variant. Mutating virtual time requires
//! holding the [`VirtualClock`] itself.

mod real;
mod virtual_clock;

pub use real::RealClock;
pub use virtual_clock::VirtualClock;

// Re-export the Clock trait for convenience
pub use kairos_ports::Clock;
