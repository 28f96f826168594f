use kairos_core::Timestamp;

/// Port for time abstraction
///
/// This allows the system to use different time sources:
/// - Real hardware-backed monotonic time for production
/// - Virtual time under explicit control for deterministic tests
///
/// The port carries no mutation operations. Code that moves virtual time
/// must hold the concrete virtual variant; the real variant has no mutation
/// surface at all, not even a no-op one.
pub trait Clock: Send + Sync {
    /// Get the current time on this clock's timeline, in nanoseconds
    ///
    /// Total: cannot fail and has no observable side effects. Only
    /// differences between readings carry meaning; the zero point is
    /// unspecified.
    fn now(&self) -> Timestamp;

    /// Whether this clock's timeline advances only under explicit control
    ///
    /// Constant over the clock's lifetime.
    fn is_virtual(&self) -> bool;

    /// Get the clock's name/identifier for debugging
    fn name(&self) -> &str {
        "Clock"
    }
}
