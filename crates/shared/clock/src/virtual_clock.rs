use kairos_core::Timestamp;
use kairos_ports::Clock;

/// Virtual clock whose timeline moves only on command
///
/// Reading returns exactly the value last established by construction,
/// [`advance`](VirtualClock::advance) or [`set_time`](VirtualClock::set_time);
/// there is no background progress. This is what makes timeout and scheduling
/// logic testable without real sleeping: the test decides when time passes.
///
/// Intended for single-threaded test control. Mutation takes `&mut self`, so
/// a consumer that wants to share one virtual timeline across threads must
/// wrap access externally.
pub struct VirtualClock {
    /// Current virtual time
    current_time: Timestamp,
}

impl VirtualClock {
    /// Create a new virtual clock
    ///
    /// # Arguments
    /// * `initial_time` - Optional starting time in nanoseconds. If None, starts at 0.
    pub fn new(initial_time: Option<Timestamp>) -> Self {
        Self {
            current_time: initial_time.unwrap_or(0),
        }
    }

    /// Advance the virtual time by `delta_ns` nanoseconds
    ///
    /// `delta_ns` may be negative: simulations sometimes rewind to replay a
    /// scenario, and the value is applied as given, never clamped. The
    /// addition saturates at the `i64` bounds.
    pub fn advance(&mut self, delta_ns: i64) {
        self.current_time = self.current_time.saturating_add(delta_ns);
    }

    /// Explicitly set the virtual time
    ///
    /// No ordering constraint relative to the prior value; moving backwards
    /// is allowed. Warning: this can cause time discontinuities for anything
    /// observing the clock. Use with caution.
    pub fn set_time(&mut self, absolute_time: Timestamp) {
        self.current_time = absolute_time;
    }
}

impl Default for VirtualClock {
    fn default() -> Self {
        Self::new(None)
    }
}

impl Clock for VirtualClock {
    fn now(&self) -> Timestamp {
        self.current_time
    }

    fn is_virtual(&self) -> bool {
        true
    }

    fn name(&self) -> &str {
        "VirtualClock"
    }
}
