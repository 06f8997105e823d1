//! Monotonic time base

/// Millisecond clock that never goes backwards
///
/// The control loop does not depend on time; the clock exists for
/// watchdog layers and diagnostics.
pub trait MonotonicClock {
    /// Milliseconds since an arbitrary fixed origin (usually boot)
    fn now_ms(&self) -> u64;
}
