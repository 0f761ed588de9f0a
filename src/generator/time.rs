//! Time sources for id generation
//!
//! The generator reads the wall clock through [`TimeSource`] so tests can
//! drive rollover and regression deterministically.

use std::time::{SystemTime, UNIX_EPOCH};

/// A source of wall-clock time in milliseconds since the Unix epoch
pub trait TimeSource {
    /// Returns the current time in Unix milliseconds
    fn current_millis(&self) -> u64;
}

impl<T: TimeSource + ?Sized> TimeSource for &T {
    fn current_millis(&self) -> u64 {
        (**self).current_millis()
    }
}

/// System wall clock, the default time source
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    #[inline(always)]
    fn current_millis(&self) -> u64 {
        unix_time_ms()
    }
}

/// Get current wall-clock time in milliseconds since Unix epoch
///
/// A clock set before 1970 reads as 0, which the generator reports as
/// being before its epoch.
#[inline(always)]
pub fn unix_time_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u64)
        .unwrap_or(0)
}
