//! Time source for vesting computations.
//!
//! Vesting math never reads the clock on its own; callers inject a
//! [`TimeSource`]. On chain that is the runtime `Clock` sysvar, off chain
//! (previews, tests) any fixed Unix timestamp.

use anchor_lang::prelude::*;

pub trait TimeSource {
    /// Current Unix timestamp in seconds.
    fn now(&self) -> Result<i64>;
}

/// Reads `unix_timestamp` from the `Clock` sysvar.
#[derive(Clone, Copy, Debug, Default)]
pub struct RuntimeClock;

impl TimeSource for RuntimeClock {
    fn now(&self) -> Result<i64> {
        Ok(Clock::get()?.unix_timestamp)
    }
}

/// A clock frozen at a given timestamp.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedClock(pub i64);

impl TimeSource for FixedClock {
    fn now(&self) -> Result<i64> {
        Ok(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_returns_its_timestamp() {
        assert_eq!(FixedClock(1_000).now().unwrap(), 1_000);
        assert_eq!(FixedClock(-5).now().unwrap(), -5);
    }
}
