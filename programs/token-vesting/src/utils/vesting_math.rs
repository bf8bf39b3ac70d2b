//! Linear-with-cliff vesting math.
//!
//! - before `cliff_time` nothing is vested
//! - at or after `end_time` everything is vested
//! - in between: `total_amount * (now - start_time) / (end_time - start_time)`, floored
//!
//! Intermediates are 128-bit so `u64` amounts times `i64` spans cannot wrap.

use crate::error::VestingError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Schedule {
    pub start_time: i64,
    pub cliff_time: i64,
    pub end_time: i64,
    pub total_amount: u64,
}

pub fn vested_amount(schedule: &Schedule, now: i64) -> Result<u64, VestingError> {
    // Zero-length schedule: all or nothing at end_time.
    if schedule.end_time <= schedule.start_time {
        return Ok(if now >= schedule.end_time {
            schedule.total_amount
        } else {
            0
        });
    }
    if now < schedule.cliff_time {
        return Ok(0);
    }
    if now >= schedule.end_time {
        return Ok(schedule.total_amount);
    }

    let elapsed = (now as i128) - (schedule.start_time as i128);
    if elapsed <= 0 {
        return Ok(0);
    }
    let duration = (schedule.end_time as i128) - (schedule.start_time as i128);

    let vested = (schedule.total_amount as u128)
        .checked_mul(elapsed as u128)
        .ok_or(VestingError::MathOverflow)?
        / (duration as u128);
    u64::try_from(vested).map_err(|_| VestingError::MathOverflow)
}
