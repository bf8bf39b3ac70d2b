use crate::constants::MAX_COMPANY_NAME_LEN;
use crate::error::VestingError;

/// Validate a company name before it is used as a PDA seed.
pub fn check_company_name(company_name: &str) -> Result<(), VestingError> {
    // Check: non-empty and within the seed length bound (bytes, not chars).
    if company_name.is_empty() || company_name.len() > MAX_COMPANY_NAME_LEN {
        return Err(VestingError::InvalidName);
    }

    Ok(())
}

/// The company name as a PDA seed, rejected with `InvalidName` before any derivation is attempted.
pub fn company_seed(company_name: &str) -> Result<&[u8], VestingError> {
    check_company_name(company_name)?;

    Ok(company_name.as_bytes())
}

/// Validate the ordering of a vesting schedule.
pub fn check_schedule(start_time: i64, cliff_time: i64, end_time: i64) -> Result<(), VestingError> {
    // Check: start_time <= cliff_time <= end_time.
    if start_time > cliff_time || cliff_time > end_time {
        return Err(VestingError::InvalidSchedule);
    }

    Ok(())
}
