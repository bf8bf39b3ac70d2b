//! Program-wide constants.

/// Anchor account discriminator length.
pub const ANCHOR_DISCRIMINATOR: usize = 8;

/// Seed prefix of the treasury token account PDA: `[VESTING_TREASURY_SEED, company_name]`.
pub const VESTING_TREASURY_SEED: &[u8] = b"vesting_treasury";

/// Seed prefix of an employee record PDA: `[EMPLOYEE_VESTING_SEED, beneficiary, company]`.
pub const EMPLOYEE_VESTING_SEED: &[u8] = b"employee_vesting";

/// The company name is used verbatim as a PDA seed, so it is bounded by the runtime seed limit.
pub const MAX_COMPANY_NAME_LEN: usize = 32;
