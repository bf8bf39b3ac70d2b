//! Program-derived addresses and the treasury signing authority.
//!
//! - company:  `[company_name]`
//! - treasury: `[VESTING_TREASURY_SEED, company_name]`
//! - employee: `[EMPLOYEE_VESTING_SEED, beneficiary, company]`

use anchor_lang::prelude::*;

use crate::constants::{EMPLOYEE_VESTING_SEED, VESTING_TREASURY_SEED};
use crate::error::VestingError;
use crate::state::VestingCompany;
use crate::utils::validations;

/// Company record address. Fails with `InvalidName` instead of panicking on an over-long seed.
pub fn find_company_address(company_name: &str) -> core::result::Result<(Pubkey, u8), VestingError> {
    let seed = validations::company_seed(company_name)?;
    Ok(Pubkey::find_program_address(&[seed], &crate::ID))
}

pub fn find_treasury_address(
    company_name: &str,
) -> core::result::Result<(Pubkey, u8), VestingError> {
    let seed = validations::company_seed(company_name)?;
    Ok(Pubkey::find_program_address(
        &[VESTING_TREASURY_SEED, seed],
        &crate::ID,
    ))
}

pub fn find_employee_address(beneficiary: &Pubkey, company: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[EMPLOYEE_VESTING_SEED, beneficiary.as_ref(), company.as_ref()],
        &crate::ID,
    )
}

/// Proof that the program may sign for a company's treasury.
///
/// The treasury token account's authority is the company PDA, which has no
/// private key. The signer seeds `[company_name, bump]` re-derive that PDA and
/// are handed to the token program in place of a signature.
pub struct TreasuryAuthority<'a> {
    company_name: &'a [u8],
    bump: [u8; 1],
}

impl<'a> TreasuryAuthority<'a> {
    pub fn new(company: &'a VestingCompany) -> Self {
        Self {
            company_name: company.company_name.as_bytes(),
            bump: [company.bump],
        }
    }

    pub fn seeds(&self) -> [&[u8]; 2] {
        [self.company_name, &self.bump]
    }

    /// The address these seeds sign for.
    pub fn address(&self) -> core::result::Result<Pubkey, VestingError> {
        Pubkey::create_program_address(&self.seeds(), &crate::ID)
            .map_err(|_| VestingError::Unauthorized)
    }
}
