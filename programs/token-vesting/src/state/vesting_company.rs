use anchor_lang::prelude::*;

use crate::constants::MAX_COMPANY_NAME_LEN;
use crate::error::VestingError;

/// Employer record, one per company name (PDA `[company_name]`).
///
/// The PDA is also the token authority of the company's treasury.
#[account]
#[derive(InitSpace)]
pub struct VestingCompany {
    /// Employer / administrator.
    pub owner: Pubkey,
    /// Vested token mint.
    pub mint: Pubkey,
    /// Treasury token account (PDA `[VESTING_TREASURY_SEED, company_name]`). Never changes.
    pub treasury_token_account: Pubkey,
    #[max_len(MAX_COMPANY_NAME_LEN)]
    pub company_name: String,
    pub treasury_bump: u8,
    pub bump: u8,
    /// Employee records created under this company.
    pub number_of_employees: u64,
}

impl VestingCompany {
    /// A freshly allocated record is zeroed; a populated one always has a signer as owner.
    pub fn is_initialized(&self) -> bool {
        self.owner != Pubkey::default()
    }

    pub fn ensure_owner(&self, signer: &Pubkey) -> core::result::Result<(), VestingError> {
        if self.owner != *signer {
            return Err(VestingError::Unauthorized);
        }
        Ok(())
    }

    /// Bump the employee counter, returning the new count.
    pub fn register_employee(&mut self) -> core::result::Result<u64, VestingError> {
        self.number_of_employees = self
            .number_of_employees
            .checked_add(1)
            .ok_or(VestingError::MathOverflow)?;
        Ok(self.number_of_employees)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vacant() -> VestingCompany {
        VestingCompany {
            owner: Pubkey::default(),
            mint: Pubkey::default(),
            treasury_token_account: Pubkey::default(),
            company_name: String::new(),
            treasury_bump: 0,
            bump: 0,
            number_of_employees: 0,
        }
    }

    #[test]
    fn populated_record_reports_initialized() {
        let mut company = vacant();
        assert!(!company.is_initialized());

        company.owner = Pubkey::new_unique();
        company.company_name = "Company".to_string();
        assert!(company.is_initialized());
    }

    #[test]
    fn only_owner_passes_owner_check() {
        let owner = Pubkey::new_unique();
        let mut company = vacant();
        company.owner = owner;

        assert!(company.ensure_owner(&owner).is_ok());
        assert!(matches!(
            company.ensure_owner(&Pubkey::new_unique()),
            Err(VestingError::Unauthorized)
        ));
    }

    #[test]
    fn employee_counter_is_checked() {
        let mut company = vacant();
        assert_eq!(company.register_employee().unwrap(), 1);
        assert_eq!(company.register_employee().unwrap(), 2);

        company.number_of_employees = u64::MAX;
        assert!(matches!(
            company.register_employee(),
            Err(VestingError::MathOverflow)
        ));
        assert_eq!(company.number_of_employees, u64::MAX);
    }

    #[test]
    fn space_covers_max_name() {
        // owner + mint + treasury + (len prefix + name) + bumps + counter
        assert_eq!(
            VestingCompany::INIT_SPACE,
            32 + 32 + 32 + (4 + MAX_COMPANY_NAME_LEN) + 1 + 1 + 8
        );
    }
}
