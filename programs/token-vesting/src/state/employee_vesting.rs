use anchor_lang::prelude::*;

use crate::error::VestingError;
use crate::utils::vesting_math::{self, Schedule};
use crate::utils::TimeSource;

/// One beneficiary's schedule under a company (PDA `[EMPLOYEE_VESTING_SEED, beneficiary, company]`).
#[account]
#[derive(InitSpace)]
pub struct EmployeeVesting {
    pub beneficiary: Pubkey,
    pub start_time: i64,
    pub end_time: i64,
    pub cliff_time: i64,
    /// Owning `VestingCompany`.
    pub vesting_account: Pubkey,
    /// Full entitlement, fixed at creation.
    pub total_amount: u64,
    /// Cumulative amount claimed; never exceeds `total_amount`.
    pub total_withdrawn: u64,
    pub bump: u8,
}

/// Vesting position at a given instant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClaimQuote {
    pub now: i64,
    pub vested: u64,
    pub claimable: u64,
}

impl EmployeeVesting {
    pub fn schedule(&self) -> Schedule {
        Schedule {
            start_time: self.start_time,
            cliff_time: self.cliff_time,
            end_time: self.end_time,
            total_amount: self.total_amount,
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.beneficiary != Pubkey::default()
    }

    pub fn ensure_beneficiary(
        &self,
        signer: &Pubkey,
    ) -> core::result::Result<(), VestingError> {
        if self.beneficiary != *signer {
            return Err(VestingError::Unauthorized);
        }
        Ok(())
    }

    /// Vested and claimable amounts at the clock's current time. Never fails on zero.
    pub fn quote(&self, clock: &impl TimeSource) -> Result<ClaimQuote> {
        let now = clock.now()?;
        let vested = vesting_math::vested_amount(&self.schedule(), now)?;
        Ok(ClaimQuote {
            now,
            vested,
            claimable: vested.saturating_sub(self.total_withdrawn),
        })
    }

    /// Quote a claim against the treasury balance. Mutates nothing.
    pub fn quote_claim(&self, clock: &impl TimeSource, treasury_balance: u64) -> Result<ClaimQuote> {
        let quote = self.quote(clock)?;
        require!(quote.claimable > 0, VestingError::NothingToClaim);
        require!(
            treasury_balance >= quote.claimable,
            VestingError::InsufficientTreasuryFunds
        );
        Ok(quote)
    }

    /// Settle a claim after its transfer went through.
    ///
    /// `total_withdrawn` is set to the vested amount rather than incremented,
    /// so it stays exactly on the vesting curve.
    pub fn record_withdrawal(&mut self, quote: &ClaimQuote) -> Result<()> {
        require!(
            quote.vested >= self.total_withdrawn,
            VestingError::NothingToClaim
        );
        require!(
            quote.vested <= self.total_amount,
            VestingError::MathOverflow
        );
        self.total_withdrawn = quote.vested;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::clock::FixedClock;
    use anchor_lang::error::Error;

    fn employee(start: i64, cliff: i64, end: i64, total: u64) -> EmployeeVesting {
        EmployeeVesting {
            beneficiary: Pubkey::new_unique(),
            start_time: start,
            end_time: end,
            cliff_time: cliff,
            vesting_account: Pubkey::new_unique(),
            total_amount: total,
            total_withdrawn: 0,
            bump: 255,
        }
    }

    /// Quote, "transfer" out of the treasury, then settle; mirrors the claim handler.
    fn claim(record: &mut EmployeeVesting, now: i64, treasury: &mut u64) -> Result<u64> {
        let quote = record.quote_claim(&FixedClock(now), *treasury)?;
        *treasury -= quote.claimable;
        record.record_withdrawal(&quote)?;
        Ok(quote.claimable)
    }

    #[test]
    fn claim_before_cliff_fails() {
        let mut record = employee(0, 100, 400, 1_000);
        let mut treasury = 1_000;

        let err = claim(&mut record, 99, &mut treasury).unwrap_err();
        assert_eq!(err, Error::from(VestingError::NothingToClaim));
        assert_eq!(record.total_withdrawn, 0);
        assert_eq!(treasury, 1_000);
    }

    #[test]
    fn only_beneficiary_may_claim() {
        let record = employee(0, 0, 100, 100);
        assert!(record.ensure_beneficiary(&record.beneficiary).is_ok());
        assert!(matches!(
            record.ensure_beneficiary(&Pubkey::new_unique()),
            Err(VestingError::Unauthorized)
        ));
    }

    #[test]
    fn populated_record_reports_initialized() {
        let mut record = employee(0, 0, 100, 100);
        assert!(record.is_initialized());
        record.beneficiary = Pubkey::default();
        assert!(!record.is_initialized());
    }

    #[test]
    fn repeated_claims_track_the_curve() {
        let mut record = employee(0, 100, 1_000, 1_000);
        let mut treasury = 1_000;
        let mut last = 0;

        for now in [100, 100, 250, 251, 600, 999, 1_000, 5_000] {
            let _ = claim(&mut record, now, &mut treasury);
            assert!(record.total_withdrawn >= last);
            assert!(record.total_withdrawn <= record.total_amount);
            assert_eq!(
                record.total_withdrawn,
                vesting_math::vested_amount(&record.schedule(), now).unwrap()
            );
            last = record.total_withdrawn;
        }

        assert_eq!(record.total_withdrawn, 1_000);
        assert_eq!(treasury, 0);
    }

    #[test]
    fn claim_in_same_instant_fails_second_time() {
        let mut record = employee(0, 0, 100, 100);
        let mut treasury = 100;

        assert_eq!(claim(&mut record, 50, &mut treasury).unwrap(), 50);
        let err = claim(&mut record, 50, &mut treasury).unwrap_err();
        assert_eq!(err, Error::from(VestingError::NothingToClaim));
        assert_eq!(record.total_withdrawn, 50);
    }

    #[test]
    fn underfunded_claim_leaves_record_untouched() {
        let mut record = employee(0, 0, 100, 100);
        let mut treasury = 10;

        let err = claim(&mut record, 60, &mut treasury).unwrap_err();
        assert_eq!(err, Error::from(VestingError::InsufficientTreasuryFunds));
        assert_eq!(record.total_withdrawn, 0);
        assert_eq!(treasury, 10);

        // Funding arrives later; the claim then succeeds for the full vested amount.
        treasury += 90;
        assert_eq!(claim(&mut record, 60, &mut treasury).unwrap(), 60);
        assert_eq!(record.total_withdrawn, 60);
    }

    #[test]
    fn quote_reports_zero_without_failing() {
        let record = employee(0, 100, 400, 1_000);
        let quote = record.quote(&FixedClock(50)).unwrap();
        assert_eq!(
            quote,
            ClaimQuote {
                now: 50,
                vested: 0,
                claimable: 0
            }
        );
    }

    #[test]
    fn settling_a_stale_quote_is_rejected() {
        let mut record = employee(0, 0, 100, 100);
        record.total_withdrawn = 80;
        let stale = ClaimQuote {
            now: 50,
            vested: 50,
            claimable: 50,
        };
        assert!(record.record_withdrawal(&stale).is_err());
        assert_eq!(record.total_withdrawn, 80);
    }

    #[test]
    fn company_scenario_claims_full_amount_once() {
        let mut record = employee(0, 100, 100, 100);
        let mut treasury = 10_000 * 10u64.pow(9);

        assert_eq!(claim(&mut record, 1_000, &mut treasury).unwrap(), 100);
        assert_eq!(record.total_withdrawn, 100);
        assert_eq!(treasury, 10_000 * 10u64.pow(9) - 100);

        for now in [1_000, 2_000] {
            let err = claim(&mut record, now, &mut treasury).unwrap_err();
            assert_eq!(err, Error::from(VestingError::NothingToClaim));
        }
        assert_eq!(record.total_withdrawn, 100);
    }
}
