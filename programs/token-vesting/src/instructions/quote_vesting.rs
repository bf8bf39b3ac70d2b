use anchor_lang::prelude::*;

use crate::constants::EMPLOYEE_VESTING_SEED;
use crate::state::{EmployeeVesting, VestingCompany};
use crate::utils::{validations, RuntimeClock};

pub fn quote_vesting_handler(ctx: Context<QuoteVesting>, _company_name: String) -> Result<()> {
    let employee = &ctx.accounts.employee_account;
    let quote = employee.quote(&RuntimeClock)?;

    emit!(VestingQuote {
        beneficiary: employee.beneficiary,
        vesting_account: employee.vesting_account,
        quoted_at: quote.now,
        vested_amount: quote.vested,
        total_withdrawn: employee.total_withdrawn,
        claimable: quote.claimable,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(company_name: String)]
pub struct QuoteVesting<'info> {
    #[account(
        seeds = [validations::company_seed(&company_name)?],
        bump = vesting_account.bump,
    )]
    pub vesting_account: Account<'info, VestingCompany>,

    /// Passed explicitly by the client, derived with `find_employee_address`.
    #[account(
        seeds = [
            EMPLOYEE_VESTING_SEED,
            employee_account.beneficiary.as_ref(),
            vesting_account.key().as_ref(),
        ],
        bump = employee_account.bump,
        has_one = vesting_account,
    )]
    pub employee_account: Account<'info, EmployeeVesting>,
}

#[event]
pub struct VestingQuote {
    pub beneficiary: Pubkey,
    pub vesting_account: Pubkey,
    pub quoted_at: i64,
    pub vested_amount: u64,
    pub total_withdrawn: u64,
    pub claimable: u64,
}
