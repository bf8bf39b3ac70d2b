#![allow(unexpected_cfgs)]
use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;
pub mod utils;

pub use instructions::*;

declare_id!("FqzkXZdwYjurnUKetJCAvaUw5WAqbwzU6gZEwydeEfqS");

#[program]
pub mod vesting {
    use super::*;

    /// Registers a company and its treasury. The signer becomes the owner.
    pub fn create_vesting_account(
        ctx: Context<CreateVestingAccount>,
        company_name: String,
    ) -> Result<()> {
        instructions::create_vesting_account::create_vesting_account_handler(ctx, company_name)
    }

    /// Registers a beneficiary's linear schedule under a company. Owner only.
    pub fn create_employee_account(
        ctx: Context<CreateEmployeeAccount>,
        start_time: i64,
        end_time: i64,
        total_amount: u64,
        cliff_time: i64,
    ) -> Result<()> {
        instructions::create_employee_account::create_employee_account_handler(
            ctx,
            start_time,
            end_time,
            total_amount,
            cliff_time,
        )
    }

    /// Transfers everything vested and not yet withdrawn to the beneficiary.
    pub fn claim_tokens(ctx: Context<ClaimTokens>, company_name: String) -> Result<()> {
        instructions::claim_tokens::claim_tokens_handler(ctx, company_name)
    }

    /// Owner deposit from their own token account into the company treasury.
    pub fn fund_treasury(ctx: Context<FundTreasury>, amount: u64) -> Result<()> {
        instructions::fund_treasury::fund_treasury_handler(ctx, amount)
    }

    /// Emits a `VestingQuote` event for the current clock time.
    pub fn quote_vesting(ctx: Context<QuoteVesting>, company_name: String) -> Result<()> {
        instructions::quote_vesting::quote_vesting_handler(ctx, company_name)
    }
}
