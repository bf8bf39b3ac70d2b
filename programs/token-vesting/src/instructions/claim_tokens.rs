use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{Mint, TokenAccount, TokenInterface},
};

use crate::constants::{EMPLOYEE_VESTING_SEED, VESTING_TREASURY_SEED};
use crate::state::{EmployeeVesting, VestingCompany};
use crate::utils::{pda::TreasuryAuthority, validations, RuntimeClock, TokenTransfer};

pub fn claim_tokens_handler(ctx: Context<ClaimTokens>, _company_name: String) -> Result<()> {
    ctx.accounts
        .employee_account
        .ensure_beneficiary(&ctx.accounts.beneficiary.key())?;

    // Every check happens here, before the transfer and before any write.
    let quote = ctx
        .accounts
        .employee_account
        .quote_claim(&RuntimeClock, ctx.accounts.treasury_token_account.amount)?;

    TokenTransfer {
        from: &ctx.accounts.treasury_token_account,
        to: &ctx.accounts.employee_token_account,
        mint: &ctx.accounts.mint,
        token_program: &ctx.accounts.token_program,
    }
    .payout(
        &ctx.accounts.vesting_account,
        &TreasuryAuthority::new(&ctx.accounts.vesting_account),
        quote.claimable,
    )?;

    let employee = &mut ctx.accounts.employee_account;
    employee.record_withdrawal(&quote)?;

    msg!(
        "Claimed {} tokens. Total withdrawn: {}/{}",
        quote.claimable,
        employee.total_withdrawn,
        employee.total_amount,
    );

    emit!(TokensClaimed {
        beneficiary: employee.beneficiary,
        vesting_account: employee.vesting_account,
        amount: quote.claimable,
        total_withdrawn: employee.total_withdrawn,
        claimed_at: quote.now,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(company_name: String)]
pub struct ClaimTokens<'info> {
    #[account(mut)]
    pub beneficiary: Signer<'info>,

    /// Not derivable from instruction inputs; clients pass the record at
    /// `find_employee_address(beneficiary, vesting_account)`. Seeds use the stored
    /// beneficiary so a foreign signer reaches the `Unauthorized` check.
    #[account(
        mut,
        seeds = [
            EMPLOYEE_VESTING_SEED,
            employee_account.beneficiary.as_ref(),
            vesting_account.key().as_ref(),
        ],
        bump = employee_account.bump,
        has_one = vesting_account,
    )]
    pub employee_account: Account<'info, EmployeeVesting>,

    #[account(
        seeds = [validations::company_seed(&company_name)?],
        bump = vesting_account.bump,
        has_one = treasury_token_account,
        has_one = mint,
    )]
    pub vesting_account: Account<'info, VestingCompany>,

    pub mint: InterfaceAccount<'info, Mint>,

    #[account(
        mut,
        seeds = [VESTING_TREASURY_SEED, validations::company_seed(&company_name)?],
        bump = vesting_account.treasury_bump,
        token::mint = mint,
        token::authority = vesting_account,
        token::token_program = token_program,
    )]
    pub treasury_token_account: InterfaceAccount<'info, TokenAccount>,

    #[account(
        init_if_needed,
        payer = beneficiary,
        associated_token::mint = mint,
        associated_token::authority = beneficiary,
        associated_token::token_program = token_program,
    )]
    pub employee_token_account: InterfaceAccount<'info, TokenAccount>,

    pub token_program: Interface<'info, TokenInterface>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

#[event]
pub struct TokensClaimed {
    pub beneficiary: Pubkey,
    pub vesting_account: Pubkey,
    pub amount: u64,
    pub total_withdrawn: u64,
    pub claimed_at: i64,
}
