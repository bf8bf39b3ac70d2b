use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::error::VestingError;
use crate::state::VestingCompany;
use crate::utils::TokenTransfer;

/// Owner top-up of the treasury. Minting straight into the treasury is equally valid.
pub fn fund_treasury_handler(ctx: Context<FundTreasury>, amount: u64) -> Result<()> {
    require!(amount > 0, VestingError::InvalidAmount);
    ctx.accounts
        .vesting_account
        .ensure_owner(&ctx.accounts.owner.key())?;

    TokenTransfer {
        from: &ctx.accounts.owner_token_account,
        to: &ctx.accounts.treasury_token_account,
        mint: &ctx.accounts.mint,
        token_program: &ctx.accounts.token_program,
    }
    .deposit(&ctx.accounts.owner, amount)?;

    ctx.accounts.treasury_token_account.reload()?;

    emit!(TreasuryFunded {
        vesting_account: ctx.accounts.vesting_account.key(),
        owner: ctx.accounts.owner.key(),
        amount,
        treasury_balance: ctx.accounts.treasury_token_account.amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct FundTreasury<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        seeds = [vesting_account.company_name.as_bytes()],
        bump = vesting_account.bump,
        has_one = treasury_token_account,
        has_one = mint,
    )]
    pub vesting_account: Account<'info, VestingCompany>,

    pub mint: InterfaceAccount<'info, Mint>,

    #[account(mut)]
    pub treasury_token_account: InterfaceAccount<'info, TokenAccount>,

    #[account(
        mut,
        token::mint = mint,
        token::authority = owner,
        token::token_program = token_program,
    )]
    pub owner_token_account: InterfaceAccount<'info, TokenAccount>,

    pub token_program: Interface<'info, TokenInterface>,
}

#[event]
pub struct TreasuryFunded {
    pub vesting_account: Pubkey,
    pub owner: Pubkey,
    pub amount: u64,
    pub treasury_balance: u64,
}
