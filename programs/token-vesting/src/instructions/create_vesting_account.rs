use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::constants::{ANCHOR_DISCRIMINATOR, VESTING_TREASURY_SEED};
use crate::error::VestingError;
use crate::state::VestingCompany;
use crate::utils::validations;

pub fn create_vesting_account_handler(
    ctx: Context<CreateVestingAccount>,
    company_name: String,
) -> Result<()> {
    let company = &mut ctx.accounts.vesting_account;
    company.owner = ctx.accounts.signer.key();
    company.mint = ctx.accounts.mint.key();
    company.treasury_token_account = ctx.accounts.treasury_token_account.key();
    company.company_name = company_name;
    company.treasury_bump = ctx.bumps.treasury_token_account;
    company.bump = ctx.bumps.vesting_account;
    company.number_of_employees = 0;

    msg!(
        "Vesting company created: name={}, owner={}, mint={}",
        company.company_name,
        company.owner,
        company.mint,
    );

    emit!(VestingCompanyCreated {
        vesting_account: company.key(),
        owner: company.owner,
        mint: company.mint,
        treasury_token_account: company.treasury_token_account,
        company_name: company.company_name.clone(),
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(company_name: String)]
pub struct CreateVestingAccount<'info> {
    #[account(mut)]
    pub signer: Signer<'info>,

    // One record per company name: the name is the only seed. It is validated
    // before derivation, and a populated record means the name is taken.
    #[account(
        init_if_needed,
        payer = signer,
        space = ANCHOR_DISCRIMINATOR + VestingCompany::INIT_SPACE,
        seeds = [validations::company_seed(&company_name)?],
        bump,
        constraint = !vesting_account.is_initialized() @ VestingError::AlreadyExists,
    )]
    pub vesting_account: Account<'info, VestingCompany>,

    pub mint: InterfaceAccount<'info, Mint>,

    #[account(
        init_if_needed,
        payer = signer,
        token::mint = mint,
        token::authority = vesting_account,
        token::token_program = token_program,
        seeds = [VESTING_TREASURY_SEED, validations::company_seed(&company_name)?],
        bump
    )]
    pub treasury_token_account: InterfaceAccount<'info, TokenAccount>,

    pub system_program: Program<'info, System>,
    pub token_program: Interface<'info, TokenInterface>,
}

#[event]
pub struct VestingCompanyCreated {
    pub vesting_account: Pubkey,
    pub owner: Pubkey,
    pub mint: Pubkey,
    pub treasury_token_account: Pubkey,
    pub company_name: String,
}
