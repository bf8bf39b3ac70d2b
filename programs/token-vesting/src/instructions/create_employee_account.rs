use anchor_lang::prelude::*;

use crate::constants::{ANCHOR_DISCRIMINATOR, EMPLOYEE_VESTING_SEED};
use crate::error::VestingError;
use crate::state::{EmployeeVesting, VestingCompany};
use crate::utils::validations;

pub fn create_employee_account_handler(
    ctx: Context<CreateEmployeeAccount>,
    start_time: i64,
    end_time: i64,
    total_amount: u64,
    cliff_time: i64,
) -> Result<()> {
    ctx.accounts
        .vesting_account
        .ensure_owner(&ctx.accounts.owner.key())?;
    validations::check_schedule(start_time, cliff_time, end_time)?;

    let vesting_account_key = ctx.accounts.vesting_account.key();
    let employee = &mut ctx.accounts.employee_account;

    // Treasury balance is not checked here; underfunding surfaces at claim time.
    employee.beneficiary = ctx.accounts.beneficiary.key();
    employee.start_time = start_time;
    employee.end_time = end_time;
    employee.cliff_time = cliff_time;
    employee.vesting_account = vesting_account_key;
    employee.total_amount = total_amount;
    employee.total_withdrawn = 0;
    employee.bump = ctx.bumps.employee_account;

    let number_of_employees = ctx.accounts.vesting_account.register_employee()?;

    msg!(
        "Employee vesting created: beneficiary={}, total={}, employees={}",
        ctx.accounts.employee_account.beneficiary,
        total_amount,
        number_of_employees,
    );

    emit!(EmployeeVestingCreated {
        vesting_account: vesting_account_key,
        employee_account: ctx.accounts.employee_account.key(),
        beneficiary: ctx.accounts.employee_account.beneficiary,
        start_time,
        end_time,
        cliff_time,
        total_amount,
        number_of_employees,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct CreateEmployeeAccount<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    pub beneficiary: SystemAccount<'info>,

    #[account(
        mut,
        seeds = [vesting_account.company_name.as_bytes()],
        bump = vesting_account.bump,
    )]
    pub vesting_account: Account<'info, VestingCompany>,

    #[account(
        init_if_needed,
        payer = owner,
        space = ANCHOR_DISCRIMINATOR + EmployeeVesting::INIT_SPACE,
        seeds = [
            EMPLOYEE_VESTING_SEED,
            beneficiary.key().as_ref(),
            vesting_account.key().as_ref(),
        ],
        bump,
        constraint = !employee_account.is_initialized() @ VestingError::AlreadyExists,
    )]
    pub employee_account: Account<'info, EmployeeVesting>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct EmployeeVestingCreated {
    pub vesting_account: Pubkey,
    pub employee_account: Pubkey,
    pub beneficiary: Pubkey,
    pub start_time: i64,
    pub end_time: i64,
    pub cliff_time: i64,
    pub total_amount: u64,
    pub number_of_employees: u64,
}
