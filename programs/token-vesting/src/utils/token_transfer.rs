use anchor_lang::prelude::*;
use anchor_spl::token_interface::{
    transfer_checked, Mint, TokenAccount, TokenInterface, TransferChecked,
};

use crate::error::VestingError;
use crate::state::VestingCompany;
use crate::utils::pda::TreasuryAuthority;

/// A `transfer_checked` between two token accounts of the company mint.
pub struct TokenTransfer<'a, 'info> {
    pub from: &'a InterfaceAccount<'info, TokenAccount>,
    pub to: &'a InterfaceAccount<'info, TokenAccount>,
    pub mint: &'a InterfaceAccount<'info, Mint>,
    pub token_program: &'a Interface<'info, TokenInterface>,
}

impl<'a, 'info> TokenTransfer<'a, 'info> {
    /// Wallet-signed deposit, e.g. the owner topping up the treasury.
    pub fn deposit(&self, owner: &Signer<'info>, amount: u64) -> Result<()> {
        self.send(owner.to_account_info(), amount, &[])
    }

    /// Treasury payout signed by the company PDA.
    ///
    /// The authority must re-derive `company`, otherwise nothing is sent.
    pub fn payout(
        &self,
        company: &Account<'info, VestingCompany>,
        authority: &TreasuryAuthority,
        amount: u64,
    ) -> Result<()> {
        require_keys_eq!(
            authority.address()?,
            company.key(),
            VestingError::Unauthorized
        );
        let seeds = authority.seeds();
        self.send(company.to_account_info(), amount, &[&seeds[..]])
    }

    fn send(
        &self,
        authority: AccountInfo<'info>,
        amount: u64,
        signer_seeds: &[&[&[u8]]],
    ) -> Result<()> {
        let accounts = TransferChecked {
            from: self.from.to_account_info(),
            mint: self.mint.to_account_info(),
            to: self.to.to_account_info(),
            authority,
        };
        let cpi_ctx = CpiContext::new_with_signer(
            self.token_program.to_account_info(),
            accounts,
            signer_seeds,
        );
        transfer_checked(cpi_ctx, amount, self.mint.decimals)
    }
}
