//! SOL and SPL token movement helpers shared by the swap, claim and
//! withdraw paths.

use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Transfer as SolTransfer};
use anchor_spl::token::{self, Token, Transfer as SplTransfer};

use crate::error::SwapError;

/// System-program transfer signed by the user.
pub fn transfer_sol<'info>(
    from: &Signer<'info>,
    to: &AccountInfo<'info>,
    lamports: u64,
    system_program: &Program<'info, System>,
) -> Result<()> {
    system_program::transfer(
        CpiContext::new(
            system_program.to_account_info(),
            SolTransfer {
                from: from.to_account_info(),
                to: to.to_account_info(),
            },
        ),
        lamports,
    )
}

/// Move lamports out of a program-owned PDA by direct balance edit. The
/// runtime rejects the transaction if the PDA drops below rent exemption.
pub fn transfer_sol_from_pda<'info>(
    from: &AccountInfo<'info>,
    to: &AccountInfo<'info>,
    lamports: u64,
) -> Result<()> {
    let new_from = from
        .lamports()
        .checked_sub(lamports)
        .ok_or(SwapError::InsufficientVaultFunds)?;
    let new_to = to
        .lamports()
        .checked_add(lamports)
        .ok_or(SwapError::CalculationFailure)?;

    **from.try_borrow_mut_lamports()? = new_from;
    **to.try_borrow_mut_lamports()? = new_to;
    Ok(())
}

/// SPL transfer out of a user-owned token account.
pub fn transfer_tokens<'info>(
    authority: &Signer<'info>,
    from_ata: &AccountInfo<'info>,
    to_ata: &AccountInfo<'info>,
    amount: u64,
    token_program: &Program<'info, Token>,
) -> Result<()> {
    token::transfer(
        CpiContext::new(
            token_program.to_account_info(),
            SplTransfer {
                from: from_ata.clone(),
                to: to_ata.clone(),
                authority: authority.to_account_info(),
            },
        ),
        amount,
    )
}

/// SPL transfer out of a vault whose authority is a program PDA.
pub fn transfer_tokens_from_pda<'info>(
    authority_seeds: &[&[u8]],
    from_ata: &AccountInfo<'info>,
    authority: &AccountInfo<'info>,
    to_ata: &AccountInfo<'info>,
    amount: u64,
    token_program: &Program<'info, Token>,
) -> Result<()> {
    let signer_seeds = [authority_seeds];
    token::transfer(
        CpiContext::new_with_signer(
            token_program.to_account_info(),
            SplTransfer {
                from: from_ata.clone(),
                to: to_ata.clone(),
                authority: authority.clone(),
            },
            &signer_seeds,
        ),
        amount,
    )
}
