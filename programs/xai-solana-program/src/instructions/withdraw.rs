use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::state::*;
use crate::transfer;

/// Migration-only drain of a graduated token's vaults.
#[derive(Accounts)]
pub struct Withdraw<'info> {
    /// CHECK: signs token and SOL moves out of program vaults
    #[account(seeds = [PROGRAM_SIGNER_SEED], bump)]
    pub program_signer: AccountInfo<'info>,

    #[account(
        mut,
        associated_token::mint = token_mint,
        associated_token::authority = program_signer,
    )]
    pub vault_token: Account<'info, TokenAccount>,

    /// CHECK: the curve PDA's lamport balance is the SOL vault
    #[account(
        mut,
        seeds = [CURVE_CONFIG_SEED, token_mint.key().as_ref()],
        bump,
    )]
    pub vault_sol: UncheckedAccount<'info>,

    pub token_mint: Account<'info, Mint>,

    #[account(
        seeds = [PROGRAM_SYSTEM_ACCOUNT_SEED],
        bump,
        owner = crate::ID,
    )]
    pub program_system_account: Account<'info, ProgramSystemAccount>,

    #[account(
        mut,
        constraint = migration.key() == program_system_account.migration_account
    )]
    pub migration: Signer<'info>,

    #[account(
        init_if_needed,
        payer = migration,
        associated_token::mint = token_mint,
        associated_token::authority = migration,
        constraint = migration.key() == migration_ata.owner,
    )]
    pub migration_ata: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

pub fn handler(
    ctx: Context<Withdraw>,
    withdraw_sol_amount: u64,
    withdraw_token_amount: u64,
) -> Result<()> {
    transfer::transfer_sol_from_pda(
        &ctx.accounts.vault_sol,
        &ctx.accounts.migration.to_account_info(),
        withdraw_sol_amount,
    )?;

    let program_signer_seeds: &[&[u8]] = &[PROGRAM_SIGNER_SEED, &[ctx.bumps.program_signer]];
    transfer::transfer_tokens_from_pda(
        program_signer_seeds,
        &ctx.accounts.vault_token.to_account_info(),
        &ctx.accounts.program_signer,
        &ctx.accounts.migration_ata.to_account_info(),
        withdraw_token_amount,
        &ctx.accounts.token_program,
    )?;

    Ok(())
}
