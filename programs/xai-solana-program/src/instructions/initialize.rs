use anchor_lang::prelude::*;

use crate::state::*;

pub const DEFAULT_TRADE_FEE_NUMERATOR: u64 = 1;
pub const DEFAULT_TRADE_FEE_DENOMINATOR: u64 = 100;
/// 0.02 SOL
pub const DEFAULT_CREATION_FEE: u64 = 20_000_000;
pub const DEFAULT_RECOMMEND_AWARD_LIST: [u16; 5] = [2000, 1000, 0, 0, 0];

/// Bootstrap phase 1: authority record, program signer and fee config.
#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = owner,
        space = DISCRIMINATOR_LEN + ProgramSystemAccount::INIT_SPACE,
        seeds = [PROGRAM_SYSTEM_ACCOUNT_SEED],
        bump
    )]
    pub program_system_account: Account<'info, ProgramSystemAccount>,

    /// CHECK: zero-space PDA, only ever used to sign token and SOL moves
    #[account(
        init,
        payer = owner,
        space = 0,
        seeds = [PROGRAM_SIGNER_SEED],
        bump
    )]
    pub program_signer: AccountInfo<'info>,

    #[account(
        init,
        seeds = [FEE_CONFIG_SEED],
        bump,
        payer = owner,
        space = DISCRIMINATOR_LEN + FeeConfig::INIT_SPACE,
    )]
    pub fee_config: Account<'info, FeeConfig>,

    /// CHECK: read only, recorded as the withdrawal authority
    pub migration_account: AccountInfo<'info>,

    /// CHECK: read only, recorded as the fee sink
    pub fee_receiver_account: AccountInfo<'info>,

    #[account(mut)]
    pub owner: Signer<'info>,
    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<Initialize>) -> Result<()> {
    let fee_config = &mut ctx.accounts.fee_config;
    fee_config.trade_fee_numerator = DEFAULT_TRADE_FEE_NUMERATOR;
    fee_config.trade_fee_denominator = DEFAULT_TRADE_FEE_DENOMINATOR;
    fee_config.creation_fee = DEFAULT_CREATION_FEE;
    fee_config.fee_receiver_account = ctx.accounts.fee_receiver_account.key();
    fee_config.recommend_award_list = DEFAULT_RECOMMEND_AWARD_LIST;

    let system = &mut ctx.accounts.program_system_account;
    system.owner = ctx.accounts.owner.key();
    system.admin = ctx.accounts.owner.key();
    system.migration_account = ctx.accounts.migration_account.key();

    Ok(())
}
