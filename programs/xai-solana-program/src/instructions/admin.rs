use anchor_lang::prelude::*;

use crate::state::*;

#[derive(Accounts)]
pub struct SetOwner<'info> {
    #[account(
        mut,
        seeds = [PROGRAM_SYSTEM_ACCOUNT_SEED],
        bump,
        owner = crate::ID,
    )]
    pub program_system_account: Account<'info, ProgramSystemAccount>,

    /// CHECK: read only
    pub new_owner: AccountInfo<'info>,

    #[account(
        mut,
        constraint = owner.key() == program_system_account.owner
    )]
    pub owner: Signer<'info>,
}

#[derive(Accounts)]
pub struct SetAdmin<'info> {
    #[account(
        mut,
        seeds = [PROGRAM_SYSTEM_ACCOUNT_SEED],
        bump,
        owner = crate::ID,
    )]
    pub program_system_account: Account<'info, ProgramSystemAccount>,

    /// CHECK: read only
    pub new_admin: AccountInfo<'info>,

    #[account(
        mut,
        constraint = owner.key() == program_system_account.owner
    )]
    pub owner: Signer<'info>,
}

#[derive(Accounts)]
pub struct SetFeeReceiverAccount<'info> {
    #[account(
        mut,
        seeds = [PROGRAM_SYSTEM_ACCOUNT_SEED],
        bump,
        owner = crate::ID,
    )]
    pub program_system_account: Account<'info, ProgramSystemAccount>,

    #[account(
        mut,
        seeds = [FEE_CONFIG_SEED],
        bump,
        owner = crate::ID,
    )]
    pub fee_config: Account<'info, FeeConfig>,

    /// CHECK: read only
    pub new_fee_receiver_account: AccountInfo<'info>,

    #[account(
        mut,
        constraint = owner.key() == program_system_account.owner
    )]
    pub owner: Signer<'info>,
}

pub fn set_owner_handler(ctx: Context<SetOwner>) -> Result<()> {
    ctx.accounts.program_system_account.owner = ctx.accounts.new_owner.key();
    Ok(())
}

pub fn set_admin_handler(ctx: Context<SetAdmin>) -> Result<()> {
    ctx.accounts.program_system_account.admin = ctx.accounts.new_admin.key();
    Ok(())
}

pub fn set_fee_receiver_handler(ctx: Context<SetFeeReceiverAccount>) -> Result<()> {
    ctx.accounts.fee_config.fee_receiver_account = ctx.accounts.new_fee_receiver_account.key();
    Ok(())
}
