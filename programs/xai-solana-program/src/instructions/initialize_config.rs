use anchor_lang::prelude::*;

use crate::state::*;

pub const PROGRAM_VERSION: &str = "0.1.0";

pub const INIT_VIRTUAL_TOKEN_RESERVE: u128 = 1_038_000_000_000000000;
pub const INIT_VIRTUAL_SOL_RESERVE: u128 = 21_000000000;
pub const MINT_AMOUNT: u64 = 1_000_000_000_000000000;
pub const TOKEN_TOTAL_SUPPLY: u128 = 1_000_000_000_000000000;
pub const TOKEN_MAX_SUPPLY: u128 = 745_100_000_000000000;
pub const SOL_AIM: u128 = 53_420000000;

/// Bootstrap phase 2: launch constants, version record and the shared
/// recommender reward vault.
#[derive(Accounts)]
pub struct InitializeConfig<'info> {
    #[account(
        init,
        seeds = [INIT_TOKEN_CONFIG_SEED],
        bump,
        payer = owner,
        space = DISCRIMINATOR_LEN + InitTokenConfig::INIT_SPACE,
    )]
    pub init_token_config: Account<'info, InitTokenConfig>,

    #[account(
        init,
        seeds = [PROGRAM_CONFIG_SEED],
        bump,
        payer = owner,
        space = DISCRIMINATOR_LEN + ProgramConfig::INIT_SPACE,
    )]
    pub program_config: Account<'info, ProgramConfig>,

    /// CHECK: zero-space PDA, only ever holds reward SOL
    #[account(
        init,
        seeds = [RECOMMEND_REWARD_VAULT_SEED],
        bump,
        payer = owner,
        space = 0,
    )]
    pub recommend_reward_vault: AccountInfo<'info>,

    #[account(mut)]
    pub owner: Signer<'info>,
    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<InitializeConfig>) -> Result<()> {
    let config = &mut ctx.accounts.init_token_config;
    config.init_virtual_token_reserve = INIT_VIRTUAL_TOKEN_RESERVE;
    config.init_virtual_sol_reserve = INIT_VIRTUAL_SOL_RESERVE;
    config.mint_amount = MINT_AMOUNT;
    config.token_total_supply = TOKEN_TOTAL_SUPPLY;
    config.token_max_supply = TOKEN_MAX_SUPPLY;
    config.sol_aim = SOL_AIM;

    ctx.accounts.program_config.version = std::array::from_fn(|i| {
        PROGRAM_VERSION.as_bytes().get(i).copied().unwrap_or(b'\0')
    });

    Ok(())
}
