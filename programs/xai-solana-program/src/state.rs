use anchor_lang::prelude::*;

pub const DISCRIMINATOR_LEN: usize = 8;

/// PDA seeds. The client derives the same addresses, so these are part of
/// the program's public surface.
pub const PROGRAM_SYSTEM_ACCOUNT_SEED: &[u8] = b"program_system_account";
pub const PROGRAM_SIGNER_SEED: &[u8] = b"program_signer";
pub const FEE_CONFIG_SEED: &[u8] = b"fee_config";
pub const INIT_TOKEN_CONFIG_SEED: &[u8] = b"init_token_config";
pub const PROGRAM_CONFIG_SEED: &[u8] = b"program_config";
pub const CURVE_CONFIG_SEED: &[u8] = b"curve_config";
pub const MINT_SEED: &[u8] = b"mint";
pub const RECOMMEND_REWARD_VAULT_SEED: &[u8] = b"recommend_reward_vault";
pub const FEE_RECOMMEND_REWARD_SEED: &[u8] = b"fee_recommend_reward";

/// Authority record for the whole program.
#[account]
#[derive(Debug, Default, InitSpace)]
pub struct ProgramSystemAccount {
    pub owner: Pubkey,
    pub admin: Pubkey,
    pub migration_account: Pubkey,
}

#[account]
#[derive(Debug, Default, InitSpace)]
pub struct FeeConfig {
    pub trade_fee_numerator: u64,
    pub trade_fee_denominator: u64,
    pub creation_fee: u64,
    pub fee_receiver_account: Pubkey,
    /// Recommender reward shares in basis points of the trading fee, one
    /// slot per referral level.
    pub recommend_award_list: [u16; 5],
}

/// Launch parameters applied to every newly created token.
#[account]
#[derive(Debug, Default, InitSpace)]
pub struct InitTokenConfig {
    pub init_virtual_token_reserve: u128,
    pub init_virtual_sol_reserve: u128,
    pub mint_amount: u64,
    pub token_total_supply: u128,
    pub token_max_supply: u128,
    pub sol_aim: u128,
}

#[account]
#[derive(Debug, Default, InitSpace)]
pub struct ProgramConfig {
    /// NUL-padded semver string.
    pub version: [u8; 8],
}

/// Per-token bonding curve. The account's own lamport balance doubles as
/// the SOL vault for the token.
#[account]
#[derive(Debug, Default, InitSpace)]
pub struct CurveConfig {
    pub virtual_token_reserve: u128,
    pub virtual_sol_reserve: u128,
    pub token_reserve: u128,
    pub token_max_supply: u128,
    pub sol_reserve: u128,
    /// SOL left to raise before the curve graduates.
    pub sol_aim: u128,
    /// Constant product of the initial virtual reserves.
    pub k: u128,
    pub graduated: bool,
}

/// Accrued referral rewards for one recommender, keyed by their pubkey.
#[account]
#[derive(Debug, Default, InitSpace)]
pub struct FeeRecommendReward {
    pub unclaimed_sol: u64,
    pub total_reward: u64,
}
