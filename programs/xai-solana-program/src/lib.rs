//! Bonding-curve token launchpad.
//!
//! Tokens launch against a constant-product curve seeded from a global
//! config; buys raise SOL toward a fixed target, at which point the curve
//! graduates and the vaults are handed to the migration authority. A
//! two-level recommender program pays referral rewards out of trading fees.

pub mod curve;
pub mod error;
pub mod events;
pub mod fees;
pub mod instructions;
pub mod state;
pub mod transfer;

use anchor_lang::prelude::*;

pub use error::SwapError;
pub use instructions::*;
pub use state::*;

declare_id!("65tLehMbGRJUYJDNP5V2nCy3oVRBQW315gtLxuCSJ88b");

#[program]
pub mod xai_solana_program {
    use super::*;

    /// Bootstrap phase 1: authority record, program signer and fee config.
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        instructions::initialize::handler(ctx)
    }

    /// Bootstrap phase 2: launch constants, version and reward vault.
    pub fn initialize_config(ctx: Context<InitializeConfig>) -> Result<()> {
        instructions::initialize_config::handler(ctx)
    }

    pub fn init_create_token_account(
        ctx: Context<InitCreateTokenAccount>,
        params: InitTokenParams,
    ) -> Result<()> {
        instructions::create_token::reserve_handler(ctx, params)
    }

    pub fn create_token(ctx: Context<InitToken>, params: InitTokenParams) -> Result<()> {
        instructions::create_token::handler(ctx, params)
    }

    pub fn initialize_fee_recommend_reward(
        ctx: Context<InitializeFeeRecommendReward>,
    ) -> Result<()> {
        instructions::claim::init_reward_handler(ctx)
    }

    pub fn buy(ctx: Context<BuyToken>, amount_in: u128, amount_out_min: u128) -> Result<()> {
        instructions::swap::buy_handler(ctx, amount_in, amount_out_min)
    }

    pub fn sell(ctx: Context<SellToken>, amount_in: u128, amount_out_min: u128) -> Result<()> {
        instructions::swap::sell_handler(ctx, amount_in, amount_out_min)
    }

    pub fn recommender_claim_sol(ctx: Context<RecommenderClaimSol>) -> Result<()> {
        instructions::claim::claim_handler(ctx)
    }

    pub fn withdraw(
        ctx: Context<Withdraw>,
        withdraw_sol_amount: u64,
        withdraw_token_amount: u64,
    ) -> Result<()> {
        instructions::withdraw::handler(ctx, withdraw_sol_amount, withdraw_token_amount)
    }

    pub fn set_owner(ctx: Context<SetOwner>) -> Result<()> {
        instructions::admin::set_owner_handler(ctx)
    }

    pub fn set_admin(ctx: Context<SetAdmin>) -> Result<()> {
        instructions::admin::set_admin_handler(ctx)
    }

    pub fn set_fee_receiver_account(ctx: Context<SetFeeReceiverAccount>) -> Result<()> {
        instructions::admin::set_fee_receiver_handler(ctx)
    }
}
