use anchor_lang::prelude::*;

use crate::events::RecommenderClaimSolEvent;
use crate::state::*;
use crate::transfer;

#[derive(Accounts)]
pub struct InitializeFeeRecommendReward<'info> {
    #[account(
        init_if_needed,
        seeds = [FEE_RECOMMEND_REWARD_SEED, recommender.key().as_ref()],
        bump,
        payer = user,
        space = DISCRIMINATOR_LEN + FeeRecommendReward::INIT_SPACE,
    )]
    pub fee_recommend_reward: Account<'info, FeeRecommendReward>,

    /// CHECK: only used in seeds
    pub recommender: UncheckedAccount<'info>,

    #[account(mut)]
    pub user: Signer<'info>,
    pub system_program: Program<'info, System>,
}

#[event_cpi]
#[derive(Accounts)]
pub struct RecommenderClaimSol<'info> {
    #[account(
        mut,
        seeds = [FEE_RECOMMEND_REWARD_SEED, recommender.key().as_ref()],
        bump,
    )]
    pub fee_recommend_reward: Account<'info, FeeRecommendReward>,

    /// CHECK: sends SOL to the recommender
    #[account(
        mut,
        seeds = [RECOMMEND_REWARD_VAULT_SEED],
        bump,
    )]
    pub recommend_reward_vault: AccountInfo<'info>,

    #[account(mut)]
    pub recommender: Signer<'info>,
    pub system_program: Program<'info, System>,
}

pub fn init_reward_handler(_ctx: Context<InitializeFeeRecommendReward>) -> Result<()> {
    // init_if_needed does the work; an existing PDA keeps its balance.
    Ok(())
}

pub fn claim_handler(ctx: Context<RecommenderClaimSol>) -> Result<()> {
    let claim_amount = ctx.accounts.fee_recommend_reward.unclaimed_sol;
    ctx.accounts.fee_recommend_reward.unclaimed_sol = 0;

    transfer::transfer_sol_from_pda(
        &ctx.accounts.recommend_reward_vault,
        &ctx.accounts.recommender.to_account_info(),
        claim_amount,
    )?;

    emit_cpi!(RecommenderClaimSolEvent {
        recommender: ctx.accounts.recommender.key(),
        claim_amount,
    });

    Ok(())
}
