use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token::{Mint, Token, TokenAccount};
use serde_json::json;

use crate::curve;
use crate::error::SwapError;
use crate::events::{BuyEvent, SellEvent, TokenGraduated};
use crate::fees::Fees;
use crate::state::*;
use crate::transfer;

#[derive(Accounts)]
pub struct BuyToken<'info> {
    #[account(
        mut,
        seeds = [CURVE_CONFIG_SEED, token_mint.key().as_ref()],
        bump
    )]
    pub curve_config: Account<'info, CurveConfig>,

    #[account(
        mut,
        associated_token::mint = token_mint,
        associated_token::authority = program_signer,
    )]
    pub vault: Account<'info, TokenAccount>,

    /// CHECK: the curve PDA's lamport balance is the SOL vault
    #[account(
        mut,
        seeds = [CURVE_CONFIG_SEED, token_mint.key().as_ref()],
        bump,
    )]
    pub vault_sol: UncheckedAccount<'info>,

    /// CHECK: signs token and SOL moves out of program vaults
    #[account(seeds = [PROGRAM_SIGNER_SEED], bump)]
    pub program_signer: UncheckedAccount<'info>,

    #[account(seeds = [FEE_CONFIG_SEED], bump)]
    pub fee_config: Account<'info, FeeConfig>,

    /// CHECK: only receives fee SOL
    #[account(
        mut,
        constraint = fee_receiver_account.key() == fee_config.fee_receiver_account
    )]
    pub fee_receiver_account: UncheckedAccount<'info>,

    #[account(mut)]
    pub user: Signer<'info>,
    pub token_mint: Account<'info, Mint>,

    /// CHECK: only receives tokens
    pub receiver: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        payer = user,
        associated_token::mint = token_mint,
        associated_token::authority = receiver,
    )]
    pub receiver_ata: Account<'info, TokenAccount>,

    /// CHECK: only receives reward SOL
    #[account(
        mut,
        seeds = [RECOMMEND_REWARD_VAULT_SEED],
        bump,
    )]
    pub recommend_reward_vault: AccountInfo<'info>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct SellToken<'info> {
    #[account(
        mut,
        seeds = [CURVE_CONFIG_SEED, token_mint.key().as_ref()],
        bump
    )]
    pub curve_config: Account<'info, CurveConfig>,

    #[account(
        mut,
        associated_token::mint = token_mint,
        associated_token::authority = program_signer,
    )]
    pub vault: Account<'info, TokenAccount>,

    /// CHECK: the curve PDA's lamport balance is the SOL vault
    #[account(
        mut,
        seeds = [CURVE_CONFIG_SEED, token_mint.key().as_ref()],
        bump,
    )]
    pub vault_sol: UncheckedAccount<'info>,

    /// CHECK: signs token and SOL moves out of program vaults
    #[account(seeds = [PROGRAM_SIGNER_SEED], bump)]
    pub program_signer: UncheckedAccount<'info>,

    #[account(seeds = [FEE_CONFIG_SEED], bump)]
    pub fee_config: Account<'info, FeeConfig>,

    /// CHECK: only receives fee SOL
    #[account(
        mut,
        constraint = fee_receiver_account.key() == fee_config.fee_receiver_account
    )]
    pub fee_receiver_account: UncheckedAccount<'info>,

    #[account(
        mut,
        constraint = user.key() == user_token_ata.owner,
    )]
    pub user_token_ata: Account<'info, TokenAccount>,
    #[account(mut)]
    pub user: Signer<'info>,
    pub token_mint: Account<'info, Mint>,

    /// CHECK: only receives SOL
    #[account(mut)]
    pub receiver: UncheckedAccount<'info>,

    /// CHECK: only receives reward SOL
    #[account(
        mut,
        seeds = [RECOMMEND_REWARD_VAULT_SEED],
        bump,
    )]
    pub recommend_reward_vault: AccountInfo<'info>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

fn check_amount_in(amount_in: u128) -> Result<()> {
    require!(amount_in > 0, SwapError::InvalidAmountIn);
    Ok(())
}

/// A buy additionally needs SOL left to raise.
fn check_buy_open(curve: &CurveConfig) -> Result<()> {
    require!(
        curve.token_reserve > 0 && curve.sol_aim > 0 && !curve.graduated,
        SwapError::TokenGraduated
    );
    Ok(())
}

fn check_sell_open(curve: &CurveConfig) -> Result<()> {
    require!(
        curve.token_reserve > 0 && !curve.graduated,
        SwapError::TokenGraduated
    );
    Ok(())
}

fn check_amount_out(amount_out: u128, amount_out_min: u128) -> Result<()> {
    require!(
        amount_out >= amount_out_min,
        SwapError::InsufficientOutputAmount
    );
    Ok(())
}

pub fn buy_handler(ctx: Context<BuyToken>, amount_in: u128, amount_out_min: u128) -> Result<()> {
    msg!("buy amount_in: {}", amount_in);
    check_amount_in(amount_in)?;

    let curve = &mut ctx.accounts.curve_config;
    check_buy_open(curve)?;

    let fees = Fees {
        trade_fee_numerator: ctx.accounts.fee_config.trade_fee_numerator,
        trade_fee_denominator: ctx.accounts.fee_config.trade_fee_denominator,
        fee_receiver_account: ctx.accounts.fee_config.fee_receiver_account,
    };

    // Cap the spend at the remaining target; beyond the cap the fee is
    // charged on top instead of out of the input.
    let (trading_fee, amount_in_without_fee) = if amount_in > curve.sol_aim {
        (fees.trading_fee_reverse(curve.sol_aim)?, curve.sol_aim)
    } else {
        let fee = fees.trading_fee(amount_in)?;
        let net = amount_in
            .checked_sub(fee)
            .ok_or(SwapError::CalculationFailure)?;
        (fee, net)
    };

    let mut quote = curve::buy(curve, amount_in_without_fee)?;

    curve.sol_aim = curve
        .sol_aim
        .checked_sub(amount_in_without_fee)
        .ok_or(SwapError::CalculationFailure)?;
    curve.sol_reserve = curve
        .sol_reserve
        .checked_add(amount_in_without_fee)
        .ok_or(SwapError::CalculationFailure)?;

    // Hitting the target flushes the whole remaining reserve to the buyer
    // and ends trading on this curve.
    let mut graduated = false;
    if curve.sol_aim == 0 {
        quote.amount_out = curve.token_reserve;
        quote.new_virtual_token_reserve = curve
            .virtual_token_reserve
            .checked_sub(quote.amount_out)
            .ok_or(SwapError::CalculationFailure)?;
        graduated = true;
    }
    msg!("buy amount_out: {:?}", quote.amount_out);

    check_amount_out(quote.amount_out, amount_out_min)?;

    let vsr = curve.virtual_sol_reserve;
    let vtr = curve.virtual_token_reserve;

    curve.virtual_sol_reserve = quote.new_virtual_sol_reserve;
    curve.virtual_token_reserve = quote.new_virtual_token_reserve;
    curve.token_reserve = curve
        .token_reserve
        .checked_sub(quote.amount_out)
        .ok_or(SwapError::CalculationFailure)?;

    let trading_fee_lamports =
        u64::try_from(trading_fee).map_err(|_| SwapError::CalculationFailure)?;
    let (residue_fee, total_reward_fee) = fees.reward_recommenders(
        trading_fee_lamports,
        ctx.remaining_accounts,
        &ctx.accounts.fee_config.recommend_award_list,
        ctx.program_id,
    )?;

    transfer::transfer_sol(
        &ctx.accounts.user,
        &ctx.accounts.recommend_reward_vault,
        total_reward_fee,
        &ctx.accounts.system_program,
    )?;
    transfer::transfer_sol(
        &ctx.accounts.user,
        &ctx.accounts.fee_receiver_account,
        residue_fee,
        &ctx.accounts.system_program,
    )?;
    transfer::transfer_sol(
        &ctx.accounts.user,
        &ctx.accounts.vault_sol,
        u64::try_from(amount_in_without_fee).map_err(|_| SwapError::CalculationFailure)?,
        &ctx.accounts.system_program,
    )?;
    msg!("receive SOL successfully.");

    let program_signer_seeds: &[&[u8]] = &[PROGRAM_SIGNER_SEED, &[ctx.bumps.program_signer]];
    transfer::transfer_tokens_from_pda(
        program_signer_seeds,
        &ctx.accounts.vault.to_account_info(),
        &ctx.accounts.program_signer,
        &ctx.accounts.receiver_ata.to_account_info(),
        u64::try_from(quote.amount_out).map_err(|_| SwapError::CalculationFailure)?,
        &ctx.accounts.token_program,
    )?;

    let timestamp = Clock::get()?.unix_timestamp;
    let timestamp = u64::try_from(timestamp).map_err(|_| SwapError::CalculationFailure)?;

    msg!(
        "$BuyEvent: {}",
        json!(BuyEvent {
            u: ctx.accounts.receiver.key().to_string(),
            ua: ctx.accounts.receiver_ata.key().to_string(),
            mint: ctx.accounts.token_mint.key().to_string(),
            vsr,
            vtr,
            nvsr: quote.new_virtual_sol_reserve,
            nvtr: quote.new_virtual_token_reserve,
            f: trading_fee,
            i: trading_fee
                .checked_add(amount_in_without_fee)
                .ok_or(SwapError::CalculationFailure)?,
            o: quote.amount_out,
            t: timestamp,
        })
    );

    if graduated {
        ctx.accounts.curve_config.graduated = true;
        msg!(
            "$TokenGraduatedEvent: {}",
            json!(TokenGraduated {
                mint: ctx.accounts.token_mint.key().to_string(),
            })
        );
    }

    Ok(())
}

pub fn sell_handler(ctx: Context<SellToken>, amount_in: u128, amount_out_min: u128) -> Result<()> {
    check_amount_in(amount_in)?;
    check_sell_open(&ctx.accounts.curve_config)?;

    let quote = curve::sell(&ctx.accounts.curve_config, amount_in)?;
    msg!("sell amount_out: {:?}", quote.amount_out);

    let fees = Fees {
        trade_fee_numerator: ctx.accounts.fee_config.trade_fee_numerator,
        trade_fee_denominator: ctx.accounts.fee_config.trade_fee_denominator,
        fee_receiver_account: ctx.accounts.fee_config.fee_receiver_account,
    };
    let trading_fee = fees.trading_fee(quote.amount_out)?;

    transfer::transfer_tokens(
        &ctx.accounts.user,
        &ctx.accounts.user_token_ata.to_account_info(),
        &ctx.accounts.vault.to_account_info(),
        u64::try_from(amount_in).map_err(|_| SwapError::CalculationFailure)?,
        &ctx.accounts.token_program,
    )?;
    msg!("receive token successfully.");

    let trading_fee_lamports =
        u64::try_from(trading_fee).map_err(|_| SwapError::CalculationFailure)?;
    let (residue_fee, total_reward_fee) = fees.reward_recommenders(
        trading_fee_lamports,
        ctx.remaining_accounts,
        &ctx.accounts.fee_config.recommend_award_list,
        ctx.program_id,
    )?;

    transfer::transfer_sol(
        &ctx.accounts.user,
        &ctx.accounts.recommend_reward_vault,
        total_reward_fee,
        &ctx.accounts.system_program,
    )?;
    transfer::transfer_sol_from_pda(
        &ctx.accounts.vault_sol,
        &ctx.accounts.fee_receiver_account,
        residue_fee,
    )?;

    let amount_out_without_fee = quote
        .amount_out
        .checked_sub(trading_fee)
        .ok_or(SwapError::CalculationFailure)?;
    check_amount_out(amount_out_without_fee, amount_out_min)?;

    transfer::transfer_sol_from_pda(
        &ctx.accounts.vault_sol,
        &ctx.accounts.receiver,
        u64::try_from(amount_out_without_fee).map_err(|_| SwapError::CalculationFailure)?,
    )?;

    let vsr = ctx.accounts.curve_config.virtual_sol_reserve;
    let vtr = ctx.accounts.curve_config.virtual_token_reserve;

    let curve = &mut ctx.accounts.curve_config;
    curve.virtual_sol_reserve = quote.new_virtual_sol_reserve;
    curve.virtual_token_reserve = quote.new_virtual_token_reserve;
    curve.token_reserve = curve
        .token_reserve
        .checked_add(amount_in)
        .ok_or(SwapError::CalculationFailure)?;
    curve.sol_reserve = curve
        .sol_reserve
        .checked_sub(quote.amount_out)
        .ok_or(SwapError::CalculationFailure)?;
    curve.sol_aim = curve
        .sol_aim
        .checked_add(quote.amount_out)
        .ok_or(SwapError::CalculationFailure)?;

    let timestamp = Clock::get()?.unix_timestamp;
    let timestamp = u64::try_from(timestamp).map_err(|_| SwapError::CalculationFailure)?;

    msg!(
        "$SellEvent: {}",
        json!(SellEvent {
            u: ctx.accounts.user.key().to_string(),
            ua: ctx.accounts.user_token_ata.key().to_string(),
            mint: ctx.accounts.token_mint.key().to_string(),
            vsr,
            vtr,
            nvsr: quote.new_virtual_sol_reserve,
            nvtr: quote.new_virtual_token_reserve,
            f: trading_fee,
            i: amount_in,
            o: amount_out_without_fee,
            t: timestamp,
        })
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_curve() -> CurveConfig {
        CurveConfig {
            virtual_token_reserve: 1_038_000_000_000000000,
            virtual_sol_reserve: 21_000000000,
            token_reserve: 745_100_000_000000000,
            sol_aim: 53_420000000,
            ..CurveConfig::default()
        }
    }

    #[test]
    fn zero_amount_in_is_rejected() {
        let err = check_amount_in(0).unwrap_err();
        assert_eq!(err, SwapError::InvalidAmountIn.into());
        assert!(check_amount_in(1).is_ok());
    }

    #[test]
    fn graduated_curve_rejects_both_sides() {
        let curve = CurveConfig {
            graduated: true,
            ..open_curve()
        };
        assert_eq!(
            check_buy_open(&curve).unwrap_err(),
            SwapError::TokenGraduated.into()
        );
        assert_eq!(
            check_sell_open(&curve).unwrap_err(),
            SwapError::TokenGraduated.into()
        );
    }

    #[test]
    fn drained_token_reserve_rejects_both_sides() {
        let curve = CurveConfig {
            token_reserve: 0,
            ..open_curve()
        };
        assert_eq!(
            check_buy_open(&curve).unwrap_err(),
            SwapError::TokenGraduated.into()
        );
        assert_eq!(
            check_sell_open(&curve).unwrap_err(),
            SwapError::TokenGraduated.into()
        );
    }

    #[test]
    fn met_sol_target_closes_buys_but_not_sells() {
        let curve = CurveConfig {
            sol_aim: 0,
            ..open_curve()
        };
        assert_eq!(
            check_buy_open(&curve).unwrap_err(),
            SwapError::TokenGraduated.into()
        );
        assert!(check_sell_open(&curve).is_ok());
    }

    #[test]
    fn open_curve_admits_both_sides() {
        let curve = open_curve();
        assert!(check_buy_open(&curve).is_ok());
        assert!(check_sell_open(&curve).is_ok());
    }

    #[test]
    fn output_below_minimum_is_rejected() {
        assert_eq!(
            check_amount_out(99, 100).unwrap_err(),
            SwapError::InsufficientOutputAmount.into()
        );
        assert!(check_amount_out(100, 100).is_ok());
        assert!(check_amount_out(101, 100).is_ok());
    }
}
