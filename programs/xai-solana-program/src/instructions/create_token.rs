use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    metadata::{
        create_metadata_accounts_v3, mpl_token_metadata::types::DataV2, CreateMetadataAccountsV3,
        Metadata as Metaplex,
    },
    token::{self, mint_to, Mint, Token, TokenAccount},
};
use serde_json::json;

use crate::error::SwapError;
use crate::events::CreateTokenEvent;
use crate::state::*;
use crate::transfer;

#[derive(AnchorSerialize, AnchorDeserialize, Debug, Clone)]
pub struct InitTokenParams {
    pub name: String,
    pub symbol: String,
    pub uri: String,
    pub decimals: u8,
}

/// First half of a launch: the mint, curve and vault accounts. Split out
/// of `create_token` because the full launch does not fit one transaction.
#[derive(Accounts)]
#[instruction(params: InitTokenParams)]
pub struct InitCreateTokenAccount<'info> {
    /// CHECK: external launch identifier, only used as a mint seed
    pub identifier_account: AccountInfo<'info>,

    #[account(
        init,
        seeds = [MINT_SEED, identifier_account.key().as_ref()],
        bump,
        payer = user,
        mint::decimals = 9,
        mint::authority = mint,
    )]
    pub mint: Account<'info, Mint>,

    #[account(
        init,
        seeds = [CURVE_CONFIG_SEED, mint.key().as_ref()],
        bump,
        payer = user,
        space = DISCRIMINATOR_LEN + CurveConfig::INIT_SPACE,
    )]
    pub curve_config: Account<'info, CurveConfig>,

    /// CHECK: signs token and SOL moves out of program vaults
    #[account(seeds = [PROGRAM_SIGNER_SEED], bump)]
    pub program_signer: AccountInfo<'info>,

    #[account(
        init,
        payer = user,
        associated_token::mint = mint,
        associated_token::authority = program_signer,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub user: Signer<'info>,
    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
    pub token_metadata_program: Program<'info, Metaplex>,
    pub associated_token_program: Program<'info, AssociatedToken>,
}

/// Second half of a launch: fee, metadata, mint and curve seeding.
#[derive(Accounts)]
#[instruction(params: InitTokenParams)]
pub struct InitToken<'info> {
    /// CHECK: new Metaplex metadata account, created by CPI
    #[account(mut)]
    pub metadata: UncheckedAccount<'info>,

    /// CHECK: external launch identifier, only used as a mint seed
    pub identifier_account: AccountInfo<'info>,

    #[account(
        seeds = [MINT_SEED, identifier_account.key().as_ref()],
        bump,
    )]
    pub mint: Account<'info, Mint>,

    #[account(
        mut,
        seeds = [CURVE_CONFIG_SEED, mint.key().as_ref()],
        bump,
    )]
    pub curve_config: Account<'info, CurveConfig>,

    /// CHECK: signs token and SOL moves out of program vaults
    #[account(seeds = [PROGRAM_SIGNER_SEED], bump)]
    pub program_signer: AccountInfo<'info>,

    #[account(seeds = [FEE_CONFIG_SEED], bump)]
    pub fee_config: Account<'info, FeeConfig>,

    /// CHECK: only receives the creation fee
    #[account(
        mut,
        constraint = fee_receiver_account.key() == fee_config.fee_receiver_account
    )]
    pub fee_receiver_account: UncheckedAccount<'info>,

    #[account(
        mut,
        associated_token::mint = mint,
        associated_token::authority = program_signer,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(seeds = [INIT_TOKEN_CONFIG_SEED], bump)]
    pub init_token_config: Account<'info, InitTokenConfig>,

    #[account(mut)]
    pub user: Signer<'info>,
    pub rent: Sysvar<'info, Rent>,
    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
    pub token_metadata_program: Program<'info, Metaplex>,
    pub associated_token_program: Program<'info, AssociatedToken>,
}

pub fn reserve_handler(_ctx: Context<InitCreateTokenAccount>, _params: InitTokenParams) -> Result<()> {
    // Account creation is all constraint-driven.
    Ok(())
}

pub fn handler(ctx: Context<InitToken>, params: InitTokenParams) -> Result<()> {
    let identifier = ctx.accounts.identifier_account.key().to_string();
    msg!("create_token identifier: {:?}", identifier);

    transfer::transfer_sol(
        &ctx.accounts.user,
        &ctx.accounts.fee_receiver_account,
        ctx.accounts.fee_config.creation_fee,
        &ctx.accounts.system_program,
    )?;

    let init_virtual_token_reserve = ctx.accounts.init_token_config.init_virtual_token_reserve;
    let init_virtual_sol_reserve = ctx.accounts.init_token_config.init_virtual_sol_reserve;
    let mint_amount = ctx.accounts.init_token_config.mint_amount;

    let curve = &mut ctx.accounts.curve_config;
    curve.virtual_token_reserve = init_virtual_token_reserve;
    curve.virtual_sol_reserve = init_virtual_sol_reserve;
    curve.token_reserve = ctx.accounts.init_token_config.token_max_supply;
    curve.token_max_supply = ctx.accounts.init_token_config.token_max_supply;
    curve.sol_aim = ctx.accounts.init_token_config.sol_aim;
    curve.k = init_virtual_token_reserve
        .checked_mul(init_virtual_sol_reserve)
        .ok_or(SwapError::CalculationFailure)?;

    create_metadata(&ctx, params)?;
    mint_supply(&ctx, mint_amount)?;

    let event = CreateTokenEvent {
        id: identifier.clone(),
        u: ctx.accounts.user.key().to_string(),
        mint: ctx.accounts.mint.key().to_string(),
        aa: 0,
        ms: ctx.accounts.init_token_config.token_max_supply,
        ts: mint_amount,
        rs: ctx.accounts.init_token_config.init_virtual_sol_reserve,
        rt: ctx.accounts.init_token_config.init_virtual_token_reserve,
    };
    msg!("$CreateTokenEvent: {}", json!(event));

    Ok(())
}

fn create_metadata(ctx: &Context<InitToken>, metadata: InitTokenParams) -> Result<()> {
    let identifier_account = ctx.accounts.identifier_account.key();
    let mint_seeds = &[
        MINT_SEED,
        identifier_account.as_ref(),
        &[ctx.bumps.mint],
    ];
    let program_signer_seeds = &[PROGRAM_SIGNER_SEED, &[ctx.bumps.program_signer]];
    let signer = [&mint_seeds[..], &program_signer_seeds[..]];

    let token_data = DataV2 {
        name: metadata.name,
        symbol: metadata.symbol,
        uri: metadata.uri,
        seller_fee_basis_points: 0,
        creators: None,
        collection: None,
        uses: None,
    };

    let metadata_ctx = CpiContext::new_with_signer(
        ctx.accounts.token_metadata_program.to_account_info(),
        CreateMetadataAccountsV3 {
            payer: ctx.accounts.user.to_account_info(),
            update_authority: ctx.accounts.program_signer.to_account_info(),
            mint: ctx.accounts.mint.to_account_info(),
            metadata: ctx.accounts.metadata.to_account_info(),
            mint_authority: ctx.accounts.mint.to_account_info(),
            system_program: ctx.accounts.system_program.to_account_info(),
            rent: ctx.accounts.rent.to_account_info(),
        },
        &signer,
    );
    create_metadata_accounts_v3(metadata_ctx, token_data, false, true, None)?;

    msg!("Token mint created successfully.");
    Ok(())
}

fn mint_supply(ctx: &Context<InitToken>, quantity: u64) -> Result<()> {
    let identifier_account = ctx.accounts.identifier_account.key();
    let mint_seeds = &[
        MINT_SEED,
        identifier_account.as_ref(),
        &[ctx.bumps.mint],
    ];
    let signer = [&mint_seeds[..]];

    mint_to(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            token::MintTo {
                authority: ctx.accounts.mint.to_account_info(),
                to: ctx.accounts.vault.to_account_info(),
                mint: ctx.accounts.mint.to_account_info(),
            },
            &signer,
        ),
        quantity,
    )
}
