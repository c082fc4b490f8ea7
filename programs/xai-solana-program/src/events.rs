//! Off-chain event wire format.
//!
//! Swap and launch events are emitted as `msg!` log lines of the shape
//! `$BuyEvent: {json}`; the indexer greps for the `$` prefix. Field names
//! are abbreviated to keep the log lines short.

use anchor_lang::prelude::*;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CreateTokenEvent {
    pub id: String,   // identifier
    pub u: String,    // user
    pub mint: String, // token mint
    pub aa: u64,      // airdrop amount
    pub ms: u128,     // max supply
    pub ts: u64,      // total supply
    pub rs: u128,     // init virtual SOL reserve
    pub rt: u128,     // init virtual token reserve
}

#[derive(Debug, Serialize)]
pub struct BuyEvent {
    pub u: String,    // user
    pub ua: String,   // user's token account
    pub mint: String, // token mint
    pub vsr: u128,    // virtual SOL reserve before
    pub vtr: u128,    // virtual token reserve before
    pub nvsr: u128,   // virtual SOL reserve after
    pub nvtr: u128,   // virtual token reserve after
    pub f: u128,      // fee
    pub i: u128,      // amount in
    pub o: u128,      // amount out
    pub t: u64,       // timestamp
}

#[derive(Debug, Serialize)]
pub struct SellEvent {
    pub u: String,
    pub ua: String,
    pub mint: String,
    pub vsr: u128,
    pub vtr: u128,
    pub nvsr: u128,
    pub nvtr: u128,
    pub f: u128,
    pub i: u128,
    pub o: u128,
    pub t: u64,
}

#[derive(Debug, Serialize)]
pub struct TokenGraduated {
    pub mint: String,
}

#[event]
pub struct RecommenderClaimSolEvent {
    pub recommender: Pubkey,
    pub claim_amount: u64,
}
