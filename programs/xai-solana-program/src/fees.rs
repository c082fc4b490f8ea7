//! Trading fee math and recommender reward distribution.

use anchor_lang::prelude::*;

use crate::error::SwapError;
use crate::state::FEE_RECOMMEND_REWARD_SEED;

pub const REWARD_BPS_DENOMINATOR: u64 = 10_000;

#[derive(Clone, Debug, Default)]
pub struct Fees {
    pub trade_fee_numerator: u64,
    pub trade_fee_denominator: u64,
    pub fee_receiver_account: Pubkey,
}

impl Fees {
    /// Fee owed on `amount`, in the same unit as `amount`.
    pub fn trading_fee(&self, amount: u128) -> Result<u128> {
        let numerator = u128::from(self.trade_fee_numerator);
        let denominator = u128::from(self.trade_fee_denominator);

        if numerator == 0 || denominator == 0 || amount == 0 {
            return Ok(0);
        }
        amount
            .checked_mul(numerator)
            .and_then(|v| v.checked_div(denominator))
            .ok_or_else(|| SwapError::CalculationFailure.into())
    }

    /// Fee to add on top of `amount` so that the fee-exclusive part is
    /// exactly `amount`. Used when a buy is capped at the remaining
    /// `sol_aim` and the fee has to be charged on top of the cap.
    pub fn trading_fee_reverse(&self, amount: u128) -> Result<u128> {
        let numerator = u128::from(self.trade_fee_numerator);
        let denominator = u128::from(self.trade_fee_denominator);

        if numerator == 0 || denominator == 0 || amount == 0 {
            return Ok(0);
        }
        amount
            .checked_mul(denominator)
            .and_then(|v| denominator.checked_sub(numerator).and_then(|d| v.checked_div(d)))
            .and_then(|v| v.checked_sub(amount))
            .ok_or_else(|| SwapError::CalculationFailure.into())
    }

    /// Split the trading fee between the recommender chain and the fee
    /// receiver.
    ///
    /// `remaining_accounts` carries recommender wallets followed by their
    /// `FeeRecommendReward` PDAs, one PDA per wallet and in the same order.
    /// Each PDA is verified against the derived address and credited in
    /// place. Returns `(residue_for_fee_receiver, total_reward)`.
    pub fn reward_recommenders(
        &self,
        trading_fee: u64,
        remaining_accounts: &[AccountInfo],
        recommend_award_list: &[u16; 5],
        program_id: &Pubkey,
    ) -> Result<(u64, u64)> {
        let mut total_reward_fee: u64 = 0;
        let recommend_len = remaining_accounts.len() / 2;

        let (recommenders, reward_pdas) = remaining_accounts.split_at(recommend_len);

        for i in 0..recommend_len {
            let recommender = &recommenders[i];
            let reward_pda = &reward_pdas[i];

            let award_bps = *recommend_award_list.get(i).unwrap_or(&0);
            let reward_fee = trading_fee
                .checked_mul(u64::from(award_bps))
                .and_then(|v| v.checked_div(REWARD_BPS_DENOMINATOR))
                .ok_or(SwapError::CalculationFailure)?;

            total_reward_fee = total_reward_fee
                .checked_add(reward_fee)
                .ok_or(SwapError::CalculationFailure)?;

            let recommender_key = recommender.key();
            let reward_pda_key = reward_pda.key();
            let mut data = reward_pda.try_borrow_mut_data()?;
            credit_recommender(
                program_id,
                &recommender_key,
                &reward_pda_key,
                &mut data,
                reward_fee,
            )?;
        }

        let residue = trading_fee
            .checked_sub(total_reward_fee)
            .ok_or(SwapError::CalculationFailure)?;
        Ok((residue, total_reward_fee))
    }
}

/// Verify one recommender's reward PDA and credit it in place. Layout
/// after the 8-byte discriminator: `unclaimed_sol: u64 LE`,
/// `total_reward: u64 LE`.
fn credit_recommender(
    program_id: &Pubkey,
    recommender: &Pubkey,
    reward_pda_key: &Pubkey,
    reward_pda_data: &mut [u8],
    reward_fee: u64,
) -> Result<()> {
    let (expected_pda, _) = Pubkey::find_program_address(
        &[FEE_RECOMMEND_REWARD_SEED, recommender.as_ref()],
        program_id,
    );
    require!(
        expected_pda == *reward_pda_key,
        SwapError::FeeRecommendRewardError
    );
    require!(
        !reward_pda_data.is_empty(),
        SwapError::FeeRecommendRewardUninitialized
    );

    let fields = &mut reward_pda_data[8..];

    let unclaimed = u64::from_le_bytes(
        fields[..8]
            .try_into()
            .map_err(|_| SwapError::FeeRecommendRewardUninitialized)?,
    );
    let lifetime = u64::from_le_bytes(
        fields[8..16]
            .try_into()
            .map_err(|_| SwapError::FeeRecommendRewardUninitialized)?,
    );

    let unclaimed = unclaimed
        .checked_add(reward_fee)
        .ok_or(SwapError::CalculationFailure)?;
    let lifetime = lifetime
        .checked_add(reward_fee)
        .ok_or(SwapError::CalculationFailure)?;

    fields[..8].copy_from_slice(&unclaimed.to_le_bytes());
    fields[8..16].copy_from_slice(&lifetime.to_le_bytes());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn one_percent() -> Fees {
        Fees {
            trade_fee_numerator: 1,
            trade_fee_denominator: 100,
            fee_receiver_account: Pubkey::default(),
        }
    }

    #[test]
    fn trading_fee_is_a_simple_ratio() {
        let fees = one_percent();
        assert_eq!(fees.trading_fee(10_000).unwrap(), 100);
        assert_eq!(fees.trading_fee(99).unwrap(), 0);
        assert_eq!(fees.trading_fee(0).unwrap(), 0);
    }

    #[test]
    fn zero_rate_charges_nothing() {
        let fees = Fees {
            trade_fee_numerator: 0,
            trade_fee_denominator: 100,
            ..Fees::default()
        };
        assert_eq!(fees.trading_fee(1_000_000).unwrap(), 0);
        assert_eq!(fees.trading_fee_reverse(1_000_000).unwrap(), 0);
    }

    #[test]
    fn reverse_fee_recovers_the_capped_amount() {
        let fees = one_percent();
        // Charging the reverse fee on top of the cap leaves the cap intact
        // after the forward fee is removed again.
        let cap: u128 = 53_420000000;
        let reverse = fees.trading_fee_reverse(cap).unwrap();
        let gross = cap + reverse;
        let forward = fees.trading_fee(gross).unwrap();
        assert!(gross - forward >= cap);
        // Rounding keeps the two within one fee-denominator unit.
        assert!(gross - forward - cap <= 100);
    }

    #[test]
    fn reward_split_matches_the_award_table() {
        let fee: u64 = 10_000;
        let awards: [u16; 5] = [2000, 1000, 0, 0, 0];
        // First level gets 20%, second 10%.
        let first = fee * u64::from(awards[0]) / REWARD_BPS_DENOMINATOR;
        let second = fee * u64::from(awards[1]) / REWARD_BPS_DENOMINATOR;
        assert_eq!(first, 2_000);
        assert_eq!(second, 1_000);
        assert_eq!(fee - first - second, 7_000);
    }

    #[test]
    fn inverted_fee_config_is_an_error_not_a_panic() {
        // A rate at or above 100% has no fee-exclusive part to recover.
        let fees = Fees {
            trade_fee_numerator: 100,
            trade_fee_denominator: 100,
            ..Fees::default()
        };
        assert!(fees.trading_fee_reverse(1_000).is_err());

        let fees = Fees {
            trade_fee_numerator: 150,
            trade_fee_denominator: 100,
            ..Fees::default()
        };
        assert!(fees.trading_fee_reverse(1_000).is_err());
    }

    fn reward_account_data(unclaimed: u64, lifetime: u64) -> Vec<u8> {
        let mut data = vec![0u8; 24];
        data[8..16].copy_from_slice(&unclaimed.to_le_bytes());
        data[16..24].copy_from_slice(&lifetime.to_le_bytes());
        data
    }

    #[test]
    fn matching_reward_pda_is_credited_in_place() {
        let recommender = Pubkey::new_unique();
        let (pda, _) = Pubkey::find_program_address(
            &[FEE_RECOMMEND_REWARD_SEED, recommender.as_ref()],
            &crate::ID,
        );
        let mut data = reward_account_data(5, 7);

        credit_recommender(&crate::ID, &recommender, &pda, &mut data, 2_000).unwrap();

        let unclaimed = u64::from_le_bytes(data[8..16].try_into().unwrap());
        let lifetime = u64::from_le_bytes(data[16..24].try_into().unwrap());
        assert_eq!(unclaimed, 2_005);
        assert_eq!(lifetime, 2_007);
    }

    #[test]
    fn mismatched_reward_pda_is_rejected() {
        let recommender = Pubkey::new_unique();
        let wrong_pda = Pubkey::new_unique();
        let mut data = reward_account_data(0, 0);

        let err = credit_recommender(&crate::ID, &recommender, &wrong_pda, &mut data, 2_000)
            .unwrap_err();
        assert_eq!(err, SwapError::FeeRecommendRewardError.into());
        // Nothing was written.
        assert_eq!(data, reward_account_data(0, 0));
    }

    #[test]
    fn uninitialized_reward_pda_is_rejected() {
        let recommender = Pubkey::new_unique();
        let (pda, _) = Pubkey::find_program_address(
            &[FEE_RECOMMEND_REWARD_SEED, recommender.as_ref()],
            &crate::ID,
        );
        let mut data: Vec<u8> = Vec::new();

        let err = credit_recommender(&crate::ID, &recommender, &pda, &mut data, 2_000).unwrap_err();
        assert_eq!(err, SwapError::FeeRecommendRewardUninitialized.into());
    }

    #[test]
    fn no_recommenders_leaves_the_whole_fee_as_residue() {
        let fees = one_percent();
        let (residue, reward) = fees
            .reward_recommenders(5_000, &[], &[2000, 1000, 0, 0, 0], &Pubkey::default())
            .unwrap();
        assert_eq!(residue, 5_000);
        assert_eq!(reward, 0);
    }
}
