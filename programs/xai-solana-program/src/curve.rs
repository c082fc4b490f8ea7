//! Constant-product quoting against the virtual reserves.
//!
//! The curve keeps `k = virtual_sol_reserve * virtual_token_reserve` fixed
//! at creation time; a buy moves SOL into the virtual reserve and pays out
//! the token-side delta, a sell is the inverse.

use anchor_lang::prelude::*;

use crate::error::SwapError;
use crate::state::CurveConfig;

/// One side of a swap, quoted before any balance is touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quote {
    pub amount_out: u128,
    pub new_virtual_sol_reserve: u128,
    pub new_virtual_token_reserve: u128,
}

/// Quote a buy of `sol_in` lamports (fee already removed by the caller).
pub fn buy(curve: &CurveConfig, sol_in: u128) -> Result<Quote> {
    let new_virtual_sol_reserve = curve
        .virtual_sol_reserve
        .checked_add(sol_in)
        .ok_or(SwapError::CalculationFailure)?;
    let new_virtual_token_reserve = curve
        .k
        .checked_div(new_virtual_sol_reserve)
        .ok_or(SwapError::CalculationFailure)?;
    let amount_out = curve
        .virtual_token_reserve
        .checked_sub(new_virtual_token_reserve)
        .ok_or(SwapError::CalculationFailure)?;

    Ok(Quote {
        amount_out,
        new_virtual_sol_reserve,
        new_virtual_token_reserve,
    })
}

/// Quote a sell of `token_in` base units. The returned `amount_out` is SOL
/// before the trading fee is skimmed.
pub fn sell(curve: &CurveConfig, token_in: u128) -> Result<Quote> {
    let new_virtual_token_reserve = curve
        .virtual_token_reserve
        .checked_add(token_in)
        .ok_or(SwapError::CalculationFailure)?;
    let new_virtual_sol_reserve = curve
        .k
        .checked_div(new_virtual_token_reserve)
        .ok_or(SwapError::CalculationFailure)?;
    let amount_out = curve
        .virtual_sol_reserve
        .checked_sub(new_virtual_sol_reserve)
        .ok_or(SwapError::CalculationFailure)?;

    Ok(Quote {
        amount_out,
        new_virtual_sol_reserve,
        new_virtual_token_reserve,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // Launch constants from InitTokenConfig.
    const VTR: u128 = 1_038_000_000_000000000;
    const VSR: u128 = 21_000000000;

    fn fresh_curve() -> CurveConfig {
        CurveConfig {
            virtual_token_reserve: VTR,
            virtual_sol_reserve: VSR,
            token_reserve: 745_100_000_000000000,
            token_max_supply: 745_100_000_000000000,
            sol_reserve: 0,
            sol_aim: 53_420000000,
            k: VTR * VSR,
            graduated: false,
        }
    }

    #[test]
    fn buy_moves_reserves_in_opposite_directions() {
        let curve = fresh_curve();
        let quote = buy(&curve, 1_000000000).unwrap();

        assert!(quote.amount_out > 0);
        assert_eq!(quote.new_virtual_sol_reserve, VSR + 1_000000000);
        assert!(quote.new_virtual_token_reserve < VTR);
        assert_eq!(quote.amount_out, VTR - quote.new_virtual_token_reserve);
    }

    #[test]
    fn sell_returns_less_sol_than_a_buy_of_equal_size_paid() {
        let curve = fresh_curve();
        let bought = buy(&curve, 1_000000000).unwrap();

        let mut after_buy = fresh_curve();
        after_buy.virtual_sol_reserve = bought.new_virtual_sol_reserve;
        after_buy.virtual_token_reserve = bought.new_virtual_token_reserve;

        let sold = sell(&after_buy, bought.amount_out).unwrap();
        // Integer division rounds against the trader, never in their favor.
        assert!(sold.amount_out <= 1_000000000);
    }

    #[test]
    fn zero_input_is_a_noop_quote() {
        let curve = fresh_curve();
        let quote = buy(&curve, 0).unwrap();
        assert_eq!(quote.amount_out, 0);
        assert_eq!(quote.new_virtual_sol_reserve, VSR);

        let quote = sell(&curve, 0).unwrap();
        assert_eq!(quote.amount_out, 0);
    }

    #[test]
    fn buy_overflow_is_an_error_not_a_wrap() {
        let curve = fresh_curve();
        assert!(buy(&curve, u128::MAX).is_err());
    }

    proptest! {
        #[test]
        fn constant_product_never_grows(
            sol_in in 0u128..100_000_000000000,
        ) {
            let curve = fresh_curve();
            let quote = buy(&curve, sol_in).unwrap();
            let product = quote.new_virtual_sol_reserve * quote.new_virtual_token_reserve;
            prop_assert!(product <= curve.k);
            prop_assert!(quote.amount_out <= curve.virtual_token_reserve);
        }

        #[test]
        fn sell_never_pays_out_more_than_the_sol_reserve_side(
            token_in in 0u128..1_000_000_000_000000000,
        ) {
            let curve = fresh_curve();
            let quote = sell(&curve, token_in).unwrap();
            prop_assert!(quote.amount_out <= curve.virtual_sol_reserve);
            prop_assert!(quote.new_virtual_sol_reserve <= curve.virtual_sol_reserve);
        }
    }
}
