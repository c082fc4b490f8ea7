use anchor_lang::error_code;

#[error_code]
pub enum SwapError {
    #[msg("The output amount is less than the minimum required")]
    InsufficientOutputAmount,
    #[msg("This token has graduated")]
    TokenGraduated,
    #[msg("Invalid amount in")]
    InvalidAmountIn,
    #[msg("This token still swaps in the inner pool")]
    GraduateNotAllowed,
    #[msg("FeeRecommendReward PDA is not initialized")]
    FeeRecommendRewardUninitialized,
    #[msg("FeeRecommendReward PDA does not match the recommender")]
    FeeRecommendRewardError,
    #[msg("Arithmetic overflow in curve or fee calculation")]
    CalculationFailure,
    #[msg("Vault balance too low for the requested transfer")]
    InsufficientVaultFunds,
}
