use anchor_lang::prelude::*;

#[error_code]
pub enum PoolError {
    // Validation
    #[msg("Stake amount must be greater than 0")]
    ZeroStake,
    #[msg("Invalid outcome")]
    InvalidOutcome,
    #[msg("Cannot change outcome")]
    OutcomeMismatch,
    #[msg("Every virtual pool must be greater than 0")]
    InvalidVirtualPool,
    #[msg("Betting end must be in the future")]
    InvalidBettingEnd,
    #[msg("Market id does not match the platform counter")]
    MarketIdMismatch,
    // Window
    #[msg("Betting closed")]
    BettingClosed,
    #[msg("Betting not ended")]
    BettingNotEnded,
    // Authorization
    #[msg("Not market authority")]
    Unauthorized,
    // State
    #[msg("Already settled")]
    AlreadySettled,
    #[msg("Not settled")]
    NotSettled,
    #[msg("Invalid winner")]
    InvalidWinner,
    // Claim
    #[msg("Not winner")]
    NotWinner,
    #[msg("No stake")]
    NoStake,
    #[msg("Token account does not match the market vault")]
    InvalidMint,
    #[msg("Arithmetic overflow")]
    MathOverflow,
}
