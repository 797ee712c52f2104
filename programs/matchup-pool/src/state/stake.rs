use anchor_lang::prelude::*;
use crate::state::market::Outcome;

/// A bettor's position in one market. Created on the first stake, topped up
/// on the same outcome while betting is open, consumed by a single claim.
#[account]
pub struct Stake {
    pub market: Pubkey,
    pub bettor: Pubkey,
    pub outcome: Outcome,
    pub amount: u64,
    pub claimed: bool,
    pub bump: u8,
}

impl Stake {
    // 8 (discriminator) + 32 (market) + 32 (bettor)
    // 1 (outcome) + 8 (amount) + 1 (claimed) + 1 (bump)
    pub const LEN: usize = 8 + 32 + 32 + 1 + 8 + 1 + 1;

    /// True for an account just created by `init_if_needed`. Stakes can only
    /// be zeroed by a claim, which is impossible while betting is open.
    pub fn is_fresh(&self) -> bool {
        self.amount == 0 && !self.claimed
    }
}
