use anchor_lang::prelude::*;
use crate::errors::PoolError;
use crate::state::stake::Stake;
use crate::utils::math;

#[account]
pub struct Market {
    pub market_id: u64,
    pub authority: Pubkey,          // sole settler, fixed at creation
    pub vault: Pubkey,
    pub betting_end: i64,           // no stakes at or after this
    pub virtual_pool_a: u64,
    pub virtual_pool_draw: u64,
    pub virtual_pool_b: u64,
    pub pool_a: u64,
    pub pool_draw: u64,
    pub pool_b: u64,
    pub total_pool: u64,            // pool_a + pool_draw + pool_b
    pub settled: bool,
    pub winner: Option<Outcome>,    // Some iff settled
    pub net_pool: u64,              // total_pool - fee, frozen at settlement
    pub bump: u8,
}

impl Market {
    // 8 (discriminator)
    // 8 (market_id) + 32 (authority) + 32 (vault) + 8 (betting_end)
    // 8 * 3 (virtual pools) + 8 * 3 (real pools) + 8 (total_pool)
    // 1 (settled) + 1+1 (winner option) + 8 (net_pool)
    // 1 (bump)
    pub const LEN: usize = 8 + 8 + 32 + 32 + 8 + 8 * 3 + 8 * 3 + 8 + 1 + 2 + 8 + 1;
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, InitSpace, Debug)]
pub enum Outcome {
    TeamA,
    Draw,
    TeamB,
}

impl TryFrom<u8> for Outcome {
    type Error = PoolError;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        match value {
            0 => Ok(Outcome::TeamA),
            1 => Ok(Outcome::Draw),
            2 => Ok(Outcome::TeamB),
            _ => Err(PoolError::InvalidOutcome),
        }
    }
}

/// What a successful stake changed, for the history record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StakeReceipt {
    pub outcome: Outcome,
    pub outcome_total: u64,
    pub odds_before: u128,
}

impl Market {
    pub fn initialize(
        &mut self,
        market_id: u64,
        authority: Pubkey,
        vault: Pubkey,
        betting_end: i64,
        virtual_pools: [u64; 3],
        now: i64,
        bump: u8,
    ) -> Result<()> {
        require!(virtual_pools.iter().all(|p| *p > 0), PoolError::InvalidVirtualPool);
        require!(betting_end > now, PoolError::InvalidBettingEnd);

        let [virtual_pool_a, virtual_pool_draw, virtual_pool_b] = virtual_pools;
        self.market_id = market_id;
        self.authority = authority;
        self.vault = vault;
        self.betting_end = betting_end;
        self.virtual_pool_a = virtual_pool_a;
        self.virtual_pool_draw = virtual_pool_draw;
        self.virtual_pool_b = virtual_pool_b;
        self.pool_a = 0;
        self.pool_draw = 0;
        self.pool_b = 0;
        self.total_pool = 0;
        self.settled = false;
        self.winner = None;
        self.net_pool = 0;
        self.bump = bump;
        Ok(())
    }

    pub fn is_open(&self, now: i64) -> bool {
        now < self.betting_end
    }

    pub fn ensure_authority(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(*caller, self.authority, PoolError::Unauthorized);
        Ok(())
    }

    pub fn pool_of(&self, outcome: Outcome) -> u64 {
        match outcome {
            Outcome::TeamA => self.pool_a,
            Outcome::Draw => self.pool_draw,
            Outcome::TeamB => self.pool_b,
        }
    }

    fn pool_of_mut(&mut self, outcome: Outcome) -> &mut u64 {
        match outcome {
            Outcome::TeamA => &mut self.pool_a,
            Outcome::Draw => &mut self.pool_draw,
            Outcome::TeamB => &mut self.pool_b,
        }
    }

    pub fn virtual_pool_of(&self, outcome: Outcome) -> u64 {
        match outcome {
            Outcome::TeamA => self.virtual_pool_a,
            Outcome::Draw => self.virtual_pool_draw,
            Outcome::TeamB => self.virtual_pool_b,
        }
    }

    pub fn virtual_total(&self) -> u128 {
        self.virtual_pool_a as u128 + self.virtual_pool_draw as u128 + self.virtual_pool_b as u128
    }

    /// Current odds for `outcome`, scaled by `ODDS_SCALE`. Read-only.
    pub fn odds(&self, outcome: Outcome) -> Result<u128> {
        let odds = math::odds(
            self.virtual_total(),
            self.total_pool,
            self.virtual_pool_of(outcome),
            self.pool_of(outcome),
        )
        .ok_or(PoolError::MathOverflow)?;
        Ok(odds)
    }

    /// Books `amount` on `raw_outcome` for the bettor owning `stake`.
    ///
    /// A bettor is locked to the outcome of their first stake; later stakes
    /// on that same outcome top it up.
    pub fn record_stake(
        &mut self,
        stake: &mut Stake,
        raw_outcome: u8,
        amount: u64,
        now: i64,
    ) -> Result<StakeReceipt> {
        let outcome = Outcome::try_from(raw_outcome)?;
        require!(amount > 0, PoolError::ZeroStake);
        require!(self.is_open(now), PoolError::BettingClosed);
        if !stake.is_fresh() {
            require!(stake.outcome == outcome, PoolError::OutcomeMismatch);
        }

        let odds_before = self.odds(outcome)?;
        let outcome_total = self.pool_of(outcome).checked_add(amount).ok_or(PoolError::MathOverflow)?;
        let total_pool = self.total_pool.checked_add(amount).ok_or(PoolError::MathOverflow)?;
        let stake_amount = stake.amount.checked_add(amount).ok_or(PoolError::MathOverflow)?;

        *self.pool_of_mut(outcome) = outcome_total;
        self.total_pool = total_pool;
        stake.outcome = outcome;
        stake.amount = stake_amount;

        Ok(StakeReceipt { outcome, outcome_total, odds_before })
    }

    /// Fixes the winner and the net pool. Returns the fee owed to the authority.
    pub fn settle(&mut self, caller: &Pubkey, raw_winner: u8, now: i64) -> Result<u64> {
        self.ensure_authority(caller)?;
        require!(!self.is_open(now), PoolError::BettingNotEnded);
        require!(!self.settled, PoolError::AlreadySettled);
        let winner = Outcome::try_from(raw_winner).map_err(|_| PoolError::InvalidWinner)?;

        let (fee, net_pool) = math::split_fee(self.total_pool).ok_or(PoolError::MathOverflow)?;

        self.settled = true;
        self.winner = Some(winner);
        self.net_pool = net_pool;
        Ok(fee)
    }

    /// Payout `stake` is entitled to, without touching it.
    pub fn claimable(&self, stake: &Stake) -> Result<u64> {
        require!(self.settled, PoolError::NotSettled);
        require!(stake.amount > 0 && !stake.claimed, PoolError::NoStake);
        let winner = self.winner.ok_or(PoolError::NotSettled)?;
        require!(stake.outcome == winner, PoolError::NotWinner);

        let payout = math::payout(stake.amount, self.net_pool, self.pool_of(winner))
            .ok_or(PoolError::MathOverflow)?;
        Ok(payout)
    }

    /// Same as `claimable`, but 0 wherever a claim would be rejected.
    pub fn preview_claim(&self, stake: Option<&Stake>) -> u64 {
        stake
            .and_then(|stake| self.claimable(stake).ok())
            .unwrap_or(0)
    }

    /// Marks `stake` consumed and returns what must be paid out for it.
    /// Callers transfer only after this returns.
    pub fn consume_claim(&self, stake: &mut Stake) -> Result<u64> {
        let payout = self.claimable(stake)?;
        stake.claimed = true;
        stake.amount = 0;
        Ok(payout)
    }
}
