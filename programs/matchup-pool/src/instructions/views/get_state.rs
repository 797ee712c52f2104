use anchor_lang::prelude::*;
use crate::state::Market;
use super::get_odds::ReadMarket;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct MarketSnapshot {
    pub authority: Pubkey,
    pub betting_end: i64,
    pub settled: bool,
    pub total_pool: u64,
}

impl From<&Market> for MarketSnapshot {
    fn from(market: &Market) -> Self {
        Self {
            authority: market.authority,
            betting_end: market.betting_end,
            settled: market.settled,
            total_pool: market.total_pool,
        }
    }
}

pub fn process_get_state(ctx: Context<ReadMarket>) -> Result<MarketSnapshot> {
    let market: &Market = &ctx.accounts.market;
    Ok(MarketSnapshot::from(market))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn snapshot_tracks_pool_and_settlement() {
        let (mut m, authority) = market();
        m.record_stake(&mut stake(), 1, 3 * TOKEN, NOW).unwrap();
        let snapshot = MarketSnapshot::from(&m);
        assert_eq!(snapshot.authority, authority);
        assert_eq!(snapshot.betting_end, END);
        assert!(!snapshot.settled);
        assert_eq!(snapshot.total_pool, 3 * TOKEN);

        m.settle(&authority, 1, END).unwrap();
        assert!(MarketSnapshot::from(&m).settled);
    }
}
