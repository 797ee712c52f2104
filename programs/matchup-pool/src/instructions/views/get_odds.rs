use anchor_lang::prelude::*;
use crate::constants::{ODDS_DISPLAY_DECIMALS, ODDS_SCALE, SEED_MARKET};
use crate::state::{Market, Outcome};
use crate::utils::format_fixed;

#[derive(Accounts)]
pub struct ReadMarket<'info> {
    #[account(
        seeds = [SEED_MARKET, market.market_id.to_le_bytes().as_ref()],
        bump = market.bump,
    )]
    pub market: Account<'info, Market>,
}

/// Fixed-point odds for every outcome, scaled by `ODDS_SCALE`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct OddsQuote {
    pub team_a: u128,
    pub draw: u128,
    pub team_b: u128,
}

impl OddsQuote {
    pub fn for_market(market: &Market) -> Result<Self> {
        Ok(Self {
            team_a: market.odds(Outcome::TeamA)?,
            draw: market.odds(Outcome::Draw)?,
            team_b: market.odds(Outcome::TeamB)?,
        })
    }
}

pub fn process_get_odds(ctx: Context<ReadMarket>) -> Result<OddsQuote> {
    let quote = OddsQuote::for_market(&ctx.accounts.market)?;

    msg!(
        "Odds: team A {}, draw {}, team B {}",
        format_fixed(quote.team_a, ODDS_SCALE, ODDS_DISPLAY_DECIMALS),
        format_fixed(quote.draw, ODDS_SCALE, ODDS_DISPLAY_DECIMALS),
        format_fixed(quote.team_b, ODDS_SCALE, ODDS_DISPLAY_DECIMALS),
    );

    Ok(quote)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn quote_covers_all_outcomes() {
        let (mut m, _) = market();
        let quote = OddsQuote::for_market(&m).unwrap();
        assert_eq!(quote.team_a, 2_500_000_000_000_000_000);
        assert_eq!(quote.draw, 5_000_000_000_000_000_000);
        assert_eq!(quote.team_b, 2_500_000_000_000_000_000);

        m.record_stake(&mut stake(), 0, 50 * TOKEN, NOW).unwrap();
        let quote = OddsQuote::for_market(&m).unwrap();
        assert_eq!(quote.team_a, 2_000_000_000_000_000_000);
        assert_eq!(quote.team_b, 3_000_000_000_000_000_000);
    }
}
