use crate::constants::{BPS_DENOMINATOR, FEE_BPS, ODDS_SCALE};

/// Parimutuel odds for one outcome, scaled by `ODDS_SCALE`:
///
/// `(virtual_total + total_pool) * ODDS_SCALE / (virtual_pool + real_pool)`
///
/// Returns `None` on overflow or when the outcome has no liquidity at all,
/// which a market with validated virtual pools can never hit.
pub fn odds(virtual_total: u128, total_pool: u64, virtual_pool: u64, real_pool: u64) -> Option<u128> {
    let effective_total = virtual_total.checked_add(total_pool as u128)?;
    let effective_pool = (virtual_pool as u128).checked_add(real_pool as u128)?;
    if effective_pool == 0 {
        return None;
    }
    effective_total
        .checked_mul(ODDS_SCALE)?
        .checked_div(effective_pool)
}

/// Operator fee on the frozen total pool. Rounds down.
pub fn fee(total_pool: u64) -> Option<u64> {
    let fee = (total_pool as u128)
        .checked_mul(FEE_BPS)?
        .checked_div(BPS_DENOMINATOR)?;
    u64::try_from(fee).ok()
}

/// Splits the total pool into `(fee, net_pool)`.
pub fn split_fee(total_pool: u64) -> Option<(u64, u64)> {
    let fee = fee(total_pool)?;
    let net_pool = total_pool.checked_sub(fee)?;
    Some((fee, net_pool))
}

/// Proportional share of the net pool for one winning stake.
///
/// Floors. The residue left by flooring every winner stays in the vault.
pub fn payout(stake: u64, net_pool: u64, winning_pool: u64) -> Option<u64> {
    if winning_pool == 0 {
        return None;
    }
    let share = (stake as u128)
        .checked_mul(net_pool as u128)?
        .checked_div(winning_pool as u128)?;
    u64::try_from(share).ok()
}

/// Renders a fixed-point value with `decimals` fractional digits, truncating.
pub fn format_fixed(value: u128, scale: u128, decimals: u32) -> String {
    let whole = value / scale;
    if decimals == 0 {
        return whole.to_string();
    }
    let frac = (value % scale).saturating_mul(10u128.pow(decimals)) / scale;
    format!("{}.{:0width$}", whole, frac, width = decimals as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOKEN: u64 = 1_000_000_000;

    #[test]
    fn initial_odds_come_from_virtual_pools_only() {
        let virtual_total = (250 * TOKEN) as u128;
        assert_eq!(odds(virtual_total, 0, 100 * TOKEN, 0), Some(2_500_000_000_000_000_000));
        assert_eq!(odds(virtual_total, 0, 50 * TOKEN, 0), Some(5_000_000_000_000_000_000));
    }

    #[test]
    fn odds_after_stake_track_effective_pools() {
        let virtual_total = (250 * TOKEN) as u128;
        let bet = 50 * TOKEN;
        let expected = (virtual_total + bet as u128) * ODDS_SCALE / (150 * TOKEN) as u128;
        assert_eq!(odds(virtual_total, bet, 100 * TOKEN, bet), Some(expected));
    }

    #[test]
    fn odds_without_liquidity_is_none() {
        assert_eq!(odds(0, 0, 0, 0), None);
    }

    #[test]
    fn fee_is_two_percent_floored() {
        assert_eq!(fee(45 * TOKEN), Some(900_000_000));
        assert_eq!(fee(49), Some(0));
        assert_eq!(fee(50), Some(1));
        assert_eq!(split_fee(30 * TOKEN), Some((600_000_000, 29_400_000_000)));
    }

    #[test]
    fn fee_on_max_pool_does_not_overflow() {
        let (fee, net) = split_fee(u64::MAX).unwrap();
        assert_eq!(fee as u128 + net as u128, u64::MAX as u128);
    }

    #[test]
    fn payout_is_proportional_and_floors() {
        let net_pool = 44_100_000_000;
        let winning_pool = 30 * TOKEN;
        assert_eq!(payout(10 * TOKEN, net_pool, winning_pool), Some(14_700_000_000));
        assert_eq!(payout(20 * TOKEN, net_pool, winning_pool), Some(29_400_000_000));

        // 3 equal winners over 100 units: 33 each, 1 unit of dust.
        assert_eq!(payout(1, 100, 3), Some(33));
    }

    #[test]
    fn payout_with_empty_winning_pool_is_none() {
        assert_eq!(payout(1, 100, 0), None);
    }

    #[test]
    fn payouts_never_exceed_net_pool() {
        let stakes = [7u64, 13, 29, 1, 997];
        let winning_pool: u64 = stakes.iter().sum();
        let net_pool = 12_345u64;
        let paid: u64 = stakes
            .iter()
            .map(|s| payout(*s, net_pool, winning_pool).unwrap())
            .sum();
        assert!(paid <= net_pool);
        assert!(net_pool - paid < stakes.len() as u64);
    }

    #[test]
    fn format_fixed_truncates_to_requested_decimals() {
        assert_eq!(format_fixed(2_500_000_000_000_000_000, ODDS_SCALE, 2), "2.50");
        assert_eq!(format_fixed(1_666_666_666_666_666_666, ODDS_SCALE, 2), "1.66");
        assert_eq!(format_fixed(5 * ODDS_SCALE, ODDS_SCALE, 0), "5");
        assert_eq!(format_fixed(ODDS_SCALE / 20, ODDS_SCALE, 2), "0.05");
    }
}
