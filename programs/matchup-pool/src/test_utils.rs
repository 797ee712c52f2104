use anchor_lang::error::Error;
use anchor_lang::prelude::*;
use crate::errors::PoolError;
use crate::state::{Market, Outcome, Stake};

pub const TOKEN: u64 = 1_000_000_000;
pub const NOW: i64 = 1_700_000_000;
pub const END: i64 = NOW + 7 * 24 * 60 * 60;

/// Open market with virtual pools 100 / 50 / 100 tokens. Returns it with its authority.
pub fn market() -> (Market, Pubkey) {
    let authority = Pubkey::new_unique();
    let mut market = Market {
        market_id: 0,
        authority: Pubkey::default(),
        vault: Pubkey::default(),
        betting_end: 0,
        virtual_pool_a: 0,
        virtual_pool_draw: 0,
        virtual_pool_b: 0,
        pool_a: 0,
        pool_draw: 0,
        pool_b: 0,
        total_pool: 0,
        settled: false,
        winner: None,
        net_pool: 0,
        bump: 0,
    };
    market
        .initialize(0, authority, Pubkey::new_unique(), END, [100 * TOKEN, 50 * TOKEN, 100 * TOKEN], NOW, 255)
        .unwrap();
    (market, authority)
}

pub fn stake() -> Stake {
    Stake {
        market: Pubkey::default(),
        bettor: Pubkey::new_unique(),
        outcome: Outcome::TeamA,
        amount: 0,
        claimed: false,
        bump: 0,
    }
}

pub fn assert_pool_err<T: std::fmt::Debug>(res: Result<T>, expected: PoolError) {
    match res {
        Err(Error::AnchorError(e)) => assert_eq!(e.error_code_number, u32::from(expected)),
        other => panic!("expected {expected:?}, got {other:?}"),
    }
}
