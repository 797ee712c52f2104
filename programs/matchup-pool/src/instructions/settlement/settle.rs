use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};
use crate::constants::{SEED_MARKET, SEED_VAULT};
use crate::state::Market;
use crate::events::MarketSettled;
use crate::errors::PoolError;

#[derive(Accounts)]
pub struct Settle<'info> {
    #[account(
        mut,
        seeds = [SEED_MARKET, market.market_id.to_le_bytes().as_ref()],
        bump = market.bump,
    )]
    pub market: Account<'info, Market>,

    #[account(
        mut,
        seeds = [SEED_VAULT, market.key().as_ref()],
        bump,
        constraint = vault.key() == market.vault @ PoolError::InvalidMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    /// Checked against `market.authority` in the handler.
    pub authority: Signer<'info>,

    /// Authority's token account; receives the operator fee.
    #[account(
        mut,
        token::authority = authority,
        constraint = authority_token_account.mint == vault.mint @ PoolError::InvalidMint,
    )]
    pub authority_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

pub fn process_settle(ctx: Context<Settle>, winning_outcome: u8) -> Result<()> {
    let market = &mut ctx.accounts.market;
    let clock = Clock::get()?;

    let fee = market.settle(&ctx.accounts.authority.key(), winning_outcome, clock.unix_timestamp)?;
    let winner = market.winner.ok_or(PoolError::NotSettled)?;

    if fee > 0 {
        let market_id_bytes = market.market_id.to_le_bytes();
        let seeds = &[
            SEED_MARKET,
            market_id_bytes.as_ref(),
            &[market.bump],
        ];
        let signer = &[&seeds[..]];

        token::transfer(
            CpiContext::new_with_signer(
                ctx.accounts.token_program.to_account_info(),
                Transfer {
                    from: ctx.accounts.vault.to_account_info(),
                    to: ctx.accounts.authority_token_account.to_account_info(),
                    authority: market.to_account_info(),
                },
                signer,
            ),
            fee,
        )?;
    }

    msg!("Market {} settled: winner {:?}, fee {}, net pool {}",
        market.market_id, winner, fee, market.net_pool);

    emit!(MarketSettled {
        market_id: market.market_id,
        winning_outcome: winner,
        fee,
        net_pool: market.net_pool,
    });

    Ok(())
}
