use anchor_lang::prelude::*;
use anchor_spl::token::Mint;
use crate::constants::SEED_PLATFORM_CONFIG;
use crate::state::PlatformConfig;
use crate::events::PlatformInitialized;

#[derive(Accounts)]
pub struct InitPlatform<'info> {
    #[account(
        init,
        seeds = [SEED_PLATFORM_CONFIG],
        bump,
        payer = admin,
        space = PlatformConfig::LEN
    )]
    pub platform_config: Account<'info, PlatformConfig>,

    #[account(mut)]
    pub admin: Signer<'info>,

    /// Mint every market stakes, settles and pays out in.
    pub collateral_mint: Account<'info, Mint>,

    pub system_program: Program<'info, System>,
}

pub fn process_init_platform(ctx: Context<InitPlatform>) -> Result<()> {
    let platform = &mut ctx.accounts.platform_config;
    platform.admin = ctx.accounts.admin.key();
    platform.collateral_mint = ctx.accounts.collateral_mint.key();
    platform.total_markets = 0;
    platform.bump = ctx.bumps.platform_config;

    emit!(PlatformInitialized {
        admin: platform.admin,
        collateral_mint: platform.collateral_mint,
    });

    Ok(())
}
