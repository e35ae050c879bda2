use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, TransferChecked};

use crate::{
    error::GovernanceRewardsError,
    state::distribution::{Distribution, PAYOUT_AUTHORITY_SEED},
    utils::current_timestamp,
};

#[derive(Accounts)]
pub struct ReclaimFunds<'info> {
    pub admin: Signer<'info>,
    #[account(mut, has_one = admin @ GovernanceRewardsError::AdminOnly)]
    pub distribution: Box<Account<'info, Distribution>>,
    /// Funding account of one of the distribution options.
    #[account(mut)]
    pub from: Box<Account<'info, TokenAccount>>,
    #[account(mut)]
    pub to: Box<Account<'info, TokenAccount>>,
    #[account(address = from.mint @ GovernanceRewardsError::WrongMint)]
    pub mint: Box<Account<'info, Mint>>,
    /// CHECK: PDA owning the funding accounts
    #[account(seeds = [PAYOUT_AUTHORITY_SEED, distribution.key().as_ref()], bump)]
    pub payout_authority: UncheckedAccount<'info>,
    pub token_program: Program<'info, Token>,
}

pub fn handler(ctx: Context<ReclaimFunds>) -> Result<()> {
    let distribution = &mut ctx.accounts.distribution;
    require!(
        !distribution.can_register(current_timestamp(&Clock::get()?)),
        GovernanceRewardsError::CannotReclaimFundsYet
    );

    let option = distribution
        .option_by_wallet_mut(&ctx.accounts.from.key())
        .ok_or(GovernanceRewardsError::NoMatchingOption)?;
    require!(
        !option.extra_reclaimed,
        GovernanceRewardsError::AlreadyReclaimed
    );
    option.extra_reclaimed = true;
    let option = *option;

    let amount = distribution.calculate_unused_rewards(&option)?;

    let distribution_key = distribution.key();
    let bump = [ctx.bumps.payout_authority];
    let seeds: [&[u8]; 3] = [PAYOUT_AUTHORITY_SEED, distribution_key.as_ref(), &bump];

    token::transfer_checked(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            TransferChecked {
                from: ctx.accounts.from.to_account_info(),
                mint: ctx.accounts.mint.to_account_info(),
                to: ctx.accounts.to.to_account_info(),
                authority: ctx.accounts.payout_authority.to_account_info(),
            },
            &[&seeds[..]],
        ),
        amount,
        ctx.accounts.mint.decimals,
    )?;

    msg!("Reclaimed {} of {}", amount, option.mint);

    Ok(())
}
