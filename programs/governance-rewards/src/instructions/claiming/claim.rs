use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, TransferChecked};

use crate::{
    error::GovernanceRewardsError,
    state::{
        claim_data::{ClaimData, CLAIM_DATA_SEED},
        distribution::{Distribution, PAYOUT_AUTHORITY_SEED},
        preferences::{ResolutionPreference, UserPreferences, PREFERENCES_SEED},
    },
    utils::current_timestamp,
};

/// Pays out a registrant's rewards. Anyone may crank it after the registration period ends.
#[derive(Accounts)]
pub struct Claim<'info> {
    #[account(mut)]
    pub distribution: Box<Account<'info, Distribution>>,
    #[account(
        mut,
        seeds = [distribution.key().as_ref(), CLAIM_DATA_SEED, claimant.key().as_ref()],
        bump
    )]
    pub claim_data: Box<Account<'info, ClaimData>>,
    /// Funding account of the claimant's chosen option.
    #[account(mut)]
    pub rewards_account: Box<Account<'info, TokenAccount>>,
    #[account(address = rewards_account.mint @ GovernanceRewardsError::WrongMint)]
    pub mint: Box<Account<'info, Mint>>,
    /// CHECK: PDA owning the funding accounts
    #[account(seeds = [PAYOUT_AUTHORITY_SEED, distribution.key().as_ref()], bump)]
    pub payout_authority: UncheckedAccount<'info>,
    /// Claimant's associated token account, or their escrow when they prefer one.
    #[account(mut)]
    pub to_account: Box<Account<'info, TokenAccount>>,
    /// CHECK: May be uninitialized, read with defaults
    #[account(
        seeds = [distribution.realm.as_ref(), PREFERENCES_SEED, claimant.key().as_ref()],
        bump
    )]
    pub preferences: UncheckedAccount<'info>,
    /// CHECK: Only used to derive the claim and payout addresses
    pub claimant: UncheckedAccount<'info>,
    pub token_program: Program<'info, Token>,
}

impl Claim<'_> {
    fn check_payout_account(&self, preference: &ResolutionPreference, mint: &Pubkey) -> Result<()> {
        let claimant = self.claimant.key();
        require_keys_eq!(
            self.to_account.key(),
            preference.payout_address(&claimant, mint, &self.distribution.realm),
            GovernanceRewardsError::WrongPayoutAccount
        );

        if let ResolutionPreference::Wallet = preference {
            require_keys_eq!(
                self.to_account.owner,
                claimant,
                GovernanceRewardsError::WrongPayoutAccount
            );
            require_keys_eq!(
                self.to_account.mint,
                *mint,
                GovernanceRewardsError::WrongPayoutAccount
            );
        }

        Ok(())
    }
}

pub fn handler(ctx: Context<Claim>) -> Result<()> {
    let now = current_timestamp(&Clock::get()?);
    let claim_data = &ctx.accounts.claim_data;
    let distribution = &ctx.accounts.distribution;
    require!(
        !claim_data.has_claimed,
        GovernanceRewardsError::AlreadyClaimed
    );
    require!(
        distribution.can_claim(now),
        GovernanceRewardsError::NotInClaimPeriod
    );

    let option = claim_data.chosen_option(distribution)?;
    require_keys_eq!(
        ctx.accounts.rewards_account.key(),
        option.wallet,
        GovernanceRewardsError::WrongRewardsAccount
    );
    let weight = claim_data.weight;
    let rewards = distribution.calculate_rewards(&option, weight)?;

    let preferences = UserPreferences::get_or_default(&ctx.accounts.preferences)?;
    ctx.accounts
        .check_payout_account(&preferences.resolution_preference, &option.mint)?;

    ctx.accounts.claim_data.has_claimed = true;
    let distribution = &mut ctx.accounts.distribution;
    distribution.total_vote_weight_claimed = distribution
        .total_vote_weight_claimed
        .checked_add(weight)
        .ok_or(GovernanceRewardsError::MathOverflow)?;

    let distribution_key = distribution.key();
    let bump = [ctx.bumps.payout_authority];
    let seeds: [&[u8]; 3] = [PAYOUT_AUTHORITY_SEED, distribution_key.as_ref(), &bump];

    token::transfer_checked(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            TransferChecked {
                from: ctx.accounts.rewards_account.to_account_info(),
                mint: ctx.accounts.mint.to_account_info(),
                to: ctx.accounts.to_account.to_account_info(),
                authority: ctx.accounts.payout_authority.to_account_info(),
            },
            &[&seeds[..]],
        ),
        rewards,
        ctx.accounts.mint.decimals,
    )?;

    msg!(
        "Paid {} of {} to {}",
        rewards,
        option.mint,
        ctx.accounts.to_account.key()
    );

    Ok(())
}
