use anchor_lang::prelude::*;

use crate::{
    error::GovernanceRewardsError,
    state::{
        distribution::{Distribution, PAYOUT_AUTHORITY_SEED},
        distribution_option::options_from_funding_accounts,
    },
    utils::current_timestamp,
};

/// Funding token accounts are passed as remaining accounts, one per option.
#[derive(Accounts)]
pub struct CreateDistribution<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,
    pub admin: Signer<'info>,
    #[account(
        init,
        payer = payer,
        space = 8 + Distribution::INIT_SPACE
    )]
    pub distribution: Box<Account<'info, Distribution>>,
    /// CHECK: PDA that must own every funding account
    #[account(seeds = [PAYOUT_AUTHORITY_SEED, distribution.key().as_ref()], bump)]
    pub payout_authority: UncheckedAccount<'info>,
    /// CHECK: Governance realm, only its key is stored
    pub realm: UncheckedAccount<'info>,
    /// CHECK: Voter weight add-in, only its key is stored
    pub voter_weight_program: UncheckedAccount<'info>,
    pub system_program: Program<'info, System>,
}

pub fn handler(
    ctx: Context<CreateDistribution>,
    registration_cutoff: u64,
    registrar: Option<Pubkey>,
) -> Result<()> {
    require!(
        registration_cutoff > current_timestamp(&Clock::get()?),
        GovernanceRewardsError::RegistrationCutoffInPast
    );

    let distribution_options = options_from_funding_accounts(
        ctx.remaining_accounts,
        &ctx.accounts.payout_authority.key(),
    )?;

    ctx.accounts.distribution.set_inner(Distribution {
        registration_period_end_ts: registration_cutoff,
        voter_weight_program: ctx.accounts.voter_weight_program.key(),
        realm: ctx.accounts.realm.key(),
        registrar,
        total_vote_weight: 0,
        total_vote_weight_claimed: 0,
        distribution_options,
        admin: ctx.accounts.admin.key(),
    });

    msg!(
        "Created distribution {} with {} funding accounts",
        ctx.accounts.distribution.key(),
        ctx.remaining_accounts.len()
    );

    Ok(())
}
