use anchor_lang::prelude::*;

use crate::{
    error::GovernanceRewardsError,
    state::{
        claim_data::{ClaimData, CLAIM_DATA_SEED},
        distribution::Distribution,
        preferences::{UserPreferences, PREFERENCES_SEED},
        voter_weight_record::VoterWeightRecord,
    },
    utils::current_timestamp,
};

/// Same accounts as [`crate::Register`], against an existing claim.
#[derive(Accounts)]
pub struct UpdateRegistration<'info> {
    pub payer: Signer<'info>,
    /// CHECK: Authorized through the voter weight record
    pub registrant: UncheckedAccount<'info>,
    #[account(mut)]
    pub distribution: Box<Account<'info, Distribution>>,
    #[account(
        mut,
        seeds = [distribution.key().as_ref(), CLAIM_DATA_SEED, registrant.key().as_ref()],
        bump
    )]
    pub claim_data: Box<Account<'info, ClaimData>>,
    /// CHECK: Manually deserialized and validated
    #[account(owner = distribution.voter_weight_program)]
    pub voter_weight_record: UncheckedAccount<'info>,
    /// CHECK: May be uninitialized, read with defaults
    #[account(
        seeds = [distribution.realm.as_ref(), PREFERENCES_SEED, registrant.key().as_ref()],
        bump
    )]
    pub preferences: UncheckedAccount<'info>,
}

pub fn handler(ctx: Context<UpdateRegistration>) -> Result<()> {
    let clock = Clock::get()?;
    let registrant = ctx.accounts.registrant.key();
    let distribution_key = ctx.accounts.distribution.key();

    let record = VoterWeightRecord::try_from_account_info(&ctx.accounts.voter_weight_record)?;
    record.validate(
        &distribution_key,
        &ctx.accounts.distribution,
        &registrant,
        clock.slot,
    )?;

    let distribution = &mut ctx.accounts.distribution;
    require!(
        distribution.can_register(current_timestamp(&clock)),
        GovernanceRewardsError::RegistrationOver
    );
    let weight = record.voter_weight;
    require!(weight > 0, GovernanceRewardsError::NoVoteWeight);

    let claim_data = &mut ctx.accounts.claim_data;
    require!(
        !claim_data.has_claimed,
        GovernanceRewardsError::AlreadyClaimed
    );

    distribution.remove_weight(claim_data.claim_option, claim_data.weight)?;

    let preferences = UserPreferences::get_or_default(&ctx.accounts.preferences)?;
    let (claim_option, _) = distribution.pick_option(preferences.preferred_mint)?;
    distribution.add_weight(claim_option, weight)?;

    msg!(
        "Updated {} from weight {} on option {} to weight {} on option {}",
        registrant,
        claim_data.weight,
        claim_data.claim_option,
        weight,
        claim_option
    );

    claim_data.weight = weight;
    claim_data.claim_option = claim_option;

    Ok(())
}
