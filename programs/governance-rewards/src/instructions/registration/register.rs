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

#[derive(Accounts)]
pub struct Register<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,
    /// CHECK: Authorized through the voter weight record
    pub registrant: UncheckedAccount<'info>,
    #[account(mut)]
    pub distribution: Box<Account<'info, Distribution>>,
    #[account(
        init,
        payer = payer,
        space = 8 + ClaimData::INIT_SPACE,
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
    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<Register>) -> Result<()> {
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

    let preferences = UserPreferences::get_or_default(&ctx.accounts.preferences)?;
    let (claim_option, _) = distribution.pick_option(preferences.preferred_mint)?;
    distribution.add_weight(claim_option, weight)?;

    ctx.accounts.claim_data.set_inner(ClaimData {
        weight,
        distribution: distribution_key,
        claim_option,
        has_claimed: false,
        belongs_to: registrant,
    });

    msg!(
        "Registered {} with weight {} on option {}",
        registrant,
        weight,
        claim_option
    );

    Ok(())
}
