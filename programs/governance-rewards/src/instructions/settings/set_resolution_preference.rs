use anchor_lang::prelude::*;

use crate::state::preferences::{ResolutionPreference, UserPreferences, PREFERENCES_SEED};

#[derive(Accounts)]
pub struct SetResolutionPreference<'info> {
    #[account(mut)]
    pub user: Signer<'info>,
    /// CHECK: Only used as a seed
    pub realm: UncheckedAccount<'info>,
    #[account(
        init_if_needed,
        payer = user,
        space = 8 + UserPreferences::INIT_SPACE,
        seeds = [realm.key().as_ref(), PREFERENCES_SEED, user.key().as_ref()],
        bump
    )]
    pub preferences: Box<Account<'info, UserPreferences>>,
    pub system_program: Program<'info, System>,
}

pub fn handler(
    ctx: Context<SetResolutionPreference>,
    resolution_preference: ResolutionPreference,
) -> Result<()> {
    ctx.accounts.preferences.resolution_preference = resolution_preference;

    Ok(())
}
