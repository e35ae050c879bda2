use anchor_lang::prelude::*;

use crate::{
    error::GovernanceRewardsError,
    state::{claim_data::ClaimData, distribution::Distribution},
    utils::current_timestamp,
};

#[derive(Accounts)]
pub struct ReclaimUserData<'info> {
    /// Registrant receiving the claim data rent.
    #[account(mut)]
    pub caller: Signer<'info>,
    pub distribution: Box<Account<'info, Distribution>>,
    #[account(
        mut,
        close = caller,
        has_one = distribution @ GovernanceRewardsError::WrongDistributionForClaim,
        constraint = claim_data.belongs_to == caller.key() @ GovernanceRewardsError::CannotCleanUpAfterOtherUser
    )]
    pub claim_data: Box<Account<'info, ClaimData>>,
}

pub fn handler(ctx: Context<ReclaimUserData>) -> Result<()> {
    require!(
        ctx.accounts
            .distribution
            .fully_claimed(current_timestamp(&Clock::get()?)),
        GovernanceRewardsError::CannotCleanUpYet
    );

    Ok(())
}
