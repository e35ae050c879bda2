use anchor_lang::prelude::*;

use crate::{
    error::GovernanceRewardsError,
    state::distribution_option::{DistributionOption, MAX_DISTRIBUTION_OPTIONS},
};

pub const PAYOUT_AUTHORITY_SEED: &[u8] = b"payout authority";

#[account]
#[derive(InitSpace, Debug, PartialEq, Eq)]
pub struct Distribution {
    /// Registration is open strictly before this unix timestamp, claiming after it.
    pub registration_period_end_ts: u64,
    /// Add-in program that must own submitted voter weight records.
    pub voter_weight_program: Pubkey,
    /// Governance realm whose voters are rewarded.
    pub realm: Pubkey,
    /// Used by off-chain cranks to find eligible voters.
    pub registrar: Option<Pubkey>,
    /// Vote weight of all registrants.
    pub total_vote_weight: u64,
    /// Vote weight of registrants that have claimed.
    pub total_vote_weight_claimed: u64,
    /// Funding sources, filled from index 0.
    pub distribution_options: [Option<DistributionOption>; MAX_DISTRIBUTION_OPTIONS],
    /// Allowed to reclaim unused funds.
    pub admin: Pubkey,
}

impl Distribution {
    /// PDA owning every funding token account of `distribution`.
    pub fn payout_authority(distribution: &Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(&[PAYOUT_AUTHORITY_SEED, distribution.as_ref()], &crate::ID)
    }

    pub fn can_register(&self, now: u64) -> bool {
        now < self.registration_period_end_ts
    }

    pub fn fully_claimed(&self, now: u64) -> bool {
        self.total_vote_weight_claimed >= self.total_vote_weight && !self.can_register(now)
    }

    pub fn can_claim(&self, now: u64) -> bool {
        !self.can_register(now) && !self.fully_claimed(now)
    }

    pub fn option(&self, index: u8) -> Result<DistributionOption> {
        self.distribution_options
            .get(usize::from(index))
            .copied()
            .flatten()
            .ok_or_else(|| error!(GovernanceRewardsError::NoDistributionOptions))
    }

    pub fn option_mut(&mut self, index: u8) -> Result<&mut DistributionOption> {
        self.distribution_options
            .get_mut(usize::from(index))
            .and_then(Option::as_mut)
            .ok_or_else(|| error!(GovernanceRewardsError::NoDistributionOptions))
    }

    /// Picks the option paying out `preferred_mint`, or the first option when
    /// there is no preference. A preferred mint no option pays is an error.
    pub fn pick_option(
        &mut self,
        preferred_mint: Option<Pubkey>,
    ) -> Result<(u8, &mut DistributionOption)> {
        let index = match preferred_mint {
            Some(mint) => self
                .distribution_options
                .iter()
                .position(|option| matches!(option, Some(o) if o.mint == mint)),
            None => self.distribution_options.iter().position(Option::is_some),
        }
        .ok_or(GovernanceRewardsError::NoDistributionOptions)?;

        // Index is bounded by MAX_DISTRIBUTION_OPTIONS.
        let index = index as u8;
        Ok((index, self.option_mut(index)?))
    }

    pub fn option_by_wallet_mut(&mut self, wallet: &Pubkey) -> Option<&mut DistributionOption> {
        self.distribution_options
            .iter_mut()
            .flatten()
            .find(|option| option.wallet == *wallet)
    }

    /// Share of `option.total_amount` owed to the registrants of that option.
    ///
    /// Each option pays out in proportion to the share of the total vote weight
    /// its registrants hold; the rest is reclaimable by the admin.
    pub fn option_total_rewards(&self, option: &DistributionOption) -> Result<u64> {
        if self.total_vote_weight == 0 {
            return Ok(0);
        }

        let rewards = u128::from(option.total_amount)
            .checked_mul(u128::from(option.total_vote_weight))
            .ok_or(GovernanceRewardsError::MathOverflow)?
            / u128::from(self.total_vote_weight);

        u64::try_from(rewards).map_err(|_| error!(GovernanceRewardsError::MathOverflow))
    }

    /// Payout for a registrant with `weight` assigned to `option`.
    pub fn calculate_rewards(&self, option: &DistributionOption, weight: u64) -> Result<u64> {
        if option.total_vote_weight == 0 {
            return Ok(0);
        }

        let rewards = u128::from(self.option_total_rewards(option)?)
            .checked_mul(u128::from(weight))
            .ok_or(GovernanceRewardsError::MathOverflow)?
            / u128::from(option.total_vote_weight);

        u64::try_from(rewards).map_err(|_| error!(GovernanceRewardsError::MathOverflow))
    }

    /// Portion of `option.total_amount` no registrant is entitled to.
    pub fn calculate_unused_rewards(&self, option: &DistributionOption) -> Result<u64> {
        Ok(option
            .total_amount
            .saturating_sub(self.option_total_rewards(option)?))
    }

    /// Moves `weight` into the option at `index` and the distribution totals.
    pub fn add_weight(&mut self, index: u8, weight: u64) -> Result<()> {
        let option = self.option_mut(index)?;
        option.total_vote_weight = option
            .total_vote_weight
            .checked_add(weight)
            .ok_or(GovernanceRewardsError::MathOverflow)?;
        self.total_vote_weight = self
            .total_vote_weight
            .checked_add(weight)
            .ok_or(GovernanceRewardsError::MathOverflow)?;
        Ok(())
    }

    /// Reverses [`Distribution::add_weight`].
    pub fn remove_weight(&mut self, index: u8, weight: u64) -> Result<()> {
        let option = self.option_mut(index)?;
        option.total_vote_weight = option
            .total_vote_weight
            .checked_sub(weight)
            .ok_or(GovernanceRewardsError::MathOverflow)?;
        self.total_vote_weight = self
            .total_vote_weight
            .checked_sub(weight)
            .ok_or(GovernanceRewardsError::MathOverflow)?;
        Ok(())
    }
}
