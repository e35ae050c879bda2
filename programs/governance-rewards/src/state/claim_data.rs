use anchor_lang::prelude::*;

use crate::state::{distribution::Distribution, distribution_option::DistributionOption};

pub const CLAIM_DATA_SEED: &[u8] = b"claim data";

/// A registrant's stake in a distribution.
#[account]
#[derive(InitSpace, Debug, PartialEq, Eq)]
pub struct ClaimData {
    /// Vote weight registered.
    pub weight: u64,
    /// Distribution this claim belongs to.
    pub distribution: Pubkey,
    /// Index into `Distribution::distribution_options`.
    pub claim_option: u8,
    pub has_claimed: bool,
    /// Registrant, the only one allowed to close this account.
    pub belongs_to: Pubkey,
}

impl ClaimData {
    pub fn pda(registrant: &Pubkey, distribution: &Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(
            &[distribution.as_ref(), CLAIM_DATA_SEED, registrant.as_ref()],
            &crate::ID,
        )
    }

    pub fn chosen_option(&self, distribution: &Distribution) -> Result<DistributionOption> {
        distribution.option(self.claim_option)
    }
}
