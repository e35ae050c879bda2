use anchor_lang::prelude::*;

use crate::{error::GovernanceRewardsError, state::distribution::Distribution};

/// Discriminator of spl-governance add-in voter weight records.
pub const VOTER_WEIGHT_RECORD_DISCRIMINATOR: [u8; 8] = *b"2ef99b4b";

/// Actions a voter weight record can be scoped to. Mirrors the spl-governance
/// add-in enum, extended with registration for rewards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, AnchorSerialize, AnchorDeserialize)]
pub enum VoterWeightAction {
    /// Cast vote for a proposal. Target: Proposal
    CastVote,
    /// Comment a proposal. Target: Proposal
    CommentProposal,
    /// Create Governance within a realm. Target: Realm
    CreateGovernance,
    /// Create a proposal for a governance. Target: Governance
    CreateProposal,
    /// Signs off a proposal for a governance. Target: Proposal
    SignOffProposal,
    /// Register for a rewards distribution. Target: Distribution
    RegisterForRewards,
}

/// Voter weight record issued by the distribution's voter weight program.
///
/// Not an Anchor account: the layout and discriminator are fixed by the
/// spl-governance add-in interface.
#[derive(Clone, Debug, PartialEq, Eq, AnchorSerialize, AnchorDeserialize)]
pub struct VoterWeightRecord {
    pub account_discriminator: [u8; 8],
    pub realm: Pubkey,
    pub governing_token_mint: Pubkey,
    pub governing_token_owner: Pubkey,
    pub voter_weight: u64,
    /// Last slot the weight is valid for. `None` never expires.
    pub voter_weight_expiry: Option<u64>,
    pub weight_action: Option<VoterWeightAction>,
    pub weight_action_target: Option<Pubkey>,
    pub reserved: [u8; 8],
}

impl VoterWeightRecord {
    pub fn new(
        realm: Pubkey,
        governing_token_mint: Pubkey,
        governing_token_owner: Pubkey,
        distribution: Pubkey,
        voter_weight: u64,
        voter_weight_expiry: Option<u64>,
    ) -> Self {
        Self {
            account_discriminator: VOTER_WEIGHT_RECORD_DISCRIMINATOR,
            realm,
            governing_token_mint,
            governing_token_owner,
            voter_weight,
            voter_weight_expiry,
            weight_action: Some(VoterWeightAction::RegisterForRewards),
            weight_action_target: Some(distribution),
            reserved: [0; 8],
        }
    }

    pub fn try_from_account_info(info: &AccountInfo) -> Result<Self> {
        let data = info.try_borrow_data()?;
        require!(
            data.len() >= VOTER_WEIGHT_RECORD_DISCRIMINATOR.len()
                && data[..VOTER_WEIGHT_RECORD_DISCRIMINATOR.len()]
                    == VOTER_WEIGHT_RECORD_DISCRIMINATOR,
            ErrorCode::AccountDiscriminatorMismatch
        );

        Self::deserialize(&mut &data[..]).map_err(|_| error!(ErrorCode::AccountDidNotDeserialize))
    }

    pub fn is_still_valid(&self, slot: u64) -> bool {
        match self.voter_weight_expiry {
            Some(expiry) => expiry >= slot,
            None => true,
        }
    }

    /// Checks the record authorizes `registrant` to register for `distribution`.
    pub fn validate(
        &self,
        distribution_key: &Pubkey,
        distribution: &Distribution,
        registrant: &Pubkey,
        slot: u64,
    ) -> Result<()> {
        require!(
            self.is_still_valid(slot),
            GovernanceRewardsError::OutdatedVoteWeightRecord
        );
        require!(
            self.weight_action == Some(VoterWeightAction::RegisterForRewards),
            GovernanceRewardsError::WrongAction
        );
        require!(
            self.weight_action_target == Some(*distribution_key),
            GovernanceRewardsError::WrongActionTarget
        );
        require_keys_eq!(
            self.realm,
            distribution.realm,
            GovernanceRewardsError::WrongRealm
        );
        require_keys_eq!(
            self.governing_token_owner,
            *registrant,
            GovernanceRewardsError::WrongRegistrant
        );

        Ok(())
    }
}
