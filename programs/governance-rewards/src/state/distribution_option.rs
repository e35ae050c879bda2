use anchor_lang::{prelude::*, system_program};
use anchor_spl::token::{self, TokenAccount};

use crate::error::GovernanceRewardsError;

pub const MAX_DISTRIBUTION_OPTIONS: usize = 8;

pub type DistributionOptions = [Option<DistributionOption>; MAX_DISTRIBUTION_OPTIONS];

/// One funding source of a distribution. Registrants are assigned to exactly one option.
#[derive(Debug, AnchorSerialize, AnchorDeserialize, Clone, Copy, InitSpace, PartialEq, Eq, Default)]
pub struct DistributionOption {
    /// Vote weight of everyone paid out of this option.
    pub total_vote_weight: u64,
    /// Token balance of the funding wallet when the distribution was created.
    pub total_amount: u64,
    pub mint: Pubkey,
    /// Token account holding the funds, owned by the payout authority.
    pub wallet: Pubkey,
    /// Set once the admin has pulled the unused remainder.
    pub extra_reclaimed: bool,
}

impl DistributionOption {
    pub fn from_token_account(wallet: Pubkey, account: &TokenAccount) -> Self {
        Self {
            total_vote_weight: 0,
            total_amount: account.amount,
            mint: account.mint,
            wallet,
            extra_reclaimed: false,
        }
    }
}

/// Builds the option table from the funding token accounts passed to `create_distribution`.
///
/// Every account must be an initialized SPL token account owned by `payout_authority`.
pub fn options_from_funding_accounts(
    funding_accounts: &[AccountInfo],
    payout_authority: &Pubkey,
) -> Result<DistributionOptions> {
    require_gte!(
        MAX_DISTRIBUTION_OPTIONS,
        funding_accounts.len(),
        GovernanceRewardsError::TooManyFundingAccounts
    );

    let mut options: DistributionOptions = [None; MAX_DISTRIBUTION_OPTIONS];
    for (slot, info) in options.iter_mut().zip(funding_accounts) {
        if info.owner == &system_program::ID && info.lamports() == 0 {
            return err!(ErrorCode::AccountNotInitialized);
        }
        require_keys_eq!(
            *info.owner,
            token::ID,
            ErrorCode::AccountOwnedByWrongProgram
        );

        let account = TokenAccount::try_deserialize(&mut &info.try_borrow_data()?[..])?;
        require_keys_eq!(
            account.owner,
            *payout_authority,
            GovernanceRewardsError::TokenAccountNotOwned
        );

        *slot = Some(DistributionOption::from_token_account(info.key(), &account));
    }

    Ok(options)
}
