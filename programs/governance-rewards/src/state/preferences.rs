use anchor_lang::prelude::*;
use anchor_spl::associated_token::get_associated_token_address;

use crate::state::escrow::escrow_address;

pub const PREFERENCES_SEED: &[u8] = b"preferences";

/// Per-realm payout preferences of a user.
#[account]
#[derive(InitSpace, Default, Debug, PartialEq, Eq)]
pub struct UserPreferences {
    /// Mint to be paid in when a distribution offers it.
    pub preferred_mint: Option<Pubkey>,
    /// Where claimed rewards are sent.
    pub resolution_preference: ResolutionPreference,
}

#[derive(Debug, AnchorSerialize, AnchorDeserialize, Clone, Copy, InitSpace, PartialEq, Eq, Default)]
pub enum ResolutionPreference {
    /// The claimant's associated token account.
    #[default]
    Wallet,
    /// An escrow account released by `admin`.
    Escrow { admin: Pubkey },
}

impl ResolutionPreference {
    /// Token account a claim for `claimant` in `mint` must be paid into.
    pub fn payout_address(&self, claimant: &Pubkey, mint: &Pubkey, realm: &Pubkey) -> Pubkey {
        match self {
            Self::Wallet => get_associated_token_address(claimant, mint),
            Self::Escrow { admin } => escrow_address(realm, admin, claimant, mint).0,
        }
    }
}

impl UserPreferences {
    pub fn pda(user: &Pubkey, realm: &Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(&[realm.as_ref(), PREFERENCES_SEED, user.as_ref()], &crate::ID)
    }

    /// Reads preferences from an account that may never have been initialized.
    pub fn get_or_default(info: &AccountInfo) -> Result<Self> {
        if info.owner != &crate::ID || info.data_is_empty() {
            return Ok(Self::default());
        }

        Self::try_deserialize(&mut &info.try_borrow_data()?[..])
    }
}
