use anchor_lang::prelude::*;

pub const ESCROW_SEED: &[u8] = b"escrow";
pub const ESCROW_AUTHORITY_SEED: &[u8] = b"escrow authority";

/// Escrow token account holding `user`'s rewards in `mint` until `admin` releases them.
pub fn escrow_address(realm: &Pubkey, admin: &Pubkey, user: &Pubkey, mint: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[
            realm.as_ref(),
            admin.as_ref(),
            ESCROW_SEED,
            user.as_ref(),
            mint.as_ref(),
        ],
        &crate::ID,
    )
}

/// PDA owning every escrow token account of a realm.
pub fn escrow_authority(realm: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[ESCROW_AUTHORITY_SEED, realm.as_ref()], &crate::ID)
}
