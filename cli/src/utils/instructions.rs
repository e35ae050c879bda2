use anchor_lang::{system_program, InstructionData, ToAccountMetas};
use anchor_spl::token;
use governance_rewards::{
    accounts, escrow_address, escrow_authority, instruction, ClaimData, Distribution,
    ResolutionPreference, UserPreferences,
};
use solana_sdk::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
};

fn program_ix(accounts: Vec<AccountMeta>, data: Vec<u8>) -> Instruction {
    Instruction {
        program_id: governance_rewards::ID,
        accounts,
        data,
    }
}

pub fn initialize_ix(payer: &Pubkey) -> Instruction {
    program_ix(
        accounts::Initialize { payer: *payer }.to_account_metas(None),
        instruction::Initialize {}.data(),
    )
}

/// Funding accounts are appended read-only after the named accounts.
#[allow(clippy::too_many_arguments)]
pub fn create_distribution_ix(
    payer: &Pubkey,
    admin: &Pubkey,
    distribution: &Pubkey,
    realm: &Pubkey,
    voter_weight_program: &Pubkey,
    registration_cutoff: u64,
    registrar: Option<Pubkey>,
    funding_accounts: &[Pubkey],
) -> Instruction {
    let mut metas = accounts::CreateDistribution {
        payer: *payer,
        admin: *admin,
        distribution: *distribution,
        payout_authority: Distribution::payout_authority(distribution).0,
        realm: *realm,
        voter_weight_program: *voter_weight_program,
        system_program: system_program::ID,
    }
    .to_account_metas(None);
    metas.extend(
        funding_accounts
            .iter()
            .map(|funding| AccountMeta::new_readonly(*funding, false)),
    );

    program_ix(
        metas,
        instruction::CreateDistribution {
            registration_cutoff,
            registrar,
        }
        .data(),
    )
}

pub fn reclaim_funds_ix(
    admin: &Pubkey,
    distribution: &Pubkey,
    from: &Pubkey,
    to: &Pubkey,
    mint: &Pubkey,
) -> Instruction {
    program_ix(
        accounts::ReclaimFunds {
            admin: *admin,
            distribution: *distribution,
            from: *from,
            to: *to,
            mint: *mint,
            payout_authority: Distribution::payout_authority(distribution).0,
            token_program: token::ID,
        }
        .to_account_metas(None),
        instruction::ReclaimFunds {}.data(),
    )
}

pub fn register_ix(
    payer: &Pubkey,
    registrant: &Pubkey,
    distribution: &Pubkey,
    realm: &Pubkey,
    voter_weight_record: &Pubkey,
) -> Instruction {
    program_ix(
        accounts::Register {
            payer: *payer,
            registrant: *registrant,
            distribution: *distribution,
            claim_data: ClaimData::pda(registrant, distribution).0,
            voter_weight_record: *voter_weight_record,
            preferences: UserPreferences::pda(registrant, realm).0,
            system_program: system_program::ID,
        }
        .to_account_metas(None),
        instruction::Register {}.data(),
    )
}

pub fn update_registration_ix(
    payer: &Pubkey,
    registrant: &Pubkey,
    distribution: &Pubkey,
    realm: &Pubkey,
    voter_weight_record: &Pubkey,
) -> Instruction {
    program_ix(
        accounts::UpdateRegistration {
            payer: *payer,
            registrant: *registrant,
            distribution: *distribution,
            claim_data: ClaimData::pda(registrant, distribution).0,
            voter_weight_record: *voter_weight_record,
            preferences: UserPreferences::pda(registrant, realm).0,
        }
        .to_account_metas(None),
        instruction::UpdateRegistration {}.data(),
    )
}

pub fn claim_ix(
    distribution: &Pubkey,
    realm: &Pubkey,
    claimant: &Pubkey,
    rewards_account: &Pubkey,
    mint: &Pubkey,
    to_account: &Pubkey,
) -> Instruction {
    program_ix(
        accounts::Claim {
            distribution: *distribution,
            claim_data: ClaimData::pda(claimant, distribution).0,
            rewards_account: *rewards_account,
            mint: *mint,
            payout_authority: Distribution::payout_authority(distribution).0,
            to_account: *to_account,
            preferences: UserPreferences::pda(claimant, realm).0,
            claimant: *claimant,
            token_program: token::ID,
        }
        .to_account_metas(None),
        instruction::Claim {}.data(),
    )
}

pub fn reclaim_user_data_ix(
    caller: &Pubkey,
    distribution: &Pubkey,
    claim_data: &Pubkey,
) -> Instruction {
    program_ix(
        accounts::ReclaimUserData {
            caller: *caller,
            distribution: *distribution,
            claim_data: *claim_data,
        }
        .to_account_metas(None),
        instruction::ReclaimUserData {}.data(),
    )
}

pub fn set_preferred_mint_ix(
    user: &Pubkey,
    realm: &Pubkey,
    preferred_mint: Option<Pubkey>,
) -> Instruction {
    program_ix(
        accounts::SetPreferredMint {
            user: *user,
            realm: *realm,
            preferences: UserPreferences::pda(user, realm).0,
            system_program: system_program::ID,
        }
        .to_account_metas(None),
        instruction::SetPreferredMint { preferred_mint }.data(),
    )
}

pub fn set_resolution_preference_ix(
    user: &Pubkey,
    realm: &Pubkey,
    resolution_preference: ResolutionPreference,
) -> Instruction {
    program_ix(
        accounts::SetResolutionPreference {
            user: *user,
            realm: *realm,
            preferences: UserPreferences::pda(user, realm).0,
            system_program: system_program::ID,
        }
        .to_account_metas(None),
        instruction::SetResolutionPreference {
            resolution_preference,
        }
        .data(),
    )
}

pub fn create_escrow_ix(
    payer: &Pubkey,
    realm: &Pubkey,
    admin: &Pubkey,
    user: &Pubkey,
    mint: &Pubkey,
) -> Instruction {
    program_ix(
        accounts::CreateEscrow {
            payer: *payer,
            escrow: escrow_address(realm, admin, user, mint).0,
            escrow_authority: escrow_authority(realm).0,
            realm: *realm,
            admin: *admin,
            user: *user,
            mint: *mint,
            token_program: token::ID,
            system_program: system_program::ID,
        }
        .to_account_metas(None),
        instruction::CreateEscrow {}.data(),
    )
}

pub fn transfer_from_escrow_ix(
    admin: &Pubkey,
    realm: &Pubkey,
    user: &Pubkey,
    mint: &Pubkey,
    to_account: &Pubkey,
    amount: u64,
) -> Instruction {
    program_ix(
        accounts::TransferFromEscrow {
            admin: *admin,
            escrow: escrow_address(realm, admin, user, mint).0,
            to_account: *to_account,
            escrow_authority: escrow_authority(realm).0,
            realm: *realm,
            user: *user,
            mint: *mint,
            token_program: token::ID,
        }
        .to_account_metas(None),
        instruction::TransferFromEscrow { amount }.data(),
    )
}
