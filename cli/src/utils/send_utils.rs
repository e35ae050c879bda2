use anchor_client::{
    solana_sdk::{
        pubkey::Pubkey,
        signature::{Keypair, Signature},
        signer::Signer,
    },
    ClientError, Program,
};
use governance_rewards::{ClaimData, Distribution, ResolutionPreference, UserPreferences};
use solana_sdk::{
    compute_budget::ComputeBudgetInstruction, instruction::Instruction, transaction::Transaction,
};

use super::instructions::*;

/// Signs and sends transactions. `authority` is the distribution admin, the
/// escrow admin, or the user setting preferences, depending on the instruction.
pub struct TxSender<'a> {
    pub program: &'a Program<&'a Keypair>,
    pub micro_lamports: Option<u64>,
    pub payer: &'a Keypair,
    pub authority: &'a Keypair,
}

impl<'a> TxSender<'a> {
    pub fn send(&self, ixs: Vec<Instruction>) -> Result<Signature, ClientError> {
        self.send_with_signers(ixs, &[self.payer, self.authority])
    }

    pub fn send_with_signers(
        &self,
        ixs: Vec<Instruction>,
        signers: &[&Keypair],
    ) -> Result<Signature, ClientError> {
        send_with_anchor(ixs, self.micro_lamports, signers, self.program)
    }
}

/// Sends an Anchor request manually, ensuring proper setup and signing.
fn send_with_anchor(
    mut ixs: Vec<Instruction>,
    micro_lamports: Option<u64>,
    signers: &[&Keypair],
    program: &Program<&Keypair>,
) -> Result<Signature, ClientError> {
    let payer = program.payer();
    let blockhash = program.rpc().get_latest_blockhash()?;

    if let Some(lamports) = micro_lamports {
        ixs.insert(
            0,
            ComputeBudgetInstruction::set_compute_unit_price(lamports),
        );
    }

    // The payer often doubles as the authority.
    let mut unique: Vec<&Keypair> = Vec::with_capacity(signers.len());
    for &signer in signers {
        if !unique.iter().any(|s| s.pubkey() == signer.pubkey()) {
            unique.push(signer);
        }
    }

    let tx = Transaction::new_signed_with_payer(&ixs, Some(&payer), &unique[..], blockhash);
    program
        .rpc()
        .send_and_confirm_transaction(&tx)
        .map_err(ClientError::SolanaClientError)
}

pub fn send_initialize(tx_sender: &TxSender) -> Result<Signature, ClientError> {
    let ix = initialize_ix(&tx_sender.payer.pubkey());
    tx_sender.send_with_signers(vec![ix], &[tx_sender.payer])
}

/// Creates `distribution` administered by the sender's authority. Every
/// funding account must already be owned by the distribution's payout authority.
pub fn send_create_distribution(
    tx_sender: &TxSender,
    distribution: &Keypair,
    realm: Pubkey,
    voter_weight_program: Pubkey,
    registration_cutoff: u64,
    registrar: Option<Pubkey>,
    funding_accounts: &[Pubkey],
) -> Result<Signature, ClientError> {
    let ix = create_distribution_ix(
        &tx_sender.payer.pubkey(),
        &tx_sender.authority.pubkey(),
        &distribution.pubkey(),
        &realm,
        &voter_weight_program,
        registration_cutoff,
        registrar,
        funding_accounts,
    );
    tx_sender.send_with_signers(vec![ix], &[tx_sender.payer, tx_sender.authority, distribution])
}

pub fn send_reclaim_funds(
    tx_sender: &TxSender,
    distribution: Pubkey,
    from: Pubkey,
    to: Pubkey,
    mint: Pubkey,
) -> Result<Signature, ClientError> {
    let ix = reclaim_funds_ix(&tx_sender.authority.pubkey(), &distribution, &from, &to, &mint);
    tx_sender.send(vec![ix])
}

pub fn send_register(
    tx_sender: &TxSender,
    distribution: Pubkey,
    realm: Pubkey,
    registrant: Pubkey,
    voter_weight_record: Pubkey,
) -> Result<Signature, ClientError> {
    let ix = register_ix(
        &tx_sender.payer.pubkey(),
        &registrant,
        &distribution,
        &realm,
        &voter_weight_record,
    );
    tx_sender.send_with_signers(vec![ix], &[tx_sender.payer])
}

pub fn send_update_registration(
    tx_sender: &TxSender,
    distribution: Pubkey,
    realm: Pubkey,
    registrant: Pubkey,
    voter_weight_record: Pubkey,
) -> Result<Signature, ClientError> {
    let ix = update_registration_ix(
        &tx_sender.payer.pubkey(),
        &registrant,
        &distribution,
        &realm,
        &voter_weight_record,
    );
    tx_sender.send_with_signers(vec![ix], &[tx_sender.payer])
}

/// Accounts of a claim that depend on on-chain state.
#[derive(Debug, PartialEq, Eq)]
pub struct ClaimAccounts {
    pub rewards_account: Pubkey,
    pub mint: Pubkey,
    pub to_account: Pubkey,
}

impl ClaimAccounts {
    pub fn resolve(
        distribution: &Distribution,
        claim_data: &ClaimData,
        preference: &ResolutionPreference,
        claimant: &Pubkey,
    ) -> Option<Self> {
        let option = claim_data.chosen_option(distribution).ok()?;
        Some(Self {
            rewards_account: option.wallet,
            mint: option.mint,
            to_account: preference.payout_address(claimant, &option.mint, &distribution.realm),
        })
    }
}

/// Preferences that were never set read as defaults. Any other fetch error is returned.
pub fn preferences_or_default(
    fetched: Result<UserPreferences, ClientError>,
) -> Result<UserPreferences, ClientError> {
    match fetched {
        Err(ClientError::AccountNotFound) => Ok(UserPreferences::default()),
        other => other,
    }
}

pub fn send_claim(
    tx_sender: &TxSender,
    distribution: Pubkey,
    realm: Pubkey,
    claimant: Pubkey,
    claim_accounts: &ClaimAccounts,
) -> Result<Signature, ClientError> {
    let ix = claim_ix(
        &distribution,
        &realm,
        &claimant,
        &claim_accounts.rewards_account,
        &claim_accounts.mint,
        &claim_accounts.to_account,
    );
    tx_sender.send_with_signers(vec![ix], &[tx_sender.payer])
}

/// Closes the authority's claim data once the distribution is fully claimed.
pub fn send_reclaim_user_data(
    tx_sender: &TxSender,
    distribution: Pubkey,
) -> Result<Signature, ClientError> {
    let caller = tx_sender.authority.pubkey();
    let claim_data = ClaimData::pda(&caller, &distribution).0;
    let ix = reclaim_user_data_ix(&caller, &distribution, &claim_data);
    tx_sender.send(vec![ix])
}

pub fn send_set_preferred_mint(
    tx_sender: &TxSender,
    realm: Pubkey,
    preferred_mint: Option<Pubkey>,
) -> Result<Signature, ClientError> {
    let ix = set_preferred_mint_ix(&tx_sender.authority.pubkey(), &realm, preferred_mint);
    tx_sender.send(vec![ix])
}

pub fn send_set_resolution_preference(
    tx_sender: &TxSender,
    realm: Pubkey,
    resolution_preference: ResolutionPreference,
) -> Result<Signature, ClientError> {
    let ix = set_resolution_preference_ix(
        &tx_sender.authority.pubkey(),
        &realm,
        resolution_preference,
    );
    tx_sender.send(vec![ix])
}

pub fn send_create_escrow(
    tx_sender: &TxSender,
    realm: Pubkey,
    admin: Pubkey,
    user: Pubkey,
    mint: Pubkey,
) -> Result<Signature, ClientError> {
    let ix = create_escrow_ix(&tx_sender.payer.pubkey(), &realm, &admin, &user, &mint);
    tx_sender.send_with_signers(vec![ix], &[tx_sender.payer])
}

/// Releases `amount` from `user`'s escrow. The sender's authority must be the escrow admin.
pub fn send_transfer_from_escrow(
    tx_sender: &TxSender,
    realm: Pubkey,
    user: Pubkey,
    mint: Pubkey,
    to_account: Pubkey,
    amount: u64,
) -> Result<Signature, ClientError> {
    let ix = transfer_from_escrow_ix(
        &tx_sender.authority.pubkey(),
        &realm,
        &user,
        &mint,
        &to_account,
        amount,
    );
    tx_sender.send(vec![ix])
}
