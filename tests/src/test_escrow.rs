use anchor_lang::error::ErrorCode;
use anchor_spl::token::TokenAccount;
use governance_rewards::{
    error::GovernanceRewardsError, escrow_address, escrow_authority, ResolutionPreference,
    UserPreferences,
};
use solana_sdk::{
    pubkey::Pubkey,
    signature::{Keypair, Signer},
};

use cli::utils::{
    claim_ix, create_escrow_ix, set_preferred_mint_ix, set_resolution_preference_ix,
    transfer_from_escrow_ix,
};

use crate::utils::{assert_anchor_error, DistributionRoot, TestBuilder, TestResult};

async fn prefer_escrow(fixture: &mut TestBuilder, user: &Keypair, admin: &Pubkey) -> TestResult<()> {
    fixture.fund(&user.pubkey());
    let ix = set_resolution_preference_ix(
        &user.pubkey(),
        &fixture.realm,
        ResolutionPreference::Escrow { admin: *admin },
    );
    fixture.process(&[ix], &[user]).await?;
    Ok(())
}

async fn create_escrow(
    fixture: &mut TestBuilder,
    admin: &Pubkey,
    user: &Pubkey,
    mint: &Pubkey,
) -> TestResult<Pubkey> {
    let ix = create_escrow_ix(&fixture.payer(), &fixture.realm, admin, user, mint);
    fixture.process(&[ix], &[]).await?;
    Ok(escrow_address(&fixture.realm, admin, user, mint).0)
}

/// Registers `user` and claims their rewards into their escrow.
async fn claim_to_escrow(
    fixture: &mut TestBuilder,
    root: &DistributionRoot,
    user: &Pubkey,
    escrow: &Pubkey,
) -> TestResult<()> {
    let ix = claim_ix(
        &root.distribution,
        &fixture.realm,
        user,
        &root.funding[0].wallet,
        &root.funding[0].mint,
        escrow,
    );
    fixture.process(&[ix], &[]).await?;
    Ok(())
}

#[tokio::test]
async fn test_set_preferences() -> TestResult<()> {
    let mut fixture = TestBuilder::new().await;
    let user = Keypair::new();
    let mint = Pubkey::new_unique();
    let admin = Pubkey::new_unique();
    let (preferences, _) = UserPreferences::pda(&user.pubkey(), &fixture.realm);

    prefer_escrow(&mut fixture, &user, &admin).await?;
    let stored: UserPreferences = fixture.get_anchor_account(&preferences).await?;
    assert_eq!(
        stored,
        UserPreferences {
            preferred_mint: None,
            resolution_preference: ResolutionPreference::Escrow { admin },
        }
    );

    // Updating one field keeps the other.
    let ix = set_preferred_mint_ix(&user.pubkey(), &fixture.realm, Some(mint));
    fixture.process(&[ix], &[&user]).await?;
    let stored: UserPreferences = fixture.get_anchor_account(&preferences).await?;
    assert_eq!(stored.preferred_mint, Some(mint));
    assert_eq!(
        stored.resolution_preference,
        ResolutionPreference::Escrow { admin }
    );

    let ix = set_resolution_preference_ix(&user.pubkey(), &fixture.realm, ResolutionPreference::Wallet);
    fixture.process(&[ix], &[&user]).await?;
    let ix = set_preferred_mint_ix(&user.pubkey(), &fixture.realm, None);
    fixture.process(&[ix], &[&user]).await?;
    let stored: UserPreferences = fixture.get_anchor_account(&preferences).await?;
    assert_eq!(stored, UserPreferences::default());
    Ok(())
}

#[tokio::test]
async fn test_create_escrow() -> TestResult<()> {
    let mut fixture = TestBuilder::new().await;
    let mint = fixture.create_mint();
    let admin = Pubkey::new_unique();
    let user = Pubkey::new_unique();

    let escrow = create_escrow(&mut fixture, &admin, &user, &mint).await?;

    let account: TokenAccount = fixture.get_anchor_account(&escrow).await?;
    assert_eq!(account.mint, mint);
    assert_eq!(account.owner, escrow_authority(&fixture.realm).0);
    assert_eq!(account.amount, 0);

    let result = create_escrow(&mut fixture, &admin, &user, &mint).await;
    assert!(result.is_err());
    Ok(())
}

#[tokio::test]
async fn test_claim_into_escrow_and_release() -> TestResult<()> {
    let mut fixture = TestBuilder::new().await;
    let root = fixture.setup_distribution(&[1_000]).await?;
    let mint = root.funding[0].mint;
    let admin = Keypair::new();
    let user = Keypair::new();

    prefer_escrow(&mut fixture, &user, &admin.pubkey()).await?;
    fixture.register_existing(&root, &user.pubkey(), 10).await?;
    let escrow = create_escrow(&mut fixture, &admin.pubkey(), &user.pubkey(), &mint).await?;
    fixture.end_registration(&root).await?;

    // The wallet is no longer an accepted payout account.
    let result = fixture.claim_to_wallet(&root, &user.pubkey()).await;
    assert_anchor_error(result, GovernanceRewardsError::WrongPayoutAccount);

    claim_to_escrow(&mut fixture, &root, &user.pubkey(), &escrow).await?;
    assert_eq!(fixture.token_balance(&escrow).await?, 1_000);

    let to_account = fixture.create_associated_token_account(&user.pubkey(), &mint);
    let ix = transfer_from_escrow_ix(
        &admin.pubkey(),
        &fixture.realm,
        &user.pubkey(),
        &mint,
        &to_account,
        400,
    );
    fixture.process(&[ix], &[&admin]).await?;

    assert_eq!(fixture.token_balance(&escrow).await?, 600);
    assert_eq!(fixture.token_balance(&to_account).await?, 400);
    Ok(())
}

#[tokio::test]
async fn test_claim_into_other_admins_escrow_fails() -> TestResult<()> {
    let mut fixture = TestBuilder::new().await;
    let root = fixture.setup_distribution(&[1_000]).await?;
    let mint = root.funding[0].mint;
    let user = Keypair::new();

    prefer_escrow(&mut fixture, &user, &Pubkey::new_unique()).await?;
    fixture.register_existing(&root, &user.pubkey(), 10).await?;
    let escrow = create_escrow(&mut fixture, &Pubkey::new_unique(), &user.pubkey(), &mint).await?;
    fixture.end_registration(&root).await?;

    let result = claim_to_escrow(&mut fixture, &root, &user.pubkey(), &escrow).await;

    assert_anchor_error(result, GovernanceRewardsError::WrongPayoutAccount);
    Ok(())
}

#[tokio::test]
async fn test_transfer_from_escrow_by_other_admin_fails() -> TestResult<()> {
    let mut fixture = TestBuilder::new().await;
    let mint = fixture.create_mint();
    let admin = Pubkey::new_unique();
    let user = Pubkey::new_unique();
    let escrow = create_escrow(&mut fixture, &admin, &user, &mint).await?;
    fixture.create_token_account_at(&escrow, &escrow_authority(&fixture.realm).0, &mint, 100);
    let to_account = fixture.create_token_account(&user, &mint, 0);

    let impostor = Keypair::new();
    let mut ix = transfer_from_escrow_ix(
        &impostor.pubkey(),
        &fixture.realm,
        &user,
        &mint,
        &to_account,
        100,
    );
    ix.accounts[1].pubkey = escrow;
    let result = fixture.process(&[ix], &[&impostor]).await;

    assert_anchor_error(result, ErrorCode::ConstraintSeeds);
    assert_eq!(fixture.token_balance(&escrow).await?, 100);
    Ok(())
}

#[tokio::test]
async fn test_transfer_from_escrow_to_wrong_mint_fails() -> TestResult<()> {
    let mut fixture = TestBuilder::new().await;
    let mint = fixture.create_mint();
    let other_mint = fixture.create_mint();
    let admin = Keypair::new();
    let user = Pubkey::new_unique();
    let escrow = create_escrow(&mut fixture, &admin.pubkey(), &user, &mint).await?;
    fixture.create_token_account_at(&escrow, &escrow_authority(&fixture.realm).0, &mint, 100);
    let to_account = fixture.create_token_account(&user, &other_mint, 0);

    let ix = transfer_from_escrow_ix(&admin.pubkey(), &fixture.realm, &user, &mint, &to_account, 100);
    let result = fixture.process(&[ix], &[&admin]).await;

    assert_anchor_error(result, GovernanceRewardsError::WrongMint);
    Ok(())
}
