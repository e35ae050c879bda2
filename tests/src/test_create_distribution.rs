use anchor_lang::error::ErrorCode;
use governance_rewards::{error::GovernanceRewardsError, Distribution, MAX_DISTRIBUTION_OPTIONS};
use solana_sdk::{
    pubkey::Pubkey,
    signature::{Keypair, Signer},
};

use cli::utils::create_distribution_ix;

use crate::utils::{assert_anchor_error, TestBuilder, TestResult, REGISTRATION_PERIOD};

struct NewDistribution {
    admin: Keypair,
    distribution: Keypair,
    payout_authority: Pubkey,
}

impl NewDistribution {
    fn new() -> Self {
        let distribution = Keypair::new();
        let (payout_authority, _) = Distribution::payout_authority(&distribution.pubkey());
        Self {
            admin: Keypair::new(),
            distribution,
            payout_authority,
        }
    }
}

async fn create(
    fixture: &mut TestBuilder,
    new: &NewDistribution,
    registration_cutoff: u64,
    registrar: Option<Pubkey>,
    funding: &[Pubkey],
) -> TestResult<()> {
    let ix = create_distribution_ix(
        &fixture.payer(),
        &new.admin.pubkey(),
        &new.distribution.pubkey(),
        &fixture.realm,
        &fixture.voter_weight_program,
        registration_cutoff,
        registrar,
        funding,
    );
    fixture.process(&[ix], &[&new.admin, &new.distribution]).await?;
    Ok(())
}

#[tokio::test]
async fn test_create_distribution() -> TestResult<()> {
    let mut fixture = TestBuilder::new().await;
    let new = NewDistribution::new();
    let usdc = fixture.create_mint();
    let bonk = fixture.create_mint();
    let usdc_wallet = fixture.create_token_account(&new.payout_authority, &usdc, 1_000);
    let bonk_wallet = fixture.create_token_account(&new.payout_authority, &bonk, 5_000);

    let registration_cutoff = fixture.now().await? + REGISTRATION_PERIOD;
    let registrar = Pubkey::new_unique();
    create(
        &mut fixture,
        &new,
        registration_cutoff,
        Some(registrar),
        &[usdc_wallet, bonk_wallet],
    )
    .await?;

    let distribution: Distribution = fixture
        .get_anchor_account(&new.distribution.pubkey())
        .await?;
    assert_eq!(distribution.registration_period_end_ts, registration_cutoff);
    assert_eq!(distribution.voter_weight_program, fixture.voter_weight_program);
    assert_eq!(distribution.realm, fixture.realm);
    assert_eq!(distribution.registrar, Some(registrar));
    assert_eq!(distribution.admin, new.admin.pubkey());
    assert_eq!(distribution.total_vote_weight, 0);
    assert_eq!(distribution.total_vote_weight_claimed, 0);

    let first = distribution.option(0)?;
    assert_eq!(first.wallet, usdc_wallet);
    assert_eq!(first.mint, usdc);
    assert_eq!(first.total_amount, 1_000);
    assert_eq!(first.total_vote_weight, 0);
    assert!(!first.extra_reclaimed);

    let second = distribution.option(1)?;
    assert_eq!(second.wallet, bonk_wallet);
    assert_eq!(second.mint, bonk);
    assert_eq!(second.total_amount, 5_000);

    assert!(distribution.distribution_options[2..]
        .iter()
        .all(Option::is_none));
    Ok(())
}

#[tokio::test]
async fn test_create_distribution_with_cutoff_in_past_fails() -> TestResult<()> {
    let mut fixture = TestBuilder::new().await;
    let new = NewDistribution::new();
    let mint = fixture.create_mint();
    let wallet = fixture.create_token_account(&new.payout_authority, &mint, 1_000);

    let now = fixture.now().await?;
    let result = create(&mut fixture, &new, now, None, &[wallet]).await;

    assert_anchor_error(result, GovernanceRewardsError::RegistrationCutoffInPast);
    Ok(())
}

#[tokio::test]
async fn test_create_distribution_with_foreign_wallet_fails() -> TestResult<()> {
    let mut fixture = TestBuilder::new().await;
    let new = NewDistribution::new();
    let mint = fixture.create_mint();
    let wallet = fixture.create_token_account(&Pubkey::new_unique(), &mint, 1_000);

    let registration_cutoff = fixture.now().await? + REGISTRATION_PERIOD;
    let result = create(&mut fixture, &new, registration_cutoff, None, &[wallet]).await;

    assert_anchor_error(result, GovernanceRewardsError::TokenAccountNotOwned);
    Ok(())
}

#[tokio::test]
async fn test_create_distribution_with_too_many_wallets_fails() -> TestResult<()> {
    let mut fixture = TestBuilder::new().await;
    let new = NewDistribution::new();
    let mint = fixture.create_mint();
    let wallets: Vec<Pubkey> = (0..=MAX_DISTRIBUTION_OPTIONS)
        .map(|_| fixture.create_token_account(&new.payout_authority, &mint, 1))
        .collect();

    let registration_cutoff = fixture.now().await? + REGISTRATION_PERIOD;
    let result = create(&mut fixture, &new, registration_cutoff, None, &wallets).await;

    assert_anchor_error(result, GovernanceRewardsError::TooManyFundingAccounts);
    Ok(())
}

#[tokio::test]
async fn test_create_distribution_with_missing_wallet_fails() -> TestResult<()> {
    let mut fixture = TestBuilder::new().await;
    let new = NewDistribution::new();

    let registration_cutoff = fixture.now().await? + REGISTRATION_PERIOD;
    let result = create(
        &mut fixture,
        &new,
        registration_cutoff,
        None,
        &[Pubkey::new_unique()],
    )
    .await;

    assert_anchor_error(result, ErrorCode::AccountNotInitialized);
    Ok(())
}

#[tokio::test]
async fn test_create_distribution_without_wallets() -> TestResult<()> {
    let mut fixture = TestBuilder::new().await;
    let new = NewDistribution::new();

    let registration_cutoff = fixture.now().await? + REGISTRATION_PERIOD;
    create(&mut fixture, &new, registration_cutoff, None, &[]).await?;

    let distribution: Distribution = fixture
        .get_anchor_account(&new.distribution.pubkey())
        .await?;
    assert!(distribution.distribution_options.iter().all(Option::is_none));
    Ok(())
}
