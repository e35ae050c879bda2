use cli::{utils::*, ProviderConfig};
use solana_sdk::signature::{Signature, Signer};

use crate::utils::{TestBuilder, TestResult};

#[tokio::test]
async fn test_initialize() -> TestResult<()> {
    let mut fixture = TestBuilder::new().await;
    let payer = fixture.payer();
    let lamports_before = fixture.get_account(&payer).await?.unwrap().lamports;

    let signature = fixture.process(&[initialize_ix(&payer)], &[]).await?;
    println!("Your transaction signature {signature}");
    assert_ne!(signature, Signature::default());
    assert!(!signature.to_string().is_empty());

    // Only the fee is charged, no account is created.
    let lamports_after = fixture.get_account(&payer).await?.unwrap().lamports;
    assert!(lamports_after < lamports_before);
    assert!(lamports_before - lamports_after <= 10_000);
    Ok(())
}

#[test]
#[ignore = "requires a local validator (run via `anchor test`)"]
fn test_initialize_on_localnet() {
    let provider = ProviderConfig::from_env();
    let payer = provider.load_payer().unwrap();
    let program = provider.program(&payer).unwrap();

    let tx_sender = &TxSender {
        program: &program,
        micro_lamports: None,
        payer: &payer,
        authority: &payer,
    };
    let signature = send_initialize(tx_sender).unwrap();
    println!("Your transaction signature {signature}");

    assert!(!signature.to_string().is_empty());
    assert_eq!(program.payer(), payer.pubkey());
}
