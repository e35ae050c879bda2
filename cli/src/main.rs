use anchor_client::{
    solana_sdk::{
        pubkey::Pubkey,
        signature::{read_keypair_file, Keypair},
    },
    Program,
};
use anchor_spl::token::TokenAccount;
use anyhow::{anyhow, Result};
use clap::Parser;
use cli::{utils::*, ProviderConfig, DEFAULT_RPC_URL, DEFAULT_WALLET_PATH};
use governance_rewards::{ClaimData, Distribution, ResolutionPreference, UserPreferences};
use log::info;
use solana_sdk::signer::Signer;
use std::path::PathBuf;
use tokio::runtime::Builder;

#[derive(Clone, Parser)]
#[command(author, version, about)]
struct Cli {
    #[arg(short, long, env, default_value = DEFAULT_WALLET_PATH)]
    pub payer_path: PathBuf,

    #[arg(
        short,
        long,
        env,
        help = "Distribution or escrow admin, or the user setting preferences. Defaults to the payer"
    )]
    pub authority_path: Option<PathBuf>,

    #[arg(short, long, env, default_value = DEFAULT_RPC_URL)]
    pub rpc_url: String,

    #[arg(long, env)]
    pub micro_lamports: Option<u64>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Clone)]
pub enum Commands {
    Initialize {},
    CreateDistribution {
        #[arg(long, value_parser = parse_pubkey)]
        realm: Pubkey,

        #[arg(long, value_parser = parse_pubkey)]
        voter_weight_program: Pubkey,

        #[arg(long, help = "Unix timestamp at which registration closes")]
        registration_cutoff: u64,

        #[arg(long, value_parser = parse_pubkey)]
        registrar: Option<Pubkey>,

        #[arg(
            long,
            value_delimiter = ',',
            value_parser = parse_pubkey,
            help = "Token accounts owned by the payout authority, one per option"
        )]
        funding: Vec<Pubkey>,

        #[arg(long, help = "Keypair of the new distribution account. Generated if omitted")]
        distribution_path: Option<PathBuf>,
    },
    ReclaimFunds {
        #[arg(long, value_parser = parse_pubkey)]
        distribution: Pubkey,

        #[arg(long, value_parser = parse_pubkey, help = "Funding account of the option")]
        from: Pubkey,

        #[arg(long, value_parser = parse_pubkey)]
        to: Pubkey,
    },
    Register {
        #[arg(long, value_parser = parse_pubkey)]
        distribution: Pubkey,

        #[arg(long, value_parser = parse_pubkey)]
        registrant: Pubkey,

        #[arg(long, value_parser = parse_pubkey)]
        voter_weight_record: Pubkey,
    },
    UpdateRegistration {
        #[arg(long, value_parser = parse_pubkey)]
        distribution: Pubkey,

        #[arg(long, value_parser = parse_pubkey)]
        registrant: Pubkey,

        #[arg(long, value_parser = parse_pubkey)]
        voter_weight_record: Pubkey,
    },
    Claim {
        #[arg(long, value_parser = parse_pubkey)]
        distribution: Pubkey,

        #[arg(long, value_parser = parse_pubkey)]
        claimant: Pubkey,
    },
    ReclaimUserData {
        #[arg(long, value_parser = parse_pubkey)]
        distribution: Pubkey,
    },
    SetPreferredMint {
        #[arg(long, value_parser = parse_pubkey)]
        realm: Pubkey,

        #[arg(long, value_parser = parse_pubkey, help = "Omit to clear the preference")]
        mint: Option<Pubkey>,
    },
    SetResolutionPreference {
        #[arg(long, value_parser = parse_pubkey)]
        realm: Pubkey,

        #[arg(long, value_parser = parse_resolution_preference, help = "wallet | escrow:<admin>")]
        preference: ResolutionPreference,
    },
    CreateEscrow {
        #[arg(long, value_parser = parse_pubkey)]
        realm: Pubkey,

        #[arg(long, value_parser = parse_pubkey)]
        admin: Pubkey,

        #[arg(long, value_parser = parse_pubkey)]
        user: Pubkey,

        #[arg(long, value_parser = parse_pubkey)]
        mint: Pubkey,
    },
    TransferFromEscrow {
        #[arg(long, value_parser = parse_pubkey)]
        realm: Pubkey,

        #[arg(long, value_parser = parse_pubkey)]
        user: Pubkey,

        #[arg(long, value_parser = parse_pubkey)]
        mint: Pubkey,

        #[arg(long, value_parser = parse_pubkey)]
        to: Pubkey,

        #[arg(long)]
        amount: u64,
    },
    Log {
        #[arg(long, value_parser = parse_log_type, help = "Account type: distribution | claim-data | preferences")]
        ty: LogType,

        #[arg(long, value_parser = parse_pubkey)]
        distribution: Option<Pubkey>,

        #[arg(long, value_parser = parse_pubkey, help = "Registrant or preferences owner")]
        user: Option<Pubkey>,

        #[arg(long, value_parser = parse_pubkey)]
        realm: Option<Pubkey>,
    },
}

fn read_keypair(path: &PathBuf) -> Result<Keypair> {
    read_keypair_file(path).map_err(|e| anyhow!("failed to read keypair {}: {e}", path.display()))
}

fn main() -> Result<()> {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .is_test(false)
        .try_init();

    let runtime = Builder::new_multi_thread().enable_all().build()?;
    let _enter = runtime.enter();
    let cli = Cli::parse();

    let provider = ProviderConfig::new(cli.rpc_url.clone(), cli.payer_path.clone());
    let payer = provider.load_payer()?;
    let authority = match &cli.authority_path {
        Some(path) => read_keypair(path)?,
        None => payer.insecure_clone(),
    };
    let program = provider.program(&payer)?;

    let tx_sender = &TxSender {
        program: &program,
        micro_lamports: cli.micro_lamports,
        payer: &payer,
        authority: &authority,
    };

    match cli.command {
        Commands::Initialize {} => {
            info!("Initialize...");

            let tx = send_initialize(tx_sender)?;
            info!("Transaction sent: {}", tx);
        }
        Commands::CreateDistribution {
            realm,
            voter_weight_program,
            registration_cutoff,
            registrar,
            funding,
            distribution_path,
        } => {
            info!("CreateDistribution...");

            let distribution = match &distribution_path {
                Some(path) => read_keypair(path)?,
                None => Keypair::new(),
            };
            info!(
                "Distribution {}, payout authority {}",
                distribution.pubkey(),
                Distribution::payout_authority(&distribution.pubkey()).0
            );

            let tx = send_create_distribution(
                tx_sender,
                &distribution,
                realm,
                voter_weight_program,
                registration_cutoff,
                registrar,
                &funding,
            )?;
            info!("Transaction sent: {}", tx);
        }
        Commands::ReclaimFunds {
            distribution,
            from,
            to,
        } => {
            info!("ReclaimFunds...");

            let funding: TokenAccount = program.account(from)?;
            let tx = send_reclaim_funds(tx_sender, distribution, from, to, funding.mint)?;
            info!("Transaction sent: {}", tx);
        }
        Commands::Register {
            distribution,
            registrant,
            voter_weight_record,
        } => {
            info!("Register...");

            let realm = program.account::<Distribution>(distribution)?.realm;
            let tx = send_register(tx_sender, distribution, realm, registrant, voter_weight_record)?;
            info!("Transaction sent: {}", tx);
        }
        Commands::UpdateRegistration {
            distribution,
            registrant,
            voter_weight_record,
        } => {
            info!("UpdateRegistration...");

            let realm = program.account::<Distribution>(distribution)?.realm;
            let tx = send_update_registration(
                tx_sender,
                distribution,
                realm,
                registrant,
                voter_weight_record,
            )?;
            info!("Transaction sent: {}", tx);
        }
        Commands::Claim {
            distribution,
            claimant,
        } => {
            info!("Claim...");

            let claim_accounts = resolve_claim_accounts(&program, distribution, claimant)?;
            let realm = program.account::<Distribution>(distribution)?.realm;
            info!("Paying out to {}", claim_accounts.to_account);

            let tx = send_claim(tx_sender, distribution, realm, claimant, &claim_accounts)?;
            info!("Transaction sent: {}", tx);
        }
        Commands::ReclaimUserData { distribution } => {
            info!("ReclaimUserData...");

            let tx = send_reclaim_user_data(tx_sender, distribution)?;
            info!("Transaction sent: {}", tx);
        }
        Commands::SetPreferredMint { realm, mint } => {
            info!("SetPreferredMint...");

            let tx = send_set_preferred_mint(tx_sender, realm, mint)?;
            info!("Transaction sent: {}", tx);
        }
        Commands::SetResolutionPreference { realm, preference } => {
            info!("SetResolutionPreference...");

            let tx = send_set_resolution_preference(tx_sender, realm, preference)?;
            info!("Transaction sent: {}", tx);
        }
        Commands::CreateEscrow {
            realm,
            admin,
            user,
            mint,
        } => {
            info!("CreateEscrow...");

            let tx = send_create_escrow(tx_sender, realm, admin, user, mint)?;
            info!("Transaction sent: {}", tx);
        }
        Commands::TransferFromEscrow {
            realm,
            user,
            mint,
            to,
            amount,
        } => {
            info!("TransferFromEscrow...");

            let tx = send_transfer_from_escrow(tx_sender, realm, user, mint, to, amount)?;
            info!("Transaction sent: {}", tx);
        }
        Commands::Log {
            ty,
            distribution,
            user,
            realm,
        } => match ty {
            LogType::Distribution => {
                let distribution =
                    distribution.ok_or_else(|| anyhow!("Missing --distribution argument"))?;
                let data: Distribution = program.account(distribution)?;
                println!("{:?}", data);
            }
            LogType::ClaimData => {
                let distribution =
                    distribution.ok_or_else(|| anyhow!("Missing --distribution argument"))?;
                let user = user.ok_or_else(|| anyhow!("Missing --user argument"))?;
                let data: ClaimData = program.account(ClaimData::pda(&user, &distribution).0)?;
                println!("{:?}", data);
            }
            LogType::Preferences => {
                let realm = realm.ok_or_else(|| anyhow!("Missing --realm argument"))?;
                let user = user.ok_or_else(|| anyhow!("Missing --user argument"))?;
                let data: UserPreferences = program.account(UserPreferences::pda(&user, &realm).0)?;
                println!("{:?}", data);
            }
        },
    }

    Ok(())
}

/// Reads the claim, its distribution and the claimant's preferences to find
/// where the payout comes from and goes to.
fn resolve_claim_accounts(
    program: &Program<&Keypair>,
    distribution: Pubkey,
    claimant: Pubkey,
) -> Result<ClaimAccounts> {
    let distribution_data: Distribution = program.account(distribution)?;
    let claim_data: ClaimData = program.account(ClaimData::pda(&claimant, &distribution).0)?;
    let preferences_address = UserPreferences::pda(&claimant, &distribution_data.realm).0;
    let preferences = preferences_or_default(program.account(preferences_address))?;

    ClaimAccounts::resolve(
        &distribution_data,
        &claim_data,
        &preferences.resolution_preference,
        &claimant,
    )
    .ok_or_else(|| anyhow!("claim option {} does not exist", claim_data.claim_option))
}
