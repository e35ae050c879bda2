use std::{path::PathBuf, str::FromStr};

use anchor_client::{
    solana_sdk::{
        commitment_config::CommitmentConfig,
        signature::{read_keypair_file, Keypair},
    },
    Client, Cluster, Program,
};
use anyhow::{anyhow, Result};

pub const DEFAULT_RPC_URL: &str = "http://localhost:8899";
pub const DEFAULT_WALLET_PATH: &str = "~/.config/solana/id.json";

/// Cluster endpoint and signing wallet used to talk to the program.
#[derive(Clone, Debug)]
pub struct ProviderConfig {
    pub rpc_url: String,
    pub wallet_path: PathBuf,
    pub commitment: CommitmentConfig,
}

impl ProviderConfig {
    pub fn new(rpc_url: impl Into<String>, wallet_path: impl Into<PathBuf>) -> Self {
        Self {
            rpc_url: rpc_url.into(),
            wallet_path: expand_home(wallet_path.into()),
            commitment: CommitmentConfig::confirmed(),
        }
    }

    /// Reads `ANCHOR_PROVIDER_URL` and `ANCHOR_WALLET`, as set by `anchor test`.
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var("ANCHOR_PROVIDER_URL").ok(),
            std::env::var("ANCHOR_WALLET").ok(),
        )
    }

    fn from_vars(rpc_url: Option<String>, wallet_path: Option<String>) -> Self {
        Self::new(
            rpc_url.unwrap_or_else(|| DEFAULT_RPC_URL.to_string()),
            wallet_path.unwrap_or_else(|| DEFAULT_WALLET_PATH.to_string()),
        )
    }

    /// Custom cluster for `rpc_url`. The pubsub endpoint is derived by anchor-client.
    pub fn cluster(&self) -> Result<Cluster> {
        Cluster::from_str(&self.rpc_url)
    }

    pub fn load_payer(&self) -> Result<Keypair> {
        read_keypair_file(&self.wallet_path)
            .map_err(|e| anyhow!("failed to read wallet {}: {e}", self.wallet_path.display()))
    }

    /// Client handle for the governance rewards program, paid for by `payer`.
    pub fn program<'a>(&self, payer: &'a Keypair) -> Result<Program<&'a Keypair>> {
        let client = Client::new_with_options(self.cluster()?, payer, self.commitment);
        Ok(client.program(governance_rewards::ID)?)
    }
}

fn expand_home(path: PathBuf) -> PathBuf {
    match (path.strip_prefix("~"), std::env::var("HOME")) {
        (Ok(rest), Ok(home)) => PathBuf::from(home).join(rest),
        _ => path,
    }
}
