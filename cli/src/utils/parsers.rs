use anchor_client::solana_sdk::pubkey::Pubkey;
use governance_rewards::ResolutionPreference;
use std::str::FromStr;

pub fn parse_pubkey(s: &str) -> Result<Pubkey, String> {
    Pubkey::from_str(s).map_err(|e| format!("invalid pubkey: {e}"))
}

/// Parses `wallet` or `escrow:<admin pubkey>`.
pub fn parse_resolution_preference(s: &str) -> Result<ResolutionPreference, String> {
    match s.split_once(':') {
        None if s.eq_ignore_ascii_case("wallet") => Ok(ResolutionPreference::Wallet),
        Some((kind, admin)) if kind.eq_ignore_ascii_case("escrow") => {
            Ok(ResolutionPreference::Escrow {
                admin: parse_pubkey(admin)?,
            })
        }
        _ => Err(format!(
            "invalid resolution preference: {s}, expected wallet | escrow:<admin>"
        )),
    }
}

pub fn parse_log_type(s: &str) -> Result<LogType, String> {
    match s.to_lowercase().as_str() {
        "distribution" => Ok(LogType::Distribution),
        "claim-data" => Ok(LogType::ClaimData),
        "preferences" => Ok(LogType::Preferences),
        _ => Err(format!("invalid log type: {}", s)),
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LogType {
    Distribution,
    ClaimData,
    Preferences,
}
