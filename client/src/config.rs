//! Execution context, sourced from the same environment variables the
//! Anchor provider reads.

use std::path::PathBuf;
use std::str::FromStr;

use anchor_client::anchor_lang::prelude::Pubkey;
use anchor_client::Cluster;

use crate::error::SmokeError;

pub const PROVIDER_URL_ENV: &str = "ANCHOR_PROVIDER_URL";
pub const WALLET_ENV: &str = "ANCHOR_WALLET";
pub const MIGRATION_ACCOUNT_ENV: &str = "MIGRATION_ACCOUNT";
pub const FEE_RECEIVER_ACCOUNT_ENV: &str = "FEE_RECEIVER_ACCOUNT";

/// One-shot configuration for a smoke run. Created at start, dropped at
/// the end; nothing is persisted.
#[derive(Debug, Clone)]
pub struct SmokeConfig {
    pub cluster: Cluster,
    /// Payer keypair file, `~`-expanded.
    pub wallet: PathBuf,
    /// Withdrawal authority recorded by `initialize`; defaults to the payer.
    pub migration_account: Option<Pubkey>,
    /// Fee sink recorded by `initialize`; defaults to the payer.
    pub fee_receiver_account: Option<Pubkey>,
}

impl SmokeConfig {
    pub fn new(
        provider_url: &str,
        wallet: &str,
        migration_account: Option<&str>,
        fee_receiver_account: Option<&str>,
    ) -> Result<Self, SmokeError> {
        let cluster = Cluster::from_str(provider_url).map_err(|err| {
            SmokeError::Configuration(format!("{PROVIDER_URL_ENV} is malformed: {err}"))
        })?;
        let wallet = PathBuf::from(shellexpand::tilde(wallet).into_owned());
        let migration_account = migration_account
            .map(|value| parse_pubkey(MIGRATION_ACCOUNT_ENV, value))
            .transpose()?;
        let fee_receiver_account = fee_receiver_account
            .map(|value| parse_pubkey(FEE_RECEIVER_ACCOUNT_ENV, value))
            .transpose()?;

        Ok(Self {
            cluster,
            wallet,
            migration_account,
            fee_receiver_account,
        })
    }

    /// Read the context from the process environment. Fails before any
    /// network object is constructed.
    pub fn from_env() -> Result<Self, SmokeError> {
        let provider_url = require_env(PROVIDER_URL_ENV)?;
        let wallet = require_env(WALLET_ENV)?;
        let migration_account = std::env::var(MIGRATION_ACCOUNT_ENV).ok();
        let fee_receiver_account = std::env::var(FEE_RECEIVER_ACCOUNT_ENV).ok();

        Self::new(
            &provider_url,
            &wallet,
            migration_account.as_deref(),
            fee_receiver_account.as_deref(),
        )
    }
}

fn require_env(key: &str) -> Result<String, SmokeError> {
    std::env::var(key).map_err(|_| SmokeError::Configuration(format!("{key} is not set")))
}

fn parse_pubkey(key: &str, value: &str) -> Result<Pubkey, SmokeError> {
    Pubkey::from_str(value)
        .map_err(|err| SmokeError::Configuration(format!("{key} is malformed: {err}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_url_into_a_custom_cluster() {
        let config = SmokeConfig::new("http://localhost:8899", "/tmp/id.json", None, None).unwrap();
        assert!(matches!(config.cluster, Cluster::Custom(..)));
        assert_eq!(config.wallet, PathBuf::from("/tmp/id.json"));
        assert!(config.migration_account.is_none());
        assert!(config.fee_receiver_account.is_none());
    }

    #[test]
    fn parses_a_moniker() {
        let config = SmokeConfig::new("localnet", "/tmp/id.json", None, None).unwrap();
        assert_eq!(config.cluster, Cluster::Localnet);
    }

    #[test]
    fn expands_the_wallet_tilde() {
        let config = SmokeConfig::new("localnet", "~/id.json", None, None).unwrap();
        assert!(!config.wallet.to_string_lossy().starts_with('~'));
        assert!(config.wallet.to_string_lossy().ends_with("id.json"));
    }

    #[test]
    fn malformed_url_is_a_configuration_error() {
        let err = SmokeConfig::new("not a url", "/tmp/id.json", None, None).unwrap_err();
        assert!(matches!(err, SmokeError::Configuration(_)));
    }

    #[test]
    fn malformed_account_override_is_a_configuration_error() {
        let err =
            SmokeConfig::new("localnet", "/tmp/id.json", Some("not-a-pubkey"), None).unwrap_err();
        assert!(matches!(err, SmokeError::Configuration(_)));
    }

    #[test]
    fn missing_env_value_fails_before_any_call_is_issued() {
        // The test binary's environment is ours to clear; no other test
        // in this crate touches these variables.
        std::env::remove_var(PROVIDER_URL_ENV);
        std::env::remove_var(WALLET_ENV);

        let err = SmokeConfig::from_env().unwrap_err();
        assert!(matches!(err, SmokeError::Configuration(_)));
        assert!(err.to_string().contains(PROVIDER_URL_ENV));
    }
}
