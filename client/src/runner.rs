//! The smoke run itself: bind, call once, report.

use std::rc::Rc;

use anchor_client::anchor_lang::prelude::Pubkey;
use anchor_client::anchor_lang::system_program;
use anchor_client::{Client, Cluster};
use solana_commitment_config::CommitmentConfig;
use solana_keypair::{read_keypair_file, Keypair};
use solana_signature::Signature;
use solana_signer::Signer as _;
use tracing::info;

use xai_solana_program::accounts as program_accounts;
use xai_solana_program::instruction as program_instruction;
use xai_solana_program::state;

use crate::config::SmokeConfig;
use crate::error::SmokeError;

/// A fully resolved run: cluster, payer identity and the two read-only
/// accounts `initialize` records. Owns everything it needs; consumed by
/// [`SmokeRunner::run`].
pub struct SmokeRunner {
    pub cluster: Cluster,
    pub payer: Keypair,
    pub migration_account: Option<Pubkey>,
    pub fee_receiver_account: Option<Pubkey>,
}

impl SmokeRunner {
    pub fn from_config(config: &SmokeConfig) -> Result<Self, SmokeError> {
        let payer = read_keypair_file(&config.wallet).map_err(|err| {
            SmokeError::Configuration(format!(
                "cannot read keypair {}: {err}",
                config.wallet.display()
            ))
        })?;

        Ok(Self {
            cluster: config.cluster.clone(),
            payer,
            migration_account: config.migration_account,
            fee_receiver_account: config.fee_receiver_account,
        })
    }

    /// Issue the single `initialize` call, blocking until the cluster
    /// confirms it, and return the transaction signature. No retry: any
    /// failure propagates as-is.
    pub fn run(self) -> Result<Signature, SmokeError> {
        let owner = self.payer.pubkey();
        info!(cluster = %self.cluster, payer = %owner, "issuing initialize");

        let client = Client::new_with_options(
            self.cluster,
            Rc::new(self.payer),
            CommitmentConfig::confirmed(),
        );
        let program = client
            .program(xai_solana_program::ID)
            .map_err(SmokeError::Binding)?;

        let accounts = initialize_accounts(
            owner,
            self.migration_account.unwrap_or(owner),
            self.fee_receiver_account.unwrap_or(owner),
        );

        let signature = program
            .request()
            .accounts(accounts)
            .args(program_instruction::Initialize {})
            .send()
            .map_err(SmokeError::RemoteCall);
        signature
    }
}

/// Resolve the account list of the zero-argument `initialize` call. The
/// three PDAs are derived from the program id; the rest is caller input.
pub fn initialize_accounts(
    owner: Pubkey,
    migration_account: Pubkey,
    fee_receiver_account: Pubkey,
) -> program_accounts::Initialize {
    let (program_system_account, _) = Pubkey::find_program_address(
        &[state::PROGRAM_SYSTEM_ACCOUNT_SEED],
        &xai_solana_program::ID,
    );
    let (program_signer, _) =
        Pubkey::find_program_address(&[state::PROGRAM_SIGNER_SEED], &xai_solana_program::ID);
    let (fee_config, _) =
        Pubkey::find_program_address(&[state::FEE_CONFIG_SEED], &xai_solana_program::ID);

    program_accounts::Initialize {
        program_system_account,
        program_signer,
        fee_config,
        migration_account,
        fee_receiver_account,
        owner,
        system_program: system_program::ID,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_client::anchor_lang::{Discriminator, InstructionData, ToAccountMetas};

    #[test]
    fn initialize_carries_no_arguments() {
        // The instruction data is exactly the 8-byte discriminator,
        // whatever else is in the environment.
        let data = program_instruction::Initialize {}.data();
        assert_eq!(data, program_instruction::Initialize::DISCRIMINATOR.to_vec());
        assert_eq!(data.len(), 8);
    }

    #[test]
    fn initialize_account_metas_are_complete_and_ordered() {
        let owner = Pubkey::new_unique();
        let migration = Pubkey::new_unique();
        let fee_receiver = Pubkey::new_unique();

        let metas = initialize_accounts(owner, migration, fee_receiver).to_account_metas(None);
        assert_eq!(metas.len(), 7);

        // Payer signs and pays; the system program tails the list.
        let owner_meta = metas.iter().find(|m| m.pubkey == owner).unwrap();
        assert!(owner_meta.is_signer);
        assert!(owner_meta.is_writable);
        assert_eq!(metas.last().unwrap().pubkey, system_program::ID);
    }

    #[test]
    fn pda_derivation_is_deterministic() {
        let a = initialize_accounts(Pubkey::new_unique(), Pubkey::default(), Pubkey::default());
        let b = initialize_accounts(Pubkey::new_unique(), Pubkey::default(), Pubkey::default());
        assert_eq!(a.program_system_account, b.program_system_account);
        assert_eq!(a.program_signer, b.program_signer);
        assert_eq!(a.fee_config, b.fee_config);
    }

    #[test]
    fn unreachable_endpoint_is_a_remote_call_error() {
        let runner = SmokeRunner {
            // Nothing listens on port 1.
            cluster: Cluster::Custom(
                "http://127.0.0.1:1".to_string(),
                "ws://127.0.0.1:1".to_string(),
            ),
            payer: Keypair::new(),
            migration_account: None,
            fee_receiver_account: None,
        };

        let err = runner.run().unwrap_err();
        assert!(matches!(err, SmokeError::RemoteCall(_)));
    }
}
