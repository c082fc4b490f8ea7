// Requires the SBF build artifact; run through `anchor test` or
// `cargo test-sbf`.
#![cfg(feature = "test-sbf")]

use solana_program_test::ProgramTest;
use solana_pubkey::Pubkey;
use std::str::FromStr;

#[tokio::test]
async fn program_loads_into_the_test_validator() {
    let program_id = Pubkey::from_str("65tLehMbGRJUYJDNP5V2nCy3oVRBQW315gtLxuCSJ88b").unwrap();
    let pt = ProgramTest::new("xai_solana_program", program_id, None);
    let _context = pt.start_with_context().await;
}
