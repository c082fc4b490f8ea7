//! Smoke-test client for the launchpad program.
//!
//! One linear flow with no retry: build the execution context from the
//! process environment, bind a typed handle to the deployed program, issue
//! a single zero-argument `initialize` call and report the resulting
//! transaction signature. Every failure is terminal and maps onto one of
//! the three [`SmokeError`] classes.

pub mod config;
pub mod error;
pub mod runner;

pub use config::SmokeConfig;
pub use error::SmokeError;
pub use runner::SmokeRunner;
