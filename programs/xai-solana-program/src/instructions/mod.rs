pub mod admin;
pub mod claim;
pub mod create_token;
pub mod initialize;
pub mod initialize_config;
pub mod swap;
pub mod withdraw;

pub use admin::*;
pub use claim::*;
pub use create_token::*;
pub use initialize::*;
pub use initialize_config::*;
pub use swap::*;
pub use withdraw::*;
