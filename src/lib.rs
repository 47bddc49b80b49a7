uniffi::setup_scaffolding!();

mod api_client;
mod common;
mod configuration;
mod environment;
mod error;
mod response;
mod wallet;

pub use api_client::*;
pub use configuration::*;
pub use environment::*;
pub use error::*;
pub use response::*;
pub use wallet::*;
