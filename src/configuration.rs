use serde::{Deserialize, Serialize};

use crate::environment::ProntoEnvironment;

/// Configuration for the Pronto provisioning SDK.
///
/// Constructed once by the host application and handed to
/// [`crate::ProntoWallet::configure`]. The API key is used as the HTTP
/// Basic Auth user with an empty password; no validation is applied here.
#[derive(Debug, Clone, uniffi::Record)]
pub struct ProntoConfiguration {
    /// The API user auth token from the Pronto admin console.
    pub api_key: String,

    /// The Pronto environment to connect to.
    pub environment: ProntoEnvironment,

    /// Network request timeout in seconds.
    #[uniffi(default = 30.0)]
    pub timeout_seconds: f64,
}

impl ProntoConfiguration {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            environment: ProntoEnvironment::default(),
            timeout_seconds: 30.0,
        }
    }
}

/// The attribute used to identify a tag when requesting provisioning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, uniffi::Enum)]
#[serde(rename_all = "snake_case")]
pub enum TagIdAttribute {
    ReferenceId,
    ProntoTagId,
    SubscriptionId,
}

impl TagIdAttribute {
    /// The snake_case identifier the API expects in request bodies.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ReferenceId => "reference_id",
            Self::ProntoTagId => "pronto_tag_id",
            Self::SubscriptionId => "subscription_id",
        }
    }
}
