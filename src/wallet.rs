use std::fmt::Debug;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use base64::engine::{general_purpose::STANDARD, Engine};
use thiserror::Error;

use crate::api_client::ApiClient;
use crate::configuration::{ProntoConfiguration, TagIdAttribute};
use crate::error::ProvisioningError;

/// Outcome reported by the native pass-binding UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Enum)]
pub enum PassBindingOutcome {
    /// The binding sheet finished and the pass was added to the wallet.
    Completed,
    /// The user dismissed the sheet without adding the pass.
    Canceled,
}

/// Error reported by the native pass-binding UI.
#[derive(Error, Debug, Clone, uniffi::Error)]
pub enum PassBindingError {
    /// The native wallet UI failed to present or bind the pass.
    #[error("Failed to present the pass binding UI: {reason}")]
    Presentation { reason: String },
}

/// Reports whether the device wallet can accept passes.
///
/// Implemented in Swift/Kotlin on top of the platform wallet framework;
/// must be synchronous and side-effect free.
#[uniffi::export(with_foreign)]
pub trait WalletAvailability: Send + Sync + Debug {
    fn is_wallet_available(&self) -> bool;
}

/// Presents the platform pass-binding UI.
///
/// The SDK hands over the raw issuer data and signature bytes and waits
/// for the host to report how the binding flow ended. The contents of
/// both buffers are opaque to this crate.
#[uniffi::export(with_foreign)]
#[async_trait]
pub trait PassBindingPresenter: Send + Sync + Debug {
    async fn present_pass(
        &self,
        issuer_data: Vec<u8>,
        signature: Vec<u8>,
    ) -> Result<PassBindingOutcome, PassBindingError>;
}

/// Delegate protocol for receiving provisioning lifecycle events.
///
/// Each provisioning attempt delivers at most one of these signals.
#[uniffi::export(with_foreign)]
pub trait ProvisioningDelegate: Send + Sync + Debug {
    /// Called when the pass has been successfully bound to the wallet.
    fn did_complete(&self);

    /// Called when provisioning fails.
    fn did_fail(&self, error: ProvisioningError);

    /// Called when the user cancels the provisioning flow.
    fn did_cancel(&self);
}

/// Observable state of a provisioning session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Enum)]
pub enum ProvisioningState {
    Idle,
    AwaitingIssuerData,
}

/// Entry point for provisioning Pronto passes into the device wallet.
///
/// Hosts construct one session per flow owner, injecting the platform
/// collaborators, configure it once at startup, and then trigger
/// `provision_pass` per user action. Starting a new attempt supersedes
/// the previous one: a superseded attempt's network call is left to
/// finish, but none of its delegate signals are delivered.
#[derive(uniffi::Object)]
pub struct ProntoWallet {
    availability: Arc<dyn WalletAvailability>,
    presenter: Arc<dyn PassBindingPresenter>,
    configuration: Mutex<Option<ProntoConfiguration>>,
    state: Mutex<ProvisioningState>,
    attempt: AtomicU64,
}

impl ProntoWallet {
    fn current_configuration(&self) -> Option<ProntoConfiguration> {
        if let Ok(guard) = self.configuration.lock() {
            guard.clone()
        } else {
            None
        }
    }

    /// True while `attempt` is the most recently started attempt. Every
    /// delegate delivery and state change re-checks this so a superseded
    /// attempt becomes a no-op.
    fn is_current(&self, attempt: u64) -> bool {
        self.attempt.load(Ordering::SeqCst) == attempt
    }

    fn set_state(&self, attempt: u64, new_state: ProvisioningState) {
        if !self.is_current(attempt) {
            return;
        }
        if let Ok(mut guard) = self.state.lock() {
            *guard = new_state;
        }
    }

    fn fail(&self, attempt: u64, delegate: &Arc<dyn ProvisioningDelegate>, error: ProvisioningError) {
        self.set_state(attempt, ProvisioningState::Idle);
        if self.is_current(attempt) {
            delegate.did_fail(error);
        } else {
            tracing::debug!("dropping failure signal for superseded attempt {}", attempt);
        }
    }
}

#[uniffi::export(async_runtime = "tokio")]
impl ProntoWallet {
    /// Creates a new provisioning session.
    ///
    /// # Arguments
    /// * `availability` - Platform check for whether the wallet can
    ///   accept passes
    /// * `presenter` - Native pass-binding UI entry point
    #[uniffi::constructor]
    pub fn new(
        availability: Arc<dyn WalletAvailability>,
        presenter: Arc<dyn PassBindingPresenter>,
    ) -> Self {
        Self {
            availability,
            presenter,
            configuration: Mutex::new(None),
            state: Mutex::new(ProvisioningState::Idle),
            attempt: AtomicU64::new(0),
        }
    }

    /// Initialize the platform logger. No-op outside Android.
    pub fn initiate_logger(&self) {
        #[cfg(target_os = "android")]
        android_logger::init_once(
            android_logger::Config::default()
                .with_max_level(log::LevelFilter::Trace)
                .with_tag("PRONTO_SDK_RS"),
        );
    }

    /// Configure the session with API credentials.
    ///
    /// Call once during app initialization before attempting to
    /// provision passes.
    pub fn configure(&self, configuration: ProntoConfiguration) {
        if let Ok(mut guard) = self.configuration.lock() {
            *guard = Some(configuration);
        }
    }

    /// Whether the device wallet can accept passes.
    pub fn is_wallet_available(&self) -> bool {
        self.availability.is_wallet_available()
    }

    /// The session's current provisioning state.
    pub fn state(&self) -> ProvisioningState {
        if let Ok(guard) = self.state.lock() {
            *guard
        } else {
            ProvisioningState::Idle
        }
    }

    /// Provision a pass into the device wallet.
    ///
    /// Fetches issuer data for the tag, decodes the issuer data and
    /// signature blobs, and hands them to the pass-binding presenter.
    /// The delegate receives at most one terminal signal for this
    /// attempt: completed, failed, or canceled.
    ///
    /// # Arguments
    /// * `tag_id` - The identifier for the tag/pass to provision
    /// * `id_attribute` - Which attribute to use for tag lookup,
    ///   defaulting to the reference id
    /// * `delegate` - Receiver for provisioning lifecycle callbacks
    pub async fn provision_pass(
        &self,
        tag_id: String,
        id_attribute: Option<TagIdAttribute>,
        delegate: Arc<dyn ProvisioningDelegate>,
    ) {
        let Some(configuration) = self.current_configuration() else {
            delegate.did_fail(ProvisioningError::NotConfigured);
            return;
        };

        if !self.availability.is_wallet_available() {
            delegate.did_fail(ProvisioningError::WalletNotAvailable);
            return;
        }

        // Claim a fresh attempt; any attempt still in flight is
        // superseded from this point on.
        let attempt = self.attempt.fetch_add(1, Ordering::SeqCst) + 1;
        self.set_state(attempt, ProvisioningState::AwaitingIssuerData);

        let id_attribute = id_attribute.unwrap_or(TagIdAttribute::ReferenceId);
        let client = ApiClient::new(configuration);

        let response = match client.fetch_issuer_data(tag_id, id_attribute).await {
            Ok(response) => response,
            Err(error) => {
                self.fail(attempt, &delegate, error);
                return;
            }
        };

        let issuer_data = STANDARD.decode(&response.issuer_data);
        let signature = STANDARD.decode(&response.signature);
        let (Ok(issuer_data), Ok(signature)) = (issuer_data, signature) else {
            self.fail(attempt, &delegate, ProvisioningError::InvalidResponse);
            return;
        };

        // Issuer data is in hand; the rest of the flow belongs to the
        // native binding UI.
        self.set_state(attempt, ProvisioningState::Idle);
        if !self.is_current(attempt) {
            tracing::debug!("discarding issuer data for superseded attempt {}", attempt);
            return;
        }

        match self.presenter.present_pass(issuer_data, signature).await {
            Ok(PassBindingOutcome::Completed) => {
                if self.is_current(attempt) {
                    delegate.did_complete();
                }
            }
            Ok(PassBindingOutcome::Canceled) => {
                if self.is_current(attempt) {
                    delegate.did_cancel();
                }
            }
            Err(PassBindingError::Presentation { reason }) => {
                if self.is_current(attempt) {
                    delegate.did_fail(ProvisioningError::WalletUiError(reason));
                }
            }
        }
    }
}
