use thiserror::Error;

/// Errors that can occur during pass provisioning.
#[derive(Error, Debug, Clone, uniffi::Error)]
pub enum ProvisioningError {
    /// The SDK has not been configured. Call `configure` first.
    #[error("SDK is not configured. Call configure() before provisioning.")]
    NotConfigured,

    /// The wallet is not available on this device.
    #[error("Wallet is not available on this device.")]
    WalletNotAvailable,

    /// A network error occurred while communicating with the Pronto API.
    #[error("Network error: {0}")]
    NetworkError(String),

    /// The server returned an error response.
    #[error("Server error ({status}): {}", .message.as_deref().unwrap_or("no message"))]
    ServerError { status: u16, message: Option<String> },

    /// The server response could not be parsed.
    #[error("Invalid response from server.")]
    InvalidResponse,

    /// An error occurred in the native wallet UI while binding the pass.
    #[error("Wallet UI error: {0}")]
    WalletUiError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_configured_description() {
        let message = ProvisioningError::NotConfigured.to_string();
        assert!(message.contains("not configured"));
    }

    #[test]
    fn test_wallet_not_available_description() {
        let message = ProvisioningError::WalletNotAvailable.to_string();
        assert!(message.contains("not available"));
    }

    #[test]
    fn test_network_error_preserves_cause() {
        let message = ProvisioningError::NetworkError("connection reset".to_string()).to_string();
        assert!(message.contains("Network error"));
        assert!(message.contains("connection reset"));
    }

    #[test]
    fn test_server_error_with_message() {
        let error = ProvisioningError::ServerError {
            status: 401,
            message: Some("Unauthorized".to_string()),
        };
        let message = error.to_string();
        assert!(message.contains("401"));
        assert!(message.contains("Unauthorized"));
    }

    #[test]
    fn test_server_error_without_message() {
        let error = ProvisioningError::ServerError {
            status: 500,
            message: None,
        };
        assert!(error.to_string().contains("500"));
    }

    #[test]
    fn test_invalid_response_description() {
        let message = ProvisioningError::InvalidResponse.to_string();
        assert!(message.contains("Invalid response"));
    }

    #[test]
    fn test_wallet_ui_error_preserves_cause() {
        let message = ProvisioningError::WalletUiError("sheet dismissed early".to_string()).to_string();
        assert!(message.contains("sheet dismissed early"));
    }
}
