use url::Url;

/// Represents the Pronto server environment to connect to.
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Enum)]
pub enum ProntoEnvironment {
    Production,
    Staging,
    Demo,
    /// A local development server, reached over plain HTTP.
    Development { host: String },
    /// A fully custom origin. The URL is validated when the host
    /// constructs the variant, never during a request.
    Custom { url: Url },
}

impl ProntoEnvironment {
    /// Resolves the environment to its API origin.
    ///
    /// Pure computation; never touches the network.
    pub fn base_url(&self) -> String {
        match self {
            Self::Production => "https://app.prontocx.com".to_string(),
            Self::Staging => "https://app.stage.prontocx.com".to_string(),
            Self::Demo => "https://app.demo.prontocx.com".to_string(),
            Self::Development { host } => format!("http://{}", host),
            Self::Custom { url } => url.to_string(),
        }
    }
}

impl Default for ProntoEnvironment {
    fn default() -> Self {
        Self::Production
    }
}
