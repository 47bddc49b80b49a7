use serde::Deserialize;

/// Response from the issuer_data endpoint.
///
/// Both blobs stay base64-encoded here; they are only decoded to raw
/// bytes immediately before being handed to the wallet UI.
#[derive(Debug, Clone, Deserialize, uniffi::Record)]
pub struct IssuerDataResponse {
    pub issuer_data: String,
    pub signature: String,
    pub tag_id: i64,
}

/// A user's pass fetched from the Pronto API.
#[derive(Debug, Clone, uniffi::Record)]
pub struct Pass {
    pub id: String,
    pub active: bool,
    pub download_url: String,
    pub download_url_apple: Option<String>,
    pub download_url_google: Option<String>,
}

/// Response wrapper matching the JSON API `data` array format.
#[derive(Debug, Deserialize)]
pub(crate) struct PassesResponse {
    data: Vec<PassResource>,
}

#[derive(Debug, Deserialize)]
struct PassResource {
    id: String,
    r#type: String,
    attributes: PassAttributes,
}

#[derive(Debug, Deserialize)]
struct PassAttributes {
    active: bool,
    download_url: String,
    #[serde(default)]
    download_url_apple: Option<String>,
    #[serde(default)]
    download_url_google: Option<String>,
}

impl PassesResponse {
    pub(crate) fn into_passes(self) -> Vec<Pass> {
        self.data
            .into_iter()
            .map(|resource| Pass {
                id: resource.id,
                active: resource.attributes.active,
                download_url: resource.attributes.download_url,
                download_url_apple: resource.attributes.download_url_apple,
                download_url_google: resource.attributes.download_url_google,
            })
            .collect()
    }
}
