//! Client configuration.
//!
//! Defaults match the prediction service's routes. The endpoint can be
//! overridden at build time with `LEAFSCAN_PREDICT_ENDPOINT`.

/// Largest upload accepted before any request is made, in MiB.
pub const MAX_UPLOAD_MB: u64 = 4;

pub const DEFAULT_ENDPOINT: &str = "/predict";
pub const DEFAULT_UPLOAD_FIELD: &str = "file";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Endpoint path or absolute URL of the prediction service.
    pub endpoint: String,
    /// Multipart part name carrying the image.
    pub upload_field: String,
    pub max_upload_bytes: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            upload_field: DEFAULT_UPLOAD_FIELD.to_string(),
            max_upload_bytes: MAX_UPLOAD_MB * 1024 * 1024,
        }
    }
}

impl ClientConfig {
    /// Defaults, with the endpoint taken from the build environment when set.
    pub fn from_build_env() -> Self {
        let mut config = Self::default();
        if let Some(endpoint) = option_env!("LEAFSCAN_PREDICT_ENDPOINT") {
            if !endpoint.trim().is_empty() {
                config.endpoint = endpoint.trim().to_string();
            }
        }
        config
    }

    /// Resolve the endpoint against the page origin.
    ///
    /// Absolute `http(s)://` endpoints are returned unchanged.
    pub fn endpoint_url(&self, origin: &str) -> String {
        if self.endpoint.starts_with("http://") || self.endpoint.starts_with("https://") {
            return self.endpoint.clone();
        }
        let origin = origin.trim_end_matches('/');
        if self.endpoint.starts_with('/') {
            format!("{}{}", origin, self.endpoint)
        } else {
            format!("{}/{}", origin, self.endpoint)
        }
    }
}
