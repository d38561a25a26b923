use async_trait::async_trait;
use url::Url;

use crate::error::{DossierError, Result};

use super::{normalize_path, ContentSource};

/// Longest response body kept in an [`DossierError::Api`] error.
const MAX_ERROR_BODY: usize = 512;

/// Fetches content files from a deployed site.
pub struct HttpSource {
    client: reqwest::Client,
    base: Url,
}

impl HttpSource {
    /// `base` must be an absolute `http`/`https` URL. A trailing slash is added
    /// so relative paths resolve beneath it rather than replacing its last segment.
    pub fn new(base: &str, timeout_secs: Option<u64>) -> Result<Self> {
        let mut base_url = Url::parse(base).map_err(|e| DossierError::InvalidBase {
            base: base.to_string(),
            reason: e.to_string(),
        })?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(DossierError::InvalidBase {
                base: base.to_string(),
                reason: format!("unsupported scheme: {}", base_url.scheme()),
            });
        }
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let mut builder = reqwest::Client::builder();
        if let Some(secs) = timeout_secs {
            builder = builder.timeout(std::time::Duration::from_secs(secs));
        }
        let client = builder.build().map_err(|e| DossierError::InvalidBase {
            base: base.to_string(),
            reason: format!("failed to create HTTP client: {e}"),
        })?;

        Ok(Self {
            client,
            base: base_url,
        })
    }
}

#[async_trait]
impl ContentSource for HttpSource {
    async fn fetch(&self, path: &str) -> Result<Vec<u8>> {
        let url = self
            .base
            .join(&normalize_path(path))
            .map_err(|e| DossierError::Fetch {
                path: path.to_string(),
                reason: e.to_string(),
            })?;

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| DossierError::Fetch {
                path: url.to_string(),
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DossierError::Api {
                status: status.as_u16(),
                body: body.chars().take(MAX_ERROR_BODY).collect(),
            });
        }

        let bytes = response.bytes().await.map_err(|e| DossierError::Fetch {
            path: url.to_string(),
            reason: e.to_string(),
        })?;
        Ok(bytes.to_vec())
    }

    fn describe(&self) -> String {
        self.base.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_gets_trailing_slash() {
        let source = HttpSource::new("https://example.com/portfolio", None).unwrap();
        assert_eq!(source.describe(), "https://example.com/portfolio/");
        let joined = source.base.join("data/projects/a.json").unwrap();
        assert_eq!(
            joined.as_str(),
            "https://example.com/portfolio/data/projects/a.json"
        );
    }

    #[test]
    fn test_rejects_non_http_base() {
        assert!(matches!(
            HttpSource::new("ftp://example.com/", None),
            Err(DossierError::InvalidBase { .. })
        ));
        assert!(matches!(
            HttpSource::new("not a url", None),
            Err(DossierError::InvalidBase { .. })
        ));
    }
}
