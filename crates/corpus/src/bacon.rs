use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

use crate::{CorpusConfig, CorpusSource, FetchError, ParagraphCount};

/// Fetches placeholder paragraphs from the Bacon Ipsum JSON API.
///
/// Issues `GET {base_url}/api/?type={kind}&paras={n}` and expects a JSON
/// array of strings.
#[derive(Debug, Clone)]
pub struct BaconIpsumSource {
    client: Client,
    endpoint: String,
    kind: String,
}

impl BaconIpsumSource {
    pub fn new(cfg: &CorpusConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(cfg.timeout())
            .connect_timeout(cfg.connect_timeout())
            .build()
            .map_err(|e| FetchError::Client(e.to_string()))?;
        Ok(Self {
            client,
            endpoint: format!("{}/api/", cfg.base_url.trim_end_matches('/')),
            kind: cfg.kind.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl CorpusSource for BaconIpsumSource {
    async fn fetch(&self, count: ParagraphCount) -> Result<Vec<String>, FetchError> {
        debug!(endpoint = %self.endpoint, paragraphs = count.get(), "fetching corpus");

        let paras = count.get().to_string();
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("type", self.kind.as_str()), ("paras", paras.as_str())])
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "corpus request failed");
                FetchError::Transport(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "corpus source returned an error status");
            return Err(FetchError::Status(status.as_u16()));
        }

        let paragraphs = response
            .json::<Vec<String>>()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))?;
        debug!(received = paragraphs.len(), "corpus fetched");
        Ok(paragraphs)
    }
}
