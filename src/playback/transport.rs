//! Delivery of rendered patterns to a Life server.

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;

use crate::pattern::Life105Pattern;
use crate::schema::PlaybackConfig;

/// Per-pattern delivery failures. The playback loop logs these and moves on.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("Request to {url} failed: {source}")]
    Request { url: String, source: reqwest::Error },
    #[error("Reading response from {url} failed: {source}")]
    ReadBody { url: String, source: reqwest::Error },
}

/// Destination for rendered patterns.
pub trait PatternSink {
    fn deliver(&mut self, pattern: &Life105Pattern) -> Result<(), TransportError>;
}

/// POSTs each pattern as a `text/plain` Life 1.05 document.
///
/// The response body is read in full and discarded; any readable response
/// counts as a successful delivery.
pub struct HttpTransport {
    client: Client,
    url: String,
}

impl HttpTransport {
    pub fn new(config: &PlaybackConfig) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(TransportError::Client)?;

        Ok(Self {
            client,
            url: config.endpoint(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Send one document to the server.
    pub fn send(&self, document: String) -> Result<(), TransportError> {
        let response = self
            .client
            .post(&self.url)
            .header(CONTENT_TYPE, "text/plain")
            .body(document)
            .send()
            .map_err(|source| TransportError::Request {
                url: self.url.clone(),
                source,
            })?;

        response.bytes().map_err(|source| TransportError::ReadBody {
            url: self.url.clone(),
            source,
        })?;
        Ok(())
    }
}

impl PatternSink for HttpTransport {
    fn deliver(&mut self, pattern: &Life105Pattern) -> Result<(), TransportError> {
        self.send(pattern.to_document())
    }
}
