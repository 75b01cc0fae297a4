use std::time::Duration;

use listings_core::Listing;

use crate::FetchError;

#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub endpoint: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            endpoint: "https://android-kotlin-fun-mars-server.appspot.com/realestate".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

#[async_trait::async_trait]
pub trait ListingsFetcher: Send + Sync {
    /// Resolves with the listings in server-provided order, or fails;
    /// never both.
    async fn fetch(&self) -> Result<Vec<Listing>, FetchError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestFetcher {
    settings: FetchSettings,
    client: reqwest::Client,
}

impl ReqwestFetcher {
    pub fn new(settings: FetchSettings) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| FetchError::Network(err.to_string()))?;
        Ok(Self { settings, client })
    }
}

#[async_trait::async_trait]
impl ListingsFetcher for ReqwestFetcher {
    async fn fetch(&self) -> Result<Vec<Listing>, FetchError> {
        let endpoint = reqwest::Url::parse(&self.settings.endpoint)
            .map_err(|err| FetchError::InvalidUrl(err.to_string()))?;

        let response = self
            .client
            .get(endpoint)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus(status.as_u16()));
        }

        let bytes = response.bytes().await.map_err(map_reqwest_error)?;
        serde_json::from_slice::<Vec<Listing>>(&bytes)
            .map_err(|err| FetchError::Decode(err.to_string()))
    }
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::Timeout;
    }
    FetchError::Network(err.to_string())
}
