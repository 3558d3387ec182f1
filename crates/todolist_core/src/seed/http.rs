//! HTTP implementation of the seed source.

use super::{SeedError, SeedRecord, SeedResult, SeedSource};
use log::{error, info};
use std::time::Duration;

const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Fetches the seed record array from a configured URL with one GET.
pub struct HttpSeedSource {
    url: String,
    client: reqwest::blocking::Client,
}

impl HttpSeedSource {
    pub fn new(url: impl Into<String>) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()
            .unwrap_or_default();

        Self {
            url: url.into(),
            client,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl SeedSource for HttpSeedSource {
    fn fetch(&self) -> SeedResult<Vec<SeedRecord>> {
        info!("event=seed_fetch module=seed status=start url={}", self.url);

        let response = self.client.get(&self.url).send()?;
        let status = response.status();
        if !status.is_success() {
            error!(
                "event=seed_fetch module=seed status=error url={} http_status={status}",
                self.url
            );
            return Err(SeedError::Status(status));
        }

        let body = response.text()?;
        let records: Vec<SeedRecord> =
            serde_json::from_str(&body).map_err(SeedError::Malformed)?;

        info!(
            "event=seed_fetch module=seed status=ok url={} count={}",
            self.url,
            records.len()
        );
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::HttpSeedSource;

    #[test]
    fn new_keeps_configured_url() {
        let source = HttpSeedSource::new("https://example.test/tasks.json");
        assert_eq!(source.url(), "https://example.test/tasks.json");
    }
}
