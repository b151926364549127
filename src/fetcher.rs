// ABOUTME: HTTP fetcher that turns a validated parameter set into a decoded QR image
// ABOUTME: Builds the templated request URL, issues one blocking GET, decodes the body

use crate::constants::{urls, wire};
use crate::error::QrChartError;
use crate::params::ChartParameters;
use image::DynamicImage;
use reqwest::blocking::Client;

/// Fetches rendered QR symbols from a chart service.
///
/// One fetch is one blocking GET: no retry, no caching, no configured timeout.
/// The call blocks until the service responds or the transport fails.
pub struct QrFetcher {
    client: Client,
    endpoint: String,
}

impl QrFetcher {
    /// Creates a fetcher against the production chart endpoint.
    pub fn new() -> Result<Self, QrChartError> {
        Self::with_endpoint(urls::CHART_ENDPOINT)
    }

    /// Creates a fetcher against an alternate endpoint, e.g. a self-hosted
    /// chart service or a mock server in tests.
    pub fn with_endpoint(endpoint: impl Into<String>) -> Result<Self, QrChartError> {
        let client = Client::builder()
            .user_agent(concat!("qrchart/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    /// Builds the request URL for a parameter set. Size and payload must have
    /// been assigned; encoding and error correction are appended only when set.
    pub fn request_url(&self, params: &impl ChartParameters) -> Result<String, QrChartError> {
        let size = params.size().ok_or_else(|| required(wire::PARAM_SIZE))?;
        let payload = params.payload().ok_or_else(|| required(wire::PARAM_PAYLOAD))?;

        let mut url = format!(
            "{}?{}={}&{}={}&{}={}",
            self.endpoint,
            wire::PARAM_TYPE,
            wire::CHART_TYPE,
            wire::PARAM_SIZE,
            size,
            wire::PARAM_PAYLOAD,
            payload
        );

        if let Some(encoding) = params.encoding().filter(|v| !v.trim().is_empty()) {
            url.push_str(&format!("&{}={}", wire::PARAM_ENCODING, encoding));
        }
        if let Some(level) = params.error_correction().filter(|v| !v.trim().is_empty()) {
            url.push_str(&format!("&{}={}", wire::PARAM_ERROR_CORRECTION, level));
        }

        Ok(url)
    }

    /// Issues the GET and decodes the response body into an image.
    ///
    /// Non-success statuses surface as [`QrChartError::Network`]. Any success
    /// body is handed to the decoder regardless of its declared content-type;
    /// a body that is not a well-formed image surfaces as
    /// [`QrChartError::Decode`].
    pub fn fetch(&self, params: &impl ChartParameters) -> Result<DynamicImage, QrChartError> {
        let url = self.request_url(params)?;
        log::debug!("Requesting QR image from {}", url);

        let response = self.client.get(&url).send()?.error_for_status()?;
        let bytes = response.bytes()?;
        log::debug!("Received {} byte response body", bytes.len());

        let image = image::load_from_memory(&bytes)?;
        Ok(image)
    }
}

fn required(param: &'static str) -> QrChartError {
    QrChartError::InvalidArgument(
        param,
        "must be set before a request can be built".to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::QrParameters;

    fn full_params() -> QrParameters {
        let mut params = QrParameters::new();
        params.set_size("400x400").unwrap();
        params.set_payload("Hello spaces World");
        params.set_encoding("UTF-8").unwrap();
        params.set_error_correction("H").unwrap();
        params
    }

    #[test]
    fn test_request_url_full() {
        let fetcher = QrFetcher::new().unwrap();
        let url = fetcher.request_url(&full_params()).unwrap();
        assert_eq!(
            url,
            "https://chart.googleapis.com/chart?cht=qr&chs=400x400&chl=Hello+spaces+World&choe=UTF-8&chld=H"
        );
    }

    #[test]
    fn test_request_url_omits_unset_optionals() {
        let mut params = QrParameters::new();
        params.set_size("100x100").unwrap();
        params.set_payload("hello");

        let fetcher = QrFetcher::new().unwrap();
        let url = fetcher.request_url(&params).unwrap();
        assert_eq!(
            url,
            "https://chart.googleapis.com/chart?cht=qr&chs=100x100&chl=hello"
        );
        assert!(!url.contains("choe"));
        assert!(!url.contains("chld"));
    }

    #[test]
    fn test_request_url_requires_size_and_payload() {
        let fetcher = QrFetcher::new().unwrap();

        let empty = QrParameters::new();
        let err = fetcher.request_url(&empty).unwrap_err();
        assert_eq!(err.parameter(), Some("chs"));

        let mut no_payload = QrParameters::new();
        no_payload.set_size("100x100").unwrap();
        let err = fetcher.request_url(&no_payload).unwrap_err();
        assert_eq!(err.parameter(), Some("chl"));
    }

    #[test]
    fn test_custom_endpoint() {
        let mut params = QrParameters::new();
        params.set_size("50x50").unwrap();
        params.set_payload("x");

        let fetcher = QrFetcher::with_endpoint("http://localhost:9999/chart").unwrap();
        let url = fetcher.request_url(&params).unwrap();
        assert!(url.starts_with("http://localhost:9999/chart?cht=qr&"));
    }
}
