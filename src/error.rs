// ABOUTME: Error types for the QR chart client with caller-facing messages
// ABOUTME: Maps parameter, transport, and decode failures onto one taxonomy

use thiserror::Error;

#[derive(Debug, Error)]
pub enum QrChartError {
    /// A parameter value was rejected at assignment time. Carries the wire
    /// name of the parameter and the reason; the rejected value is never stored.
    #[error("Invalid {0} parameter: {1}")]
    InvalidArgument(&'static str, String),

    /// The request could not be completed or the service answered with a
    /// non-success status.
    #[error("Network error: {0}")]
    Network(String),

    /// The response body could not be interpreted as an image.
    #[error("Image decode error: {0}")]
    Decode(String),
}

impl QrChartError {
    /// Wire name of the offending parameter, when the failure was a rejected value.
    pub fn parameter(&self) -> Option<&'static str> {
        match self {
            QrChartError::InvalidArgument(name, _) => Some(name),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for QrChartError {
    fn from(err: reqwest::Error) -> Self {
        QrChartError::Network(err.to_string())
    }
}

impl From<image::ImageError> for QrChartError {
    fn from(err: image::ImageError) -> Self {
        QrChartError::Decode(err.to_string())
    }
}
