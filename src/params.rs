// ABOUTME: Request parameter holder with validation enforced at assignment time
// ABOUTME: Exposes the narrow read-only view the fetcher builds request URLs from

use crate::constants::{values, wire};
use crate::error::QrChartError;
use once_cell::sync::Lazy;
use regex::Regex;
use url::form_urlencoded;

static SIZE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+x\d+$").unwrap());

/// Read-only view of a parameter set, sufficient to build one request.
///
/// The size getter hands back an already-escaped value (escaping happened when
/// the value was stored), while the payload getter escapes on every read. That
/// asymmetry is part of the contract and relied on by [`crate::QrFetcher`].
pub trait ChartParameters {
    /// Escaped `WIDTHxHEIGHT` value for the `chs` parameter.
    fn size(&self) -> Option<&str>;

    /// Escaped copy of the payload for the `chl` parameter, produced fresh on
    /// each call from the raw stored value.
    fn payload(&self) -> Option<String>;

    /// Character encoding for the `choe` parameter, if set.
    fn encoding(&self) -> Option<&str>;

    /// Error-correction level for the `chld` parameter, if set.
    fn error_correction(&self) -> Option<&str>;
}

/// Holder of the four query parameters the chart QR endpoint accepts.
///
/// Each setter validates immediately and leaves the previous value untouched
/// on rejection. A parameter set is fit to build a request once size and
/// payload have been assigned; encoding and error correction are optional.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct QrParameters {
    size: Option<String>,
    payload: Option<String>,
    encoding: Option<String>,
    error_correction: Option<String>,
}

impl QrParameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the image size. The value must be non-empty and match
    /// `<width>x<height>` with unsigned integral parts; it is stored in
    /// URL-escaped form.
    pub fn set_size(&mut self, value: &str) -> Result<(), QrChartError> {
        if value.trim().is_empty() {
            return Err(QrChartError::InvalidArgument(
                wire::PARAM_SIZE,
                "a size must be provided".to_string(),
            ));
        }
        if !SIZE_PATTERN.is_match(value) {
            return Err(QrChartError::InvalidArgument(
                wire::PARAM_SIZE,
                format!(
                    "'{value}' is not of the form <width>x<height> with unsigned integral values"
                ),
            ));
        }
        self.size = Some(escape(value));
        Ok(())
    }

    /// Sets the data to encode into the QR symbol. Any text is accepted and
    /// stored raw; escaping is deferred to [`ChartParameters::payload`].
    pub fn set_payload(&mut self, value: &str) {
        self.payload = Some(value.to_string());
    }

    /// Sets the payload character encoding. Must be one of the values the
    /// service accepts (UTF-8, Shift_JIS, ISO-8859-1).
    pub fn set_encoding(&mut self, value: &str) -> Result<(), QrChartError> {
        if !values::ENCODINGS.contains(&value) {
            return Err(QrChartError::InvalidArgument(
                wire::PARAM_ENCODING,
                format!("'{value}' must be one of: {}", values::ENCODINGS.join(", ")),
            ));
        }
        self.encoding = Some(value.to_string());
        Ok(())
    }

    /// Sets the error-correction level. Must be one of L, M, Q, H.
    pub fn set_error_correction(&mut self, value: &str) -> Result<(), QrChartError> {
        if !values::ERROR_CORRECTION_LEVELS.contains(&value) {
            return Err(QrChartError::InvalidArgument(
                wire::PARAM_ERROR_CORRECTION,
                format!(
                    "'{value}' must be one of: {}",
                    values::ERROR_CORRECTION_LEVELS.join(", ")
                ),
            ));
        }
        self.error_correction = Some(value.to_string());
        Ok(())
    }
}

impl ChartParameters for QrParameters {
    fn size(&self) -> Option<&str> {
        self.size.as_deref()
    }

    fn payload(&self) -> Option<String> {
        self.payload.as_deref().map(escape)
    }

    fn encoding(&self) -> Option<&str> {
        self.encoding.as_deref()
    }

    fn error_correction(&self) -> Option<&str> {
        self.error_correction.as_deref()
    }
}

/// Escapes a value for embedding in a URL query component (spaces become `+`).
fn escape(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes()).collect()
}
