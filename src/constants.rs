// ABOUTME: Centralized constants for the QR chart client
// ABOUTME: Contains the service endpoint, wire parameter names, and accepted value tables

/// Chart service URLs.
pub mod urls {
    /// Base URL for the Google Chart API endpoint.
    pub const CHART_ENDPOINT: &str = "https://chart.googleapis.com/chart";
}

/// Query parameter names of the chart wire contract.
pub mod wire {
    /// Chart type selector; always `qr` for this client.
    pub const CHART_TYPE: &str = "qr";

    pub const PARAM_TYPE: &str = "cht";
    pub const PARAM_SIZE: &str = "chs";
    pub const PARAM_PAYLOAD: &str = "chl";
    pub const PARAM_ENCODING: &str = "choe";
    pub const PARAM_ERROR_CORRECTION: &str = "chld";
}

/// Closed value sets accepted by the optional parameters.
pub mod values {
    /// Character encodings the service accepts for the payload.
    pub const ENCODINGS: &[&str] = &["UTF-8", "Shift_JIS", "ISO-8859-1"];

    /// Error-correction levels, from least (L, ~7% recovery) to most (H, ~30%) redundant.
    pub const ERROR_CORRECTION_LEVELS: &[&str] = &["L", "M", "Q", "H"];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint() {
        assert!(urls::CHART_ENDPOINT.starts_with("https://"));
        assert!(!urls::CHART_ENDPOINT.contains('?'));
    }

    #[test]
    fn test_value_tables() {
        assert_eq!(values::ENCODINGS.len(), 3);
        assert!(values::ENCODINGS.contains(&"UTF-8"));
        assert_eq!(values::ERROR_CORRECTION_LEVELS, &["L", "M", "Q", "H"]);
    }

    #[test]
    fn test_wire_names() {
        assert_eq!(wire::CHART_TYPE, "qr");
        assert_eq!(wire::PARAM_SIZE, "chs");
        assert_eq!(wire::PARAM_PAYLOAD, "chl");
    }
}
