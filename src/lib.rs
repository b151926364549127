// ABOUTME: Client library for the Google Chart API QR endpoint
// ABOUTME: Validates request parameters, fetches rendered QR symbols, decodes them to images

//! Build, validate, and issue a request against the Google Chart API QR
//! endpoint, returning the rendered symbol as a decoded [`image::DynamicImage`].
//!
//! ```no_run
//! use qrchart::{QrFetcher, QrParameters};
//!
//! # fn main() -> qrchart::Result<()> {
//! let mut params = QrParameters::new();
//! params.set_size("400x400")?;
//! params.set_payload("Hello spaces World");
//! params.set_encoding("UTF-8")?;
//! params.set_error_correction("H")?;
//!
//! let qr = QrFetcher::new()?.fetch(&params)?;
//! println!("{}x{}", qr.width(), qr.height());
//! # Ok(())
//! # }
//! ```

pub mod constants;
pub mod error;
pub mod fetcher;
pub mod params;

pub use error::QrChartError;
pub use fetcher::QrFetcher;
pub use params::{ChartParameters, QrParameters};

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, QrChartError>;
