//! Application configuration.
//!
//! Centralized configuration for the spa listing frontend.
//! Values are compile-time constants; the endpoint can be overridden
//! at build time with `SPA_SUBMIT_URL=... trunk build`.

use crate::services::PayloadFormat;

/// Listing endpoint receiving the JSON submission.
pub const SUBMIT_URL: &str = match option_env!("SPA_SUBMIT_URL") {
    Some(url) => url,
    None => "http://localhost:3000/api/spas",
};

/// Advisory filter for the native file picker.
///
/// Browsers may still let the user pick any file.
pub const ACCEPTED_IMAGE_TYPES: &str = "image/*";

/// How selected images are encoded in the request body.
pub const PAYLOAD_FORMAT: PayloadFormat = PayloadFormat::DataUrl;

/// Prefix shown before the price in the live preview.
pub const CURRENCY_SYMBOL: &str = "₹";

/// Placeholder for empty fields in the live preview.
pub const NOT_SPECIFIED: &str = "Not specified";
