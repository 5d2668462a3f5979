//! Error types for the spa listing frontend.
//!
//! - [`EncodingError`] - a selected file could not be turned into a preview/payload
//! - [`GalleryError`] - rejected gallery operations
//! - [`SubmitError`] - the listing could not be delivered
//!
//! Missing form fields are not errors: they live in
//! [`crate::ValidationErrors`] and are shown inline.

use thiserror::Error;

// =============================================================================
// Encoding Errors
// =============================================================================

/// Errors while turning a selected file into a [`crate::SelectedImage`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodingError {
    /// The browser refused to create an object URL.
    #[error("Failed to create preview for '{file}': {reason}")]
    Handle { file: String, reason: String },

    /// The file content could not be read.
    #[error("Failed to read '{file}': {reason}")]
    Read { file: String, reason: String },
}

// =============================================================================
// Gallery Errors
// =============================================================================

/// Errors from gallery operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GalleryError {
    /// Index outside `0..len`.
    #[error("Image index {index} out of range (gallery has {len} images)")]
    IndexOutOfRange { index: usize, len: usize },
}

// =============================================================================
// Submission Errors
// =============================================================================

/// Errors while posting the listing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// Request body could not be built.
    #[error("Failed to build request: {0}")]
    Request(String),

    /// Network failure before any response arrived.
    #[error("HTTP request failed: {0}")]
    Network(String),

    /// Endpoint answered with a non-success status.
    #[error("Server error ({status}): {body}")]
    Rejected { status: u16, body: String },
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for encoding operations.
pub type EncodingResult<T> = Result<T, EncodingError>;

/// Result type for gallery operations.
pub type GalleryResult<T> = Result<T, GalleryError>;

/// Result type for submission.
pub type SubmitResult<T> = Result<T, SubmitError>;
