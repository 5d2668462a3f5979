//! Form and gallery state owned by the listing page.
//!
//! - [`form`] - field values, validation and submission status
//! - [`gallery`] - selected images and carousel position

pub mod form;
pub mod gallery;

pub use form::*;
pub use gallery::*;
