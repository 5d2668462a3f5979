//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **Form Types** - field names and listing values
//! - **API Types** - request body sent to the listing endpoint
//! - **Status Types** - submission state and user notices

use serde::Serialize;

use crate::config::{CURRENCY_SYMBOL, NOT_SPECIFIED};

// =============================================================================
// Form Types
// =============================================================================

/// One of the five required listing fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SpaField {
    SpaName,
    City,
    Area,
    Price,
    Timing,
}

impl SpaField {
    /// All fields, in form order.
    pub const ALL: [SpaField; 5] = [
        SpaField::SpaName,
        SpaField::City,
        SpaField::Area,
        SpaField::Price,
        SpaField::Timing,
    ];

    /// Name used in the request body and as the input `name`.
    pub fn key(&self) -> &'static str {
        match self {
            SpaField::SpaName => "spa_name",
            SpaField::City => "city",
            SpaField::Area => "area",
            SpaField::Price => "price",
            SpaField::Timing => "timing",
        }
    }

    /// Label shown next to the input and in the preview.
    pub fn label(&self) -> &'static str {
        match self {
            SpaField::SpaName => "Spa Name",
            SpaField::City => "City",
            SpaField::Area => "Area",
            SpaField::Price => "Price",
            SpaField::Timing => "Timing",
        }
    }

    /// HTML input type.
    pub fn input_type(&self) -> &'static str {
        match self {
            SpaField::Price => "number",
            SpaField::Timing => "time",
            _ => "text",
        }
    }

    /// Inline message when the field is left empty.
    pub fn required_message(&self) -> String {
        let noun = match self {
            SpaField::SpaName => "Spa name",
            other => other.label(),
        };
        format!("{} is required", noun)
    }
}

/// Raw values of the listing form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SpaListing {
    pub spa_name: String,
    pub city: String,
    pub area: String,
    pub price: String,
    pub timing: String,
}

impl SpaListing {
    pub fn get(&self, field: SpaField) -> &str {
        match field {
            SpaField::SpaName => &self.spa_name,
            SpaField::City => &self.city,
            SpaField::Area => &self.area,
            SpaField::Price => &self.price,
            SpaField::Timing => &self.timing,
        }
    }

    pub fn set(&mut self, field: SpaField, value: String) {
        let slot = match field {
            SpaField::SpaName => &mut self.spa_name,
            SpaField::City => &mut self.city,
            SpaField::Area => &mut self.area,
            SpaField::Price => &mut self.price,
            SpaField::Timing => &mut self.timing,
        };
        *slot = value;
    }

    /// Text shown for `field` in the live preview.
    pub fn display(&self, field: SpaField) -> String {
        let value = self.get(field);
        if value.is_empty() {
            return NOT_SPECIFIED.to_string();
        }
        match field {
            SpaField::Price => format!("{}{}", CURRENCY_SYMBOL, value),
            _ => value.to_string(),
        }
    }
}

// =============================================================================
// API Types
// =============================================================================

/// JSON body posted to the listing endpoint.
///
/// Serializes as `{ spa_name, city, area, price, timing, images: [...] }`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SubmissionRequest {
    #[serde(flatten)]
    pub listing: SpaListing,
    /// Encoded payloads in gallery order
    pub images: Vec<String>,
}

// =============================================================================
// Status Types
// =============================================================================

/// Where the form is in its submission lifecycle.
///
/// Validation runs synchronously when a submission starts, so there is
/// no separate "validating" state: a failed validation leaves the form
/// `Idle` with errors populated.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed(String),
}

impl SubmitStatus {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmitStatus::Submitting)
    }
}

/// User-visible notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    /// Listing accepted by the endpoint
    Submitted,
    /// Listing could not be delivered
    SubmitFailed(String),
    /// A file batch could not be encoded
    EncodingFailed(String),
}

impl Notice {
    pub fn message(&self) -> String {
        match self {
            Notice::Submitted => "Form submitted successfully!".to_string(),
            Notice::SubmitFailed(e) => format!("Error submitting form: {}", e),
            Notice::EncodingFailed(e) => format!("Error processing images: {}", e),
        }
    }
}
