//! Listing form state: field values, inline errors, submission status.

use std::collections::BTreeMap;

use crate::error::SubmitResult;
use crate::state::Gallery;
use crate::types::{SpaField, SpaListing, SubmissionRequest, SubmitStatus};

/// Inline messages for fields that failed the last validation pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<SpaField, String>);

impl ValidationErrors {
    pub fn get(&self, field: SpaField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: SpaField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = SpaField> + '_ {
        self.0.keys().copied()
    }
}

/// Check every required field. Whitespace-only counts as empty.
pub fn validate(listing: &SpaListing) -> ValidationErrors {
    ValidationErrors(
        SpaField::ALL
            .into_iter()
            .filter(|field| listing.get(*field).trim().is_empty())
            .map(|field| (field, field.required_message()))
            .collect(),
    )
}

/// Controller owning everything the user typed.
#[derive(Clone, Debug, Default)]
pub struct ListingForm {
    listing: SpaListing,
    errors: ValidationErrors,
    status: SubmitStatus,
}

impl ListingForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn listing(&self) -> &SpaListing {
        &self.listing
    }

    pub fn value(&self, field: SpaField) -> &str {
        self.listing.get(field)
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn error(&self, field: SpaField) -> Option<&str> {
        self.errors.get(field)
    }

    pub fn status(&self) -> &SubmitStatus {
        &self.status
    }

    /// Overwrite a value. Errors are left alone until the next validation.
    pub fn set_field(&mut self, field: SpaField, value: impl Into<String>) {
        self.listing.set(field, value.into());
    }

    /// Recompute errors from scratch; `true` when the form is valid.
    pub fn validate(&mut self) -> bool {
        self.errors = validate(&self.listing);
        self.errors.is_empty()
    }

    /// Validate and, when valid, build the request body and enter `Submitting`.
    ///
    /// Returns `None` when validation fails or a submission is already in
    /// flight; in both cases no network call must be made.
    pub fn begin_submit(&mut self, gallery: &Gallery) -> Option<SubmissionRequest> {
        if self.status.is_submitting() {
            log::warn!("⚠️ Submission already in progress");
            return None;
        }

        if !self.validate() {
            log::info!("Listing has {} missing field(s)", self.errors.len());
            self.status = SubmitStatus::Idle;
            return None;
        }

        self.status = SubmitStatus::Submitting;
        Some(SubmissionRequest {
            listing: self.listing.clone(),
            images: gallery.payloads(),
        })
    }

    /// Record the outcome of the network call.
    pub fn complete_submit(&mut self, result: &SubmitResult<()>) {
        self.status = match result {
            Ok(()) => SubmitStatus::Succeeded,
            Err(e) => SubmitStatus::Failed(e.to_string()),
        };
    }

    /// Clear values, errors and status; `false` while a submission is in flight.
    pub fn reset(&mut self) -> bool {
        if self.status.is_submitting() {
            log::warn!("⚠️ Cannot reset while a submission is in progress");
            return false;
        }
        *self = Self::default();
        true
    }
}
