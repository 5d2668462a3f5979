//! UI Components for the spa listing form.
//!
//! # Page
//! - [`SpaFormPage`] - owns form and gallery state, handles submit and reset
//! - [`FieldInput`] - one labelled input with its inline error
//!
//! # Images
//! - [`ImagePicker`] - file selection and removable thumbnails
//!
//! # Preview
//! - [`FormPreview`] - live rendering of the typed values
//! - [`Carousel`] - current image, dots and arrows

mod spa_form;
mod image_picker;
mod form_preview;
mod carousel;

pub use spa_form::*;
pub use image_picker::*;
pub use form_preview::*;
pub use carousel::*;
