//! Spa Listing - Frontend Rust/Leptos Application
//!
//! A WebAssembly form for submitting a spa listing with a live preview
//! and a carousel of the selected images.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  SpaFormPage (owns ListingForm + Gallery signals)            │
//! │  ├── FieldInput × 5                                          │
//! │  ├── ImagePicker (file input, thumbnails)                    │
//! │  └── FormPreview                                             │
//! │      └── Carousel (when images selected)                     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Common types (SpaField, SpaListing, SubmissionRequest, etc.)
//! - [`state`] - Form controller and image gallery
//! - [`components`] - UI components
//! - [`services`] - Object URLs, encoding, HTTP submission, alerts

use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod error;
pub mod types;
pub mod state;
pub mod components;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Errors
pub use error::{
    EncodingError, EncodingResult,
    GalleryError, GalleryResult,
    SubmitError, SubmitResult,
};

// Types
pub use types::{
    // Form
    SpaField, SpaListing,
    // API
    SubmissionRequest,
    // Status
    SubmitStatus, Notice,
};

// State
pub use state::{
    CarouselView, Direction, Gallery, ListingForm, SelectedImage, ValidationErrors,
};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// WASM entry point - called automatically by trunk.
#[wasm_bindgen(start)]
pub fn main() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🧖 Spa Listing - Starting Leptos App");

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Spa Listing"/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=SpaFormPage/>
                </Routes>
            </main>
        </Router>
    }
}
