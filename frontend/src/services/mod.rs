//! Browser and network services.
//!
//! # Services
//!
//! - [`handles`] - object URLs for image previews, released on drop
//! - [`encoding`] - file batches to base64 payloads
//! - [`submit`] - listing POST to the endpoint
//! - [`notify`] - blocking alerts for the user

pub mod handles;
pub mod encoding;
pub mod submit;
pub mod notify;

pub use handles::DisplayHandle;
pub use encoding::*;
pub use submit::*;
pub use notify::*;
