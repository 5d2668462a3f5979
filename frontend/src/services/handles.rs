//! Display handles for locally selected images.
//!
//! A [`DisplayHandle`] owns one object URL. The URL is revoked when the
//! handle is dropped, so removing an image, clearing the gallery or
//! unmounting the page all release it through the same path.

use std::fmt;

use wasm_bindgen::JsValue;
use web_sys::{Blob, Url};

use crate::error::{EncodingError, EncodingResult};

type Release = Box<dyn FnOnce(&str)>;

/// Session-scoped URL that renders a local file as an image.
pub struct DisplayHandle {
    url: String,
    release: Option<Release>,
}

impl DisplayHandle {
    /// Wrap an already created URL; `release` runs once when the handle drops.
    pub fn new(url: impl Into<String>, release: impl FnOnce(&str) + 'static) -> Self {
        Self {
            url: url.into(),
            release: Some(Box::new(release)),
        }
    }

    /// Create an object URL for `blob` with `URL.createObjectURL`.
    pub fn for_blob(blob: &Blob, file_name: &str) -> EncodingResult<Self> {
        let url = Url::create_object_url_with_blob(blob).map_err(|e| EncodingError::Handle {
            file: file_name.to_string(),
            reason: js_error_text(&e),
        })?;

        Ok(Self::new(url, |url| {
            if let Err(e) = Url::revoke_object_url(url) {
                log::warn!("Could not revoke {}: {:?}", url, e);
            }
        }))
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Drop for DisplayHandle {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release(&self.url);
        }
    }
}

impl fmt::Debug for DisplayHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DisplayHandle").field("url", &self.url).finish()
    }
}

/// Best-effort text of a JS exception.
pub(crate) fn js_error_text(value: &JsValue) -> String {
    js_sys::Reflect::get(value, &"message".into())
        .ok()
        .and_then(|v| v.as_string())
        .or_else(|| value.as_string())
        .unwrap_or_else(|| "Unknown JS error".to_string())
}
