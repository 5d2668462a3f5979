//! Turning selected files into gallery entries.
//!
//! Every file yields a [`DisplayHandle`] for the preview and a base64
//! payload for the request body. A batch resolves only once every file
//! is done, in input order, so the gallery can append it in one step.

use std::future::Future;

use base64::{engine::general_purpose, Engine as _};
use futures::future::try_join_all;
use wasm_bindgen_futures::JsFuture;
use web_sys::File;

use crate::error::{EncodingError, EncodingResult};
use crate::services::handles::{js_error_text, DisplayHandle};
use crate::state::SelectedImage;

/// MIME type used when the browser reports none.
const FALLBACK_MIME: &str = "application/octet-stream";

/// A file picked by the user.
pub trait ImageSource {
    fn name(&self) -> String;

    /// MIME type as reported by the browser, possibly empty.
    fn mime_type(&self) -> String;

    /// Acquire a display handle for the preview.
    fn create_handle(&self) -> EncodingResult<DisplayHandle>;

    /// Read the whole file content.
    fn read_bytes(&self) -> impl Future<Output = EncodingResult<Vec<u8>>>;
}

impl ImageSource for File {
    fn name(&self) -> String {
        File::name(self)
    }

    fn mime_type(&self) -> String {
        self.type_()
    }

    fn create_handle(&self) -> EncodingResult<DisplayHandle> {
        DisplayHandle::for_blob(self, &File::name(self))
    }

    fn read_bytes(&self) -> impl Future<Output = EncodingResult<Vec<u8>>> {
        let file = self.clone();
        async move {
            let buffer = JsFuture::from(file.array_buffer())
                .await
                .map_err(|e| EncodingError::Read {
                    file: file.name(),
                    reason: js_error_text(&e),
                })?;
            Ok(js_sys::Uint8Array::new(&buffer).to_vec())
        }
    }
}

/// Text form of an image in the request body.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PayloadFormat {
    /// `data:<mime>;base64,<content>`, what a data-URL file reader yields
    DataUrl,
    /// Bare base64 content
    Base64,
}

impl PayloadFormat {
    pub fn encode(self, mime_type: &str, bytes: &[u8]) -> String {
        let encoded = general_purpose::STANDARD.encode(bytes);
        match self {
            PayloadFormat::DataUrl => {
                let mime = if mime_type.is_empty() { FALLBACK_MIME } else { mime_type };
                format!("data:{};base64,{}", mime, encoded)
            }
            PayloadFormat::Base64 => encoded,
        }
    }
}

async fn encode_one<S: ImageSource>(source: &S, format: PayloadFormat) -> EncodingResult<SelectedImage> {
    let handle = source.create_handle()?;
    let bytes = source.read_bytes().await?;
    let payload = format.encode(&source.mime_type(), &bytes);
    Ok(SelectedImage::new(source.name(), handle, payload))
}

/// Encode a whole batch of files.
///
/// All-or-nothing: the first failure fails the batch, and handles already
/// acquired for it are released before this returns.
pub async fn encode_batch<S: ImageSource>(
    sources: &[S],
    format: PayloadFormat,
) -> EncodingResult<Vec<SelectedImage>> {
    if sources.is_empty() {
        return Ok(Vec::new());
    }

    let batch = try_join_all(sources.iter().map(|source| encode_one(source, format))).await?;
    log::debug!("🖼️ Encoded {} image(s)", batch.len());
    Ok(batch)
}
