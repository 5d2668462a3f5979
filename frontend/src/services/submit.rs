//! HTTP service posting a listing to the endpoint.

use std::future::Future;

use gloo_net::http::Request;

use crate::error::{SubmitError, SubmitResult};
use crate::services::notify::Notifier;
use crate::state::{Gallery, ListingForm};
use crate::types::{Notice, SubmissionRequest, SubmitStatus};

/// Delivers a request body somewhere.
pub trait ListingTransport {
    fn post(&self, request: &SubmissionRequest) -> impl Future<Output = SubmitResult<()>>;
}

/// JSON POST to the listing endpoint with `gloo-net`.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    url: String,
}

impl HttpTransport {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl ListingTransport for HttpTransport {
    fn post(&self, request: &SubmissionRequest) -> impl Future<Output = SubmitResult<()>> {
        let built = Request::post(&self.url)
            .header("Content-Type", "application/json")
            .json(request)
            .map_err(|e| SubmitError::Request(e.to_string()));

        async move {
            let response = built?
                .send()
                .await
                .map_err(|e| SubmitError::Network(e.to_string()))?;

            if !response.ok() {
                let body = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Unknown error".to_string());
                return Err(SubmitError::Rejected {
                    status: response.status(),
                    body,
                });
            }
            Ok(())
        }
    }
}

/// Send one request and tell the user how it went.
pub async fn deliver<T, N>(request: &SubmissionRequest, transport: &T, notifier: &N) -> SubmitResult<()>
where
    T: ListingTransport,
    N: Notifier,
{
    log::info!(
        "📤 Submitting '{}' with {} image(s)...",
        request.listing.spa_name,
        request.images.len()
    );

    let result = transport.post(request).await;
    match &result {
        Ok(()) => {
            log::info!("✅ Listing submitted");
            notifier.notify(&Notice::Submitted);
        }
        Err(e) => {
            log::error!("❌ Submission failed: {}", e);
            notifier.notify(&Notice::SubmitFailed(e.to_string()));
        }
    }
    result
}

/// Validate, post and record the outcome in one go.
///
/// Components holding the form in a signal run the same three steps
/// themselves so no borrow is kept across the await.
pub async fn submit_listing<T, N>(
    form: &mut ListingForm,
    gallery: &Gallery,
    transport: &T,
    notifier: &N,
) -> SubmitStatus
where
    T: ListingTransport,
    N: Notifier,
{
    let Some(request) = form.begin_submit(gallery) else {
        return form.status().clone();
    };

    let result = deliver(&request, transport, notifier).await;
    form.complete_submit(&result);
    form.status().clone()
}
