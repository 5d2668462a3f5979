//! Test doubles shared by unit tests.

use std::cell::RefCell;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::task::{Context, Poll};

use crate::error::{EncodingError, EncodingResult};
use crate::services::{DisplayHandle, ImageSource, PayloadFormat};
use crate::state::SelectedImage;

/// Counts handles created and released by fakes.
#[derive(Clone, Default)]
pub struct HandleLedger {
    inner: Rc<RefCell<LedgerInner>>,
}

#[derive(Default)]
struct LedgerInner {
    created: usize,
    released: Vec<String>,
}

impl HandleLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle(&self, url: &str) -> DisplayHandle {
        self.inner.borrow_mut().created += 1;
        let inner = self.inner.clone();
        DisplayHandle::new(url, move |url| inner.borrow_mut().released.push(url.to_string()))
    }

    pub fn created(&self) -> usize {
        self.inner.borrow().created
    }

    pub fn released(&self) -> usize {
        self.inner.borrow().released.len()
    }

    pub fn released_urls(&self) -> Vec<String> {
        self.inner.borrow().released.clone()
    }

    /// Build a gallery entry directly, skipping encoding.
    pub fn image(&self, name: &str) -> SelectedImage {
        let handle = self.handle(&format!("blob:test/{}", name));
        SelectedImage::new(name, handle, PayloadFormat::Base64.encode("", name.as_bytes()))
    }
}

/// In-memory file with controllable failures and completion delay.
pub struct FakeImage {
    ledger: HandleLedger,
    name: String,
    bytes: Option<Vec<u8>>,
    handle_ok: bool,
    delay: usize,
}

impl FakeImage {
    pub fn new(ledger: &HandleLedger, name: &str, bytes: &[u8]) -> Self {
        Self {
            ledger: ledger.clone(),
            name: name.to_string(),
            bytes: Some(bytes.to_vec()),
            handle_ok: true,
            delay: 0,
        }
    }

    pub fn unreadable(ledger: &HandleLedger, name: &str) -> Self {
        Self { bytes: None, ..Self::new(ledger, name, b"") }
    }

    pub fn without_handle(ledger: &HandleLedger, name: &str) -> Self {
        Self { handle_ok: false, ..Self::new(ledger, name, b"") }
    }

    /// Make the read pend `polls` times before completing.
    pub fn delayed(mut self, polls: usize) -> Self {
        self.delay = polls;
        self
    }
}

impl ImageSource for FakeImage {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn mime_type(&self) -> String {
        "image/jpeg".to_string()
    }

    fn create_handle(&self) -> EncodingResult<DisplayHandle> {
        if !self.handle_ok {
            return Err(EncodingError::Handle {
                file: self.name.clone(),
                reason: "refused".into(),
            });
        }
        Ok(self.ledger.handle(&format!("blob:test/{}", self.name)))
    }

    fn read_bytes(&self) -> impl Future<Output = EncodingResult<Vec<u8>>> {
        let name = self.name.clone();
        let bytes = self.bytes.clone();
        let delay = self.delay;
        async move {
            YieldFor(delay).await;
            bytes.ok_or(EncodingError::Read {
                file: name,
                reason: "unreadable".into(),
            })
        }
    }
}

/// Pends `n` times, waking itself each time.
struct YieldFor(usize);

impl Future for YieldFor {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.0 == 0 {
            return Poll::Ready(());
        }
        self.0 -= 1;
        cx.waker().wake_by_ref();
        Poll::Pending
    }
}
