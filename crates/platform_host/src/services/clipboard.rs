//! Clipboard host-service contracts.

use std::{
    cell::{Cell, RefCell},
    future::Future,
    pin::Pin,
    rc::Rc,
};

/// Object-safe boxed future used by [`ClipboardService`] async methods.
pub type ClipboardFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Host service for writing plain text to the system clipboard.
pub trait ClipboardService {
    /// Writes `text` to the clipboard.
    fn write_text<'a>(&'a self, text: &'a str) -> ClipboardFuture<'a, Result<(), String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Clipboard adapter for hosts without clipboard access. Every write is rejected.
pub struct NoopClipboardService;

impl ClipboardService for NoopClipboardService {
    fn write_text<'a>(&'a self, _text: &'a str) -> ClipboardFuture<'a, Result<(), String>> {
        Box::pin(async { Err("clipboard unavailable".to_string()) })
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory clipboard that remembers every accepted write.
pub struct MemoryClipboardService {
    writes: Rc<RefCell<Vec<String>>>,
    denied: Rc<Cell<bool>>,
}

impl MemoryClipboardService {
    /// Returns all accepted writes in order.
    pub fn writes(&self) -> Vec<String> {
        self.writes.borrow().clone()
    }

    /// Rejects subsequent writes as if clipboard permission were denied.
    pub fn deny(&self) {
        self.denied.set(true);
    }
}

impl ClipboardService for MemoryClipboardService {
    fn write_text<'a>(&'a self, text: &'a str) -> ClipboardFuture<'a, Result<(), String>> {
        Box::pin(async move {
            if self.denied.get() {
                return Err("clipboard write denied".to_string());
            }
            self.writes.borrow_mut().push(text.to_string());
            Ok(())
        })
    }
}
