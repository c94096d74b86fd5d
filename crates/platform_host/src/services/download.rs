//! Client-side download contracts.

use std::{cell::RefCell, future::Future, pin::Pin, rc::Rc};

/// Object-safe boxed future used by [`DownloadService`] async methods.
pub type DownloadFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Host service that hands a data URL to the user agent as a saved file.
pub trait DownloadService {
    /// Saves `data_url` under `file_name`.
    fn save_data_url<'a>(
        &'a self,
        file_name: &'a str,
        data_url: &'a str,
    ) -> DownloadFuture<'a, Result<(), String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Download adapter for hosts without a save surface.
pub struct NoopDownloadService;

impl DownloadService for NoopDownloadService {
    fn save_data_url<'a>(
        &'a self,
        _file_name: &'a str,
        _data_url: &'a str,
    ) -> DownloadFuture<'a, Result<(), String>> {
        Box::pin(async { Err("downloads unavailable".to_string()) })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One download captured by [`MemoryDownloadService`].
pub struct SavedDownload {
    /// Suggested file name.
    pub file_name: String,
    /// Data URL handed to the host.
    pub data_url: String,
}

#[derive(Debug, Clone, Default)]
/// In-memory download sink for tests and headless builds.
pub struct MemoryDownloadService {
    saved: Rc<RefCell<Vec<SavedDownload>>>,
}

impl MemoryDownloadService {
    /// Returns every captured download in order.
    pub fn saved(&self) -> Vec<SavedDownload> {
        self.saved.borrow().clone()
    }
}

impl DownloadService for MemoryDownloadService {
    fn save_data_url<'a>(
        &'a self,
        file_name: &'a str,
        data_url: &'a str,
    ) -> DownloadFuture<'a, Result<(), String>> {
        Box::pin(async move {
            self.saved.borrow_mut().push(SavedDownload {
                file_name: file_name.to_string(),
                data_url: data_url.to_string(),
            });
            Ok(())
        })
    }
}
