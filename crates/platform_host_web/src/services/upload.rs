//! Upload sources backed by files picked through an `<input type="file" multiple>`.

use platform_host::{UploadDescriptor, UploadFuture, UploadSource, FALLBACK_MIME_TYPE};

#[cfg(target_arch = "wasm32")]
use futures::channel::oneshot;
#[cfg(target_arch = "wasm32")]
use std::{cell::RefCell, rc::Rc};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};

#[derive(Debug, Clone)]
/// One browser [`web_sys::File`] waiting to be read.
pub struct WebUploadSource {
    file: web_sys::File,
}

impl WebUploadSource {
    /// Wraps a picked file.
    pub fn new(file: web_sys::File) -> Self {
        Self { file }
    }
}

impl UploadSource for WebUploadSource {
    fn descriptor(&self) -> UploadDescriptor {
        let mime_type = self.file.type_();
        UploadDescriptor {
            name: self.file.name(),
            mime_type: if mime_type.is_empty() {
                FALLBACK_MIME_TYPE.to_string()
            } else {
                mime_type
            },
            size: self.file.size().max(0.0) as u64,
        }
    }

    fn read_data_url(&self) -> UploadFuture<'_, Result<String, String>> {
        Box::pin(async move { read_file_as_data_url(&self.file).await })
    }
}

/// Collects every file of a picker `FileList` in picker order.
pub fn upload_sources_from_file_list(files: &web_sys::FileList) -> Vec<WebUploadSource> {
    (0..files.length())
        .filter_map(|idx| files.get(idx))
        .map(WebUploadSource::new)
        .collect()
}

/// Collects the files currently selected in a file input.
pub fn upload_sources_from_input(input: &web_sys::HtmlInputElement) -> Vec<WebUploadSource> {
    input
        .files()
        .map(|files| upload_sources_from_file_list(&files))
        .unwrap_or_default()
}

#[cfg(target_arch = "wasm32")]
async fn read_file_as_data_url(file: &web_sys::File) -> Result<String, String> {
    let reader = web_sys::FileReader::new().map_err(|err| format!("{err:?}"))?;
    let (tx, rx) = oneshot::channel::<Result<String, String>>();
    let sender = Rc::new(RefCell::new(Some(tx)));

    let reader_for_load = reader.clone();
    let load_sender = sender.clone();
    let on_load = Closure::<dyn FnMut(web_sys::ProgressEvent)>::wrap(Box::new(move |_| {
        let result = reader_for_load
            .result()
            .map_err(|err| format!("failed to read file: {err:?}"))
            .and_then(|value| {
                value
                    .as_string()
                    .ok_or_else(|| "file reader returned non-string result".to_string())
            });
        if let Some(tx) = load_sender.borrow_mut().take() {
            let _ = tx.send(result);
        }
    }));
    reader.set_onload(Some(on_load.as_ref().unchecked_ref()));

    let error_sender = sender.clone();
    let file_name = file.name();
    let on_error = Closure::<dyn FnMut(web_sys::ProgressEvent)>::wrap(Box::new(move |_| {
        if let Some(tx) = error_sender.borrow_mut().take() {
            let _ = tx.send(Err(format!("failed to read {file_name}")));
        }
    }));
    reader.set_onerror(Some(on_error.as_ref().unchecked_ref()));

    reader
        .read_as_data_url(file)
        .map_err(|err| format!("failed to start file read: {err:?}"))?;

    let result = rx
        .await
        .map_err(|_| "file read was interrupted".to_string())?;
    reader.set_onload(None);
    reader.set_onerror(None);
    drop(on_load);
    drop(on_error);
    result
}

#[cfg(not(target_arch = "wasm32"))]
async fn read_file_as_data_url(file: &web_sys::File) -> Result<String, String> {
    let _ = file;
    Err("file reading is only available when compiled for wasm32".to_string())
}
