//! Browser (`wasm32`) implementations of [`platform_host`] service contracts.
//!
//! Every adapter compiles on native targets too. Off `wasm32` they fall back to empty reads and
//! explicit "unavailable" errors so the workspace builds and tests without a browser.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Compile-time host-strategy selection and the browser service bundle.
pub mod adapters;
pub mod services;
pub mod storage;

pub use adapters::{build_host_services, selected_host_strategy};
pub use services::clipboard::WebClipboardService;
pub use services::dialogs::WebDialogService;
pub use services::download::WebDownloadService;
pub use services::timer::WebTimerService;
pub use services::upload::{
    upload_sources_from_file_list, upload_sources_from_input, WebUploadSource,
};
pub use storage::local_store::WebRecordStore;
