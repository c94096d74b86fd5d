//! Typed host-domain contracts shared by the drive runtime and browser adapters.
//!
//! This crate is the boundary between the registry logic and the browser. It defines record
//! storage, clipboard, download, dialog, timer and upload-source traits together with memory
//! and no-op implementations. Concrete browser adapters live in `platform_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod host;
pub mod services;
pub mod storage;
pub mod time;

pub use host::{HeadlessHost, HostServices, HostStrategy};
pub use services::clipboard::{
    ClipboardFuture, ClipboardService, MemoryClipboardService, NoopClipboardService,
};
pub use services::dialogs::{DialogFuture, DialogService, NoopDialogService, ScriptedDialogService};
pub use services::download::{
    DownloadFuture, DownloadService, MemoryDownloadService, NoopDownloadService, SavedDownload,
};
pub use services::timer::{InstantTimerService, TimerFuture, TimerService};
pub use services::upload::{
    encode_data_url, MemoryUploadSource, UploadDescriptor, UploadFuture, UploadSource,
    FALLBACK_MIME_TYPE,
};
pub use storage::record_store::{
    save_record_with, MemoryRecordStore, NoopRecordStore, RecordStore, RecordStoreFuture,
};
pub use time::{
    next_creation_time, next_monotonic_timestamp_ms, unix_time_ms_now, utc_from_unix_ms,
};
