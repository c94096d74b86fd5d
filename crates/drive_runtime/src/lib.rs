//! Browser-local simulated cloud drive.
//!
//! The registry is a flat list of [`FileItem`] records mirrored to one `localStorage` key. State
//! changes go through [`reduce_drive`]; side effects are emitted as [`DriveEffect`] values and run
//! by the host layer against injected [`platform_host::HostServices`].

pub mod components;
mod effect_executor;
pub mod error;
pub mod format;
pub mod host;
pub mod model;
pub mod persistence;
pub mod reducer;
pub mod registry;
mod runtime_context;
pub mod share;
pub mod upload;

pub use components::{use_drive_runtime, DriveProvider, DriveRuntimeContext, DriveShell};
pub use error::DriveError;
pub use format::{format_created_at, format_file_size, FileCategory};
pub use model::*;
pub use persistence::{load_items, persist_items};
pub use reducer::{reduce_drive, DriveAction, DriveEffect, ReducerError};
pub use registry::{breadcrumbs, find_item, list_items, parent_cursor, usage_summary, UsageSummary};
pub use share::share_link;
pub use upload::{run_upload_batch, UploadPhase, UploadProgress};
