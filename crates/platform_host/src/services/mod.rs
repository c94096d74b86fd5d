//! Browser-capability service contracts used by the drive runtime.

pub mod clipboard;
pub mod dialogs;
pub mod download;
pub mod timer;
pub mod upload;
