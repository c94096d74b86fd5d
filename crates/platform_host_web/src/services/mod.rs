//! Browser implementations of the `platform_host` service contracts.

pub mod clipboard;
pub mod dialogs;
pub mod download;
pub mod timer;
pub mod upload;
