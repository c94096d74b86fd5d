//! Failure classification for user-facing drive operations.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Failures surfaced to the user through the banner. None of them is retried.
pub enum DriveError {
    /// The boot-time registry load could not reach storage.
    #[error("Failed to initialize storage: {0}")]
    Initialization(String),
    /// A file in an upload batch could not be read; the rest of the batch was abandoned.
    #[error("Failed to upload {name}: {reason}")]
    UploadRead {
        /// File that failed.
        name: String,
        /// Host-reported reason.
        reason: String,
    },
    /// The host refused to save a download.
    #[error("Failed to download {name}: {reason}")]
    Download {
        /// File being saved.
        name: String,
        /// Host-reported reason.
        reason: String,
    },
    /// Writing the registry back to storage failed.
    #[error("Failed to save changes: {0}")]
    Persist(String),
}
