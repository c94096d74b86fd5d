//! Registry load and persist against a [`RecordStore`].

use leptos::logging;
use platform_host::{save_record_with, RecordStore};

use crate::{
    error::DriveError,
    model::{FileItem, FILES_STORAGE_KEY},
};

/// Parses a persisted registry document.
///
/// # Errors
///
/// Returns the JSON error when the document is not an array of [`FileItem`] records.
pub fn decode_items(raw: &str) -> Result<Vec<FileItem>, serde_json::Error> {
    serde_json::from_str(raw)
}

/// Loads the registry at boot.
///
/// An absent record is an empty registry. A record that fails to parse is logged and also
/// treated as empty; it is overwritten by the next persist.
///
/// # Errors
///
/// Returns [`DriveError::Initialization`] when the store itself cannot be read.
pub async fn load_items(store: &dyn RecordStore) -> Result<Vec<FileItem>, DriveError> {
    let raw = store
        .load_record(FILES_STORAGE_KEY)
        .await
        .map_err(DriveError::Initialization)?;
    let Some(raw) = raw else {
        return Ok(Vec::new());
    };
    match decode_items(&raw) {
        Ok(items) => Ok(items),
        Err(err) => {
            logging::warn!("persisted registry is unreadable, starting empty: {err}");
            Ok(Vec::new())
        }
    }
}

/// Writes the full registry, including an empty one.
///
/// # Errors
///
/// Returns [`DriveError::Persist`] when serialization or the store write fails.
pub async fn persist_items(store: &dyn RecordStore, items: &[FileItem]) -> Result<(), DriveError> {
    save_record_with(store, FILES_STORAGE_KEY, items)
        .await
        .map_err(DriveError::Persist)
}
