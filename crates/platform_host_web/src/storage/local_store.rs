//! `localStorage`-backed record store.
//!
//! The browser API is synchronous, so each [`RecordStore`] call resolves on first poll.

use platform_host::{RecordStore, RecordStoreFuture};

#[derive(Debug, Clone, Copy, Default)]
/// Browser record store backed by `window.localStorage`.
///
/// Off `wasm32` reads find nothing and writes are dropped.
pub struct WebRecordStore;

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Result<web_sys::Storage, String> {
    web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .ok_or_else(|| "localStorage unavailable".to_string())
}

#[cfg(target_arch = "wasm32")]
fn read_key(key: &str) -> Result<Option<String>, String> {
    local_storage()?
        .get_item(key)
        .map_err(|err| format!("localStorage read of `{key}` failed: {err:?}"))
}

#[cfg(not(target_arch = "wasm32"))]
fn read_key(_key: &str) -> Result<Option<String>, String> {
    Ok(None)
}

// Large data URLs can exhaust the origin quota; the error surfaces as a persist banner.
#[cfg(target_arch = "wasm32")]
fn write_key(key: &str, raw_json: &str) -> Result<(), String> {
    local_storage()?
        .set_item(key, raw_json)
        .map_err(|err| format!("localStorage write of `{key}` failed: {err:?}"))
}

#[cfg(not(target_arch = "wasm32"))]
fn write_key(_key: &str, _raw_json: &str) -> Result<(), String> {
    Ok(())
}

impl RecordStore for WebRecordStore {
    fn load_record<'a>(
        &'a self,
        key: &'a str,
    ) -> RecordStoreFuture<'a, Result<Option<String>, String>> {
        Box::pin(async move { read_key(key) })
    }

    fn save_record<'a>(
        &'a self,
        key: &'a str,
        raw_json: &'a str,
    ) -> RecordStoreFuture<'a, Result<(), String>> {
        Box::pin(async move { write_key(key, raw_json) })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[test]
    fn native_fallback_finds_nothing_and_accepts_writes() {
        let store = WebRecordStore;
        block_on(store.save_record("cloud-drive.files.v1", "[]")).expect("save");
        assert_eq!(
            block_on(store.load_record("cloud-drive.files.v1")).expect("load"),
            None
        );
    }
}
