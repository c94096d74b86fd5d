//! Clipboard adapter backed by the async Clipboard API.

use platform_host::{ClipboardFuture, ClipboardService};

#[derive(Debug, Clone, Copy, Default)]
/// Browser clipboard adapter using `navigator.clipboard.writeText`.
pub struct WebClipboardService;

impl ClipboardService for WebClipboardService {
    fn write_text<'a>(&'a self, text: &'a str) -> ClipboardFuture<'a, Result<(), String>> {
        Box::pin(async move {
            #[cfg(target_arch = "wasm32")]
            {
                use wasm_bindgen::{JsCast, JsValue};

                let window = web_sys::window().ok_or_else(|| "window unavailable".to_string())?;
                // The typed Clipboard binding is gated behind `web_sys_unstable_apis`.
                let navigator = window.navigator();
                let key = JsValue::from_str("clipboard");
                let clipboard = js_sys::Reflect::get(navigator.as_ref(), &key)
                    .map_err(|err| format!("clipboard lookup failed: {err:?}"))?;
                if clipboard.is_undefined() || clipboard.is_null() {
                    return Err("clipboard API unavailable".to_string());
                }
                let write_text = js_sys::Reflect::get(&clipboard, &JsValue::from_str("writeText"))
                    .map_err(|err| format!("clipboard lookup failed: {err:?}"))?
                    .dyn_into::<js_sys::Function>()
                    .map_err(|_| "clipboard.writeText is not callable".to_string())?;
                let promise = write_text
                    .call1(&clipboard, &JsValue::from_str(text))
                    .map_err(|err| format!("clipboard write failed: {err:?}"))?
                    .dyn_into::<js_sys::Promise>()
                    .map_err(|_| "clipboard write returned a non-promise".to_string())?;
                wasm_bindgen_futures::JsFuture::from(promise)
                    .await
                    .map(|_| ())
                    .map_err(|err| format!("clipboard write rejected: {err:?}"))
            }

            #[cfg(not(target_arch = "wasm32"))]
            {
                let _ = text;
                Err("clipboard is only available when compiled for wasm32".to_string())
            }
        })
    }
}
