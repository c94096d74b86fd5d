//! Dialog adapter over `window.confirm` and `window.prompt`.

use platform_host::{DialogFuture, DialogService};

#[derive(Debug, Clone, Copy, Default)]
/// Browser dialog adapter. Dialogs block the page, which matches the single-action flow.
pub struct WebDialogService;

impl DialogService for WebDialogService {
    fn confirm<'a>(&'a self, message: &'a str) -> DialogFuture<'a, bool> {
        Box::pin(async move {
            #[cfg(target_arch = "wasm32")]
            {
                web_sys::window()
                    .and_then(|w| w.confirm_with_message(message).ok())
                    .unwrap_or(false)
            }

            #[cfg(not(target_arch = "wasm32"))]
            {
                let _ = message;
                false
            }
        })
    }

    fn prompt<'a>(&'a self, message: &'a str) -> DialogFuture<'a, Option<String>> {
        Box::pin(async move {
            #[cfg(target_arch = "wasm32")]
            {
                web_sys::window().and_then(|w| w.prompt_with_message(message).ok().flatten())
            }

            #[cfg(not(target_arch = "wasm32"))]
            {
                let _ = message;
                None
            }
        })
    }
}
