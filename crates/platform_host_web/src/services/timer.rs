//! `setTimeout`-backed delay adapter.

use platform_host::{TimerFuture, TimerService};

#[derive(Debug, Clone, Copy, Default)]
/// Browser timer adapter yielding to the event loop.
pub struct WebTimerService;

impl TimerService for WebTimerService {
    fn sleep_ms(&self, ms: u32) -> TimerFuture<'_> {
        Box::pin(async move {
            #[cfg(target_arch = "wasm32")]
            {
                let promise = js_sys::Promise::new(&mut |resolve, _reject| {
                    let scheduled = web_sys::window().map(|w| {
                        w.set_timeout_with_callback_and_timeout_and_arguments_0(
                            &resolve,
                            i32::try_from(ms).unwrap_or(i32::MAX),
                        )
                    });
                    if !matches!(scheduled, Some(Ok(_))) {
                        let _ = resolve.call0(&wasm_bindgen::JsValue::UNDEFINED);
                    }
                });
                let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
            }

            #[cfg(not(target_arch = "wasm32"))]
            {
                let _ = ms;
            }
        })
    }
}
