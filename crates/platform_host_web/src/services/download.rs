//! Download adapter that clicks a transient `<a download>` element.

use platform_host::{DownloadFuture, DownloadService};

#[derive(Debug, Clone, Copy, Default)]
/// Browser download adapter.
pub struct WebDownloadService;

impl DownloadService for WebDownloadService {
    fn save_data_url<'a>(
        &'a self,
        file_name: &'a str,
        data_url: &'a str,
    ) -> DownloadFuture<'a, Result<(), String>> {
        Box::pin(async move {
            #[cfg(target_arch = "wasm32")]
            {
                use wasm_bindgen::JsCast;

                let document = web_sys::window()
                    .and_then(|w| w.document())
                    .ok_or_else(|| "document unavailable".to_string())?;
                let anchor = document
                    .create_element("a")
                    .map_err(|err| format!("failed to create download anchor: {err:?}"))?
                    .dyn_into::<web_sys::HtmlAnchorElement>()
                    .map_err(|_| "failed to cast download anchor".to_string())?;
                anchor.set_href(data_url);
                anchor.set_download(file_name);
                anchor.set_hidden(true);
                let body = document
                    .body()
                    .ok_or_else(|| "document body unavailable".to_string())?;
                body.append_child(&anchor)
                    .map_err(|err| format!("failed to attach download anchor: {err:?}"))?;
                anchor.click();
                anchor.remove();
                Ok(())
            }

            #[cfg(not(target_arch = "wasm32"))]
            {
                let _ = (file_name, data_url);
                Err("downloads are only available when compiled for wasm32".to_string())
            }
        })
    }
}
