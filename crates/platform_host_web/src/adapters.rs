use std::rc::Rc;

use platform_host::{HostServices, HostStrategy};

use crate::{
    WebClipboardService, WebDialogService, WebDownloadService, WebRecordStore, WebTimerService,
};

/// Returns the host strategy compiled into this build.
pub const fn selected_host_strategy() -> HostStrategy {
    HostStrategy::Browser
}

/// Assembles the browser service bundle consumed by the drive runtime.
pub fn build_host_services() -> HostServices {
    HostServices {
        store: Rc::new(WebRecordStore),
        clipboard: Rc::new(WebClipboardService),
        downloads: Rc::new(WebDownloadService),
        dialogs: Rc::new(WebDialogService),
        timer: Rc::new(WebTimerService),
        host_strategy: selected_host_strategy(),
    }
}
