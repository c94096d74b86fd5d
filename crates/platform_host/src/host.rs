//! Host strategy and service-bundle models injected into the drive runtime.

use std::rc::Rc;

use crate::{
    ClipboardService, DialogService, DownloadService, InstantTimerService,
    MemoryClipboardService, MemoryDownloadService, MemoryRecordStore, RecordStore,
    ScriptedDialogService, TimerService,
};

/// Host strategy selected for the current build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostStrategy {
    /// Browser APIs (`localStorage`, clipboard, anchors, dialogs, timers).
    Browser,
    /// In-process memory adapters with no browser dependency.
    Headless,
}

impl HostStrategy {
    /// Returns a stable string token for diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Browser => "browser",
            Self::Headless => "headless",
        }
    }
}

/// Service bundle handed to the drive runtime.
///
/// Adapter selection happens before the bundle reaches `drive_runtime`, so the runtime never
/// names a browser type.
#[derive(Clone)]
pub struct HostServices {
    /// Record store holding the persisted registry.
    pub store: Rc<dyn RecordStore>,
    /// Clipboard used for share links.
    pub clipboard: Rc<dyn ClipboardService>,
    /// Client-side file saving.
    pub downloads: Rc<dyn DownloadService>,
    /// Confirmation and name prompts.
    pub dialogs: Rc<dyn DialogService>,
    /// Delay source for the simulated processing phase of uploads.
    pub timer: Rc<dyn TimerService>,
    /// Strategy that produced this bundle.
    pub host_strategy: HostStrategy,
}

/// Memory-backed adapters kept addressable so tests can script and inspect them.
#[derive(Clone, Default)]
pub struct HeadlessHost {
    /// Backing record store.
    pub store: MemoryRecordStore,
    /// Captured clipboard writes.
    pub clipboard: MemoryClipboardService,
    /// Captured downloads.
    pub downloads: MemoryDownloadService,
    /// Scripted dialog answers.
    pub dialogs: ScriptedDialogService,
    /// Instant timer.
    pub timer: InstantTimerService,
}

impl HeadlessHost {
    /// Builds a [`HostServices`] bundle sharing state with these adapters.
    pub fn services(&self) -> HostServices {
        HostServices {
            store: Rc::new(self.store.clone()),
            clipboard: Rc::new(self.clipboard.clone()),
            downloads: Rc::new(self.downloads.clone()),
            dialogs: Rc::new(self.dialogs.clone()),
            timer: Rc::new(self.timer.clone()),
            host_strategy: HostStrategy::Headless,
        }
    }
}
