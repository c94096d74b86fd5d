use leptos::logging;
use platform_host::{HostServices, UploadSource};

use crate::{model::ItemId, reducer::DriveAction, upload::run_upload_batch};

/// Runs one upload batch into `parent_id`, reporting progress and the outcome through `dispatch`.
///
/// `accepts_upload` is checked when the task starts; a batch scheduled behind another one, or
/// before boot hydration, is dropped without dispatching anything. The batch is committed with a
/// single [`DriveAction::UploadCompleted`]; a failed read commits nothing.
pub async fn upload_files(
    services: &HostServices,
    sources: &[Box<dyn UploadSource>],
    parent_id: Option<ItemId>,
    accepts_upload: &dyn Fn() -> bool,
    dispatch: &dyn Fn(DriveAction),
) {
    if !accepts_upload() {
        logging::warn!("upload of {} files dropped: drive is busy", sources.len());
        return;
    }
    dispatch(DriveAction::BeginUpload {
        file_count: sources.len(),
    });
    let outcome = run_upload_batch(sources, parent_id, services.timer.as_ref(), |progress| {
        dispatch(DriveAction::UploadProgressed { progress })
    })
    .await;
    match outcome {
        Ok(items) => {
            logging::log!("uploaded {} files", items.len());
            dispatch(DriveAction::UploadCompleted { items });
        }
        Err(error) => {
            logging::warn!("upload batch failed: {error}");
            dispatch(DriveAction::UploadFailed { error });
        }
    }
}
