use leptos::logging;
use platform_host::HostServices;

use crate::{model::ItemId, persistence, reducer::DriveAction};

/// Loads the persisted registry and hydrates the runtime.
///
/// A store failure raises an initialization banner and hydrates an empty registry. A starting
/// folder, when given, is applied after hydration so breadcrumbs resolve against loaded records.
pub async fn hydrate_registry(
    services: &HostServices,
    initial_folder: Option<ItemId>,
    dispatch: &dyn Fn(DriveAction),
) {
    let items = match persistence::load_items(services.store.as_ref()).await {
        Ok(items) => items,
        Err(error) => {
            logging::warn!("registry boot load failed: {error}");
            dispatch(DriveAction::ReportError { error });
            Vec::new()
        }
    };
    logging::log!(
        "drive hydrated with {} records via {} host",
        items.len(),
        services.host_strategy.as_str()
    );
    dispatch(DriveAction::Hydrate { items });
    if initial_folder.is_some() {
        dispatch(DriveAction::Navigate {
            folder: initial_folder,
        });
    }
}
