//! Effect-queue executor for reducer-emitted side effects.

use leptos::*;

use crate::runtime_context::DriveRuntimeContext;

/// Installs the effect executor that drains reducer-emitted effects in order.
pub fn install(runtime: DriveRuntimeContext) {
    // Clear the queue before running so effects dispatched from inside a run start a new batch.
    create_effect(move |_| {
        let queued = runtime.effects.get();
        if queued.is_empty() {
            return;
        }

        runtime.effects.set(Vec::new());

        let host = runtime.host.get_value();
        for effect in queued {
            host.run_drive_effect(runtime, effect);
        }
    });
}
