//! Transient error notices that clear themselves.

use crate::state::ViewState;
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Show `message` and arm a timer that clears it after `delay`, unless a
/// newer notice (or a dismiss) has bumped the generation in the meantime.
pub fn notify(state: &Arc<Mutex<ViewState>>, message: String, delay: Duration) -> JoinHandle<()> {
    log::warn!("[NOTES] {}", message);
    let generation = state.lock().set_notice(message);

    let state = Arc::clone(state);
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        if state.lock().expire_notice(generation) {
            log::debug!("[NOTES] Notice #{} cleared", generation);
        }
    })
}
