//! Application state for the HTTP server.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::binding::Dashboard;

/// Shared application state passed to all handlers.
///
/// The dashboard holds the immutable dataset behind an `Arc` plus the one
/// piece of mutable state in the process, the control values. The lock is
/// held only for the duration of a synchronous recomputation.
#[derive(Clone)]
pub struct AppState {
    pub dashboard: Arc<RwLock<Dashboard>>,
}

impl AppState {
    /// Create a new application state wrapping the given dashboard.
    pub fn new(dashboard: Dashboard) -> Self {
        Self {
            dashboard: Arc::new(RwLock::new(dashboard)),
        }
    }
}
