mod cli;

use crate::App;

use std::sync::Arc;
use std::time::Duration;

use gp_session::{MemorySlot, MockAuthBackend, SessionStore};

/// App over an in-memory slot with no simulated latency.
pub(crate) fn create_app(slot: &MemorySlot) -> App {
    let backend = Arc::new(MockAuthBackend::with_default_credentials(Duration::ZERO));
    App::new(SessionStore::initialize(backend, Arc::new(slot.clone())))
}
