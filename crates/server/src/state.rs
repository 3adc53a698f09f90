use std::sync::Arc;

use service::store::StoreService;

/// Shared handler state; cheap to clone per request.
#[derive(Clone)]
pub struct AppState {
    pub stores: Arc<dyn StoreService>,
}

impl AppState {
    pub fn new(stores: Arc<dyn StoreService>) -> Self { Self { stores } }
}
