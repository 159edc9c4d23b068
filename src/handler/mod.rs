mod auth;
pub mod connect;

use std::sync::Arc;

use crate::secrets::SecretStore;

#[derive(Clone)]
pub struct AppState {
    pub secrets: Arc<dyn SecretStore>,
}
