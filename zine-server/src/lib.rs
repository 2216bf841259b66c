pub mod config;
pub mod pages;
pub mod routes;
pub mod session;
pub mod view;

use std::sync::Arc;

use crate::pages::PageRepository;
use crate::session::SessionStore;
use zine_core::generation::GenerationClient;

pub fn get_service_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

pub struct AppState {
    pub sessions: SessionStore,
    pub generation_client: Arc<GenerationClient>,
    pub pages: Arc<dyn PageRepository>,
}
