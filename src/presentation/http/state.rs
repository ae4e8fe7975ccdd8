// src/presentation/http/state.rs
use crate::application::services::ApplicationServices;
use std::sync::Arc;

#[derive(Clone)]
pub struct HttpState {
    pub services: Arc<ApplicationServices>,
    pub allowed_origins: Arc<[String]>,
}

impl HttpState {
    pub fn new(services: Arc<ApplicationServices>, allowed_origins: Vec<String>) -> Self {
        Self {
            services,
            allowed_origins: allowed_origins.into(),
        }
    }
}
