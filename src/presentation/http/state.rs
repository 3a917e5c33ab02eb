// src/presentation/http/state.rs
use crate::application::services::ApplicationServices;
use crate::presentation::http::middleware::AccessPolicy;
use std::sync::Arc;

#[derive(Clone)]
pub struct HttpState {
    pub services: Arc<ApplicationServices>,
    pub access: Arc<AccessPolicy>,
}

impl HttpState {
    pub fn new(services: Arc<ApplicationServices>, access: AccessPolicy) -> Self {
        Self {
            services,
            access: Arc::new(access),
        }
    }
}
