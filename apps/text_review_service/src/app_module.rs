use std::sync::Arc;

use crate::text::{text_repository::TextRepository, text_service::TextService};

#[derive(Clone)]
pub struct AppService {
    pub text_service: TextService,
}

impl AppService {
    pub fn new(repository: Arc<dyn TextRepository>) -> Self {
        let text_service = TextService::new(repository);

        Self { text_service }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub service: AppService,
}

impl AppState {
    pub fn new(repository: Arc<dyn TextRepository>) -> Self {
        Self {
            service: AppService::new(repository),
        }
    }

    pub async fn shutdown(&self) {
        self.service.text_service.close().await;
    }
}
