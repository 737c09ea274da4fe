use std::sync::Arc;

use store::FeedStore;

use crate::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn FeedStore>,
    pub config: AppConfig,
}
