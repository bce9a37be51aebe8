use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::completion::CompletionClient;

#[derive(Clone)]
pub struct AppState {
    pub orm: DatabaseConnection,
    pub completion: Arc<dyn CompletionClient>,
}
