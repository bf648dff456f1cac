use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::config::AppSettings;
use crate::services::{
    EmailClient, LogOnlyMailer, NotificationDispatcher, RequestLifecycleManager, ResendClient,
    TokenService,
};
use crate::stores::{ItemStore, NotificationStore, RatingStore, RequestStore};

/// Centralized application data following the main-owned stores pattern.
///
/// All dependencies are created once in main.rs and shared across the API
/// structs, so every endpoint sees the same stores and the same lifecycle
/// manager.
pub struct AppData {
    pub db: DatabaseConnection,
    pub settings: AppSettings,
    pub item_store: Arc<ItemStore>,
    pub request_store: Arc<RequestStore>,
    pub notification_store: Arc<NotificationStore>,
    pub rating_store: Arc<RatingStore>,
    pub token_service: Arc<TokenService>,
    pub lifecycle: Arc<RequestLifecycleManager>,
    pub dispatcher: Arc<NotificationDispatcher>,
}

impl AppData {
    /// Wire up stores and services over a connected, migrated database.
    pub fn init(db: DatabaseConnection, settings: AppSettings) -> Self {
        tracing::info!("Initializing AppData...");

        let item_store = Arc::new(ItemStore::new());
        let request_store = Arc::new(RequestStore::new());
        let notification_store = Arc::new(NotificationStore::new());
        let rating_store = Arc::new(RatingStore::new());

        let token_service = Arc::new(TokenService::new(settings.jwt_secret.clone()));

        let lifecycle = Arc::new(RequestLifecycleManager::new(
            db.clone(),
            item_store.clone(),
            request_store.clone(),
            notification_store.clone(),
        ));

        let mailer: Arc<dyn EmailClient> = match &settings.resend_api_key {
            Some(key) => Arc::new(ResendClient::new(key.clone(), settings.mail_from.clone())),
            None => {
                tracing::warn!("RESEND_API_KEY not configured - email will be logged, not sent");
                Arc::new(LogOnlyMailer)
            }
        };

        let dispatcher = Arc::new(NotificationDispatcher::new(
            db.clone(),
            notification_store.clone(),
            mailer,
        ));

        tracing::info!("AppData initialization complete");

        Self {
            db,
            settings,
            item_store,
            request_store,
            notification_store,
            rating_store,
            token_service,
            lifecycle,
            dispatcher,
        }
    }
}
