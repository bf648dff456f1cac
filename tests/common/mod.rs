// Common test utilities for integration tests

#![allow(dead_code)]

use std::sync::Arc;

use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};

use reusela_backend::services::RequestLifecycleManager;
use reusela_backend::stores::{ItemStore, NotificationStore, RatingStore, RequestStore};
use reusela_backend::types::db::item;
use reusela_backend::types::db::request::PreferredContact;
use reusela_backend::types::dto::items::CreateItemRequest;
use reusela_backend::types::dto::requests::CreateRequestRequest;
use reusela_backend::types::internal::RequestContext;

pub struct TestEnv {
    pub db: DatabaseConnection,
    pub items: Arc<ItemStore>,
    pub requests: Arc<RequestStore>,
    pub notifications: Arc<NotificationStore>,
    pub ratings: Arc<RatingStore>,
    pub lifecycle: RequestLifecycleManager,
}

/// Creates an in-memory test database with migrations applied and the full
/// store/lifecycle wiring over it.
pub async fn setup() -> TestEnv {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    let items = Arc::new(ItemStore::new());
    let requests = Arc::new(RequestStore::new());
    let notifications = Arc::new(NotificationStore::new());
    let ratings = Arc::new(RatingStore::new());

    let lifecycle = RequestLifecycleManager::new(
        db.clone(),
        items.clone(),
        requests.clone(),
        notifications.clone(),
    );

    TestEnv {
        db,
        items,
        requests,
        notifications,
        ratings,
        lifecycle,
    }
}

pub fn ctx(user_id: &str) -> RequestContext {
    RequestContext::new(user_id)
}

pub fn item_input(title: &str) -> CreateItemRequest {
    CreateItemRequest {
        title: title.to_string(),
        description: format!("{} in good shape, pickup only", title),
        category: item::ItemCategory::Furniture,
        condition: item::ItemCondition::Good,
        postcode: "47300".to_string(),
        city: "Petaling Jaya".to_string(),
        image_url: None,
        contact_name: "Ben Owner".to_string(),
        contact_phone: "0123456789".to_string(),
        contact_email: "owner@example.com".to_string(),
    }
}

/// Insert an Available item owned by `owner_id`
pub async fn seed_item(env: &TestEnv, owner_id: &str, title: &str) -> item::Model {
    env.items
        .insert(&env.db, owner_id, &item_input(title))
        .await
        .expect("Failed to seed item")
}

pub fn request_input(item_id: &str, requester_name: &str) -> CreateRequestRequest {
    CreateRequestRequest {
        item_id: item_id.to_string(),
        message: "Hi, I would love to pick this up this weekend.".to_string(),
        preferred_contact: PreferredContact::Email,
        requester_name: requester_name.to_string(),
        requester_email: format!("{}@example.com", requester_name.to_lowercase()),
    }
}
