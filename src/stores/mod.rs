// Stores layer - Data access and repository pattern
pub mod item_store;
pub mod notification_store;
pub mod rating_store;
pub mod request_store;

pub use item_store::ItemStore;
pub use notification_store::NotificationStore;
pub use rating_store::RatingStore;
pub use request_store::{NewRequest, RequestStore};
