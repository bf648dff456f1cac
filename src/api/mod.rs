// API layer - HTTP endpoints
pub mod health;
pub mod helpers;
pub mod items;
pub mod ratings;
pub mod requests;

pub use health::HealthApi;
pub use items::ItemsApi;
pub use ratings::RatingsApi;
pub use requests::RequestsApi;
