// Data transfer objects - API request/response models
pub mod common;
pub mod items;
pub mod ratings;
pub mod requests;
