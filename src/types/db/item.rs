use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "items")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: ItemCategory,
    pub condition: ItemCondition,
    pub postcode: String,
    pub city: String,
    pub image_url: Option<String>,
    pub contact_name: String,
    pub contact_phone: String,
    pub contact_email: String,

    // Owning user
    pub user_id: String,

    // The one mutable field driving marketplace visibility. Only the
    // lifecycle manager writes it after creation.
    pub status: ItemStatus,

    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::request::Entity")]
    Request,
}

impl Related<super::request::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Request.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Marketplace visibility status of an item.
///
/// Canonical vocabulary; the legacy spellings "Requested" and "Taken" are
/// rewritten to "Reserved" and "Collected" by a data migration.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, poem_openapi::Enum,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum ItemStatus {
    #[sea_orm(string_value = "Available")]
    Available,
    #[sea_orm(string_value = "Reserved")]
    Reserved,
    #[sea_orm(string_value = "Collected")]
    Collected,
    #[sea_orm(string_value = "Expired")]
    Expired,
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, poem_openapi::Enum,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum ItemCategory {
    #[sea_orm(string_value = "Books")]
    Books,
    #[sea_orm(string_value = "Appliances")]
    Appliances,
    #[sea_orm(string_value = "Furniture")]
    Furniture,
    #[sea_orm(string_value = "Others")]
    Others,
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, poem_openapi::Enum,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum ItemCondition {
    #[sea_orm(string_value = "New")]
    New,
    #[sea_orm(string_value = "Good")]
    Good,
    #[sea_orm(string_value = "Fair")]
    Fair,
    #[sea_orm(string_value = "Damaged")]
    Damaged,
}
