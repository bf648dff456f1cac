use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create items table
        manager
            .create_table(
                Table::create()
                    .table(Items::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Items::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Items::Title).string().not_null())
                    .col(ColumnDef::new(Items::Description).string().not_null())
                    .col(ColumnDef::new(Items::Category).string().not_null())
                    .col(ColumnDef::new(Items::Condition).string().not_null())
                    .col(ColumnDef::new(Items::Postcode).string().not_null())
                    .col(ColumnDef::new(Items::City).string().not_null())
                    .col(ColumnDef::new(Items::ImageUrl).string())
                    .col(ColumnDef::new(Items::ContactName).string().not_null())
                    .col(ColumnDef::new(Items::ContactPhone).string().not_null())
                    .col(ColumnDef::new(Items::ContactEmail).string().not_null())
                    .col(ColumnDef::new(Items::UserId).string().not_null())
                    .col(ColumnDef::new(Items::Status).string().not_null())
                    .col(ColumnDef::new(Items::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Items::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // Browse pages always filter on status, dashboards on user_id
        manager
            .create_index(
                Index::create()
                    .name("idx_items_status")
                    .table(Items::Table)
                    .col(Items::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_items_user_id")
                    .table(Items::Table)
                    .col(Items::UserId)
                    .to_owned(),
            )
            .await?;

        // Create requests table
        manager
            .create_table(
                Table::create()
                    .table(Requests::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Requests::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Requests::ItemId).string().not_null())
                    .col(ColumnDef::new(Requests::RequesterId).string().not_null())
                    .col(ColumnDef::new(Requests::RequesterName).string().not_null())
                    .col(ColumnDef::new(Requests::RequesterEmail).string().not_null())
                    .col(ColumnDef::new(Requests::Message).string().not_null())
                    .col(ColumnDef::new(Requests::PreferredContact).string().not_null())
                    .col(ColumnDef::new(Requests::Status).string().not_null())
                    .col(ColumnDef::new(Requests::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Requests::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_requests_item_id")
                            .from(Requests::Table, Requests::ItemId)
                            .to(Items::Table, Items::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Sibling reconciliation scans requests by (item_id, status)
        manager
            .create_index(
                Index::create()
                    .name("idx_requests_item_id")
                    .table(Requests::Table)
                    .col(Requests::ItemId)
                    .col(Requests::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_requests_requester_id")
                    .table(Requests::Table)
                    .col(Requests::RequesterId)
                    .to_owned(),
            )
            .await?;

        // Create ratings table
        manager
            .create_table(
                Table::create()
                    .table(Ratings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Ratings::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Ratings::ItemId).string().not_null())
                    .col(ColumnDef::new(Ratings::RaterId).string().not_null())
                    .col(ColumnDef::new(Ratings::Rating).integer().not_null())
                    .col(ColumnDef::new(Ratings::Comment).string())
                    .col(ColumnDef::new(Ratings::TransactionType).string().not_null())
                    .col(ColumnDef::new(Ratings::CreatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ratings_item_id")
                            .from(Ratings::Table, Ratings::ItemId)
                            .to(Items::Table, Items::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Ratings::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Requests::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Items::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(Iden)]
enum Items {
    Table,
    Id,
    Title,
    Description,
    Category,
    Condition,
    Postcode,
    City,
    ImageUrl,
    ContactName,
    ContactPhone,
    ContactEmail,
    UserId,
    Status,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Requests {
    Table,
    Id,
    ItemId,
    RequesterId,
    RequesterName,
    RequesterEmail,
    Message,
    PreferredContact,
    Status,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Ratings {
    Table,
    Id,
    ItemId,
    RaterId,
    Rating,
    Comment,
    TransactionType,
    CreatedAt,
}
