use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    /// Rewrites the legacy item status spellings to the canonical vocabulary.
    ///
    /// Earlier revisions of the schema used "Requested" and "Taken"; the
    /// canonical values are "Reserved" and "Collected". Rows written under the
    /// old vocabulary are rewritten in place so the typed status enum can
    /// decode every row.
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let conn = manager.get_connection();
        conn.execute_unprepared("UPDATE items SET status = 'Reserved' WHERE status = 'Requested'")
            .await?;
        conn.execute_unprepared("UPDATE items SET status = 'Collected' WHERE status = 'Taken'")
            .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let conn = manager.get_connection();
        conn.execute_unprepared("UPDATE items SET status = 'Requested' WHERE status = 'Reserved'")
            .await?;
        conn.execute_unprepared("UPDATE items SET status = 'Taken' WHERE status = 'Collected'")
            .await?;
        Ok(())
    }
}
