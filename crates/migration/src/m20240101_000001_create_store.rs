//! Create `store` table.
//!
//! `id` is assigned by the database on insert. `name` is unbounded text.
use sea_orm_migration::{prelude::*, schema::*};
#[derive(DeriveMigrationName)]
pub struct Migration;

pub(crate) fn create_store_table() -> TableCreateStatement {
    Table::create()
        .table(Store::Table)
        .if_not_exists()
        .col(pk_auto(Store::Id))
        .col(text(Store::Name).not_null())
        .to_owned()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.create_table(create_store_table()).await
    }
    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Store::Table).to_owned()).await
    }
}
#[derive(DeriveIden)]
enum Store { Table, Id, Name }

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn postgres_name_column_is_unbounded_text() {
        let sql = create_store_table().to_string(PostgresQueryBuilder);
        assert!(sql.contains(r#""name" text"#), "{sql}");
        assert!(!sql.to_lowercase().contains("varchar"), "{sql}");
    }
}
