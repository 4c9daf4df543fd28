//! Create `etudiant` table.
//!
//! One row per dormitory student; `id` is assigned by the database.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Etudiant::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Etudiant::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(string_len(Etudiant::LastName, 255).not_null())
                    .col(string_len(Etudiant::FirstName, 255).not_null())
                    .col(big_integer(Etudiant::NationalId).not_null())
                    .col(ColumnDef::new(Etudiant::BirthDate).date().null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Etudiant::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Etudiant { Table, Id, LastName, FirstName, NationalId, BirthDate }
