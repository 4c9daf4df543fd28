use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Etudiant: lookup by national id (CIN). Not unique: duplicates are tolerated.
        manager
            .create_index(
                Index::create()
                    .name("idx_etudiant_national_id")
                    .table(Etudiant::Table)
                    .col(Etudiant::NationalId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_etudiant_national_id").table(Etudiant::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Etudiant { Table, NationalId }
