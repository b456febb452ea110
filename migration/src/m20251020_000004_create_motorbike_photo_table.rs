use sea_orm_migration::{prelude::*, schema::*};

use super::m20251020_000003_create_motorbike_table::Motorbike;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MotorbikePhoto::Table)
                    .if_not_exists()
                    .col(pk_auto(MotorbikePhoto::Id))
                    .col(integer(MotorbikePhoto::MotorbikeId))
                    .col(string(MotorbikePhoto::PhotoUrl))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_motorbike_photo_motorbike_id")
                            .from(MotorbikePhoto::Table, MotorbikePhoto::MotorbikeId)
                            .to(Motorbike::Table, Motorbike::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MotorbikePhoto::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MotorbikePhoto {
    Table,
    Id,
    MotorbikeId,
    PhotoUrl,
}
