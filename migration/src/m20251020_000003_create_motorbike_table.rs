use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Motorbike::Table)
                    .if_not_exists()
                    .col(pk_auto(Motorbike::Id))
                    .col(string_len(Motorbike::Model, 100))
                    .col(double(Motorbike::LocationLatitude))
                    .col(double(Motorbike::LocationLongitude))
                    .col(string_len(Motorbike::Status, 20).default("available"))
                    .col(string_len(Motorbike::LockStatus, 20).default("locked"))
                    .col(
                        timestamp_with_time_zone(Motorbike::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Motorbike::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_with_time_zone_null(Motorbike::DeletedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_motorbike_status")
                    .table(Motorbike::Table)
                    .col(Motorbike::Status)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Motorbike::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Motorbike {
    Table,
    Id,
    Model,
    LocationLatitude,
    LocationLongitude,
    Status,
    LockStatus,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
