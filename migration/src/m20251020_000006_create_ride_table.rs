use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20251020_000001_create_user_table::User, m20251020_000003_create_motorbike_table::Motorbike,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Ride::Table)
                    .if_not_exists()
                    .col(pk_auto(Ride::Id))
                    .col(integer(Ride::UserId))
                    .col(integer(Ride::MotorbikeId))
                    .col(timestamp_with_time_zone(Ride::StartTime))
                    .col(timestamp_with_time_zone_null(Ride::EndTime))
                    .col(string(Ride::Duration).default("0"))
                    .col(double(Ride::Cost).default(0.0))
                    .col(string_null(Ride::PhotoPath))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ride_user_id")
                            .from(Ride::Table, Ride::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ride_motorbike_id")
                            .from(Ride::Table, Ride::MotorbikeId)
                            .to(Motorbike::Table, Motorbike::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_ride_start_time")
                    .table(Ride::Table)
                    .col(Ride::StartTime)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Ride::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Ride {
    Table,
    Id,
    UserId,
    MotorbikeId,
    StartTime,
    EndTime,
    Duration,
    Cost,
    PhotoPath,
}
