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
                    .table(Map::Table)
                    .if_not_exists()
                    .col(pk_auto(Map::Id))
                    .col(integer_uniq(Map::MotorbikeId))
                    .col(string_len(Map::Name, 255))
                    .col(string_len(Map::Description, 500))
                    .col(double(Map::Latitude))
                    .col(double(Map::Longitude))
                    .col(integer(Map::ZoomLevel).default(12))
                    .col(string_len(Map::MapType, 50))
                    .col(
                        timestamp_with_time_zone(Map::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Map::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_map_motorbike_id")
                            .from(Map::Table, Map::MotorbikeId)
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
            .drop_table(Table::drop().table(Map::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Map {
    Table,
    Id,
    MotorbikeId,
    Name,
    Description,
    Latitude,
    Longitude,
    ZoomLevel,
    MapType,
    CreatedAt,
    UpdatedAt,
}
