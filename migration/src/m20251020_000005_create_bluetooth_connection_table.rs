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
                    .table(BluetoothConnection::Table)
                    .if_not_exists()
                    .col(pk_auto(BluetoothConnection::Id))
                    .col(integer(BluetoothConnection::UserId))
                    .col(integer(BluetoothConnection::MotorbikeId))
                    .col(timestamp_with_time_zone(BluetoothConnection::ConnectedAt))
                    .col(timestamp_with_time_zone_null(
                        BluetoothConnection::DisconnectedAt,
                    ))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bluetooth_connection_user_id")
                            .from(BluetoothConnection::Table, BluetoothConnection::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bluetooth_connection_motorbike_id")
                            .from(BluetoothConnection::Table, BluetoothConnection::MotorbikeId)
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
                    .name("idx_bluetooth_connection_motorbike_id")
                    .table(BluetoothConnection::Table)
                    .col(BluetoothConnection::MotorbikeId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BluetoothConnection::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BluetoothConnection {
    Table,
    Id,
    UserId,
    MotorbikeId,
    ConnectedAt,
    DisconnectedAt,
}
