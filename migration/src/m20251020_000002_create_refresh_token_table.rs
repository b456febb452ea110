use sea_orm_migration::{prelude::*, schema::*};

use super::m20251020_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RefreshToken::Table)
                    .if_not_exists()
                    .col(string_len(RefreshToken::TokenId, 36).primary_key())
                    .col(integer(RefreshToken::UserId))
                    .col(integer(RefreshToken::Role))
                    .col(timestamp_with_time_zone(RefreshToken::ExpiresAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_refresh_token_user_id")
                            .from(RefreshToken::Table, RefreshToken::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RefreshToken::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum RefreshToken {
    Table,
    TokenId,
    UserId,
    Role,
    ExpiresAt,
}
