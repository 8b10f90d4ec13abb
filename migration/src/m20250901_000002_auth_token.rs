use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250901_000001_foodgram_user::FoodgramUser;

static FK_AUTH_TOKEN_USER_ID: &str = "fk-auth_token-user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AuthToken::Table)
                    .if_not_exists()
                    .col(string_len(AuthToken::Key, 40).primary_key())
                    .col(integer_uniq(AuthToken::UserId))
                    .col(timestamp(AuthToken::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_AUTH_TOKEN_USER_ID)
                    .from_tbl(AuthToken::Table)
                    .from_col(AuthToken::UserId)
                    .to_tbl(FoodgramUser::Table)
                    .to_col(FoodgramUser::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_AUTH_TOKEN_USER_ID)
                    .table(AuthToken::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(AuthToken::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum AuthToken {
    Table,
    Key,
    UserId,
    CreatedAt,
}
