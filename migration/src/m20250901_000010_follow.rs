use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250901_000001_foodgram_user::FoodgramUser;

static FK_FOLLOW_USER_ID: &str = "fk-follow-user_id";
static FK_FOLLOW_AUTHOR_ID: &str = "fk-follow-author_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Follow::Table)
                    .if_not_exists()
                    .col(integer(Follow::UserId))
                    .col(integer(Follow::AuthorId))
                    .col(timestamp(Follow::CreatedAt))
                    .primary_key(
                        Index::create()
                            .col(Follow::UserId)
                            .col(Follow::AuthorId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_FOLLOW_USER_ID)
                    .from_tbl(Follow::Table)
                    .from_col(Follow::UserId)
                    .to_tbl(FoodgramUser::Table)
                    .to_col(FoodgramUser::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_FOLLOW_AUTHOR_ID)
                    .from_tbl(Follow::Table)
                    .from_col(Follow::AuthorId)
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
                    .name(FK_FOLLOW_AUTHOR_ID)
                    .table(Follow::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_FOLLOW_USER_ID)
                    .table(Follow::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Follow::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Follow {
    Table,
    UserId,
    AuthorId,
    CreatedAt,
}
