use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20250901_000005_recipe::Recipe,
    m20250901_000001_foodgram_user::FoodgramUser,
};

static FK_FAVORITE_USER_ID: &str = "fk-favorite-user_id";
static FK_FAVORITE_RECIPE_ID: &str = "fk-favorite-recipe_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Favorite::Table)
                    .if_not_exists()
                    .col(integer(Favorite::UserId))
                    .col(integer(Favorite::RecipeId))
                    .col(timestamp(Favorite::CreatedAt))
                    .primary_key(
                        Index::create()
                            .col(Favorite::UserId)
                            .col(Favorite::RecipeId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_FAVORITE_USER_ID)
                    .from_tbl(Favorite::Table)
                    .from_col(Favorite::UserId)
                    .to_tbl(FoodgramUser::Table)
                    .to_col(FoodgramUser::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_FAVORITE_RECIPE_ID)
                    .from_tbl(Favorite::Table)
                    .from_col(Favorite::RecipeId)
                    .to_tbl(Recipe::Table)
                    .to_col(Recipe::Id)
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
                    .name(FK_FAVORITE_RECIPE_ID)
                    .table(Favorite::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_FAVORITE_USER_ID)
                    .table(Favorite::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Favorite::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Favorite {
    Table,
    UserId,
    RecipeId,
    CreatedAt,
}
