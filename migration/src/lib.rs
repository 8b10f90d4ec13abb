pub use sea_orm_migration::prelude::*;

mod m20250901_000001_foodgram_user;
mod m20250901_000002_auth_token;
mod m20250901_000003_tag;
mod m20250901_000004_ingredient;
mod m20250901_000005_recipe;
mod m20250901_000006_recipe_tag;
mod m20250901_000007_recipe_ingredient;
mod m20250901_000008_favorite;
mod m20250901_000009_shopping_cart;
mod m20250901_000010_follow;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250901_000001_foodgram_user::Migration),
            Box::new(m20250901_000002_auth_token::Migration),
            Box::new(m20250901_000003_tag::Migration),
            Box::new(m20250901_000004_ingredient::Migration),
            Box::new(m20250901_000005_recipe::Migration),
            Box::new(m20250901_000006_recipe_tag::Migration),
            Box::new(m20250901_000007_recipe_ingredient::Migration),
            Box::new(m20250901_000008_favorite::Migration),
            Box::new(m20250901_000009_shopping_cart::Migration),
            Box::new(m20250901_000010_follow::Migration),
        ]
    }
}
