use sea_orm::DatabaseConnection;

use crate::server::{config::Config, error::Error, util::pdf::ShoppingListRenderer};

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Build the shopping list renderer, embedding the configured font if any
pub fn build_shopping_list_renderer(config: &Config) -> Result<ShoppingListRenderer, Error> {
    match &config.shopping_list_font_path {
        Some(path) => {
            tracing::info!("Using shopping list font {}", path);
            ShoppingListRenderer::with_font_file(path)
        }
        None => Ok(ShoppingListRenderer::default()),
    }
}
