use sea_orm::DatabaseConnection;

use crate::server::util::pdf::ShoppingListRenderer;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub shopping_list: ShoppingListRenderer,
}

/// Builds state with the default built-in font, used by tests
impl From<DatabaseConnection> for AppState {
    fn from(db: DatabaseConnection) -> Self {
        Self {
            db,
            shopping_list: ShoppingListRenderer::default(),
        }
    }
}
