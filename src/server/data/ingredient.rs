use migration::{Expr, ExprTrait, Func, LikeExpr};
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::server::model::db::IngredientModel;

pub struct IngredientRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> IngredientRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Lists ingredients ordered by name
    ///
    /// When `name_prefix` is provided only ingredients whose name starts with it,
    /// ignoring case, are returned.
    pub async fn get_all(&self, name_prefix: Option<&str>) -> Result<Vec<IngredientModel>, DbErr> {
        let mut query = entity::prelude::Ingredient::find();

        if let Some(prefix) = name_prefix {
            let pattern = format!("{}%", escape_like(&prefix.to_lowercase()));
            query = query.filter(
                Expr::expr(Func::lower(Expr::col(entity::ingredient::Column::Name)))
                    .like(LikeExpr::new(pattern).escape('\\')),
            );
        }

        query
            .order_by_asc(entity::ingredient::Column::Name)
            .order_by_asc(entity::ingredient::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_by_id(&self, ingredient_id: i32) -> Result<Option<IngredientModel>, DbErr> {
        entity::prelude::Ingredient::find_by_id(ingredient_id)
            .one(self.db)
            .await
    }

    /// Retrieves ingredients by ID, missing IDs are skipped
    pub async fn get_many_by_ids(
        &self,
        ingredient_ids: &[i32],
    ) -> Result<Vec<IngredientModel>, DbErr> {
        if ingredient_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Ingredient::find()
            .filter(entity::ingredient::Column::Id.is_in(ingredient_ids.to_vec()))
            .all(self.db)
            .await
    }
}

/// Escapes LIKE wildcards so the prefix matches literally
fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
