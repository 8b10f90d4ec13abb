//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! The builder pattern allows chaining multiple configuration methods together, with all operations
//! queued and executed during the final `build()` call.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up test environments with database tables and
/// reference data fixtures. Methods can be chained together and finalized with `build()`.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_user_tables: bool,
    include_recipe_tables: bool,

    // Reference data to insert
    tags: Vec<String>,                  // slugs
    ingredients: Vec<(String, String)>, // (name, measurement_unit)
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_user_tables: false,
            include_recipe_tables: false,
            tags: Vec::new(),
            ingredients: Vec::new(),
        }
    }

    /// Add the account tables: FoodgramUser and AuthToken.
    pub fn with_user_tables(mut self) -> Self {
        self.include_user_tables = true;
        self
    }

    /// Add every table of the schema.
    ///
    /// Implies [`with_user_tables`](Self::with_user_tables) and additionally creates Tag,
    /// Ingredient, Recipe, RecipeTag, RecipeIngredient, Favorite, ShoppingCart and Follow.
    pub fn with_recipe_tables(mut self) -> Self {
        self.include_user_tables = true;
        self.include_recipe_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// Generates a CREATE TABLE statement for the entity, which will be executed during `build()`
    /// after the standard table sets. Chain multiple calls to add multiple tables.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use foodgram_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), foodgram_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(Tag)
    ///     .with_table(Ingredient)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a tag with the provided slug during `build()`.
    ///
    /// The tag name is derived from the slug; the Tag table must be created by
    /// `with_recipe_tables` or `with_table`.
    pub fn with_tag(mut self, slug: impl Into<String>) -> Self {
        self.tags.push(slug.into());
        self
    }

    /// Insert an ingredient during `build()`.
    pub fn with_ingredient(
        mut self,
        name: impl Into<String>,
        measurement_unit: impl Into<String>,
    ) -> Self {
        self.ingredients
            .push((name.into(), measurement_unit.into()));
        self
    }

    /// Build the test context by creating all configured tables and fixtures.
    ///
    /// Executes all queued operations in the following order:
    /// 1. Creates database tables (standard sets first, then custom tables)
    /// 2. Inserts reference data fixtures (tags, then ingredients)
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Database table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;

        // 1. Create tables
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        let mut all_tables = Vec::new();

        if self.include_user_tables {
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::FoodgramUser),
                schema.create_table_from_entity(entity::prelude::AuthToken),
            ]);
        }

        if self.include_recipe_tables {
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::Tag),
                schema.create_table_from_entity(entity::prelude::Ingredient),
                schema.create_table_from_entity(entity::prelude::Recipe),
                schema.create_table_from_entity(entity::prelude::RecipeTag),
                schema.create_table_from_entity(entity::prelude::RecipeIngredient),
                schema.create_table_from_entity(entity::prelude::Favorite),
                schema.create_table_from_entity(entity::prelude::ShoppingCart),
                schema.create_table_from_entity(entity::prelude::Follow),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // 2. Insert reference data
        for slug in self.tags {
            setup.recipe().insert_tag(&slug).await?;
        }

        for (name, measurement_unit) in self.ingredients {
            setup
                .recipe()
                .insert_ingredient(&name, &measurement_unit)
                .await?;
        }

        Ok(setup)
    }
}
