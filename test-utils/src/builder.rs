use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for test contexts with a chosen set of tables.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::User;
///
/// let test = TestBuilder::new().with_table(User).build().await?;
/// ```
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds the table for `entity`, generated with the SQLite backend.
    ///
    /// Tables are created in the order they are added, so referenced tables go first.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds every table the backend uses: User, Bee, BeeMember and Mission.
    pub fn with_bee_tables(self) -> Self {
        self.with_table(User)
            .with_table(Bee)
            .with_table(BeeMember)
            .with_table(Mission)
    }

    /// Opens the in-memory database and creates the configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with all tables ready
    /// - `Err(TestError::Database)` - Failed to connect or to create a table
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut context = TestContext::new();

        context.with_tables(self.tables).await?;

        Ok(context)
    }
}
