use std::sync::Arc;

use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};
use time::Duration;
use tower_sessions::{Expiry, Session};
use tower_sessions_sqlx_store::SqliteStore;

use crate::error::TestError;

/// Isolated environment for a single test.
///
/// Holds an in-memory SQLite database and a session stored in that same database. Both are
/// created on first access and live as long as the context.
pub struct TestContext {
    pub db: Option<DatabaseConnection>,
    pub session: Option<Session>,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    pub fn new() -> Self {
        Self {
            db: None,
            session: None,
        }
    }

    /// Gets or creates the in-memory SQLite database connection.
    ///
    /// # Returns
    /// - `Ok(&DatabaseConnection)` - Connection shared by every later call
    /// - `Err(TestError::Database)` - Failed to open the in-memory database
    pub async fn database(&mut self) -> Result<&DatabaseConnection, TestError> {
        if self.db.is_none() {
            let db = Database::connect("sqlite::memory:").await?;
            self.db = Some(db);
        }

        match self.db {
            Some(ref db) => Ok(db),
            None => Err(sea_orm::DbErr::Custom("database not initialized".to_string()).into()),
        }
    }

    /// Executes the given CREATE TABLE statements in order.
    ///
    /// Called by `TestBuilder::build()`; tables referenced by foreign keys must come first.
    pub async fn with_tables(&mut self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        let db = self.database().await?;

        for stmt in stmts {
            db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Gets or creates a session backed by the test database.
    ///
    /// The first call migrates the session table and creates an empty session with a seven day
    /// inactivity expiry. Later calls return that same session.
    pub async fn session(&mut self) -> Result<&Session, TestError> {
        if self.session.is_none() {
            let db = self.database().await?;

            let store = SqliteStore::new(db.get_sqlite_connection_pool().clone());
            store
                .migrate()
                .await
                .map_err(|e| sea_orm::DbErr::Custom(e.to_string()))?;

            self.session = Some(Session::new(
                None,
                Arc::new(store),
                Some(Expiry::OnInactivity(Duration::days(7))),
            ));
        }

        match self.session {
            Some(ref session) => Ok(session),
            None => Err(sea_orm::DbErr::Custom("session not initialized".to_string()).into()),
        }
    }

    /// Gets or creates both the database and the session.
    ///
    /// Returning both borrows at once avoids holding a mutable borrow of the context across
    /// separate `database()` and `session()` calls.
    pub async fn db_and_session(&mut self) -> Result<(&DatabaseConnection, &Session), TestError> {
        self.session().await?;

        match (&self.db, &self.session) {
            (Some(db), Some(session)) => Ok((db, session)),
            _ => Err(sea_orm::DbErr::Custom("context not initialized".to_string()).into()),
        }
    }
}
