//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources needed by
//! the request handlers. The state is initialized once during startup and then cloned for
//! each request handler through Axum's state extraction.

use sea_orm::DatabaseConnection;

use crate::server::service::bee::policy::BeeCreationPolicy;

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone: `DatabaseConnection` is a connection pool whose clones
/// share the pool, and the policy is a small `Copy` value.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Rules every new bee is validated against.
    pub bee_policy: BeeCreationPolicy,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `bee_policy` - Bee creation rules loaded from configuration
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection, bee_policy: BeeCreationPolicy) -> Self {
        Self { db, bee_policy }
    }
}
