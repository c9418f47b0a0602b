//! Morning Bees Test Utils
//!
//! Shared testing utilities for the Morning Bees backend. The crate provides a builder for test
//! contexts backed by in-memory SQLite databases, entity factories, and helpers for minting
//! social login tokens.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing database connection and session
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Entity factories with sensible defaults
//! - **log**: Capture of formatted tracing output for asserting on log lines
//! - **token**: Unsigned Google-style access tokens for social login tests
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn joins_bee() -> Result<(), TestError> {
//!     let mut test = TestBuilder::new().with_bee_tables().build().await?;
//!     let db = test.database().await?;
//!
//!     let (manager, bee) = factory::helpers::create_bee_with_manager(db).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod log;
pub mod token;
