//! # stage-db
//!
//! Persistence layer implementing the stage-core ports with PostgreSQL via
//! SQLx, plus a filesystem media store.
//!
//! ## Overview
//!
//! - Connection pool management
//! - Database models with SQLx `FromRow` derives
//! - Entity <-> Model mappers
//! - Repository implementations
//! - `FsMediaStore` for uploaded media bytes
//!
//! ## Usage
//!
//! ```rust,ignore
//! use stage_common::AppConfig;
//! use stage_db::pool::create_pool;
//! use stage_db::repositories::PgUserRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = AppConfig::from_env()?;
//!     let pool = create_pool(&config.database).await?;
//!     let user_repo = PgUserRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;
pub mod storage;

// Re-export commonly used types
pub use pool::{create_pool, PgPool};
pub use repositories::{PgEventRepository, PgReactableRepository, PgUserRepository};
pub use storage::FsMediaStore;
