//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod context;
pub mod enrichment;
pub mod error;
pub mod repertoire;
pub mod studio;
pub mod theater;
pub mod user;

// Re-export all services for convenience
pub use context::{ServiceContext, ServiceContextBuilder};
pub use enrichment::Enricher;
pub use error::{ServiceError, ServiceResult};
pub use repertoire::RepertoireService;
pub use studio::StudioService;
pub use theater::TheaterService;
pub use user::UserService;
