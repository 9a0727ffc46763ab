//! # stage-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

pub use services::{
    Enricher, RepertoireService, ServiceContext, ServiceContextBuilder, ServiceError,
    ServiceResult, StudioService, TheaterService, UserService,
};
