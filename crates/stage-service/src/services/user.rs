//! User service
//!
//! Account sign-up and lookup.

use tracing::{info, instrument};

use stage_core::entities::User;
use stage_core::value_objects::Id;
use validator::Validate;

use crate::dto::{CreateUserRequest, UserResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new user from a device
    #[instrument(skip(self, request))]
    pub async fn create_user(&self, request: CreateUserRequest) -> ServiceResult<UserResponse> {
        request.validate()?;

        let mut user = User::new(
            Id::default(),
            request.first_name,
            request.last_name,
            request.device_id,
        );
        user.id = self.ctx.user_repo().create(&user).await?;

        info!(user = %user.id, "Registered user");
        Ok(UserResponse::from(&user))
    }

    /// Fetch a user by ID
    #[instrument(skip(self))]
    pub async fn get_user(&self, user_id: Id) -> ServiceResult<UserResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;
        Ok(UserResponse::from(&user))
    }
}
