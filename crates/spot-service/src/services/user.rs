//! User service
//!
//! Profile rows are created lazily the first time a verified user reads or
//! updates their profile.

use spot_core::entities::{ProfileChanges, UserProfile};
use spot_core::value_objects::UserId;
use spot_core::DomainError;
use tracing::{info, instrument};

use crate::dto::{ProfileResponse, UpdateProfileRequest, UserResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Full profile row of the caller
    #[instrument(skip(self))]
    pub async fn get_user(&self, user_id: UserId) -> ServiceResult<UserResponse> {
        let profile = self.get_user_entity(user_id).await?;
        Ok(UserResponse::from(&profile))
    }

    /// Public profile fields of the caller
    #[instrument(skip(self))]
    pub async fn get_profile(&self, user_id: UserId) -> ServiceResult<ProfileResponse> {
        let profile = self.get_user_entity(user_id).await?;
        Ok(ProfileResponse::from(&profile))
    }

    /// Get the profile entity, creating it on first sight
    #[instrument(skip(self))]
    pub async fn get_user_entity(&self, user_id: UserId) -> ServiceResult<UserProfile> {
        Ok(self.ctx.user_repo().ensure(user_id).await?)
    }

    /// Update username and bio; usernames are unique across profiles
    #[instrument(skip(self))]
    pub async fn update_profile(
        &self,
        user_id: UserId,
        request: UpdateProfileRequest,
    ) -> ServiceResult<ProfileResponse> {
        if let Some(username) = request.username.as_deref() {
            if self
                .ctx
                .user_repo()
                .username_taken_by_other(username, user_id)
                .await?
            {
                return Err(DomainError::UsernameTaken.into());
            }
        }

        self.ctx.user_repo().ensure(user_id).await?;

        let profile = self
            .ctx
            .user_repo()
            .update_profile(
                user_id,
                ProfileChanges {
                    username: request.username,
                    bio: request.bio,
                },
            )
            .await?
            .ok_or(DomainError::UserNotFound(user_id))?;

        info!(user_id = %user_id, "User profile updated");
        Ok(ProfileResponse::from(&profile))
    }
}
