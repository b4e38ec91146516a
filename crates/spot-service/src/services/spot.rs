//! Spot service
//!
//! Spot CRUD, spot image listing and category assignment.

use spot_core::entities::{NewSpot, Spot, SpotChanges};
use spot_core::value_objects::{CategoryId, SpotId, UserId};
use spot_core::DomainError;
use tracing::{info, instrument};

use crate::dto::{
    CategoryResponse, CreateSpotRequest, ReviewImageResponse, SetSpotCategoriesRequest,
    SpotListQuery, SpotResponse, UpdateSpotRequest,
};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Spot service
pub struct SpotService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> SpotService<'a> {
    /// Create a new SpotService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List spots, newest first, optionally filtered by category
    #[instrument(skip(self))]
    pub async fn list_spots(&self, query: SpotListQuery) -> ServiceResult<Vec<SpotResponse>> {
        let category = query.category_id.map(CategoryId::from_uuid);
        Ok(self
            .ctx
            .spot_repo()
            .list(category)
            .await?
            .iter()
            .map(SpotResponse::from)
            .collect())
    }

    /// Get spot by ID
    #[instrument(skip(self))]
    pub async fn get_spot(&self, spot_id: SpotId) -> ServiceResult<SpotResponse> {
        Ok(SpotResponse::from(self.get_spot_entity(spot_id).await?))
    }

    /// Get spot entity by ID
    #[instrument(skip(self))]
    pub async fn get_spot_entity(&self, spot_id: SpotId) -> ServiceResult<Spot> {
        Ok(self
            .ctx
            .spot_repo()
            .find_by_id(spot_id)
            .await?
            .ok_or(DomainError::SpotNotFound(spot_id))?)
    }

    /// Create a spot; statistics start empty
    #[instrument(skip(self, request))]
    pub async fn create_spot(
        &self,
        creator_id: UserId,
        request: CreateSpotRequest,
    ) -> ServiceResult<SpotResponse> {
        let new_spot = NewSpot {
            name: request.name,
            description: request.description,
            address: request.address,
            latitude: request.latitude,
            longitude: request.longitude,
            created_by: Some(creator_id),
        };
        new_spot.validate()?;

        let spot = self.ctx.spot_repo().create(new_spot).await?;
        info!(spot_id = %spot.id, creator_id = %creator_id, "Spot created");

        Ok(SpotResponse::from(spot))
    }

    /// Apply a partial update
    #[instrument(skip(self, request))]
    pub async fn update_spot(
        &self,
        spot_id: SpotId,
        request: UpdateSpotRequest,
    ) -> ServiceResult<SpotResponse> {
        let current = self.get_spot_entity(spot_id).await?;

        let changes = SpotChanges {
            name: request.name,
            description: request.description,
            address: request.address,
            latitude: request.latitude,
            longitude: request.longitude,
        };
        changes.validate_against(&current)?;

        let spot = self
            .ctx
            .spot_repo()
            .update(spot_id, changes)
            .await?
            .ok_or(DomainError::SpotNotFound(spot_id))?;

        info!(spot_id = %spot_id, "Spot updated");
        Ok(SpotResponse::from(spot))
    }

    /// Delete a spot together with its reviews and reactions
    #[instrument(skip(self))]
    pub async fn delete_spot(&self, spot_id: SpotId) -> ServiceResult<()> {
        if !self.ctx.spot_repo().delete(spot_id).await? {
            return Err(DomainError::SpotNotFound(spot_id).into());
        }

        info!(spot_id = %spot_id, "Spot deleted");
        Ok(())
    }

    /// Images of every review on the spot
    #[instrument(skip(self))]
    pub async fn get_spot_images(&self, spot_id: SpotId) -> ServiceResult<Vec<ReviewImageResponse>> {
        self.get_spot_entity(spot_id).await?;

        Ok(self
            .ctx
            .review_repo()
            .find_images_by_spot(spot_id)
            .await?
            .into_iter()
            .map(ReviewImageResponse::from)
            .collect())
    }

    /// Categories assigned to the spot
    #[instrument(skip(self))]
    pub async fn get_spot_categories(&self, spot_id: SpotId) -> ServiceResult<Vec<CategoryResponse>> {
        self.get_spot_entity(spot_id).await?;

        Ok(self
            .ctx
            .category_repo()
            .find_by_spot(spot_id)
            .await?
            .into_iter()
            .map(CategoryResponse::from)
            .collect())
    }

    /// Replace the spot's category set; every category must exist
    #[instrument(skip(self, request))]
    pub async fn set_spot_categories(
        &self,
        spot_id: SpotId,
        request: SetSpotCategoriesRequest,
    ) -> ServiceResult<Vec<CategoryResponse>> {
        self.get_spot_entity(spot_id).await?;

        let mut category_ids: Vec<CategoryId> = request
            .category_ids
            .into_iter()
            .map(CategoryId::from_uuid)
            .collect();
        category_ids.sort_unstable();
        category_ids.dedup();

        for category_id in &category_ids {
            self.ctx
                .category_repo()
                .find_by_id(*category_id)
                .await?
                .ok_or(DomainError::CategoryNotFound(*category_id))?;
        }

        self.ctx
            .category_repo()
            .assign_to_spot(spot_id, &category_ids)
            .await?;

        info!(spot_id = %spot_id, count = category_ids.len(), "Spot categories replaced");

        self.get_spot_categories(spot_id).await
    }
}
