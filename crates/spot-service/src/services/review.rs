//! Review service
//!
//! Review CRUD. Every mutation is followed by a recompute of the owning spot's
//! statistics.

use std::collections::HashMap;

use spot_core::entities::{
    NewReview, NewReviewImage, Review, ReviewImage, ReviewWithDetails, UserProfile,
};
use spot_core::value_objects::{Rating, ReviewId, SpotId, UserId};
use spot_core::DomainError;
use tracing::{info, instrument};

use crate::dto::{CreateReviewRequest, ReviewResponse, UpdateReviewRequest};

use super::aggregate::AggregateService;
use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Review service
pub struct ReviewService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReviewService<'a> {
    /// Create a new ReviewService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// All reviews, newest first
    #[instrument(skip(self))]
    pub async fn list_reviews(&self) -> ServiceResult<Vec<ReviewResponse>> {
        let reviews = self.ctx.review_repo().list().await?;
        let images = self.images_for(&reviews).await?;
        self.assemble(reviews, images).await
    }

    /// Get review by ID
    #[instrument(skip(self))]
    pub async fn get_review(&self, review_id: ReviewId) -> ServiceResult<ReviewResponse> {
        let review = self.get_review_entity(review_id).await?;
        self.detailed(review).await
    }

    /// Get review entity by ID
    #[instrument(skip(self))]
    pub async fn get_review_entity(&self, review_id: ReviewId) -> ServiceResult<Review> {
        Ok(self
            .ctx
            .review_repo()
            .find_by_id(review_id)
            .await?
            .ok_or(DomainError::ReviewNotFound(review_id))?)
    }

    /// Reviews of one spot, newest first
    #[instrument(skip(self))]
    pub async fn get_spot_reviews(&self, spot_id: SpotId) -> ServiceResult<Vec<ReviewResponse>> {
        let reviews = self.ctx.review_repo().find_by_spot(spot_id).await?;

        let mut images: HashMap<ReviewId, Vec<ReviewImage>> = HashMap::new();
        for image in self.ctx.review_repo().find_images_by_spot(spot_id).await? {
            images.entry(image.review_id).or_default().push(image);
        }

        self.assemble(reviews, images).await
    }

    /// Create a review with its images, then refresh the spot's statistics
    #[instrument(skip(self, request))]
    pub async fn create_review(
        &self,
        author_id: UserId,
        request: CreateReviewRequest,
    ) -> ServiceResult<ReviewResponse> {
        let rating = Rating::new(request.rating)?;
        let spot_id = SpotId::from_uuid(request.spot_id);

        self.ctx
            .spot_repo()
            .find_by_id(spot_id)
            .await?
            .ok_or(DomainError::SpotNotFound(spot_id))?;

        let review = self
            .ctx
            .review_repo()
            .create(NewReview {
                spot_id,
                user_id: Some(author_id),
                rating,
                content: request.content,
                images: request
                    .images
                    .into_iter()
                    .map(|image| NewReviewImage {
                        image_url: image.url,
                        caption: image.caption,
                    })
                    .collect(),
            })
            .await?;

        info!(
            review_id = %review.id,
            spot_id = %spot_id,
            author_id = %author_id,
            rating = %rating,
            "Review created"
        );

        AggregateService::new(self.ctx)
            .recompute_spot_stats(spot_id)
            .await?;

        self.detailed(review).await
    }

    /// Replace rating and content; only the author may edit
    #[instrument(skip(self, request))]
    pub async fn update_review(
        &self,
        review_id: ReviewId,
        caller_id: UserId,
        request: UpdateReviewRequest,
    ) -> ServiceResult<ReviewResponse> {
        let rating = Rating::new(request.rating)?;

        let existing = self.get_review_entity(review_id).await?;
        if !existing.is_authored_by(caller_id) {
            return Err(DomainError::NotReviewAuthor.into());
        }

        let review = self
            .ctx
            .review_repo()
            .update(review_id, rating, request.content)
            .await?
            .ok_or(DomainError::ReviewNotFound(review_id))?;

        info!(review_id = %review_id, rating = %rating, "Review updated");

        AggregateService::new(self.ctx)
            .recompute_spot_stats(review.spot_id)
            .await?;

        self.detailed(review).await
    }

    /// Delete a review; only the author may delete
    #[instrument(skip(self))]
    pub async fn delete_review(&self, review_id: ReviewId, caller_id: UserId) -> ServiceResult<()> {
        let existing = self.get_review_entity(review_id).await?;
        if !existing.is_authored_by(caller_id) {
            return Err(DomainError::NotReviewAuthor.into());
        }

        let removed = self
            .ctx
            .review_repo()
            .delete(review_id)
            .await?
            .ok_or(DomainError::ReviewNotFound(review_id))?;

        info!(review_id = %review_id, spot_id = %removed.spot_id, "Review deleted");

        AggregateService::new(self.ctx)
            .recompute_spot_stats(removed.spot_id)
            .await?;

        Ok(())
    }

    /// Attach images and author display fields to one review
    pub async fn detailed(&self, review: Review) -> ServiceResult<ReviewResponse> {
        let images = self.images_for(std::slice::from_ref(&review)).await?;
        let mut responses = self.assemble(vec![review], images).await?;
        responses.pop().ok_or_else(|| {
            ServiceError::from(DomainError::InternalError(
                "review lost while loading details".to_string(),
            ))
        })
    }

    async fn images_for(
        &self,
        reviews: &[Review],
    ) -> ServiceResult<HashMap<ReviewId, Vec<ReviewImage>>> {
        let mut images = HashMap::with_capacity(reviews.len());
        for review in reviews {
            let found = self.ctx.review_repo().find_images(review.id).await?;
            if !found.is_empty() {
                images.insert(review.id, found);
            }
        }
        Ok(images)
    }

    async fn assemble(
        &self,
        reviews: Vec<Review>,
        mut images: HashMap<ReviewId, Vec<ReviewImage>>,
    ) -> ServiceResult<Vec<ReviewResponse>> {
        let mut author_ids: Vec<UserId> = reviews.iter().filter_map(|r| r.user_id).collect();
        author_ids.sort_unstable();
        author_ids.dedup();

        let authors: HashMap<UserId, UserProfile> = if author_ids.is_empty() {
            HashMap::new()
        } else {
            self.ctx
                .user_repo()
                .find_many(&author_ids)
                .await?
                .into_iter()
                .map(|profile| (profile.id, profile))
                .collect()
        };

        Ok(reviews
            .into_iter()
            .map(|review| {
                let author = review.user_id.and_then(|id| authors.get(&id));
                let user_name = author.and_then(UserProfile::display_name).map(str::to_owned);
                let user_avatar = author.and_then(|p| p.profile_picture.clone());

                ReviewResponse::from(ReviewWithDetails {
                    images: images.remove(&review.id).unwrap_or_default(),
                    review,
                    user_name,
                    user_avatar,
                })
            })
            .collect())
    }
}
