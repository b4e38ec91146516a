//! In-memory implementation of every repository trait
//!
//! All state sits behind one async mutex, so each trait call observes and
//! mutates the store atomically. That gives toggles and stat refreshes the same
//! per-entity serialization the PostgreSQL backend gets from row locks.
//! Rows are kept in insertion order; "newest first" listings iterate in reverse.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::{Mutex, MutexGuard};
use tracing::{debug, instrument};

use spot_core::aggregates::{ReactionAction, ReactionState, SpotStats};
use spot_core::entities::{
    Category, NewReview, NewSpot, ProfileChanges, Review, ReviewImage, ReviewInteraction,
    ReviewToggle, Spot, SpotChanges, StoredSpot, StoredSpotCounts, StoredSpotToggle,
    StoredSpotWithSpot, UserProfile,
};
use spot_core::error::DomainError;
use spot_core::traits::{
    CategoryRepository, HealthCheck, InteractionRepository, RepoResult, ReviewRepository,
    SpotRepository, StoredSpotRepository, UserRepository,
};
use spot_core::value_objects::{
    CategoryId, ImageId, Rating, ReviewCounters, ReviewId, SpotId, UserId,
};

#[derive(Debug, Default)]
struct State {
    spots: Vec<Spot>,
    reviews: Vec<Review>,
    images: Vec<ReviewImage>,
    interactions: Vec<ReviewInteraction>,
    stored_spots: Vec<StoredSpot>,
    categories: Vec<Category>,
    spot_categories: Vec<(SpotId, CategoryId)>,
    users: Vec<UserProfile>,
}

impl State {
    fn spot_mut(&mut self, id: SpotId) -> Option<&mut Spot> {
        self.spots.iter_mut().find(|s| s.id == id)
    }

    fn review_mut(&mut self, id: ReviewId) -> Option<&mut Review> {
        self.reviews.iter_mut().find(|r| r.id == id)
    }

    fn user_mut(&mut self, id: UserId) -> Option<&mut UserProfile> {
        self.users.iter_mut().find(|u| u.id == id)
    }

    fn remove_review_children(&mut self, review_id: ReviewId) {
        self.images.retain(|i| i.review_id != review_id);
        self.interactions.retain(|i| i.review_id != review_id);
    }
}

/// Process-local store; cloning shares the same state
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    state: Arc<Mutex<State>>,
    unavailable: Arc<AtomicBool>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call fail with an upstream error
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    async fn lock(&self) -> RepoResult<MutexGuard<'_, State>> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(DomainError::Upstream("storage unavailable".to_string()));
        }
        Ok(self.state.lock().await)
    }
}

// ============================================================================
// Spots
// ============================================================================

#[async_trait]
impl SpotRepository for InMemoryStore {
    async fn find_by_id(&self, id: SpotId) -> RepoResult<Option<Spot>> {
        let state = self.lock().await?;
        Ok(state.spots.iter().find(|s| s.id == id).cloned())
    }

    async fn list(&self, category: Option<CategoryId>) -> RepoResult<Vec<Spot>> {
        let state = self.lock().await?;
        Ok(state
            .spots
            .iter()
            .rev()
            .filter(|spot| {
                category.map_or(true, |category_id| {
                    state.spot_categories.contains(&(spot.id, category_id))
                })
            })
            .cloned()
            .collect())
    }

    async fn create(&self, spot: NewSpot) -> RepoResult<Spot> {
        let mut state = self.lock().await?;
        let spot = Spot::new(SpotId::generate(), spot);
        state.spots.push(spot.clone());
        Ok(spot)
    }

    async fn update(&self, id: SpotId, changes: SpotChanges) -> RepoResult<Option<Spot>> {
        let mut state = self.lock().await?;
        Ok(state.spot_mut(id).map(|spot| {
            spot.apply(changes);
            spot.clone()
        }))
    }

    async fn delete(&self, id: SpotId) -> RepoResult<bool> {
        let mut state = self.lock().await?;
        let before = state.spots.len();
        state.spots.retain(|s| s.id != id);
        if state.spots.len() == before {
            return Ok(false);
        }

        let review_ids: Vec<ReviewId> = state
            .reviews
            .iter()
            .filter(|r| r.spot_id == id)
            .map(|r| r.id)
            .collect();
        for review_id in review_ids {
            state.remove_review_children(review_id);
        }
        state.reviews.retain(|r| r.spot_id != id);
        state.stored_spots.retain(|s| s.spot_id != id);
        state.spot_categories.retain(|(spot_id, _)| *spot_id != id);
        Ok(true)
    }

    #[instrument(skip(self))]
    async fn refresh_stats(&self, id: SpotId) -> RepoResult<Option<SpotStats>> {
        let mut state = self.lock().await?;
        let ratings: Vec<Rating> = state
            .reviews
            .iter()
            .filter(|r| r.spot_id == id)
            .map(|r| r.rating)
            .collect();
        let stats = SpotStats::from_ratings(&ratings);

        Ok(state.spot_mut(id).map(|spot| {
            spot.set_stats(stats);
            spot.updated_at = Utc::now();
            debug!(review_count = stats.review_count, "Spot stats refreshed");
            stats
        }))
    }
}

// ============================================================================
// Reviews
// ============================================================================

#[async_trait]
impl ReviewRepository for InMemoryStore {
    async fn find_by_id(&self, id: ReviewId) -> RepoResult<Option<Review>> {
        let state = self.lock().await?;
        Ok(state.reviews.iter().find(|r| r.id == id).cloned())
    }

    async fn list(&self) -> RepoResult<Vec<Review>> {
        let state = self.lock().await?;
        Ok(state.reviews.iter().rev().cloned().collect())
    }

    async fn find_by_spot(&self, spot_id: SpotId) -> RepoResult<Vec<Review>> {
        let state = self.lock().await?;
        Ok(state
            .reviews
            .iter()
            .rev()
            .filter(|r| r.spot_id == spot_id)
            .cloned()
            .collect())
    }

    async fn create(&self, review: NewReview) -> RepoResult<Review> {
        let mut state = self.lock().await?;
        // mirrors the foreign key on reviews.spot_id
        if !state.spots.iter().any(|s| s.id == review.spot_id) {
            return Err(DomainError::SpotNotFound(review.spot_id));
        }

        let created = Review::new(
            ReviewId::generate(),
            review.spot_id,
            review.user_id,
            review.rating,
            review.content,
        );
        let now = Utc::now();
        state
            .images
            .extend(review.images.into_iter().map(|image| ReviewImage {
                id: ImageId::generate(),
                review_id: created.id,
                image_url: image.image_url,
                caption: image.caption,
                created_at: now,
            }));
        state.reviews.push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: ReviewId, rating: Rating, content: String) -> RepoResult<Option<Review>> {
        let mut state = self.lock().await?;
        Ok(state.review_mut(id).map(|review| {
            review.edit(rating, content);
            review.clone()
        }))
    }

    async fn delete(&self, id: ReviewId) -> RepoResult<Option<Review>> {
        let mut state = self.lock().await?;
        let Some(index) = state.reviews.iter().position(|r| r.id == id) else {
            return Ok(None);
        };
        let removed = state.reviews.remove(index);
        state.remove_review_children(id);
        Ok(Some(removed))
    }

    async fn set_counters(&self, id: ReviewId, counters: ReviewCounters) -> RepoResult<Option<Review>> {
        let mut state = self.lock().await?;
        Ok(state.review_mut(id).map(|review| {
            review.counters = counters;
            review.clone()
        }))
    }

    async fn find_images(&self, review_id: ReviewId) -> RepoResult<Vec<ReviewImage>> {
        let state = self.lock().await?;
        Ok(state
            .images
            .iter()
            .filter(|i| i.review_id == review_id)
            .cloned()
            .collect())
    }

    async fn find_images_by_spot(&self, spot_id: SpotId) -> RepoResult<Vec<ReviewImage>> {
        let state = self.lock().await?;
        Ok(state
            .images
            .iter()
            .rev()
            .filter(|image| {
                state
                    .reviews
                    .iter()
                    .any(|r| r.id == image.review_id && r.spot_id == spot_id)
            })
            .cloned()
            .collect())
    }
}

// ============================================================================
// Review interactions
// ============================================================================

#[async_trait]
impl InteractionRepository for InMemoryStore {
    async fn find(&self, review_id: ReviewId, user_id: UserId) -> RepoResult<Option<ReviewInteraction>> {
        let state = self.lock().await?;
        Ok(state
            .interactions
            .iter()
            .find(|i| i.review_id == review_id && i.user_id == user_id)
            .cloned())
    }

    async fn find_for_user_on_spot(
        &self,
        spot_id: SpotId,
        user_id: UserId,
    ) -> RepoResult<Vec<ReviewInteraction>> {
        let state = self.lock().await?;
        Ok(state
            .interactions
            .iter()
            .filter(|i| {
                i.user_id == user_id
                    && state
                        .reviews
                        .iter()
                        .any(|r| r.id == i.review_id && r.spot_id == spot_id)
            })
            .cloned()
            .collect())
    }

    #[instrument(skip(self))]
    async fn toggle(
        &self,
        review_id: ReviewId,
        user_id: UserId,
        action: ReactionAction,
    ) -> RepoResult<Option<ReviewToggle>> {
        let mut state = self.lock().await?;
        if !state.reviews.iter().any(|r| r.id == review_id) {
            return Ok(None);
        }

        let position = state
            .interactions
            .iter()
            .position(|i| i.review_id == review_id && i.user_id == user_id);
        let current = position.map(|p| state.interactions[p].is_liked);
        let transition = ReactionState::from_row(current).apply(action);

        match (position, transition.to.to_row()) {
            (Some(p), None) => {
                state.interactions.remove(p);
            }
            (Some(p), Some(is_liked)) => state.interactions[p].is_liked = is_liked,
            (None, Some(is_liked)) => state.interactions.push(ReviewInteraction {
                review_id,
                user_id,
                is_liked,
                created_at: Utc::now(),
            }),
            (None, None) => {}
        }

        let review = state
            .review_mut(review_id)
            .map(|review| {
                review.counters = transition.apply_to(review.counters);
                review.clone()
            })
            .ok_or(DomainError::ReviewNotFound(review_id))?;

        debug!(from = ?transition.from, to = ?transition.to, "Review reaction toggled");
        Ok(Some(ReviewToggle { review, transition }))
    }

    async fn tally(&self, review_id: ReviewId) -> RepoResult<ReviewCounters> {
        let state = self.lock().await?;
        let (likes, dislikes) = state
            .interactions
            .iter()
            .filter(|i| i.review_id == review_id)
            .fold((0i64, 0i64), |(likes, dislikes), i| {
                if i.is_liked {
                    (likes + 1, dislikes)
                } else {
                    (likes, dislikes + 1)
                }
            });
        Ok(ReviewCounters::clamped(likes, dislikes))
    }
}

// ============================================================================
// Stored spots
// ============================================================================

#[async_trait]
impl StoredSpotRepository for InMemoryStore {
    async fn find(&self, spot_id: SpotId, user_id: UserId) -> RepoResult<Option<StoredSpot>> {
        let state = self.lock().await?;
        Ok(state
            .stored_spots
            .iter()
            .find(|s| s.spot_id == spot_id && s.user_id == user_id)
            .cloned())
    }

    #[instrument(skip(self))]
    async fn toggle(
        &self,
        spot_id: SpotId,
        user_id: UserId,
        action: ReactionAction,
    ) -> RepoResult<Option<StoredSpotToggle>> {
        let mut state = self.lock().await?;
        if !state.spots.iter().any(|s| s.id == spot_id) {
            return Ok(None);
        }

        let position = state
            .stored_spots
            .iter()
            .position(|s| s.spot_id == spot_id && s.user_id == user_id);
        let current = position.map(|p| state.stored_spots[p].is_liked);
        let transition = ReactionState::from_row(current).apply(action);

        let stored = match (position, transition.to.to_row()) {
            (Some(p), None) => {
                state.stored_spots.remove(p);
                None
            }
            (Some(p), Some(is_liked)) => {
                state.stored_spots[p].is_liked = is_liked;
                Some(state.stored_spots[p].clone())
            }
            (None, Some(is_liked)) => {
                let stored = StoredSpot {
                    spot_id,
                    user_id,
                    is_liked,
                    created_at: Utc::now(),
                };
                state.stored_spots.push(stored.clone());
                Some(stored)
            }
            (None, None) => None,
        };

        debug!(from = ?transition.from, to = ?transition.to, "Spot reaction toggled");
        Ok(Some(StoredSpotToggle { stored, transition }))
    }

    async fn counts(&self, spot_id: SpotId) -> RepoResult<StoredSpotCounts> {
        let state = self.lock().await?;
        Ok(StoredSpotCounts::tally(
            state
                .stored_spots
                .iter()
                .filter(|s| s.spot_id == spot_id)
                .map(|s| s.is_liked),
        ))
    }

    async fn find_by_user(&self, user_id: UserId) -> RepoResult<Vec<StoredSpotWithSpot>> {
        let state = self.lock().await?;
        Ok(state
            .stored_spots
            .iter()
            .rev()
            .filter(|s| s.user_id == user_id)
            .filter_map(|stored| {
                state
                    .spots
                    .iter()
                    .find(|spot| spot.id == stored.spot_id)
                    .map(|spot| StoredSpotWithSpot {
                        stored: stored.clone(),
                        spot: spot.clone(),
                    })
            })
            .collect())
    }
}

// ============================================================================
// Categories
// ============================================================================

#[async_trait]
impl CategoryRepository for InMemoryStore {
    async fn list(&self) -> RepoResult<Vec<Category>> {
        let state = self.lock().await?;
        let mut categories = state.categories.clone();
        categories.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(categories)
    }

    async fn find_by_id(&self, id: CategoryId) -> RepoResult<Option<Category>> {
        let state = self.lock().await?;
        Ok(state.categories.iter().find(|c| c.id == id).cloned())
    }

    async fn create(&self, name: &str) -> RepoResult<Category> {
        let mut state = self.lock().await?;
        if state.categories.iter().any(|c| c.name == name) {
            return Err(DomainError::CategoryNameTaken);
        }
        let category = Category::new(CategoryId::generate(), name.to_string());
        state.categories.push(category.clone());
        Ok(category)
    }

    async fn delete(&self, id: CategoryId) -> RepoResult<bool> {
        let mut state = self.lock().await?;
        let before = state.categories.len();
        state.categories.retain(|c| c.id != id);
        state.spot_categories.retain(|(_, category_id)| *category_id != id);
        Ok(state.categories.len() != before)
    }

    async fn find_by_spot(&self, spot_id: SpotId) -> RepoResult<Vec<Category>> {
        let state = self.lock().await?;
        let mut categories: Vec<Category> = state
            .categories
            .iter()
            .filter(|c| state.spot_categories.contains(&(spot_id, c.id)))
            .cloned()
            .collect();
        categories.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(categories)
    }

    async fn assign_to_spot(&self, spot_id: SpotId, categories: &[CategoryId]) -> RepoResult<()> {
        let mut state = self.lock().await?;
        state.spot_categories.retain(|(id, _)| *id != spot_id);
        for category_id in categories {
            if !state.spot_categories.contains(&(spot_id, *category_id)) {
                state.spot_categories.push((spot_id, *category_id));
            }
        }
        Ok(())
    }
}

// ============================================================================
// Users
// ============================================================================

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<UserProfile>> {
        let state = self.lock().await?;
        Ok(state.users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_many(&self, ids: &[UserId]) -> RepoResult<Vec<UserProfile>> {
        let state = self.lock().await?;
        Ok(state
            .users
            .iter()
            .filter(|u| ids.contains(&u.id))
            .cloned()
            .collect())
    }

    async fn ensure(&self, id: UserId) -> RepoResult<UserProfile> {
        let mut state = self.lock().await?;
        if let Some(existing) = state.users.iter().find(|u| u.id == id) {
            return Ok(existing.clone());
        }
        let profile = UserProfile::new(id);
        state.users.push(profile.clone());
        Ok(profile)
    }

    async fn username_taken_by_other(&self, username: &str, except: UserId) -> RepoResult<bool> {
        let state = self.lock().await?;
        Ok(state
            .users
            .iter()
            .any(|u| u.id != except && u.username.as_deref() == Some(username)))
    }

    async fn update_profile(
        &self,
        id: UserId,
        changes: ProfileChanges,
    ) -> RepoResult<Option<UserProfile>> {
        let mut state = self.lock().await?;
        // mirrors the unique index on users.username
        if let Some(username) = changes.username.as_deref() {
            if state
                .users
                .iter()
                .any(|u| u.id != id && u.username.as_deref() == Some(username))
            {
                return Err(DomainError::UsernameTaken);
            }
        }
        Ok(state.user_mut(id).map(|profile| {
            profile.apply(changes);
            profile.clone()
        }))
    }
}

#[async_trait]
impl HealthCheck for InMemoryStore {
    async fn ping(&self) -> RepoResult<()> {
        self.lock().await.map(|_| ())
    }
}
