//! Route definitions
//!
//! All API routes organized by resource and mounted under /api.

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{categories, health, reviews, spots, stored_spots, users};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api", api_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/api/health", get(health::health_check))
        .route("/api/health/ready", get(health::readiness_check))
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(review_routes())
        .merge(spot_routes())
        .merge(stored_spot_routes())
        .merge(category_routes())
        .merge(user_routes())
}

/// Review routes
fn review_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/reviews",
            get(reviews::list_reviews).post(reviews::create_review),
        )
        .route(
            "/reviews/:id",
            get(reviews::get_review)
                .put(reviews::update_review)
                .delete(reviews::delete_review),
        )
        .route("/reviews/:id/like", post(reviews::like_review))
        .route("/reviews/:id/dislike", post(reviews::dislike_review))
        .route("/reviews/:id/interaction", get(reviews::get_interaction))
        .route("/reviews/spot/:spot_id", get(reviews::get_spot_reviews))
        .route(
            "/reviews/spot/:spot_id/interactions",
            get(reviews::get_spot_interactions),
        )
}

/// Spot routes
fn spot_routes() -> Router<AppState> {
    Router::new()
        .route("/spots", get(spots::list_spots).post(spots::create_spot))
        .route(
            "/spots/:id",
            get(spots::get_spot)
                .put(spots::update_spot)
                .delete(spots::delete_spot),
        )
        .route("/spots/:id/images", get(spots::get_spot_images))
        .route(
            "/spots/:id/categories",
            get(spots::get_spot_categories).put(spots::set_spot_categories),
        )
}

/// Stored spot routes
fn stored_spot_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/stored-spots",
            get(stored_spots::list_stored_spots).post(stored_spots::toggle_stored_spot),
        )
        .route("/stored-spots/:spot_id/status", get(stored_spots::get_status))
        .route("/stored-spots/:spot_id/counts", get(stored_spots::get_counts))
}

/// Category routes
fn category_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/categories",
            get(categories::list_categories).post(categories::create_category),
        )
        .route("/categories/:id", axum::routing::delete(categories::delete_category))
}

/// User routes
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(users::get_current_user))
        .route(
            "/users/profile",
            get(users::get_profile).put(users::update_profile),
        )
}
