//! API Integration Tests
//!
//! Each test starts its own server on a fresh in-memory store, so no external
//! services are required.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use futures::future::join_all;
use integration_tests::{
    assert_data, assert_envelope, assert_error, assert_message, fixtures::*, sign_token,
    TestServer, TestUser, TEST_AUDIENCE, TEST_JWT_SECRET,
};
use reqwest::StatusCode;
use serde_json::{json, Value};
use uuid::Uuid;

async fn create_spot(server: &TestServer, user: &TestUser) -> SpotResponse {
    let response = server
        .post_auth("/api/spots", &user.token, &CreateSpotRequest::unique())
        .await
        .unwrap();
    assert_data(response, StatusCode::CREATED).await.unwrap()
}

async fn create_review(
    server: &TestServer,
    user: &TestUser,
    request: &CreateReviewRequest,
) -> ReviewResponse {
    let response = server
        .post_auth("/api/reviews", &user.token, request)
        .await
        .unwrap();
    assert_data(response, StatusCode::CREATED).await.unwrap()
}

async fn get_spot(server: &TestServer, spot_id: Uuid) -> SpotResponse {
    let response = server.get(&format!("/api/spots/{spot_id}")).await.unwrap();
    assert_data(response, StatusCode::OK).await.unwrap()
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/health").await.unwrap();
    let body: Value = assert_data(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_health_ready() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/health/ready").await.unwrap();
    let body: Value = assert_data(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["status"], "ready");
    assert_eq!(body["checks"]["storage"], "ok");
}

#[tokio::test]
async fn test_responses_carry_request_id() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/spots").await.unwrap();
    assert!(response.headers().contains_key("x-request-id"));
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_missing_token_is_unauthorized() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/users").await.unwrap();
    assert_error(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_token_with_wrong_secret_is_unauthorized() {
    let server = TestServer::start().await.expect("Failed to start server");
    let token = sign_token(&Uuid::new_v4().to_string(), TEST_AUDIENCE, 3600, "other-secret").unwrap();
    let response = server.get_auth("/api/users", &token).await.unwrap();
    assert_error(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_expired_token_is_unauthorized() {
    let server = TestServer::start().await.expect("Failed to start server");
    let token = sign_token(&Uuid::new_v4().to_string(), TEST_AUDIENCE, -3600, TEST_JWT_SECRET).unwrap();
    let response = server.get_auth("/api/users", &token).await.unwrap();
    assert_error(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_token_with_wrong_audience_is_unauthorized() {
    let server = TestServer::start().await.expect("Failed to start server");
    let token = sign_token(&Uuid::new_v4().to_string(), "anon", 3600, TEST_JWT_SECRET).unwrap();
    let response = server.get_auth("/api/users", &token).await.unwrap();
    assert_error(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_mutations_require_auth() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .post("/api/reviews", &CreateReviewRequest::new(Uuid::new_v4(), 5))
        .await
        .unwrap();
    assert_error(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

// ============================================================================
// Spot Tests
// ============================================================================

#[tokio::test]
async fn test_create_and_get_spot() {
    let server = TestServer::start().await.expect("Failed to start server");
    let user = TestUser::new().unwrap();

    let spot = create_spot(&server, &user).await;
    assert_eq!(spot.review_count, 0);
    assert!(spot.average_rating.is_none());

    let fetched = get_spot(&server, spot.id).await;
    assert_eq!(fetched.id, spot.id);
    assert_eq!(fetched.name, spot.name);
}

#[tokio::test]
async fn test_get_missing_spot_is_not_found() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .get(&format!("/api/spots/{}", Uuid::new_v4()))
        .await
        .unwrap();
    assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_malformed_id_is_bad_request() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/spots/not-a-uuid").await.unwrap();
    assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_create_spot_validation() {
    let server = TestServer::start().await.expect("Failed to start server");
    let user = TestUser::new().unwrap();

    let mut request = CreateSpotRequest::unique();
    request.latitude = 120.0;
    let response = server
        .post_auth("/api/spots", &user.token, &request)
        .await
        .unwrap();
    assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_update_and_delete_spot() {
    let server = TestServer::start().await.expect("Failed to start server");
    let user = TestUser::new().unwrap();
    let spot = create_spot(&server, &user).await;

    let response = server
        .put_auth(
            &format!("/api/spots/{}", spot.id),
            &user.token,
            &json!({ "name": "Renamed" }),
        )
        .await
        .unwrap();
    let updated: SpotResponse = assert_data(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.name, "Renamed");

    let response = server
        .delete_auth(&format!("/api/spots/{}", spot.id), &user.token)
        .await
        .unwrap();
    let message = assert_message(response, StatusCode::OK).await.unwrap();
    assert_eq!(message, "Spot deleted successfully");

    let response = server
        .delete_auth(&format!("/api/spots/{}", spot.id), &user.token)
        .await
        .unwrap();
    assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Review Tests
// ============================================================================

#[tokio::test]
async fn test_two_reviews_average_four() {
    let server = TestServer::start().await.expect("Failed to start server");
    let alice = TestUser::new().unwrap();
    let bob = TestUser::new().unwrap();
    let spot = create_spot(&server, &alice).await;

    create_review(&server, &alice, &CreateReviewRequest::new(spot.id, 5)).await;
    create_review(&server, &bob, &CreateReviewRequest::new(spot.id, 3)).await;

    let spot = get_spot(&server, spot.id).await;
    assert_eq!(spot.review_count, 2);
    assert_eq!(spot.average_rating, Some(4.0));
}

#[tokio::test]
async fn test_average_rounds_to_one_decimal() {
    let server = TestServer::start().await.expect("Failed to start server");
    let user = TestUser::new().unwrap();
    let spot = create_spot(&server, &user).await;

    for rating in [4, 4, 5] {
        create_review(&server, &user, &CreateReviewRequest::new(spot.id, rating)).await;
    }

    let spot = get_spot(&server, spot.id).await;
    assert_eq!(spot.review_count, 3);
    assert_eq!(spot.average_rating, Some(4.3));
}

#[tokio::test]
async fn test_invalid_rating_leaves_stats_untouched() {
    let server = TestServer::start().await.expect("Failed to start server");
    let user = TestUser::new().unwrap();
    let spot = create_spot(&server, &user).await;
    create_review(&server, &user, &CreateReviewRequest::new(spot.id, 4)).await;

    for rating in [0, 6] {
        let response = server
            .post_auth("/api/reviews", &user.token, &CreateReviewRequest::new(spot.id, rating))
            .await
            .unwrap();
        assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    }

    let spot = get_spot(&server, spot.id).await;
    assert_eq!(spot.review_count, 1);
    assert_eq!(spot.average_rating, Some(4.0));
}

#[tokio::test]
async fn test_empty_content_is_bad_request() {
    let server = TestServer::start().await.expect("Failed to start server");
    let user = TestUser::new().unwrap();
    let spot = create_spot(&server, &user).await;

    let mut request = CreateReviewRequest::new(spot.id, 4);
    request.content = String::new();
    let response = server
        .post_auth("/api/reviews", &user.token, &request)
        .await
        .unwrap();
    assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_review_on_missing_spot_is_not_found() {
    let server = TestServer::start().await.expect("Failed to start server");
    let user = TestUser::new().unwrap();
    let response = server
        .post_auth(
            "/api/reviews",
            &user.token,
            &CreateReviewRequest::new(Uuid::new_v4(), 4),
        )
        .await
        .unwrap();
    assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_review_images_and_author_name() {
    let server = TestServer::start().await.expect("Failed to start server");
    let user = TestUser::new().unwrap();
    let username = format!("reviewer{}", unique_suffix());

    let response = server
        .put_auth("/api/users/profile", &user.token, &json!({ "username": username }))
        .await
        .unwrap();
    assert_data::<ProfileResponse>(response, StatusCode::OK).await.unwrap();

    let spot = create_spot(&server, &user).await;
    let review = create_review(
        &server,
        &user,
        &CreateReviewRequest::new(spot.id, 5).with_image("https://img.example.com/a.jpg"),
    )
    .await;
    assert_eq!(review.user_id, Some(user.id));
    assert_eq!(review.user_name.as_deref(), Some(username.as_str()));
    assert_eq!(review.review_images.len(), 1);

    let response = server
        .get(&format!("/api/spots/{}/images", spot.id))
        .await
        .unwrap();
    let images: Vec<ReviewImageResponse> = assert_data(response, StatusCode::OK).await.unwrap();
    assert_eq!(images.len(), 1);
    assert_eq!(images[0].review_id, review.id);
    assert_eq!(images[0].image_url, "https://img.example.com/a.jpg");

    let response = server
        .get(&format!("/api/reviews/spot/{}", spot.id))
        .await
        .unwrap();
    let reviews: Vec<ReviewResponse> = assert_data(response, StatusCode::OK).await.unwrap();
    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews[0].review_images.len(), 1);
}

#[tokio::test]
async fn test_list_reviews_newest_first() {
    let server = TestServer::start().await.expect("Failed to start server");
    let user = TestUser::new().unwrap();
    let spot = create_spot(&server, &user).await;

    let first = create_review(&server, &user, &CreateReviewRequest::new(spot.id, 2)).await;
    let second = create_review(&server, &user, &CreateReviewRequest::new(spot.id, 4)).await;

    let response = server.get("/api/reviews").await.unwrap();
    let reviews: Vec<ReviewResponse> = assert_data(response, StatusCode::OK).await.unwrap();
    let ids: Vec<Uuid> = reviews.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![second.id, first.id]);
}

#[tokio::test]
async fn test_update_review_recomputes_average() {
    let server = TestServer::start().await.expect("Failed to start server");
    let user = TestUser::new().unwrap();
    let spot = create_spot(&server, &user).await;
    let review = create_review(&server, &user, &CreateReviewRequest::new(spot.id, 2)).await;

    let response = server
        .put_auth(
            &format!("/api/reviews/{}", review.id),
            &user.token,
            &UpdateReviewRequest {
                rating: 5,
                content: "Changed my mind".to_string(),
            },
        )
        .await
        .unwrap();
    let updated: ReviewResponse = assert_data(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.rating, 5);
    assert_eq!(updated.content, "Changed my mind");

    let spot = get_spot(&server, spot.id).await;
    assert_eq!(spot.average_rating, Some(5.0));
}

#[tokio::test]
async fn test_non_author_cannot_edit_or_delete() {
    let server = TestServer::start().await.expect("Failed to start server");
    let author = TestUser::new().unwrap();
    let other = TestUser::new().unwrap();
    let spot = create_spot(&server, &author).await;
    let review = create_review(&server, &author, &CreateReviewRequest::new(spot.id, 4)).await;

    let response = server
        .put_auth(
            &format!("/api/reviews/{}", review.id),
            &other.token,
            &UpdateReviewRequest {
                rating: 1,
                content: "Hijacked".to_string(),
            },
        )
        .await
        .unwrap();
    assert_error(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server
        .delete_auth(&format!("/api/reviews/{}", review.id), &other.token)
        .await
        .unwrap();
    assert_error(response, StatusCode::FORBIDDEN).await.unwrap();

    let spot = get_spot(&server, spot.id).await;
    assert_eq!(spot.average_rating, Some(4.0));
}

#[tokio::test]
async fn test_delete_review_recomputes_stats() {
    let server = TestServer::start().await.expect("Failed to start server");
    let user = TestUser::new().unwrap();
    let spot = create_spot(&server, &user).await;
    let five = create_review(&server, &user, &CreateReviewRequest::new(spot.id, 5)).await;
    let three = create_review(&server, &user, &CreateReviewRequest::new(spot.id, 3)).await;

    let response = server
        .delete_auth(&format!("/api/reviews/{}", five.id), &user.token)
        .await
        .unwrap();
    let message = assert_message(response, StatusCode::OK).await.unwrap();
    assert_eq!(message, "Review deleted successfully");

    let after_first = get_spot(&server, spot.id).await;
    assert_eq!(after_first.review_count, 1);
    assert_eq!(after_first.average_rating, Some(3.0));

    let response = server
        .delete_auth(&format!("/api/reviews/{}", three.id), &user.token)
        .await
        .unwrap();
    assert_message(response, StatusCode::OK).await.unwrap();

    let after_last = get_spot(&server, spot.id).await;
    assert_eq!(after_last.review_count, 0);
    assert!(after_last.average_rating.is_none());

    let response = server
        .get(&format!("/api/reviews/{}", three.id))
        .await
        .unwrap();
    assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_delete_missing_review_is_not_found() {
    let server = TestServer::start().await.expect("Failed to start server");
    let user = TestUser::new().unwrap();
    let response = server
        .delete_auth(&format!("/api/reviews/{}", Uuid::new_v4()), &user.token)
        .await
        .unwrap();
    assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Interaction Tests
// ============================================================================

#[tokio::test]
async fn test_like_then_dislike() {
    let server = TestServer::start().await.expect("Failed to start server");
    let author = TestUser::new().unwrap();
    let reader = TestUser::new().unwrap();
    let spot = create_spot(&server, &author).await;
    let review = create_review(&server, &author, &CreateReviewRequest::new(spot.id, 4)).await;

    let response = server
        .post_empty_auth(&format!("/api/reviews/{}/like", review.id), &reader.token)
        .await
        .unwrap();
    let liked: ReviewResponse = assert_data(response, StatusCode::OK).await.unwrap();
    assert_eq!((liked.like_count, liked.dislike_count), (1, 0));

    let response = server
        .post_empty_auth(&format!("/api/reviews/{}/dislike", review.id), &reader.token)
        .await
        .unwrap();
    let disliked: ReviewResponse = assert_data(response, StatusCode::OK).await.unwrap();
    assert_eq!((disliked.like_count, disliked.dislike_count), (0, 1));

    let response = server
        .get_auth(&format!("/api/reviews/{}/interaction", review.id), &reader.token)
        .await
        .unwrap();
    let interaction: Option<ReviewInteractionResponse> =
        assert_data(response, StatusCode::OK).await.unwrap();
    let interaction = interaction.unwrap();
    assert_eq!(interaction.user_id, reader.id);
    assert!(!interaction.is_liked);
}

#[tokio::test]
async fn test_like_twice_clears() {
    let server = TestServer::start().await.expect("Failed to start server");
    let user = TestUser::new().unwrap();
    let spot = create_spot(&server, &user).await;
    let review = create_review(&server, &user, &CreateReviewRequest::new(spot.id, 4)).await;
    let path = format!("/api/reviews/{}/like", review.id);

    server.post_empty_auth(&path, &user.token).await.unwrap();
    let response = server.post_empty_auth(&path, &user.token).await.unwrap();
    let cleared: ReviewResponse = assert_data(response, StatusCode::OK).await.unwrap();
    assert_eq!((cleared.like_count, cleared.dislike_count), (0, 0));

    let response = server
        .get_auth(&format!("/api/reviews/{}/interaction", review.id), &user.token)
        .await
        .unwrap();
    let body = assert_envelope(response, StatusCode::OK, true).await.unwrap();
    assert!(body["data"].is_null());
}

#[tokio::test]
async fn test_like_missing_review_is_not_found() {
    let server = TestServer::start().await.expect("Failed to start server");
    let user = TestUser::new().unwrap();
    let response = server
        .post_empty_auth(&format!("/api/reviews/{}/like", Uuid::new_v4()), &user.token)
        .await
        .unwrap();
    assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_concurrent_likes_from_different_users() {
    let server = TestServer::start().await.expect("Failed to start server");
    let author = TestUser::new().unwrap();
    let first = TestUser::new().unwrap();
    let second = TestUser::new().unwrap();
    let spot = create_spot(&server, &author).await;
    let review = create_review(&server, &author, &CreateReviewRequest::new(spot.id, 4)).await;
    let path = format!("/api/reviews/{}/like", review.id);

    let responses = join_all([
        server.post_empty_auth(&path, &first.token),
        server.post_empty_auth(&path, &second.token),
    ])
    .await;
    for response in responses {
        assert_eq!(response.unwrap().status(), StatusCode::OK);
    }

    let response = server
        .get(&format!("/api/reviews/{}", review.id))
        .await
        .unwrap();
    let review: ReviewResponse = assert_data(response, StatusCode::OK).await.unwrap();
    assert_eq!(review.like_count, 2);
    assert_eq!(review.dislike_count, 0);
}

#[tokio::test]
async fn test_spot_interactions_for_caller() {
    let server = TestServer::start().await.expect("Failed to start server");
    let user = TestUser::new().unwrap();
    let spot = create_spot(&server, &user).await;
    let liked = create_review(&server, &user, &CreateReviewRequest::new(spot.id, 4)).await;
    create_review(&server, &user, &CreateReviewRequest::new(spot.id, 2)).await;

    server
        .post_empty_auth(&format!("/api/reviews/{}/like", liked.id), &user.token)
        .await
        .unwrap();

    let response = server
        .get_auth(&format!("/api/reviews/spot/{}/interactions", spot.id), &user.token)
        .await
        .unwrap();
    let interactions: Vec<ReviewInteractionResponse> =
        assert_data(response, StatusCode::OK).await.unwrap();
    assert_eq!(interactions.len(), 1);
    assert_eq!(interactions[0].review_id, liked.id);
    assert!(interactions[0].is_liked);
}

// ============================================================================
// Stored Spot Tests
// ============================================================================

#[tokio::test]
async fn test_stored_spot_toggle_and_counts() {
    let server = TestServer::start().await.expect("Failed to start server");
    let user = TestUser::new().unwrap();
    let other = TestUser::new().unwrap();
    let spot = create_spot(&server, &user).await;

    let like = ToggleStoredSpotRequest {
        spot_id: spot.id,
        is_liked: true,
    };
    let response = server
        .post_auth("/api/stored-spots", &user.token, &like)
        .await
        .unwrap();
    let stored: Option<StoredSpotResponse> = assert_data(response, StatusCode::OK).await.unwrap();
    let stored = stored.unwrap();
    assert_eq!(stored.spot_id, spot.id);
    assert_eq!(stored.user_id, user.id);
    assert!(stored.is_liked);

    let dislike = ToggleStoredSpotRequest {
        spot_id: spot.id,
        is_liked: false,
    };
    server
        .post_auth("/api/stored-spots", &other.token, &dislike)
        .await
        .unwrap();

    let response = server
        .get(&format!("/api/stored-spots/{}/counts", spot.id))
        .await
        .unwrap();
    let counts: StoredSpotCountsResponse = assert_data(response, StatusCode::OK).await.unwrap();
    assert_eq!((counts.likes, counts.dislikes), (1, 1));

    let response = server
        .get_auth("/api/stored-spots", &user.token)
        .await
        .unwrap();
    let listed: Vec<StoredSpotWithSpotResponse> =
        assert_data(response, StatusCode::OK).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].spot_id, spot.id);
    assert_eq!(listed[0].spot.id, spot.id);
    assert!(listed[0].is_liked);

    // Repeating the same choice clears it
    let response = server
        .post_auth("/api/stored-spots", &user.token, &like)
        .await
        .unwrap();
    let cleared: Option<StoredSpotResponse> = assert_data(response, StatusCode::OK).await.unwrap();
    assert!(cleared.is_none());

    let response = server
        .get_auth(&format!("/api/stored-spots/{}/status", spot.id), &user.token)
        .await
        .unwrap();
    let status: Option<StoredSpotResponse> = assert_data(response, StatusCode::OK).await.unwrap();
    assert!(status.is_none());
}

#[tokio::test]
async fn test_stored_spot_missing_spot_is_not_found() {
    let server = TestServer::start().await.expect("Failed to start server");
    let user = TestUser::new().unwrap();
    let response = server
        .post_auth(
            "/api/stored-spots",
            &user.token,
            &ToggleStoredSpotRequest {
                spot_id: Uuid::new_v4(),
                is_liked: true,
            },
        )
        .await
        .unwrap();
    assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Category Tests
// ============================================================================

#[tokio::test]
async fn test_category_lifecycle_and_spot_filter() {
    let server = TestServer::start().await.expect("Failed to start server");
    let user = TestUser::new().unwrap();

    let response = server
        .post_auth("/api/categories", &user.token, &json!({ "name": "Cafe" }))
        .await
        .unwrap();
    let cafe: CategoryResponse = assert_data(response, StatusCode::OK).await.unwrap();
    assert_eq!(cafe.name, "Cafe");

    let response = server
        .post_auth("/api/categories", &user.token, &json!({ "name": "Cafe" }))
        .await
        .unwrap();
    assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();

    let response = server
        .post_auth("/api/categories", &user.token, &json!({ "name": "Bakery" }))
        .await
        .unwrap();
    assert_data::<CategoryResponse>(response, StatusCode::OK).await.unwrap();

    let response = server.get_auth("/api/categories", &user.token).await.unwrap();
    let categories: Vec<CategoryResponse> = assert_data(response, StatusCode::OK).await.unwrap();
    let names: Vec<&str> = categories.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Bakery", "Cafe"]);

    let tagged = create_spot(&server, &user).await;
    create_spot(&server, &user).await;

    let response = server
        .put_auth(
            &format!("/api/spots/{}/categories", tagged.id),
            &user.token,
            &json!({ "category_ids": [cafe.id] }),
        )
        .await
        .unwrap();
    let assigned: Vec<CategoryResponse> = assert_data(response, StatusCode::OK).await.unwrap();
    assert_eq!(assigned.len(), 1);
    assert_eq!(assigned[0].id, cafe.id);

    let response = server
        .get(&format!("/api/spots?category_id={}", cafe.id))
        .await
        .unwrap();
    let filtered: Vec<SpotResponse> = assert_data(response, StatusCode::OK).await.unwrap();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].id, tagged.id);

    let response = server
        .delete_auth(&format!("/api/categories/{}", cafe.id), &user.token)
        .await
        .unwrap();
    let message = assert_message(response, StatusCode::OK).await.unwrap();
    assert_eq!(message, "Category deleted successfully");

    let response = server
        .delete_auth(&format!("/api/categories/{}", cafe.id), &user.token)
        .await
        .unwrap();
    assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_assign_unknown_category_is_not_found() {
    let server = TestServer::start().await.expect("Failed to start server");
    let user = TestUser::new().unwrap();
    let spot = create_spot(&server, &user).await;

    let response = server
        .put_auth(
            &format!("/api/spots/{}/categories", spot.id),
            &user.token,
            &json!({ "category_ids": [Uuid::new_v4()] }),
        )
        .await
        .unwrap();
    assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// User Tests
// ============================================================================

#[tokio::test]
async fn test_profile_created_on_first_read() {
    let server = TestServer::start().await.expect("Failed to start server");
    let user = TestUser::new().unwrap();

    let response = server.get_auth("/api/users", &user.token).await.unwrap();
    let row: UserResponse = assert_data(response, StatusCode::OK).await.unwrap();
    assert_eq!(row.id, user.id);
    assert!(row.username.is_none());

    let response = server
        .get_auth("/api/users/profile", &user.token)
        .await
        .unwrap();
    let profile: ProfileResponse = assert_data(response, StatusCode::OK).await.unwrap();
    assert!(profile.username.is_none());
}

#[tokio::test]
async fn test_update_profile_and_duplicate_username() {
    let server = TestServer::start().await.expect("Failed to start server");
    let first = TestUser::new().unwrap();
    let second = TestUser::new().unwrap();
    let username = format!("taken{}", unique_suffix());

    let response = server
        .put_auth(
            "/api/users/profile",
            &first.token,
            &json!({ "username": username, "bio": "Hello" }),
        )
        .await
        .unwrap();
    let profile: ProfileResponse = assert_data(response, StatusCode::OK).await.unwrap();
    assert_eq!(profile.username.as_deref(), Some(username.as_str()));
    assert_eq!(profile.bio.as_deref(), Some("Hello"));

    let response = server
        .put_auth("/api/users/profile", &second.token, &json!({ "username": username }))
        .await
        .unwrap();
    assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();

    // Keeping your own username is fine
    let response = server
        .put_auth("/api/users/profile", &first.token, &json!({ "username": username }))
        .await
        .unwrap();
    assert_data::<ProfileResponse>(response, StatusCode::OK).await.unwrap();
}
