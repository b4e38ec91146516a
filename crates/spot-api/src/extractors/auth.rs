//! Authentication extractor
//!
//! Verifies the bearer token from the Authorization header through the
//! configured identity verifier.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use spot_common::AppError;
use spot_core::UserId;

use crate::response::ApiError;
use crate::state::AppState;

/// Authenticated user resolved from the bearer token
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// User ID from the token subject
    pub user_id: UserId,
    pub email: Option<String>,
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::App(AppError::MissingAuth))?;

        let app_state = AppState::from_ref(state);

        let identity = app_state
            .identity_verifier()
            .verify(bearer.token())
            .map_err(|e| {
                tracing::warn!(error = %e, "Rejected bearer token");
                ApiError::App(e)
            })?;

        Ok(AuthUser {
            user_id: identity.user_id,
            email: identity.email,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;
    use chrono::Utc;
    use jsonwebtoken::{encode, EncodingKey, Header};
    use spot_common::{AppConfig, Claims, JwtIdentityVerifier};
    use spot_db::InMemoryStore;
    use spot_service::ServiceContext;
    use std::sync::Arc;

    const SECRET: &str = "extractor-test-secret";

    fn state() -> AppState {
        let config = AppConfig::from_lookup(|key| match key {
            "API_PORT" => Some("0".to_string()),
            "STORAGE_BACKEND" => Some("memory".to_string()),
            "AUTH_JWT_SECRET" => Some(SECRET.to_string()),
            _ => None,
        })
        .unwrap();
        let verifier = Arc::new(JwtIdentityVerifier::from_config(&config.auth));
        AppState::new(ServiceContext::in_memory(InMemoryStore::new()), verifier, config)
    }

    fn token(sub: &str) -> String {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: sub.to_string(),
            iat: now,
            exp: now + 600,
            aud: "authenticated".to_string(),
            email: Some("someone@example.com".to_string()),
            role: None,
        };
        encode(&Header::default(), &claims, &EncodingKey::from_secret(SECRET.as_bytes())).unwrap()
    }

    async fn extract(authorization: Option<String>) -> Result<AuthUser, ApiError> {
        let mut builder = Request::builder().uri("/api/users");
        if let Some(value) = authorization {
            builder = builder.header("authorization", value);
        }
        let (mut parts, ()) = builder.body(()).unwrap().into_parts();
        AuthUser::from_request_parts(&mut parts, &state()).await
    }

    #[tokio::test]
    async fn test_valid_bearer_token() {
        let user_id = UserId::generate();
        let user = extract(Some(format!("Bearer {}", token(&user_id.to_string()))))
            .await
            .unwrap();
        assert_eq!(user.user_id, user_id);
        assert_eq!(user.email.as_deref(), Some("someone@example.com"));
    }

    #[tokio::test]
    async fn test_missing_header() {
        let err = extract(None).await.unwrap_err();
        assert_eq!(err.error_code(), "MISSING_AUTH");
    }

    #[tokio::test]
    async fn test_non_uuid_subject() {
        let err = extract(Some(format!("Bearer {}", token("not-a-uuid"))))
            .await
            .unwrap_err();
        assert_eq!(err.error_code(), "INVALID_TOKEN");
    }
}
