//! Session authentication middleware.

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use axum_extra::extract::CookieJar;

use crate::api::AppState;
use crate::config::{BEARER_TOKEN_PREFIX, SESSION_COOKIE_NAME};
use crate::errors::AppError;

/// Session authentication middleware.
///
/// Reads the token from `Authorization: Bearer ...`, falling back to the
/// session cookie set at login, verifies it and injects the caller's
/// `Identity` into the request extensions.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = session_token(&request).ok_or(AppError::Unauthorized)?;

    let identity = state.auth_service.verify_token(&token)?;
    tracing::debug!(username = %identity.username, "Session verified");

    request.extensions_mut().insert(identity);

    Ok(next.run(request).await)
}

fn session_token(request: &Request) -> Option<String> {
    let bearer = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix(BEARER_TOKEN_PREFIX))
        .map(str::to_string);

    bearer.or_else(|| {
        CookieJar::from_headers(request.headers())
            .get(SESSION_COOKIE_NAME)
            .map(|c| c.value().to_string())
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{Request, StatusCode},
        middleware,
        routing::get,
        Extension, Router,
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use super::*;
    use crate::api::AccessPolicy;
    use crate::domain::Identity;
    use crate::infra::{MemoryItemStore, MemoryUserStore};
    use crate::services::{ItemManager, MockAuthService, UserManager};

    fn router(auth: MockAuthService) -> Router {
        let state = AppState::new(
            Arc::new(auth),
            Arc::new(UserManager::new(Arc::new(MemoryUserStore::new()))),
            Arc::new(ItemManager::new(Arc::new(MemoryItemStore::new()))),
            AccessPolicy::default(),
        );

        Router::new()
            .route(
                "/whoami",
                get(|Extension(identity): Extension<Identity>| async move { identity.username }),
            )
            .route_layer(middleware::from_fn_with_state(state.clone(), auth_middleware))
            .with_state(state)
    }

    fn accepting(token: &'static str) -> MockAuthService {
        let mut auth = MockAuthService::new();
        auth.expect_verify_token().returning(move |presented| {
            if presented == token {
                Ok(Identity::new("alice"))
            } else {
                Err(AppError::Unauthorized)
            }
        });
        auth
    }

    async fn call(app: Router, request: Request<Body>) -> (StatusCode, String) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_bearer_token_injects_identity() {
        let request = Request::builder()
            .uri("/whoami")
            .header(AUTHORIZATION, "Bearer good")
            .body(Body::empty())
            .unwrap();

        let (status, body) = call(router(accepting("good")), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "alice");
    }

    #[tokio::test]
    async fn test_session_cookie_injects_identity() {
        let request = Request::builder()
            .uri("/whoami")
            .header("cookie", "theme=dark; SESSION=good")
            .body(Body::empty())
            .unwrap();

        let (status, body) = call(router(accepting("good")), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "alice");
    }

    #[tokio::test]
    async fn test_missing_token_never_reaches_verifier() {
        let mut auth = MockAuthService::new();
        auth.expect_verify_token().never();

        let request = Request::builder().uri("/whoami").body(Body::empty()).unwrap();

        let (status, _) = call(router(auth), request).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_rejected_token_is_unauthorized() {
        let request = Request::builder()
            .uri("/whoami")
            .header(AUTHORIZATION, "Bearer forged")
            .body(Body::empty())
            .unwrap();

        let (status, _) = call(router(accepting("good")), request).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }
}
