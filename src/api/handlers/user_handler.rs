//! User handlers: registration, login and profile lookups.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Extension, Router,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use cookie::time::Duration;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::config::{LOGIN_SUCCESS_MESSAGE, SESSION_COOKIE_NAME};
use crate::domain::{Identity, LoginRequest, RegisterUser, User};
use crate::errors::AppResult;

/// Routes reachable without a session
pub fn public_user_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}

/// Routes behind the auth middleware
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/me", get(get_current_user))
        .route("/:username", get(get_user))
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/users/register",
    tag = "Users",
    request_body = RegisterUser,
    responses(
        (status = 200, description = "User registered", body = User),
        (status = 400, description = "Username or email already exists, or invalid input")
    )
)]
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<RegisterUser>,
) -> AppResult<Json<User>> {
    let user = state.user_service.register(payload).await?;

    Ok(Json(user))
}

/// Log in and receive a session cookie
#[utoipa::path(
    post,
    path = "/users/login",
    tag = "Users",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Logged in; SESSION cookie set", body = String),
        (status = 500, description = "Authentication failed")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(payload): Json<LoginRequest>,
) -> AppResult<(CookieJar, &'static str)> {
    let identity = state
        .user_service
        .verify_credentials(&payload.username, &payload.password)
        .await?;
    let session = state.auth_service.issue_token(&identity)?;

    let cookie = Cookie::build((SESSION_COOKIE_NAME, session.token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(Duration::seconds(session.expires_in))
        .build();

    Ok((jar.add(cookie), LOGIN_SUCCESS_MESSAGE))
}

/// Get the calling user, password blanked
#[utoipa::path(
    get,
    path = "/users/me",
    tag = "Users",
    security(("bearer_auth" = []), ("session_cookie" = [])),
    responses(
        (status = 200, description = "Current user", body = User),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "User no longer exists")
    )
)]
pub async fn get_current_user(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
) -> AppResult<Response> {
    let user = state.user_service.find_by_username(&identity.username).await?;

    Ok(match user {
        Some(user) => Json(user.redacted()).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    })
}

/// Get a user by username
#[utoipa::path(
    get,
    path = "/users/{username}",
    tag = "Users",
    params(("username" = String, Path, description = "Username")),
    security(("bearer_auth" = []), ("session_cookie" = [])),
    responses(
        (status = 200, description = "User found", body = User),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "No such user")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> AppResult<Response> {
    let user = state.user_service.find_by_username(&username).await?;

    Ok(match user {
        Some(user) => Json(state.policy.present_profile(user)).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    })
}
