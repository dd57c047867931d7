//! Session endpoints: register, login, current, logout, and the unprotected
//! login/current pair kept for parity with the original surface.

use axum::{
    extract::State,
    http::{header, HeaderMap, HeaderValue},
    response::{AppendHeaders, IntoResponse},
    routing::{get, post},
    Json, Router,
};
use axum_helpers::{
    clear_cookie, cookie_from_headers, envelope, session_cookie, ErrorBody, Message, SessionAuth,
    SessionClaims, SESSION_COOKIE, UNPROTECTED_COOKIE,
};
use chrono::Utc;
use database::{EntityAdapter, RepositoryError};
use utoipa::OpenApi;
use uuid::Uuid;

use crate::error::{UserError, UserResult};
use crate::models::{CreateUserRequest, LoginRequest, UpdateUser, User};
use crate::password::{hash_password, verify_password};
use crate::repository::UserRepository;

/// OpenAPI documentation for the Sessions API
#[derive(OpenApi)]
#[openapi(
    paths(register, login, current, logout, unprotected_login, unprotected_current),
    components(schemas(CreateUserRequest, LoginRequest, SessionClaims, Message, ErrorBody)),
    tags(
        (name = "Sessions", description = "Session-cookie authentication endpoints")
    )
)]
pub struct SessionsApiDoc;

/// Shared state for session handlers
pub struct SessionsState<A: EntityAdapter<User>> {
    repository: UserRepository<A>,
    auth: SessionAuth,
}

impl<A: EntityAdapter<User>> Clone for SessionsState<A> {
    fn clone(&self) -> Self {
        Self {
            repository: self.repository.clone(),
            auth: self.auth.clone(),
        }
    }
}

/// Create the sessions router
pub fn router<A: EntityAdapter<User> + 'static>(
    repository: UserRepository<A>,
    auth: SessionAuth,
) -> Router {
    let state = SessionsState { repository, auth };

    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/current", get(current))
        .route("/logout", post(logout))
        .route("/unprotectedLogin", post(unprotected_login))
        .route("/unprotectedCurrent", get(unprotected_current))
        .with_state(state)
}

fn set_cookie_header(cookie: String) -> UserResult<AppendHeaders<[(header::HeaderName, HeaderValue); 1]>> {
    let value = HeaderValue::from_str(&cookie)
        .map_err(|e| UserError::Internal(format!("Failed to build cookie: {}", e)))?;
    Ok(AppendHeaders([(header::SET_COOKIE, value)]))
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/register",
    tag = "Sessions",
    request_body = CreateUserRequest,
    responses(
        (status = 200, description = "New user id, enveloped", body = Uuid),
        (status = 400, description = "Incomplete values or existing user", body = ErrorBody)
    )
)]
async fn register<A: EntityAdapter<User>>(
    State(state): State<SessionsState<A>>,
    body: Option<Json<CreateUserRequest>>,
) -> UserResult<impl IntoResponse> {
    let Json(input) = body.unwrap_or_default();

    let (Some(first_name), Some(last_name), Some(email), Some(password)) =
        (input.first_name, input.last_name, input.email, input.password)
    else {
        return Err(UserError::IncompleteValues);
    };

    if state
        .repository
        .get_user_by_email(&email)
        .await?
        .is_some()
    {
        return Err(UserError::AlreadyExists);
    }

    let user = User::new(first_name, last_name, email, hash_password(&password)?);
    let created = state.repository.create(user).await?;

    tracing::info!(user_id = %created.id, "user registered");
    Ok(envelope::payload(created.id))
}

/// Verify credentials and issue a session token for the given cookie name
async fn authenticate<A: EntityAdapter<User>>(
    state: &SessionsState<A>,
    input: LoginRequest,
) -> UserResult<(User, String)> {
    let (Some(email), Some(password)) = (input.email, input.password) else {
        return Err(UserError::IncompleteValues);
    };

    let user = state
        .repository
        .get_user_by_email(&email)
        .await?
        .ok_or(UserError::DoesNotExist)?;

    if !verify_password(&password, &user.password)? {
        return Err(UserError::IncorrectPassword);
    }

    let token = state
        .auth
        .create_token(user.id, &user.display_name(), &user.role, &user.email)
        .map_err(|e| UserError::Internal(format!("Failed to create token: {}", e)))?;

    Ok((user, token))
}

async fn touch_last_connection<A: EntityAdapter<User>>(
    state: &SessionsState<A>,
    id: Uuid,
) -> UserResult<()> {
    let patch = UpdateUser {
        last_connection: Some(Utc::now()),
        ..Default::default()
    }
    .to_patch()
    .map_err(RepositoryError::from)?;

    state.repository.update(id, patch).await?;
    Ok(())
}

/// Login with email/password, setting the session cookie
#[utoipa::path(
    post,
    path = "/login",
    tag = "Sessions",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Logged in, session cookie set", body = Message),
        (status = 400, description = "Incomplete values or incorrect password", body = ErrorBody),
        (status = 404, description = "Unknown email", body = ErrorBody)
    )
)]
async fn login<A: EntityAdapter<User>>(
    State(state): State<SessionsState<A>>,
    body: Option<Json<LoginRequest>>,
) -> UserResult<impl IntoResponse> {
    let Json(input) = body.unwrap_or_default();
    let (user, token) = authenticate(&state, input).await?;

    touch_last_connection(&state, user.id).await?;

    let headers = set_cookie_header(session_cookie(SESSION_COOKIE, &token))?;
    tracing::info!(user_id = %user.id, "user logged in");
    Ok((headers, envelope::message("Logged in")))
}

/// Return the claims of the current session
#[utoipa::path(
    get,
    path = "/current",
    tag = "Sessions",
    responses(
        (status = 200, description = "Session claims, enveloped", body = SessionClaims),
        (status = 401, description = "Missing or invalid session", body = ErrorBody)
    )
)]
async fn current<A: EntityAdapter<User>>(
    State(state): State<SessionsState<A>>,
    headers: HeaderMap,
) -> UserResult<impl IntoResponse> {
    let token =
        cookie_from_headers(&headers, SESSION_COOKIE).ok_or(UserError::NotAuthenticated)?;

    let claims = state
        .auth
        .verify_token(&token)
        .map_err(|_| UserError::InvalidToken)?;

    Ok(envelope::payload(claims))
}

/// Logout: update last_connection and clear the session cookie
#[utoipa::path(
    post,
    path = "/logout",
    tag = "Sessions",
    responses(
        (status = 200, description = "Logged out, cookie cleared", body = Message),
        (status = 400, description = "No session cookie present", body = ErrorBody)
    )
)]
async fn logout<A: EntityAdapter<User>>(
    State(state): State<SessionsState<A>>,
    headers: HeaderMap,
) -> UserResult<impl IntoResponse> {
    let token = cookie_from_headers(&headers, SESSION_COOKIE).ok_or(UserError::NoSession)?;

    let claims = state
        .auth
        .verify_token(&token)
        .map_err(|_| UserError::InvalidToken)?;

    touch_last_connection(&state, claims.id).await?;

    let headers = set_cookie_header(clear_cookie(SESSION_COOKIE))?;
    tracing::info!(user_id = %claims.id, "user logged out");
    Ok((headers, envelope::message("Logged out")))
}

/// Login variant writing a cookie that is not used by protected reads
#[utoipa::path(
    post,
    path = "/unprotectedLogin",
    tag = "Sessions",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Logged in, unprotected cookie set", body = Message),
        (status = 400, description = "Incomplete values or incorrect password", body = ErrorBody),
        (status = 404, description = "Unknown email", body = ErrorBody)
    )
)]
async fn unprotected_login<A: EntityAdapter<User>>(
    State(state): State<SessionsState<A>>,
    body: Option<Json<LoginRequest>>,
) -> UserResult<impl IntoResponse> {
    let Json(input) = body.unwrap_or_default();
    let (user, token) = authenticate(&state, input).await?;

    let headers = set_cookie_header(session_cookie(UNPROTECTED_COOKIE, &token))?;
    tracing::info!(user_id = %user.id, "user logged in (unprotected)");
    Ok((headers, envelope::message("Unprotected Logged in")))
}

/// Current-session variant reading the unprotected cookie
#[utoipa::path(
    get,
    path = "/unprotectedCurrent",
    tag = "Sessions",
    responses(
        (status = 200, description = "Session claims, enveloped", body = SessionClaims),
        (status = 401, description = "Missing or invalid session", body = ErrorBody)
    )
)]
async fn unprotected_current<A: EntityAdapter<User>>(
    State(state): State<SessionsState<A>>,
    headers: HeaderMap,
) -> UserResult<impl IntoResponse> {
    let token =
        cookie_from_headers(&headers, UNPROTECTED_COOKIE).ok_or(UserError::NotAuthenticated)?;

    let claims = state
        .auth
        .verify_token(&token)
        .map_err(|_| UserError::InvalidToken)?;

    Ok(envelope::payload(claims))
}
