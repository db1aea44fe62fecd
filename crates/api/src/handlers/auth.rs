use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Redirect;
use axum::Json;
use axum_extra::extract::cookie::{Cookie, SameSite, SignedCookieJar};
use domainboard_domain::{AuthProvider, Credentials, User};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::dto::{LoginRequest, RegisterRequest, UserResponse};
use crate::error::ApiError;
use crate::session::SESSION_COOKIE;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct OAuthCallbackQuery {
    pub code: Option<String>,
}

fn session_cookie(value: String) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, value))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}

fn start_session(
    state: &AppState,
    jar: SignedCookieJar,
    user: &User,
) -> Result<SignedCookieJar, ApiError> {
    let user_id = user.id.ok_or_else(|| {
        ApiError::message(
            StatusCode::INTERNAL_SERVER_ERROR,
            "User row has no id",
        )
    })?;
    let session_id = state.sessions.create(user_id);
    Ok(jar.add(session_cookie(session_id)))
}

pub async fn register(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, SignedCookieJar, Json<UserResponse>), ApiError> {
    let (email, password, name) = match (req.email, req.password, req.name) {
        (Some(email), Some(password), Some(name)) => (email, password, name),
        _ => {
            return Err(ApiError::message(
                StatusCode::BAD_REQUEST,
                "Email, password, and name are required",
            ))
        }
    };

    let user = state
        .register_user
        .execute(email, password, name)
        .await
        .map_err(|e| ApiError::from_domain(e, "Failed to register user"))?;

    let jar = start_session(&state, jar, &user)?;
    Ok((StatusCode::CREATED, jar, Json(UserResponse::from_user(user))))
}

pub async fn login(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Json(req): Json<LoginRequest>,
) -> Result<(SignedCookieJar, Json<UserResponse>), ApiError> {
    let user = state
        .authenticate
        .execute(Credentials::Local {
            email: req.email,
            password: req.password,
        })
        .await
        .map_err(|e| ApiError::from_domain(e, "Login failed"))?;

    let jar = start_session(&state, jar, &user)?;
    Ok((jar, Json(UserResponse::from_user(user))))
}

pub async fn get_current_user(
    State(state): State<AppState>,
    jar: SignedCookieJar,
) -> Result<Json<UserResponse>, ApiError> {
    let session_id = jar
        .get(SESSION_COOKIE)
        .map(|cookie| cookie.value().to_string())
        .ok_or_else(|| ApiError::message(StatusCode::UNAUTHORIZED, "Not authenticated"))?;

    let user_id = state
        .sessions
        .user_id(&session_id)
        .ok_or_else(|| ApiError::message(StatusCode::UNAUTHORIZED, "Not authenticated"))?;

    // Session only stores the id; the row is re-fetched per request.
    let user = state.get_user.execute(user_id).await.map_err(|e| {
        warn!(user_id, error = %e, "Session user no longer resolvable");
        ApiError::message(StatusCode::UNAUTHORIZED, "Not authenticated")
    })?;

    Ok(Json(UserResponse::from_user(user)))
}

pub async fn logout(
    State(state): State<AppState>,
    jar: SignedCookieJar,
) -> (SignedCookieJar, Json<Value>) {
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        state.sessions.remove(cookie.value());
    }

    let removal = Cookie::build((SESSION_COOKIE, "")).path("/").build();
    (
        jar.remove(removal),
        Json(json!({ "message": "Logged out successfully" })),
    )
}

pub async fn github_login(State(state): State<AppState>) -> Result<Redirect, ApiError> {
    oauth_redirect(&state, AuthProvider::Github)
}

pub async fn google_login(State(state): State<AppState>) -> Result<Redirect, ApiError> {
    oauth_redirect(&state, AuthProvider::Google)
}

fn oauth_redirect(state: &AppState, provider: AuthProvider) -> Result<Redirect, ApiError> {
    let url = state
        .oauth
        .authorize_url(provider)
        .map_err(|e| ApiError::from_domain(e, "OAuth login unavailable"))?;

    debug!(%provider, "Redirecting to OAuth consent page");
    Ok(Redirect::temporary(&url))
}

pub async fn github_callback(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Query(query): Query<OAuthCallbackQuery>,
) -> Result<(SignedCookieJar, Redirect), ApiError> {
    oauth_callback(state, jar, AuthProvider::Github, query).await
}

pub async fn google_callback(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Query(query): Query<OAuthCallbackQuery>,
) -> Result<(SignedCookieJar, Redirect), ApiError> {
    oauth_callback(state, jar, AuthProvider::Google, query).await
}

async fn oauth_callback(
    state: AppState,
    jar: SignedCookieJar,
    provider: AuthProvider,
    query: OAuthCallbackQuery,
) -> Result<(SignedCookieJar, Redirect), ApiError> {
    let code = query.code.ok_or_else(|| {
        ApiError::message(StatusCode::BAD_REQUEST, "Missing authorization code")
    })?;

    let profile = state
        .oauth
        .exchange_code(provider, &code)
        .await
        .map_err(|e| ApiError::from_domain(e, "OAuth exchange failed"))?;

    let user = state
        .authenticate
        .execute(Credentials::OAuth(profile))
        .await
        .map_err(|e| ApiError::from_domain(e, "OAuth login failed"))?;

    let jar = start_session(&state, jar, &user)?;
    Ok((jar, Redirect::to(&state.frontend_origin)))
}
