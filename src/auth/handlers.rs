use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    Form, Json,
};
use lazy_static::lazy_static;
use regex::Regex;
use tracing::{info, instrument, warn};

use crate::{
    auth::{
        dto::{MessageResponse, RegisterRequest, TokenForm, TokenResponse},
        jwt::{CurrentUser, JwtKeys},
        password::{hash_password, verify_password},
        repo::{User, UserProfile},
    },
    error::{ApiError, Result},
    state::AppState,
};

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    Json(mut payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<MessageResponse>)> {
    payload.email = payload.email.trim().to_lowercase();

    if !is_valid_email(&payload.email) {
        warn!(email = %payload.email, "invalid email");
        return Err(ApiError::InvalidInput("Invalid email".into()));
    }
    if payload.password.len() < 8 {
        warn!("password too short");
        return Err(ApiError::InvalidInput("Password too short".into()));
    }
    if payload.full_name.trim().is_empty() {
        return Err(ApiError::InvalidInput("Full name is required".into()));
    }

    if User::find_by_email(&state.db, &payload.email).await?.is_some() {
        warn!(email = %payload.email, "email already registered");
        return Err(ApiError::EmailTaken);
    }

    let hash = hash_password(&payload.password)?;

    let user = match User::create(&state.db, &payload.email, payload.full_name.trim(), &hash).await
    {
        Ok(u) => u,
        // Lost race against a concurrent register for the same email.
        Err(e) if is_unique_violation(&e) => return Err(ApiError::EmailTaken),
        Err(e) => return Err(e.into()),
    };

    info!(email = %user.email, "user registered");
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "User created successfully",
        }),
    ))
}

#[instrument(skip(state, form))]
pub async fn login(
    State(state): State<AppState>,
    Form(form): Form<TokenForm>,
) -> Result<Json<TokenResponse>> {
    let email = form.username.trim().to_lowercase();

    let user = match User::find_by_email(&state.db, &email).await? {
        Some(u) => u,
        None => {
            warn!(email = %email, "login unknown email");
            return Err(ApiError::InvalidCredentials);
        }
    };

    if !verify_password(&form.password, &user.hashed_password)? {
        warn!(email = %email, "login invalid password");
        return Err(ApiError::InvalidCredentials);
    }

    let keys = JwtKeys::from_ref(&state);
    let access_token = keys.sign(&user.email)?;

    info!(email = %user.email, "user logged in");
    Ok(Json(TokenResponse {
        access_token,
        token_type: "bearer",
    }))
}

#[instrument(skip(state))]
pub async fn profile(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Json<UserProfile>> {
    // The guard already confirmed existence; a miss here means the row was
    // deleted out-of-band since then, which reads the same as a stale token.
    let profile = UserProfile::find_by_email(&state.db, &user.email)
        .await?
        .ok_or(ApiError::InvalidToken)?;

    Ok(Json(profile))
}

fn is_unique_violation(e: &sqlx::Error) -> bool {
    matches!(e, sqlx::Error::Database(db) if db.is_unique_violation())
}
