use axum::{extract::State, Json};
use tracing::{info, instrument};

use crate::{
    auth::jwt::CurrentUser,
    error::Result,
    state::AppState,
    statements::{
        dto::{GmailAuthRequest, GmailAuthResponse},
        repo::Statement,
    },
};

/// Exchanges the authorization code, pulls the newest e-statement and stores
/// it unprocessed under the caller's email. Each call appends a new row.
#[instrument(skip(state, payload))]
pub async fn gmail_auth(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(payload): Json<GmailAuthRequest>,
) -> Result<Json<GmailAuthResponse>> {
    let credentials = state.gmail.exchange_code(&payload.code).await?;
    let data = state.gmail.fetch_estatement(&credentials).await?;

    let statement = Statement::insert(&state.db, &user.email, &data).await?;

    info!(
        statement_id = %statement.id,
        user_email = %statement.user_email,
        "e-statement stored"
    );
    // Echo the payload as fetched: jsonb normalization may reorder keys in
    // the stored copy.
    Ok(Json(GmailAuthResponse {
        message: "eStatement processed successfully",
        data,
    }))
}
