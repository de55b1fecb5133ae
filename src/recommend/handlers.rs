use axum::Json;
use tracing::{debug, instrument};

use crate::{
    auth::jwt::CurrentUser,
    error::Result,
    recommend::{
        dto::{RecommendResponse, SpendData},
        engine::recommend_card,
    },
};

/// Scores the caller's spend profile against the card catalog. No persistence.
#[instrument(skip(spend))]
pub async fn recommend(
    user: CurrentUser,
    Json(spend): Json<SpendData>,
) -> Result<Json<RecommendResponse>> {
    let recommendation = recommend_card(&spend);
    debug!(email = %user.email, card = %recommendation.card, "recommendation computed");
    Ok(Json(RecommendResponse { recommendation }))
}
