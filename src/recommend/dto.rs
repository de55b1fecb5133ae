use serde::{Deserialize, Serialize};

use crate::recommend::engine::Recommendation;

/// Monthly spend per category. Missing categories default to zero so clients
/// only send what they track.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SpendData {
    #[serde(default)]
    pub dining: f64,
    #[serde(default)]
    pub groceries: f64,
    #[serde(default)]
    pub travel: f64,
    #[serde(default)]
    pub fuel: f64,
    #[serde(default)]
    pub online_shopping: f64,
    #[serde(default)]
    pub other: f64,
}

#[derive(Debug, Serialize)]
pub struct RecommendResponse {
    pub recommendation: Recommendation,
}
