use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Request body for the Gmail authorization-code handoff.
#[derive(Debug, Deserialize)]
pub struct GmailAuthRequest {
    pub code: String,
}

#[derive(Debug, Serialize)]
pub struct GmailAuthResponse {
    pub message: &'static str,
    pub data: Value,
}
