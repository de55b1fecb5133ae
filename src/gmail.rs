use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::GoogleConfig;

const TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
const MESSAGES_URL: &str = "https://gmail.googleapis.com/gmail/v1/users/me/messages";
const ESTATEMENT_QUERY: &str = "subject:(e-statement OR estatement) has:attachment";

#[derive(Error, Debug)]
pub enum GmailError {
    #[error("authorization code rejected")]
    CodeRejected,

    #[error("no e-statement message found")]
    NoStatement,

    #[error("gmail api returned status {status}")]
    Api { status: u16 },

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Short-lived Gmail access obtained from an authorization-code exchange.
#[derive(Debug, Clone, Deserialize)]
pub struct GmailCredentials {
    pub access_token: String,
}

/// Seam for the Gmail collaborator, so handlers can be exercised without
/// talking to Google.
#[async_trait]
pub trait GmailClient: Send + Sync {
    async fn exchange_code(&self, code: &str) -> Result<GmailCredentials, GmailError>;
    async fn fetch_estatement(&self, creds: &GmailCredentials) -> Result<Value, GmailError>;
}

#[derive(Clone)]
pub struct GoogleGmail {
    client: reqwest::Client,
    config: GoogleConfig,
}

impl GoogleGmail {
    pub fn new(config: GoogleConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("cardwise/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client, config })
    }
}

#[derive(Debug, Deserialize)]
struct MessageRef {
    id: String,
}

#[derive(Debug, Deserialize)]
struct MessageList {
    #[serde(default)]
    messages: Vec<MessageRef>,
}

#[async_trait]
impl GmailClient for GoogleGmail {
    async fn exchange_code(&self, code: &str) -> Result<GmailCredentials, GmailError> {
        let form = [
            ("client_id", self.config.client_id.as_str()),
            ("client_secret", self.config.client_secret.as_str()),
            ("redirect_uri", self.config.redirect_uri.as_str()),
            ("grant_type", "authorization_code"),
            ("code", code),
        ];

        let resp = self.client.post(TOKEN_URL).form(&form).send().await?;
        match resp.status() {
            s if s.is_success() => {}
            // Google answers a bad or replayed code with 400 invalid_grant.
            StatusCode::BAD_REQUEST | StatusCode::UNAUTHORIZED => {
                warn!("authorization code rejected by token endpoint");
                return Err(GmailError::CodeRejected);
            }
            s => return Err(GmailError::Api { status: s.as_u16() }),
        }

        let creds = resp.json::<GmailCredentials>().await?;
        debug!("authorization code exchanged");
        Ok(creds)
    }

    async fn fetch_estatement(&self, creds: &GmailCredentials) -> Result<Value, GmailError> {
        let resp = self
            .client
            .get(MESSAGES_URL)
            .bearer_auth(&creds.access_token)
            .query(&[("q", ESTATEMENT_QUERY), ("maxResults", "1")])
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(GmailError::Api {
                status: resp.status().as_u16(),
            });
        }

        let list = resp.json::<MessageList>().await?;
        let message = list.messages.into_iter().next().ok_or(GmailError::NoStatement)?;

        let resp = self
            .client
            .get(format!("{}/{}", MESSAGES_URL, message.id))
            .bearer_auth(&creds.access_token)
            .query(&[("format", "full")])
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(GmailError::Api {
                status: resp.status().as_u16(),
            });
        }

        let data = resp.json::<Value>().await?;
        debug!(message_id = %message.id, "e-statement fetched");
        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_list_tolerates_empty_result() {
        // Gmail omits the "messages" key entirely when the query matches nothing.
        let list: MessageList = serde_json::from_str(r#"{"resultSizeEstimate": 0}"#).unwrap();
        assert!(list.messages.is_empty());
    }

    #[test]
    fn credentials_parse_from_token_response() {
        let creds: GmailCredentials = serde_json::from_str(
            r#"{"access_token":"ya29.abc","expires_in":3599,"token_type":"Bearer"}"#,
        )
        .unwrap();
        assert_eq!(creds.access_token, "ya29.abc");
    }
}
