use serde::{Deserialize, Serialize};

/// Request body for user registration.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub full_name: String,
    pub password: String,
}

/// OAuth2 password-grant form posted to /token.
#[derive(Debug, Deserialize)]
pub struct TokenForm {
    pub username: String,
    pub password: String,
}

/// Response returned after a successful login.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: &'static str,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_response_shape() {
        let resp = TokenResponse {
            access_token: "abc".into(),
            token_type: "bearer",
        };
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["access_token"], "abc");
        assert_eq!(json["token_type"], "bearer");
    }

    #[test]
    fn register_request_requires_all_fields() {
        let ok: Result<RegisterRequest, _> = serde_json::from_str(
            r#"{"email":"a@x.com","full_name":"Ada","password":"pw12345678"}"#,
        );
        assert!(ok.is_ok());

        let missing: Result<RegisterRequest, _> =
            serde_json::from_str(r#"{"email":"a@x.com","password":"pw12345678"}"#);
        assert!(missing.is_err());
    }
}
