use super::constants::{self, headers};
use super::models::TokenPair;
use crate::session::{Role, Session};
use anyhow::{Context, Result};
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use log::{debug, info};
use reqwest::Client;
use serde::Deserialize;
use serde_json::{Value, json};

/// Claims the server puts in the access token payload
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AccessClaims {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default)]
    pub is_superuser: bool,
    #[serde(default)]
    pub exp: Option<i64>,
}

impl AccessClaims {
    pub fn role(&self) -> Role {
        Role::from_claims(self.is_admin, self.is_superuser)
    }
}

/// Read the payload segment of a JWT. The signature is not checked; the
/// server does that on every request.
pub fn decode_claims(token: &str) -> Result<AccessClaims> {
    let payload = token
        .split('.')
        .nth(1)
        .ok_or_else(|| anyhow::anyhow!("Access token is not a JWT"))?;

    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .context("Access token payload is not valid base64")?;

    serde_json::from_slice(&bytes).context("Access token payload is not valid JSON")
}

/// Unauthenticated calls against the token endpoints
pub struct AuthClient {
    client: Client,
    base_url: String,
}

impl AuthClient {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub async fn login(&self, username: &str, password: &str) -> Result<TokenPair> {
        let url = format!("{}{}", self.base_url, constants::LOGIN_ENDPOINT);
        debug!("Attempting login to {} as {}", url, username);

        let response = self
            .client
            .post(&url)
            .header("Content-Type", headers::CONTENT_TYPE_JSON)
            .json(&json!({ "username": username, "password": password }))
            .send()
            .await?;

        debug!("Login request status: {}", response.status());

        if response.status().is_success() {
            let tokens: TokenPair = response
                .json()
                .await
                .context("Login response did not contain an access/refresh pair")?;
            info!("Login succeeded for {}", username);
            Ok(tokens)
        } else {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            anyhow::bail!("Login failed ({}): {}", status, error_text)
        }
    }

    /// Exchange a refresh token for a new access token
    pub async fn refresh(&self, refresh_token: &str) -> Result<String> {
        let url = format!("{}{}", self.base_url, constants::REFRESH_ENDPOINT);
        debug!("Refreshing access token at {}", url);

        let response = self
            .client
            .post(&url)
            .header("Content-Type", headers::CONTENT_TYPE_JSON)
            .json(&json!({ "refresh": refresh_token }))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            anyhow::bail!("Token refresh failed ({}): {}", status, error_text);
        }

        let body: Value = response.json().await?;
        body.get("access")
            .and_then(|a| a.as_str())
            .map(|s| s.to_string())
            .ok_or_else(|| anyhow::anyhow!("No access token in refresh response"))
    }
}

/// Build a session from a fresh token pair. The client profile is attached
/// later for non-staff accounts.
pub fn session_from_tokens(tokens: TokenPair, fallback_username: &str) -> Result<Session> {
    let claims = decode_claims(&tokens.access)?;
    let role = claims.role();
    debug!("Token claims resolved to role {}", role.label());

    Ok(Session {
        username: Some(claims.username.unwrap_or_else(|| fallback_username.to_string())),
        access_token: Some(tokens.access),
        refresh_token: Some(tokens.refresh),
        role,
        client: None,
    })
}

#[cfg(test)]
pub(crate) fn fake_jwt(claims: &Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(claims.to_string().as_bytes());
    format!("{}.{}.signature", header, payload)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_staff_claims() {
        let token = fake_jwt(&json!({"username": "agent", "is_admin": true, "exp": 1700000000}));
        let claims = decode_claims(&token).unwrap();

        assert_eq!(claims.username.as_deref(), Some("agent"));
        assert_eq!(claims.role(), Role::Staff);
        assert_eq!(claims.exp, Some(1700000000));
    }

    #[test]
    fn test_missing_flags_mean_client() {
        let token = fake_jwt(&json!({"user_id": 3}));
        assert_eq!(decode_claims(&token).unwrap().role(), Role::Client);
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(decode_claims("not-a-token").is_err());
        assert!(decode_claims("a.!!!.c").is_err());
    }

    #[test]
    fn test_session_from_tokens() {
        let tokens = TokenPair {
            access: fake_jwt(&json!({"is_admin": true, "is_superuser": true})),
            refresh: "refresh-token".to_string(),
        };

        let session = session_from_tokens(tokens, "root").unwrap();
        assert_eq!(session.role, Role::Superuser);
        assert_eq!(session.username.as_deref(), Some("root"));
        assert_eq!(session.refresh_token.as_deref(), Some("refresh-token"));
        assert!(session.is_authenticated());
    }
}
