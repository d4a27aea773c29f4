//! Client for the fleet backend's authentication endpoints
//!
//! A thin pass-through: each call is one request, the JSON body of a 2xx
//! response is returned as-is and every failure is propagated to the caller.
//! No retries, caching or timeouts beyond the transport defaults.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::config::AuthConfig;
use crate::io::{HttpClient, HttpResponse};

const LOGIN_PATH: &str = "/api/login";
const SESSION_PATH: &str = "/api/session";
const LOGOUT_PATH: &str = "/api/logout";

/// Login credentials; never stored by the client
#[derive(Clone, Serialize, Deserialize)]
pub struct AuthCredentials {
    #[serde(rename = "usuario")]
    pub username: String,
    pub password: String,
}

impl AuthCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for AuthCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthCredentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Login, session check and logout against one backend
pub struct AuthClient {
    base_url: String,
    http: Arc<dyn HttpClient>,
}

impl std::fmt::Debug for AuthClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl AuthClient {
    pub fn new(config: &AuthConfig, http: Arc<dyn HttpClient>) -> Self {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        tracing::debug!("Created AuthClient for {:?}", base_url);
        Self { base_url, http }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `POST /api/login` with `{usuario, password}`
    pub async fn login(&self, credentials: &AuthCredentials) -> crate::Result<serde_json::Value> {
        self.login_as(credentials).await
    }

    pub async fn login_as<T: DeserializeOwned>(
        &self,
        credentials: &AuthCredentials,
    ) -> crate::Result<T> {
        let url = self.url(LOGIN_PATH);
        tracing::debug!("Logging in as {}", credentials.username);
        let body = serde_json::to_value(credentials)?;
        let response = self.http.post_json(&url, &body).await?;
        parse_response(&url, response)
    }

    /// `GET /api/session`; fails when the backend has no session for us
    pub async fn check_session(&self) -> crate::Result<serde_json::Value> {
        self.check_session_as().await
    }

    pub async fn check_session_as<T: DeserializeOwned>(&self) -> crate::Result<T> {
        let url = self.url(SESSION_PATH);
        tracing::debug!("Checking session");
        let response = self.http.get(&url).await?;
        parse_response(&url, response)
    }

    /// `POST /api/logout` with an empty JSON object
    pub async fn logout(&self) -> crate::Result<serde_json::Value> {
        self.logout_as().await
    }

    pub async fn logout_as<T: DeserializeOwned>(&self) -> crate::Result<T> {
        let url = self.url(LOGOUT_PATH);
        tracing::debug!("Logging out");
        let response = self
            .http
            .post_json(&url, &serde_json::Value::Object(Default::default()))
            .await?;
        parse_response(&url, response)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

fn parse_response<T: DeserializeOwned>(url: &str, response: HttpResponse) -> crate::Result<T> {
    if !response.is_success() {
        tracing::debug!("{} returned status {}", url, response.status);
        return Err(crate::TireLogError::Status {
            status: response.status,
            body: response.body,
        });
    }

    // An empty 2xx body parses as JSON null
    let body = if response.body.trim().is_empty() {
        "null"
    } else {
        response.body.as_str()
    };
    Ok(serde_json::from_str(body)?)
}
