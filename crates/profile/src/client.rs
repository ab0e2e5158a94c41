// File: crates/profile/src/client.rs
// Summary: Blocking HTTP sign-in and GraphQL requests against the profile platform.

use std::time::Duration;

use base64::Engine as _;
use reqwest::header::AUTHORIZATION;
use serde::de::DeserializeOwned;

use crate::error::ProfileError;
use crate::model::{GraphQlResponse, ProfileData, PROFILE_QUERY};

const USER_AGENT: &str = "profile-charts";
const TIMEOUT: Duration = Duration::from_secs(30);
/// GraphQL error code for an expired or forged token.
const INVALID_JWT: &str = "invalid-jwt";

fn http_client() -> Result<reqwest::blocking::Client, ProfileError> {
    Ok(reqwest::blocking::Client::builder().user_agent(USER_AGENT).timeout(TIMEOUT).build()?)
}

/// `Basic base64(username:password)`
pub fn basic_auth_header(username: &str, password: &str) -> String {
    let encoded = base64::engine::general_purpose::STANDARD.encode(format!("{username}:{password}"));
    format!("Basic {encoded}")
}

/// Exchange credentials for a token. The endpoint answers with a JSON string.
pub fn sign_in(endpoint: &str, username: &str, password: &str) -> Result<String, ProfileError> {
    let response = http_client()?
        .post(endpoint)
        .header(AUTHORIZATION, basic_auth_header(username, password))
        .send()?;
    if !response.status().is_success() {
        tracing::warn!(status = %response.status(), "sign-in rejected");
        return Err(ProfileError::InvalidCredentials);
    }
    let token = parse_token(&response.text()?)?;
    tracing::info!(user = username, "signed in");
    Ok(token)
}

/// Token body of a successful sign-in.
pub fn parse_token(body: &str) -> Result<String, ProfileError> {
    Ok(serde_json::from_str::<String>(body.trim())?)
}

/// Unwrap a GraphQL envelope: a rejected token and any other error are failures.
pub fn decode_response<T: DeserializeOwned>(body: &str) -> Result<T, ProfileError> {
    let envelope: GraphQlResponse<T> = serde_json::from_str(body)?;
    if let Some(first) = envelope.errors.first() {
        if envelope.errors.iter().any(|e| e.code() == Some(INVALID_JWT)) {
            return Err(ProfileError::NotAuthorized);
        }
        return Err(ProfileError::GraphQl(first.message.clone()));
    }
    envelope.data.ok_or_else(|| ProfileError::GraphQl("response carries no data".to_string()))
}

pub struct GraphQlClient {
    endpoint: String,
    token: String,
    http: reqwest::blocking::Client,
}

impl GraphQlClient {
    pub fn new(endpoint: impl Into<String>, token: impl Into<String>) -> Result<Self, ProfileError> {
        Ok(Self { endpoint: endpoint.into(), token: token.into(), http: http_client()? })
    }

    pub fn endpoint(&self) -> &str { &self.endpoint }

    /// POST `{"query": ...}` with the bearer token and decode `data`.
    pub fn request<T: DeserializeOwned>(&self, query: &str) -> Result<T, ProfileError> {
        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.token)
            .json(&serde_json::json!({ "query": query }))
            .send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(ProfileError::Status { status: status.as_u16(), url: self.endpoint.clone() });
        }
        let body = response.text()?;
        tracing::debug!(bytes = body.len(), "graphql response received");
        decode_response(&body)
    }

    pub fn fetch_profile(&self) -> Result<ProfileData, ProfileError> {
        self.request(PROFILE_QUERY)
    }
}

/// Parse a saved response: either the full GraphQL envelope or its bare `data` object.
pub fn parse_profile(json: &str) -> Result<ProfileData, ProfileError> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    if value.get("data").is_some() || value.get("errors").is_some() {
        return decode_response(json);
    }
    Ok(serde_json::from_value(value)?)
}
