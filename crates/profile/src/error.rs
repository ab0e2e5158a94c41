// File: crates/profile/src/error.rs
// Summary: Error type for sign-in, GraphQL transport and response decoding.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("not authorized: the token was rejected")]
    NotAuthorized,
    #[error("unexpected HTTP status {status} from {url}")]
    Status { status: u16, url: String },
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("graphql error: {0}")]
    GraphQl(String),
    #[error("response contains no user")]
    MissingUser,
}
