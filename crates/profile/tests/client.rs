// File: crates/profile/tests/client.rs
// Purpose: Offline checks of auth headers and GraphQL envelope handling.

use profile::client::{basic_auth_header, decode_response, parse_token};
use profile::{parse_profile, ProfileError};

#[test]
fn basic_header_encodes_credentials() {
    assert_eq!(basic_auth_header("ada", "s3cret"), "Basic YWRhOnMzY3JldA==");
}

#[test]
fn token_is_a_json_string() {
    assert_eq!(parse_token("\"abc.def.ghi\"\n").expect("token"), "abc.def.ghi");
    assert!(matches!(parse_token("{\"error\":1}"), Err(ProfileError::Decode(_))));
}

#[test]
fn invalid_jwt_maps_to_not_authorized() {
    let body = r#"{"errors":[{"message":"Could not verify JWT","extensions":{"code":"invalid-jwt"}}]}"#;
    let err = decode_response::<serde_json::Value>(body).unwrap_err();
    assert!(matches!(err, ProfileError::NotAuthorized));
    assert!(matches!(parse_profile(body), Err(ProfileError::NotAuthorized)));
}

#[test]
fn other_graphql_errors_carry_the_message() {
    let body = r#"{"errors":[{"message":"field 'x' not found","extensions":{"code":"validation-failed"}}]}"#;
    match decode_response::<serde_json::Value>(body) {
        Err(ProfileError::GraphQl(msg)) => assert_eq!(msg, "field 'x' not found"),
        other => panic!("unexpected: {other:?}"),
    }
}

#[test]
fn missing_data_is_an_error() {
    assert!(matches!(decode_response::<serde_json::Value>("{}"), Err(ProfileError::GraphQl(_))));
    assert!(matches!(decode_response::<serde_json::Value>("not json"), Err(ProfileError::Decode(_))));
}
