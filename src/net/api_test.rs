use super::*;

fn client() -> ApiClient {
    ApiClient::new(&ClientConfig::new("https://clinic.test/"))
}

#[test]
fn endpoint_joins_base_url_and_path() {
    assert_eq!(client().endpoint(CURRENT_USER_PATH), "https://clinic.test/api/auth/user");
}

#[test]
fn bearer_is_shared_between_clones() {
    let api = client();
    let other = api.clone();
    api.set_bearer(Some("tok123"));
    assert_eq!(other.authorization_header().as_deref(), Some("Bearer tok123"));

    other.set_bearer(None);
    assert_eq!(api.authorization_header(), None);
}

#[test]
fn status_error_extracts_server_message() {
    let err = status_error(400, r#"{"message":"Invalid credentials"}"#);
    assert_eq!(err, ApiError::Status { status: 400, message: Some("Invalid credentials".to_owned()) });
    assert_eq!(err.user_message("Login failed. Please try again."), "Invalid credentials");
}

#[test]
fn status_error_without_json_body_has_no_message() {
    let err = status_error(502, "<html>Bad Gateway</html>");
    assert_eq!(err, ApiError::Status { status: 502, message: None });
    assert_eq!(err.user_message("fallback"), "fallback");
}

#[test]
fn user_message_ignores_blank_server_message() {
    let err = ApiError::Status { status: 400, message: Some("  ".to_owned()) };
    assert_eq!(err.user_message("fallback"), "fallback");
}

#[test]
fn transport_errors_use_fallback_message() {
    assert_eq!(ApiError::Transport("offline".to_owned()).user_message("fallback"), "fallback");
}

#[test]
fn decode_body_reports_shape_mismatch() {
    let result = decode_body::<Identity>(r#"{"unexpected":true}"#);
    assert!(matches!(result, Err(ApiError::Decode(_))));
}

#[cfg(not(feature = "csr"))]
#[test]
fn calls_are_unavailable_outside_the_browser() {
    let api = client();
    let result = futures::executor::block_on(api.current_user());
    assert_eq!(result, Err(ApiError::Unavailable));
}
