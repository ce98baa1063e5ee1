use super::*;

#[test]
fn status_message_maps_auth_failures() {
    assert_eq!(status_message(401), "invalid email or password");
    assert_eq!(status_message(422), "invalid email or password");
}

#[test]
fn status_message_maps_throttling() {
    assert_eq!(status_message(429), "too many attempts, try again later");
}

#[test]
fn status_message_formats_other_statuses() {
    assert_eq!(status_message(500), "server responded with status 500");
}

#[test]
fn api_error_display_uses_status_message() {
    assert_eq!(ApiError::Status { status: 401 }.to_string(), "invalid email or password");
    assert_eq!(ApiError::Request("offline".to_owned()).to_string(), "request failed: offline");
}

#[test]
fn endpoints_are_rooted_api_paths() {
    for endpoint in [LOGIN_ENDPOINT, LOGOUT_ENDPOINT, CURRENT_USER_ENDPOINT] {
        assert!(endpoint.starts_with("/api/"), "{endpoint}");
    }
}
