use super::*;

#[test]
fn rejected_displays_server_message() {
    let err = ApiError::Rejected { status: 401, message: "Invalid credentials".to_owned() };
    assert_eq!(err.to_string(), "Invalid credentials");
    assert_eq!(err.server_message(), Some("Invalid credentials"));
}

#[test]
fn status_text_prefers_server_message() {
    let err = ApiError::Rejected { status: 400, message: "Email already exists".to_owned() };
    assert_eq!(err.status_text("Network error. Please try again."), "Email already exists");
}

#[test]
fn status_text_falls_back_for_transport_failures() {
    let err = ApiError::Transport("offline".to_owned());
    assert_eq!(err.status_text("Network error. Please try again."), "Network error. Please try again.");
    assert_eq!(err.to_string(), "network error: offline");
}

#[test]
fn status_and_decode_have_no_server_message() {
    assert_eq!(ApiError::Status(500).server_message(), None);
    assert_eq!(ApiError::Decode("eof".to_owned()).server_message(), None);
    assert_eq!(ApiError::Status(502).to_string(), "request failed: 502");
}
