use super::*;

// =============================================================
// Chat
// =============================================================

#[test]
fn chat_request_serializes_message_field() {
    let body = serde_json::to_value(ChatRequest { message: "Hello".to_owned() }).expect("serialize");
    assert_eq!(body, serde_json::json!({ "message": "Hello" }));
}

#[test]
fn chat_reply_accepts_null_or_missing_source() {
    let with_null: ChatReply = serde_json::from_str(r#"{"reply":"Hi","source":null}"#).expect("decode");
    assert_eq!(with_null.source, None);
    let missing: ChatReply = serde_json::from_str(r#"{"reply":"Hi"}"#).expect("decode");
    assert_eq!(missing, with_null);
    let dataset: ChatReply = serde_json::from_str(r#"{"reply":"Hi","source":"dataset"}"#).expect("decode");
    assert_eq!(dataset.source.as_deref(), Some("dataset"));
}

#[test]
fn chat_reply_requires_reply() {
    assert!(serde_json::from_str::<ChatReply>(r#"{"source":"ai"}"#).is_err());
}

// =============================================================
// Auth forms
// =============================================================

#[test]
fn reset_request_uses_snake_case_password_field() {
    let body = serde_json::to_value(ResetRequest {
        email: "a@b.co".to_owned(),
        code: "123456".to_owned(),
        new_password: "hunter22".to_owned(),
    })
    .expect("serialize");
    assert_eq!(body["new_password"], "hunter22");
}

#[test]
fn message_response_tolerates_missing_message() {
    let resp: MessageResponse = serde_json::from_str("{}").expect("decode");
    assert!(resp.message.is_empty());
}

#[test]
fn forgot_response_reads_echoed_code() {
    let resp: ForgotResponse =
        serde_json::from_str(r#"{"message":"sent","reset_code":"042042"}"#).expect("decode");
    assert_eq!(resp.reset_code.as_deref(), Some("042042"));
}

// =============================================================
// Suggestions
// =============================================================

#[test]
fn suggest_response_decodes_recommendations() {
    let resp: SuggestResponse = serde_json::from_str(
        r#"{"recommendations":[{"career":"Data Analyst","score":3,"top_skills":["sql","python"],"learn_link":"https://x"}]}"#,
    )
    .expect("decode");
    let rec = &resp.recommendations[0];
    assert_eq!(rec.career, "Data Analyst");
    assert_eq!(rec.score_label(), "3");
    assert_eq!(rec.top_skills_label(), "sql, python");
}

#[test]
fn recommendation_defaults_missing_fields() {
    let rec: Recommendation = serde_json::from_str(r#"{"career":"Nurse"}"#).expect("decode");
    assert!(rec.top_skills.is_empty());
    assert_eq!(rec.learn_link, "#");
    assert_eq!(rec.score_label(), "0");
}

#[test]
fn fractional_score_label_keeps_two_decimals() {
    let rec: Recommendation = serde_json::from_str(r#"{"career":"Nurse","score":2.5}"#).expect("decode");
    assert_eq!(rec.score_label(), "2.50");
}

#[test]
fn empty_suggest_response_has_no_recommendations() {
    let resp: SuggestResponse = serde_json::from_str("{}").expect("decode");
    assert!(resp.recommendations.is_empty());
}
