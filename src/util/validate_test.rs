use super::*;

// =============================================================
// Email and password rules
// =============================================================

#[test]
fn email_needs_local_part_domain_and_dot() {
    assert!(is_valid_email("user@example.com"));
    assert!(is_valid_email("a.b+c@sub.example.io"));
    assert!(!is_valid_email("user@example"));
    assert!(!is_valid_email("@example.com"));
    assert!(!is_valid_email("user example@x.com"));
    assert!(!is_valid_email("user@@x.com"));
}

#[test]
fn password_needs_eight_chars() {
    assert!(!is_valid_password("1234567"));
    assert!(is_valid_password("12345678"));
    assert!(is_valid_password("pässwört"));
}

// =============================================================
// Login
// =============================================================

#[test]
fn login_trims_email_and_keeps_password() {
    let request = validate_login("  a@b.co ", " secret ", "").expect("valid");
    assert_eq!(request.email, "a@b.co");
    assert_eq!(request.password, " secret ");
    assert_eq!(request.gender, "");
}

#[test]
fn login_reports_all_missing_fields() {
    let errors = validate_login("   ", "", "").expect_err("invalid");
    assert_eq!(error_for(&errors, Field::Email), Some("Email is required"));
    assert_eq!(error_for(&errors, Field::Password), Some("Password is required"));
}

#[test]
fn login_rejects_malformed_email() {
    let errors = validate_login("nope", "x", "").expect_err("invalid");
    assert_eq!(errors, vec![FieldError { field: Field::Email, message: "Please enter a valid email" }]);
}

#[test]
fn login_does_not_enforce_password_length() {
    assert!(validate_login("a@b.co", "x", "").is_ok());
}

// =============================================================
// Signup
// =============================================================

#[test]
fn signup_requires_name_and_long_password() {
    let errors = validate_signup(" ", "a@b.co", "short", "").expect_err("invalid");
    assert_eq!(error_for(&errors, Field::Name), Some("Name is required"));
    assert_eq!(error_for(&errors, Field::Password), Some("Password must be at least 8 characters"));
    assert_eq!(error_for(&errors, Field::Email), None);
}

#[test]
fn signup_defaults_gender() {
    let request = validate_signup("Ada", "ada@example.com", "longenough", "").expect("valid");
    assert_eq!(request.gender, "unspecified");
    let request = validate_signup("Ada", "ada@example.com", "longenough", "female").expect("valid");
    assert_eq!(request.gender, "female");
}

#[test]
fn signup_missing_password_says_required() {
    let errors = validate_signup("Ada", "ada@example.com", "", "").expect_err("invalid");
    assert_eq!(error_for(&errors, Field::Password), Some("Password is required"));
}

// =============================================================
// Password reset
// =============================================================

#[test]
fn reset_builders_trim_identifiers_only() {
    assert_eq!(forgot_request(" a@b.co ").email, "a@b.co");
    let request = reset_request(" a@b.co", " 123456 ", " new pass ");
    assert_eq!(request.code, "123456");
    assert_eq!(request.new_password, " new pass ");
}

// =============================================================
// Skills
// =============================================================

#[test]
fn parse_skills_trims_and_drops_empties() {
    assert_eq!(parse_skills(" Python, SQL ,, ,excel"), vec!["Python", "SQL", "excel"]);
    assert!(parse_skills(" , ,").is_empty());
}

#[test]
fn validate_skills_requires_one() {
    assert_eq!(
        validate_skills(" , "),
        Err(FieldError { field: Field::Skills, message: "Please enter at least one skill." })
    );
    assert_eq!(validate_skills("rust"), Ok(vec!["rust".to_owned()]));
}
