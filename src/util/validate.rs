//! Form input validation.
//!
//! Failures are reported per field so pages can render each message next to
//! the offending input; a form with any error is never submitted.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use std::sync::LazyLock;

use regex::Regex;

use crate::net::types::{ForgotRequest, LoginRequest, ResetRequest, SignupRequest};

static EMAIL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid regex"));

pub const MIN_PASSWORD_CHARS: usize = 8;
pub const DEFAULT_GENDER: &str = "unspecified";

/// Form inputs that can carry an inline error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Password,
    Skills,
}

/// A validation failure attached to one field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: &'static str,
}

impl FieldError {
    const fn new(field: Field, message: &'static str) -> Self {
        Self { field, message }
    }
}

/// First message recorded for `field`, if any.
#[must_use]
pub fn error_for(errors: &[FieldError], field: Field) -> Option<&'static str> {
    errors.iter().find(|e| e.field == field).map(|e| e.message)
}

#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL.is_match(email)
}

#[must_use]
pub fn is_valid_password(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_CHARS
}

fn check_email(email: &str, errors: &mut Vec<FieldError>) {
    if email.is_empty() {
        errors.push(FieldError::new(Field::Email, "Email is required"));
    } else if !is_valid_email(email) {
        errors.push(FieldError::new(Field::Email, "Please enter a valid email"));
    }
}

/// Validate the login form. Email is trimmed; the password is taken as typed.
///
/// # Errors
///
/// Returns every field error found.
pub fn validate_login(email: &str, password: &str, gender: &str) -> Result<LoginRequest, Vec<FieldError>> {
    let email = email.trim();
    let mut errors = Vec::new();
    check_email(email, &mut errors);
    if password.is_empty() {
        errors.push(FieldError::new(Field::Password, "Password is required"));
    }
    if !errors.is_empty() {
        return Err(errors);
    }
    Ok(LoginRequest { email: email.to_owned(), password: password.to_owned(), gender: gender.to_owned() })
}

/// Validate the signup form. An empty gender becomes `unspecified`.
///
/// # Errors
///
/// Returns every field error found.
pub fn validate_signup(name: &str, email: &str, password: &str, gender: &str) -> Result<SignupRequest, Vec<FieldError>> {
    let name = name.trim();
    let email = email.trim();
    let mut errors = Vec::new();
    if name.is_empty() {
        errors.push(FieldError::new(Field::Name, "Name is required"));
    }
    check_email(email, &mut errors);
    if password.is_empty() {
        errors.push(FieldError::new(Field::Password, "Password is required"));
    } else if !is_valid_password(password) {
        errors.push(FieldError::new(Field::Password, "Password must be at least 8 characters"));
    }
    if !errors.is_empty() {
        return Err(errors);
    }
    let gender = if gender.trim().is_empty() { DEFAULT_GENDER } else { gender };
    Ok(SignupRequest {
        name: name.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
        gender: gender.to_owned(),
    })
}

/// Build the forgot-password request; the server decides whether the email is known.
#[must_use]
pub fn forgot_request(email: &str) -> ForgotRequest {
    ForgotRequest { email: email.trim().to_owned() }
}

/// Build the reset request from the reset form.
#[must_use]
pub fn reset_request(email: &str, code: &str, new_password: &str) -> ResetRequest {
    ResetRequest { email: email.trim().to_owned(), code: code.trim().to_owned(), new_password: new_password.to_owned() }
}

/// Split a comma-separated skills list, trimming and dropping empties.
#[must_use]
pub fn parse_skills(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Parse the skills form, requiring at least one skill.
///
/// # Errors
///
/// Returns a `Skills` field error when nothing usable was entered.
pub fn validate_skills(input: &str) -> Result<Vec<String>, FieldError> {
    let skills = parse_skills(input);
    if skills.is_empty() {
        return Err(FieldError::new(Field::Skills, "Please enter at least one skill."));
    }
    Ok(skills)
}
