use super::*;

// =============================================================
// Login validation
// =============================================================

#[test]
fn validate_login_input_trims_email() {
    assert_eq!(
        validate_login_input("  user@example.com  ", "secret"),
        Ok(("user@example.com".to_owned(), "secret".to_owned()))
    );
}

#[test]
fn validate_login_input_rejects_email_without_at() {
    assert_eq!(
        validate_login_input("not-an-email", "secret"),
        Err(SessionError::Auth("enter a valid email address".to_owned()))
    );
}

#[test]
fn validate_login_input_rejects_blank_fields() {
    assert!(matches!(validate_login_input("   ", "secret"), Err(SessionError::Auth(_))));
    assert!(matches!(
        validate_login_input("user@example.com", ""),
        Err(SessionError::Auth(_))
    ));
}

// =============================================================
// Signup validation
// =============================================================

#[test]
fn validate_signup_input_accepts_well_formed_fields() {
    assert_eq!(
        validate_signup_input("a@b.com", "longenough", " Asha Rao "),
        Ok(("a@b.com".to_owned(), "longenough".to_owned(), "Asha Rao".to_owned()))
    );
}

#[test]
fn validate_signup_input_rejects_short_password() {
    assert!(matches!(
        validate_signup_input("a@b.com", "short", "Asha"),
        Err(SessionError::Validation(_))
    ));
}

#[test]
fn validate_signup_input_rejects_blank_name() {
    assert!(matches!(
        validate_signup_input("a@b.com", "longenough", "   "),
        Err(SessionError::Validation(_))
    ));
}

#[test]
fn validate_signup_input_rejects_bad_email_with_validation_error() {
    // Same shape check as login, but surfaced under the signup taxonomy.
    assert!(matches!(
        validate_signup_input("nope", "longenough", "Asha"),
        Err(SessionError::Validation(_))
    ));
}

// =============================================================
// Display name derivation
// =============================================================

#[test]
fn display_name_uses_email_local_part() {
    assert_eq!(display_name("asha@example.com"), "asha");
}

#[test]
fn display_name_falls_back_to_full_input() {
    assert_eq!(display_name("@example.com"), "@example.com");
}

// =============================================================
// Error presentation
// =============================================================

#[test]
fn session_errors_render_user_facing_messages() {
    let auth = SessionError::Auth("enter your password".to_owned());
    assert_eq!(auth.to_string(), "login failed: enter your password");
    let validation = SessionError::Validation("enter your full name".to_owned());
    assert_eq!(validation.to_string(), "signup failed: enter your full name");
}
