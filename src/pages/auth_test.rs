use super::*;

#[test]
fn mode_toggles_between_login_and_signup() {
    assert_eq!(AuthMode::Login.toggled(), AuthMode::Signup);
    assert_eq!(AuthMode::Signup.toggled(), AuthMode::Login);
    assert_eq!(AuthMode::default(), AuthMode::Login);
}

#[test]
fn headings_match_mode() {
    assert_eq!(heading(AuthMode::Login), "Welcome Back");
    assert_eq!(heading(AuthMode::Signup), "Create Account");
}

#[test]
fn submit_label_shows_progress_while_busy() {
    assert_eq!(submit_label(AuthMode::Login, false), "Sign In");
    assert_eq!(submit_label(AuthMode::Signup, false), "Create Account");
    assert_eq!(submit_label(AuthMode::Login, true), "Processing...");
    assert_eq!(submit_label(AuthMode::Signup, true), "Processing...");
}

#[test]
fn toggle_copy_points_at_the_other_mode() {
    assert_eq!(toggle_prompt(AuthMode::Login), "Don't have an account?");
    assert_eq!(toggle_action(AuthMode::Login), "Sign up");
    assert_eq!(toggle_prompt(AuthMode::Signup), "Already have an account?");
    assert_eq!(toggle_action(AuthMode::Signup), "Sign in");
}

#[test]
fn success_notes_match_mode() {
    assert_eq!(success_note(AuthMode::Login), "Welcome back!");
    assert_eq!(success_note(AuthMode::Signup), "Account created successfully!");
}
