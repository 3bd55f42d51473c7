use super::*;
use crate::config::LoginConfig;
use crate::error::TransportError;
use crate::storage::{MemoryStore, REDIRECT_AFTER_LOGIN_KEY, TOKEN_KEY};
use crate::test_helpers::{MockTransport, RecordingNavigator};

fn filled_form(username: &str, password: &str) -> LoginForm {
    LoginForm { username: username.to_owned(), password: password.to_owned(), ..LoginForm::default() }
}

fn make_client(transport: MockTransport, store: MemoryStore) -> LoginClient<MockTransport, MemoryStore, RecordingNavigator> {
    LoginClient::new(LoginConfig::new("http://api.test"), transport, store, RecordingNavigator::default())
}

// =============================================================================
// begin_submit / finish
// =============================================================================

#[test]
fn default_form_is_idle() {
    let form = LoginForm::new();
    assert!(!form.is_loading);
    assert_eq!(form.error_message, None);
}

#[test]
fn begin_submit_sets_loading_and_clears_error() {
    let mut form = filled_form("alice", "pw");
    form.error_message = Some(INVALID_CREDENTIALS_MESSAGE);

    let credentials = form.begin_submit().unwrap();

    assert_eq!(credentials.username(), "alice");
    assert!(form.is_loading);
    assert_eq!(form.error_message, None);
}

#[test]
fn begin_submit_while_loading_is_ignored() {
    let mut form = filled_form("alice", "pw");
    form.begin_submit().unwrap();
    let snapshot = form.clone();

    assert_eq!(form.begin_submit().unwrap_err(), SubmitOutcome::Ignored);
    assert_eq!(form, snapshot);
}

#[test]
fn begin_submit_rejects_blank_fields_without_loading() {
    let mut form = filled_form("  ", "pw");
    let outcome = form.begin_submit().unwrap_err();
    assert_eq!(outcome, SubmitOutcome::Failed(LoginError::MissingCredentials));
    assert_eq!(form.error_message, Some(MISSING_CREDENTIALS_MESSAGE));
    assert!(!form.is_loading);
}

#[test]
fn finish_maps_errors_to_fixed_messages() {
    let cases = [
        (LoginError::MissingCredentials, MISSING_CREDENTIALS_MESSAGE),
        (LoginError::InvalidCredentials { status: 403 }, INVALID_CREDENTIALS_MESSAGE),
        (LoginError::Network(TransportError::Body("truncated".into())), GENERIC_ERROR_MESSAGE),
        (LoginError::Storage(crate::error::StorageError::Unavailable), GENERIC_ERROR_MESSAGE),
    ];
    for (error, message) in cases {
        let mut form = filled_form("a", "b");
        form.is_loading = true;
        assert_eq!(form.finish(Err(error.clone())), SubmitOutcome::Failed(error));
        assert_eq!(form.error_message, Some(message));
        assert!(!form.is_loading);
    }
}

#[test]
fn debug_output_hides_password() {
    let form = filled_form("alice", "hunter2");
    let debug = format!("{form:?}");
    assert!(debug.contains("alice"));
    assert!(!debug.contains("hunter2"));
}

// =============================================================================
// submit
// =============================================================================

#[tokio::test]
async fn blank_input_never_reaches_network() {
    let cases = [("", ""), ("", "pw"), ("user", ""), (" ", "pw"), ("user", "   "), ("\t", "\n")];
    for (username, password) in cases {
        let client = make_client(MockTransport::ok(200, "tok"), MemoryStore::new());
        let mut form = filled_form(username, password);

        let outcome = form.submit(&client).await;

        assert_eq!(outcome, SubmitOutcome::Failed(LoginError::MissingCredentials));
        assert_eq!(form.error_message, Some("Username and password are required."));
        assert_eq!(client.transport().call_count(), 0);
        assert!(client.store().snapshot().is_empty());
    }
}

#[tokio::test]
async fn submit_success_redirects_and_returns_idle() {
    let store = MemoryStore::with_entries([(REDIRECT_AFTER_LOGIN_KEY, "/dashboard")]);
    let client = make_client(MockTransport::ok(200, "tok123"), store);
    let mut form = filled_form("alice", "s3cret");

    let outcome = form.submit(&client).await;

    assert_eq!(outcome, SubmitOutcome::Redirected("/dashboard".to_owned()));
    assert!(!form.is_loading);
    assert_eq!(form.error_message, None);
    assert_eq!(client.store().get(TOKEN_KEY).unwrap().as_deref(), Some("tok123"));
}

#[tokio::test]
async fn submit_unauthorized_shows_invalid_credentials() {
    let client = make_client(MockTransport::ok(401, "nope"), MemoryStore::new());
    let mut form = filled_form("alice", "wrong");

    let outcome = form.submit(&client).await;

    assert_eq!(outcome, SubmitOutcome::Failed(LoginError::InvalidCredentials { status: 401 }));
    assert_eq!(form.error_message, Some("Invalid credentials. Please try again."));
    assert!(!form.is_loading);
    assert!(client.navigator().visited().is_empty());
}

#[tokio::test]
async fn submit_network_failure_clears_loading() {
    let client = make_client(MockTransport::failing(TransportError::Request("timeout".into())), MemoryStore::new());
    let mut form = filled_form("alice", "s3cret");

    let outcome = form.submit(&client).await;

    assert!(matches!(outcome, SubmitOutcome::Failed(LoginError::Network(_))));
    assert_eq!(form.error_message, Some("An error occurred. Please try again."));
    assert!(!form.is_loading);
}

#[tokio::test]
async fn form_is_reusable_after_failure() {
    let transport = MockTransport::new(vec![
        Ok(crate::transport::LoginResponse { status: 401, body: String::new() }),
        Ok(crate::transport::LoginResponse { status: 200, body: "tok".to_owned() }),
    ]);
    let client = make_client(transport, MemoryStore::new());
    let mut form = filled_form("alice", "wrong");

    form.submit(&client).await;
    form.password = "right".to_owned();
    let outcome = form.submit(&client).await;

    assert_eq!(outcome, SubmitOutcome::Redirected("/".to_owned()));
    assert_eq!(form.error_message, None);
    assert_eq!(client.transport().call_count(), 2);
}
