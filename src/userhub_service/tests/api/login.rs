use secrecy::Secret;
use userhub_core::{Email, SessionStore, UserStore};

use crate::helpers::{TEST_COOKIE_NAME, TestApp, assert_redirects_to, random_email};

#[tokio::test]
async fn valid_credentials_open_a_session_and_land_on_the_dashboard() {
    let app = TestApp::spawn().await;
    let email = random_email();
    app.register(&email, "password123").await;

    let response = app.login(&email, "password123").await;
    assert_redirects_to(&response, "/dashboard");

    let dashboard = app.get("/dashboard").await;
    assert_eq!(dashboard.status().as_u16(), 200);
    assert!(dashboard.text().await.unwrap().contains(&email));

    // A session row was opened for the user.
    let user = app.stored_user(&email).await;
    let sessions = app.session_store.sessions_for_user(user.id).await.unwrap();
    assert_eq!(sessions.len(), 1);
}

#[tokio::test]
async fn a_wrong_password_redisplays_the_form_with_a_generic_message() {
    let app = TestApp::spawn().await;
    let email = random_email();
    app.register(&email, "password123").await;

    let response = app.login(&email, "wrong-password").await;
    assert_redirects_to(&response, "/users/login");

    let form = app.get("/users/login").await;
    assert!(
        form.text()
            .await
            .unwrap()
            .contains("Incorrect email or password.")
    );

    let user = app.stored_user(&email).await;
    assert!(app.session_store.sessions_for_user(user.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn an_unknown_email_gets_the_same_generic_message() {
    let app = TestApp::spawn().await;

    let response = app.login(&random_email(), "password123").await;
    assert_redirects_to(&response, "/users/login");

    let form = app.get("/users/login").await;
    assert!(
        form.text()
            .await
            .unwrap()
            .contains("Incorrect email or password.")
    );
}

#[tokio::test]
async fn a_disabled_account_cannot_log_in() {
    let app = TestApp::spawn().await;
    let email = random_email();
    app.register(&email, "password123").await;

    let parsed = Email::try_from(Secret::new(email.clone())).unwrap();
    app.user_store.mark_deleted(&parsed).await.unwrap();

    let response = app.login(&email, "password123").await;
    assert_redirects_to(&response, "/users/login");

    let user = app.stored_user(&email).await;
    assert!(app.session_store.sessions_for_user(user.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn a_successful_login_sets_the_auth_cookie() {
    let app = TestApp::spawn().await;
    let email = random_email();
    app.register(&email, "password123").await;

    let response = app.login(&email, "password123").await;

    let cookie = response
        .cookies()
        .find(|c| c.name() == TEST_COOKIE_NAME)
        .expect("No auth cookie on the login response");
    assert!(!cookie.value().is_empty());
}
