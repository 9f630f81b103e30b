use crate::helpers::{TestApp, assert_redirects_to, random_email};

#[tokio::test]
async fn registering_redirects_to_the_listing_and_stores_a_hash() {
    let app = TestApp::spawn().await;
    let email = random_email();

    let response = app.register(&email, "password123").await;
    assert_redirects_to(&response, "/users");

    let user = app.stored_user(&email).await;
    assert!(!user.is_deleted);
    // The plaintext never reaches the store.
    assert_ne!(user.password_hash.as_str(), "password123");
    assert!(user.password_hash.as_str().starts_with("$2"));
}

#[tokio::test]
async fn reusing_an_email_is_rejected_with_a_message() {
    let app = TestApp::spawn().await;
    let email = random_email();

    app.register(&email, "password123").await;
    let response = app.register(&email, "different-password").await;
    assert_redirects_to(&response, "/users/add");

    // The form redisplay carries the flash message.
    let form = app.get("/users/add").await;
    let body = form.text().await.unwrap();
    assert!(body.contains("This email address has already been used."));

    // The original account is untouched.
    let user = app.stored_user(&email).await;
    assert!(user.password_hash.as_str().starts_with("$2"));
}

#[tokio::test]
async fn a_short_password_is_rejected_with_a_message() {
    let app = TestApp::spawn().await;
    let email = random_email();

    let response = app.register(&email, "short").await;
    assert_redirects_to(&response, "/users/add");

    let form = app.get("/users/add").await;
    let body = form.text().await.unwrap();
    assert!(body.contains("A password should be at least 8 characters long."));
}

#[tokio::test]
async fn a_malformed_email_is_rejected_with_a_message() {
    let app = TestApp::spawn().await;

    let response = app.register("not-an-email", "password123").await;
    assert_redirects_to(&response, "/users/add");

    let form = app.get("/users/add").await;
    let body = form.text().await.unwrap();
    assert!(body.contains("valid email"));
}

#[tokio::test]
async fn the_registration_form_is_reachable_without_a_session() {
    let app = TestApp::spawn().await;

    let response = app.get("/users/add").await;
    assert_eq!(response.status().as_u16(), 200);
}
