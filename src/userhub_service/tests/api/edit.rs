use crate::helpers::{TestApp, assert_redirects_to, random_email};

#[tokio::test]
async fn the_edit_form_requires_a_session_and_shows_the_signed_in_email() {
    let app = TestApp::spawn().await;
    let email = random_email();
    app.register(&email, "password123").await;

    let response = app.get("/users/edit").await;
    assert_redirects_to(&response, "/users/login");

    app.login(&email, "password123").await;
    let form = app.get("/users/edit").await;
    assert_eq!(form.status().as_u16(), 200);
    assert!(form.text().await.unwrap().contains(&email));
}

#[tokio::test]
async fn saving_without_a_password_keeps_the_stored_hash() {
    let app = TestApp::spawn().await;
    let email = random_email();
    app.register(&email, "password123").await;
    app.login(&email, "password123").await;

    let before = app.stored_user(&email).await.password_hash;

    let response = app.post_form("/users/edit", &[("password", "")]).await;
    assert_redirects_to(&response, "/users");

    let after = app.stored_user(&email).await.password_hash;
    assert_eq!(before.as_str(), after.as_str());

    // The old password still works.
    let login = app.login(&email, "password123").await;
    assert_redirects_to(&login, "/dashboard");
}

#[tokio::test]
async fn saving_without_a_password_field_at_all_keeps_the_stored_hash() {
    let app = TestApp::spawn().await;
    let email = random_email();
    app.register(&email, "password123").await;
    app.login(&email, "password123").await;

    let before = app.stored_user(&email).await.password_hash;

    // Some clients omit an untouched input entirely instead of sending it
    // empty; both spellings mean "keep the current password".
    let response = app.post_form("/users/edit", &[]).await;
    assert_redirects_to(&response, "/users");

    let after = app.stored_user(&email).await.password_hash;
    assert_eq!(before.as_str(), after.as_str());
}

#[tokio::test]
async fn saving_a_new_password_replaces_the_credentials() {
    let app = TestApp::spawn().await;
    let email = random_email();
    app.register(&email, "password123").await;
    app.login(&email, "password123").await;

    let before = app.stored_user(&email).await.password_hash;

    let response = app
        .post_form("/users/edit", &[("password", "new-password-456")])
        .await;
    assert_redirects_to(&response, "/users");

    let after = app.stored_user(&email).await.password_hash;
    assert_ne!(before.as_str(), after.as_str());

    let stale = app.login(&email, "password123").await;
    assert_redirects_to(&stale, "/users/login");

    let fresh = app.login(&email, "new-password-456").await;
    assert_redirects_to(&fresh, "/dashboard");
}

#[tokio::test]
async fn a_short_new_password_is_rejected_and_nothing_changes() {
    let app = TestApp::spawn().await;
    let email = random_email();
    app.register(&email, "password123").await;
    app.login(&email, "password123").await;

    let before = app.stored_user(&email).await.password_hash;

    let response = app.post_form("/users/edit", &[("password", "short")]).await;
    assert_redirects_to(&response, "/users/edit");

    let form = app.get("/users/edit").await;
    assert!(
        form.text()
            .await
            .unwrap()
            .contains("A password should be at least 8 characters long.")
    );

    let after = app.stored_user(&email).await.password_hash;
    assert_eq!(before.as_str(), after.as_str());
}
