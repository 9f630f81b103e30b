use fake::{Fake, faker::internet::en::SafeEmail};
use reqwest::redirect::Policy;
use secrecy::Secret;
use userhub_adapters::{
    BcryptHasher, HashMapSessionStore, HashMapUserStore, SessionTokenConfig,
    config::constants::test,
};
use userhub_axum::RouterConfig;
use userhub_core::{Email, User, UserStore};
use userhub_service::UsersService;

pub const TEST_COOKIE_NAME: &str = "userhub_auth";

/// A full service instance on an ephemeral port, backed by in-memory stores.
///
/// The store handles are kept so tests can assert on persisted state
/// directly (stored hashes, session rows) instead of only through HTTP.
pub struct TestApp {
    pub address: String,
    pub client: reqwest::Client,
    pub user_store: HashMapUserStore,
    pub session_store: HashMapSessionStore,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let user_store = HashMapUserStore::new();
        let session_store = HashMapSessionStore::new();
        // Minimum cost keeps the test suite fast.
        let hasher = BcryptHasher::new(4);

        let config = RouterConfig {
            tokens: SessionTokenConfig {
                cookie_name: TEST_COOKIE_NAME.to_owned(),
                secret: Secret::new("test-jwt-secret".to_owned()),
                token_ttl_in_seconds: 600,
            },
            login_redirect: "/dashboard".to_owned(),
        };

        let service = UsersService::new(
            user_store.clone(),
            session_store.clone(),
            hasher,
            config,
        );

        let listener = tokio::net::TcpListener::bind(test::APP_ADDRESS)
            .await
            .expect("Failed to bind an ephemeral port");
        let address = format!("http://{}", listener.local_addr().unwrap());

        tokio::spawn(service.run_standalone(listener));

        let client = reqwest::Client::builder()
            // Redirects are asserted on, never followed.
            .redirect(Policy::none())
            .cookie_store(true)
            .build()
            .expect("Failed to build the test client");

        Self {
            address,
            client,
            user_store,
            session_store,
        }
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(format!("{}{}", self.address, path))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_form(&self, path: &str, form: &[(&str, &str)]) -> reqwest::Response {
        self.client
            .post(format!("{}{}", self.address, path))
            .form(form)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn register(&self, email: &str, password: &str) -> reqwest::Response {
        self.post_form("/users/add", &[("email", email), ("password", password)])
            .await
    }

    pub async fn login(&self, email: &str, password: &str) -> reqwest::Response {
        self.post_form("/users/login", &[("email", email), ("password", password)])
            .await
    }

    /// Read a user row straight out of the store.
    pub async fn stored_user(&self, email: &str) -> User {
        let email = Email::try_from(Secret::new(email.to_owned())).unwrap();
        self.user_store
            .get_user(&email)
            .await
            .expect("User not found in the store")
    }
}

pub fn random_email() -> String {
    SafeEmail().fake()
}

pub fn assert_redirects_to(response: &reqwest::Response, path: &str) {
    assert_eq!(response.status().as_u16(), 303);
    assert_eq!(
        response
            .headers()
            .get("location")
            .expect("Response carries no Location header"),
        path
    );
}
