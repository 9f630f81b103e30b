use axum::{Router, middleware, routing::get};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use userhub_axum::{
    RouterConfig, require_login,
    routes::{
        ADD_PATH, DASHBOARD_PATH, EDIT_PATH, LOGIN_PATH, LOGOUT_PATH, USERS_PATH,
        add::{add_form, add_user},
        dashboard::dashboard,
        edit::{edit_form, edit_user},
        index::index,
        login::{login, login_form},
        logout::logout,
    },
};
use userhub_core::{PasswordHasher, SessionStore, UserStore};

use crate::tracing::{make_span_with_request_id, on_request, on_response};

/// The user-management service: all routes, wired to the provided stores.
pub struct UsersService {
    router: Router,
}

impl UsersService {
    /// Build the service router.
    ///
    /// # Note on Architecture
    /// Stores implement Clone via internal Arc (or a pooled connection) for
    /// thread-safe sharing. Each route is given its specific state
    /// requirements, avoiding unnecessary cloning.
    ///
    /// Everything outside the public set below is denied by default and
    /// goes through the login guard.
    pub fn new<U, S, H>(user_store: U, session_store: S, hasher: H, config: RouterConfig) -> Self
    where
        U: UserStore + Clone + 'static,
        S: SessionStore + Clone + 'static,
        H: PasswordHasher + Clone + 'static,
    {
        // TODO: drop ADD_PATH from the public set once an admin flow exists
        // to create accounts for other users.
        let public = Router::new()
            // Login needs user store, session store and hasher
            .route(LOGIN_PATH, get(login_form).post(login::<U, S, H>))
            .with_state((
                user_store.clone(),
                session_store.clone(),
                hasher.clone(),
                config.clone(),
            ))
            // Registration needs user store and hasher
            .route(ADD_PATH, get(add_form).post(add_user::<U, H>))
            .with_state((user_store.clone(), hasher.clone()));

        let protected = Router::new()
            // Listing only needs the user store
            .route(USERS_PATH, get(index::<U>))
            .with_state(user_store.clone())
            // Edit needs user store and hasher
            .route(EDIT_PATH, get(edit_form).post(edit_user::<U, H>))
            .with_state((user_store, hasher))
            // Logout only needs the session store
            .route(LOGOUT_PATH, get(logout::<S>))
            .with_state((session_store.clone(), config.clone()))
            .route(DASHBOARD_PATH, get(dashboard))
            // The guard checks the session record, not just the signature,
            // so a logged-out cookie stops working immediately.
            .route_layer(middleware::from_fn_with_state(
                (session_store, config),
                require_login::<S>,
            ));

        Self {
            router: public.merge(protected),
        }
    }

    fn with_trace_layer(mut self) -> Self {
        self.router = self.router.layer(
            TraceLayer::new_for_http()
                .make_span_with(make_span_with_request_id)
                .on_request(on_request)
                .on_response(on_response),
        );
        self
    }

    /// Convert the service into a router that can be mounted on another
    /// application.
    pub fn into_router(self) -> Router {
        self.with_trace_layer().router
    }

    /// Run the service as a standalone server.
    pub async fn run_standalone(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let router = self.into_router();

        tracing::info!("Users service listening on {}", listener.local_addr()?);

        axum::serve(listener, router).await
    }
}
