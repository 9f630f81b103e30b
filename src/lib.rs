//! # Userhub - User Management Service Library
//!
//! This is a facade crate that re-exports all public APIs from the user
//! management service components. Use this crate to get access to all user
//! management functionality in one place.
//!
//! ## Usage
//!
//! Add to your `Cargo.toml`:
//! ```toml
//! [dependencies]
//! userhub = { path = "../userhub" }
//! ```
//!
//! ## Structure
//!
//! - **Core domain types**: `Email`, `Password`, `User`, etc.
//! - **Repository traits**: `UserStore`, `SessionStore`, `PasswordHasher`
//! - **Use cases**: `RegisterUseCase`, `LoginUseCase`, etc.
//! - **Adapters**: `PostgresUserStore`, `BcryptHasher`, session tokens, etc.
//! - **Service**: `UsersService` - The main entry point for the service

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use userhub_core::*;
}

// Re-export most commonly used core types at the root level
pub use userhub_core::{
    Email, EmailError, NewUser, Password, PasswordError, PasswordHash, User, UserSession,
    UserUpdate,
};

// ============================================================================
// Repository Traits (Ports)
// ============================================================================

/// Repository trait definitions
pub mod repositories {
    pub use userhub_core::{
        PasswordHasher, PasswordHasherError, SessionStore, SessionStoreError, UserStore,
        UserStoreError,
    };
}

// Re-export repository traits at root level
pub use userhub_core::{
    PasswordHasher, PasswordHasherError, SessionStore, SessionStoreError, UserStore,
    UserStoreError,
};

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

/// Application use cases
pub mod use_cases {
    pub use userhub_application::*;
}

// Re-export use cases at root level
pub use userhub_application::{
    ListUsersUseCase, LoginUseCase, LogoutUseCase, RegisterUseCase, UpdateProfileUseCase,
};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// Persistence implementations
    pub mod persistence {
        pub use userhub_adapters::persistence::*;
    }

    /// Session token utilities
    pub mod auth {
        pub use userhub_adapters::auth::session_token::*;
    }

    /// Password hashing
    pub mod security {
        pub use userhub_adapters::security::*;
    }

    /// Configuration
    pub mod config {
        pub use userhub_adapters::config::*;
    }
}

// Re-export commonly used adapters at root level
pub use userhub_adapters::{
    BcryptHasher, HashMapSessionStore, HashMapUserStore, PostgresSessionStore, PostgresUserStore,
    SessionClaims, SessionTokenConfig,
};

// ============================================================================
// HTTP Layer
// ============================================================================

/// Axum routes, pages and the login guard
pub mod http {
    pub use userhub_axum::*;
}

pub use userhub_axum::RouterConfig;

// ============================================================================
// Users Service (Main Entry Point)
// ============================================================================

/// Main user management service
pub use userhub_service::{UsersService, configure_postgresql};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing repository traits
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};

pub use axum;
pub use tokio;
