pub mod postgres;
pub mod tracing;
pub mod users_service;

pub use postgres::configure_postgresql;
pub use users_service::UsersService;
