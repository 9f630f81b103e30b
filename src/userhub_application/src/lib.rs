pub mod use_cases;

pub use use_cases::{
    list_users::ListUsersUseCase,
    login::{AuthenticatedUser, LoginError, LoginUseCase},
    logout::{LogoutError, LogoutUseCase},
    register::{RegisterError, RegisterUseCase},
    update_profile::{UpdateProfileError, UpdateProfileUseCase},
};
