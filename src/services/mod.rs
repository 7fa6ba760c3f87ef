pub mod auth_service;
pub mod property_service;
pub mod seed;

pub use auth_service::{AuthService, AuthenticatedUser, LoginResponse, UserDto};
pub use property_service::{PropertyService, PropertyValuationSnapshot};
