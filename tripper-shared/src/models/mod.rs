pub mod auth;
pub mod catalog;
pub mod demo;
pub mod envelope;
pub mod errors;

pub use auth::{LoginRequest, LoginResponse, RegisterForm, RegisterResponse, Role, Upload};
pub use catalog::{AddCartRequest, CartResponse, Category, Promo};
pub use demo::{Product, Todo};
pub use envelope::{Envelope, ShapeError};
pub use errors::ErrorResponse;
