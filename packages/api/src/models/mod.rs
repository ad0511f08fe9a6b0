//! Wire models exchanged with the login service.

mod login;
mod role;

pub use login::{LoginErrorBody, LoginRequest, LoginResponse};
pub use role::Role;
