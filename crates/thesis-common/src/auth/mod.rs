//! Authentication utilities

mod jwt;
mod password;

pub use jwt::{AuthToken, Claims, JwtService};
pub use password::{hash_password, verify_password, PasswordService};
