//! Authentication: signup, login, JWT.

mod handlers;
mod jwt;
mod service;

pub use handlers::{login, me, signup};
pub use jwt::{Claims, JwtSecret};
pub use service::AuthAppService;
