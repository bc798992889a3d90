//! Request and response bodies for the user endpoints.

pub mod user;

pub use user::*;
