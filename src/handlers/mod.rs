//! HTTP request handlers and extractors shared across routes.

pub mod extract;
pub mod http;

pub use extract::JsonBody;
pub use http::*;
