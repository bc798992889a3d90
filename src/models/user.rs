//! User DTOs: signup/login bodies and the public user view.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::db::UserRow;

#[derive(Debug, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(length(max = 255))]
    pub name: String,
    #[serde(default)]
    #[validate(email, custom(function = "validate_email_domain"))]
    pub email: String,
    #[serde(default)]
    #[validate(length(max = 128))]
    pub password: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[serde(default)]
    #[validate(email, custom(function = "validate_email_domain"))]
    pub email: String,
    #[serde(default)]
    #[validate(length(min = 1, max = 128))]
    pub password: String,
}

/// Tightens `#[validate(email)]`: the domain must be dotted and neither part
/// may start or end with a dot or contain `..`.
fn validate_email_domain(email: &str) -> Result<(), ValidationError> {
    let well_dotted = |s: &str| !s.starts_with('.') && !s.ends_with('.') && !s.contains("..");
    match email.rsplit_once('@') {
        Some((local, domain)) if well_dotted(local) && well_dotted(domain) && domain.contains('.') => {
            Ok(())
        }
        _ => Err(ValidationError::new("email_domain")),
    }
}

/// The only shape in which a user leaves the server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PublicUser {
    pub id: Uuid,
    pub email: String,
    pub name: String,
}

impl From<UserRow> for PublicUser {
    fn from(row: UserRow) -> Self {
        Self {
            id: row.id,
            email: row.email,
            name: row.name,
        }
    }
}

/// Returned by signup (201) and login (200).
#[derive(Debug, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: PublicUser,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UserResponse {
    pub user: PublicUser,
}
