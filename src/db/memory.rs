//! In-process user store used by the test suites; the server always runs on `PgUserStore`.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{UserRow, UserStore};
use crate::error::{AppError, AppResult};

/// Users indexed by email. The existence check and the insert in `create`
/// happen under one write lock, which plays the role of the unique index.
#[derive(Default)]
pub struct MemoryUserStore {
    users: RwLock<HashMap<String, UserRow>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<UserRow>> {
        Ok(self.users.read().await.get(email).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<UserRow>> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|u| u.id == id)
            .cloned())
    }

    async fn create(&self, name: &str, email: &str, password_hash: &str) -> AppResult<UserRow> {
        let mut users = self.users.write().await;
        if users.contains_key(email) {
            return Err(AppError::EmailInUse);
        }
        let row = UserRow {
            id: Uuid::new_v4(),
            name: name.to_string(),
            email: email.to_string(),
            password_hash: password_hash.to_string(),
            created_at: Utc::now(),
        };
        users.insert(email.to_string(), row.clone());
        Ok(row)
    }
}
