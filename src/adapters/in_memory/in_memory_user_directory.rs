// In memory implementation of the UserDirectory port.
//
// Responsibilities
// - Hold the seeded user set. The directory is written once at startup and
//   read afterwards, so a std RwLock is enough; it is never held across an
//   await point.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::core::ports::{StorageError, UserDirectory};
use crate::core::user::User;

pub struct InMemoryUserDirectory {
    inner: RwLock<HashMap<String, User>>,
    offline: bool,
}

impl InMemoryUserDirectory {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
            offline: false,
        }
    }

    pub fn toggle_offline(&mut self) {
        self.offline = !self.offline;
    }

    pub fn insert(&self, user: User) {
        if let Ok(mut guard) = self.inner.write() {
            guard.insert(user.username().to_string(), user);
        }
    }

    fn check_online(&self) -> Result<(), StorageError> {
        if self.offline {
            return Err(StorageError::Unavailable("user directory offline".into()));
        }
        Ok(())
    }
}

impl Default for InMemoryUserDirectory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserDirectory for InMemoryUserDirectory {
    async fn find(&self, username: &str) -> Result<Option<User>, StorageError> {
        self.check_online()?;
        let guard = self
            .inner
            .read()
            .map_err(|_| StorageError::Backend("user directory lock poisoned".into()))?;
        Ok(guard.get(username).cloned())
    }

    async fn employees(&self) -> Result<Vec<User>, StorageError> {
        self.check_online()?;
        let guard = self
            .inner
            .read()
            .map_err(|_| StorageError::Backend("user directory lock poisoned".into()))?;
        let mut employees: Vec<User> = guard.values().filter(|u| u.is_employee()).cloned().collect();
        employees.sort_by(|a, b| a.username().cmp(b.username()));
        Ok(employees)
    }
}
