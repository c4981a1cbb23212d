// User directory read side: credential verification and the employee list
// the admin grid offers in its selectors.

use std::sync::Arc;

use crate::application::errors::ApplicationError;
use crate::core::ports::UserDirectory;
use crate::core::user::User;

pub struct DirectoryQueries<D: UserDirectory> {
    directory: Arc<D>,
}

impl<D: UserDirectory> DirectoryQueries<D> {
    pub fn new(directory: Arc<D>) -> Self {
        Self { directory }
    }

    /// Verifies credentials against the stored argon2 hash. An unknown
    /// username and a wrong password are indistinguishable to the caller.
    pub async fn login(&self, username: &str, password: &str) -> Result<User, ApplicationError> {
        let user = self
            .directory
            .find(username)
            .await?
            .ok_or(ApplicationError::InvalidCredentials)?;
        if !user.verify_password(password) {
            return Err(ApplicationError::InvalidCredentials);
        }
        Ok(user)
    }

    pub async fn employees(&self) -> Result<Vec<User>, ApplicationError> {
        Ok(self.directory.employees().await?)
    }
}
