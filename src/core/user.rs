// Users in the directory: administrators who edit the rooster and the
// employees who appear in it.
//
// Purpose
// - Carry identity (unique username), display name and role.
// - Hold the argon2-salted password hash; the plaintext never survives
//   construction and the hash never leaves this type.

use std::sync::OnceLock;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

static ARGON: OnceLock<Argon2> = OnceLock::new();

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Employee,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    username: String,
    name: String,
    role: Role,
    password_hash: String,
}

#[derive(Debug, thiserror::Error)]
#[error("password hashing failed: {0}")]
pub struct PasswordHashError(String);

impl User {
    /// Creates a user, hashing `password` with a freshly generated salt.
    pub fn new(
        username: impl Into<String>,
        name: impl Into<String>,
        role: Role,
        password: &str,
    ) -> Result<Self, PasswordHashError> {
        let argon = ARGON.get_or_init(Argon2::default);
        let salt = SaltString::generate(&mut OsRng);
        let password_hash = argon
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| PasswordHashError(e.to_string()))?
            .to_string();

        Ok(Self {
            username: username.into(),
            name: name.into(),
            role,
            password_hash,
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn is_employee(&self) -> bool {
        self.role == Role::Employee
    }

    /// Constant-time verification against the stored hash. A hash that fails
    /// to parse counts as a mismatch rather than an error.
    pub fn verify_password(&self, password: &str) -> bool {
        let argon = ARGON.get_or_init(Argon2::default);
        PasswordHash::new(&self.password_hash)
            .map(|hash| argon.verify_password(password.as_bytes(), &hash).is_ok())
            .unwrap_or(false)
    }
}
