//! User domain service

use std::sync::Arc;

use crate::domain::entities::user::{NewUser, UserProfile};
use crate::domain::value_objects::{Caller, NewUserInput, UserChanges, UserFilter};
use crate::errors::{AuthError, DomainError};
use crate::repositories::UserRepository;
use crate::services::password::PasswordHasher;
use crate::services::token::TokenService;

/// Registration, authentication and CRUD over users
pub struct UserService<U: UserRepository, H: PasswordHasher> {
    repository: Arc<U>,
    hasher: Arc<H>,
    tokens: Arc<TokenService>,
}

impl<U, H> UserService<U, H>
where
    U: UserRepository,
    H: PasswordHasher + 'static,
{
    pub fn new(repository: Arc<U>, hasher: Arc<H>, tokens: Arc<TokenService>) -> Self {
        Self {
            repository,
            hasher,
            tokens,
        }
    }

    /// Register a new user.
    ///
    /// The email check and the insert are two separate store calls; a racing
    /// duplicate is still rejected by the store's own uniqueness constraint.
    ///
    /// # Errors
    /// * `AuthError::EmailAlreadyExists` - Email is already registered
    /// * `DomainError::Hashing` - Password could not be hashed
    pub async fn register(&self, input: NewUserInput) -> Result<UserProfile, DomainError> {
        tracing::info!(email = %input.email, "Registering user");

        if self.repository.find_by_email(&input.email).await?.is_some() {
            tracing::warn!(email = %input.email, "Email already registered");
            return Err(AuthError::EmailAlreadyExists.into());
        }

        let password_hash = self.hash_password(input.password).await?;
        let user = self
            .repository
            .create(NewUser {
                name: input.name,
                email: input.email,
                age: input.age,
                password_hash,
            })
            .await?;

        tracing::info!(user_id = user.id, "User registered");
        Ok(user.into())
    }

    /// Check credentials and issue a bearer token.
    ///
    /// Unknown emails and wrong passwords fail identically.
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<String, DomainError> {
        let Some(user) = self.repository.find_by_email(email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !self
            .verify_password(password.to_string(), user.password_hash.clone())
            .await?
        {
            return Err(AuthError::InvalidCredentials.into());
        }

        let token = self.tokens.issue(user.id)?;
        tracing::info!(user_id = user.id, "User authenticated");
        Ok(token)
    }

    pub async fn get(&self, id: i64) -> Result<UserProfile, DomainError> {
        self.repository
            .find_by_id(id)
            .await?
            .map(UserProfile::from)
            .ok_or_else(|| DomainError::not_found("user"))
    }

    /// One page of users matching the filter, ordered by id
    pub async fn list(&self, filter: &UserFilter) -> Result<Vec<UserProfile>, DomainError> {
        let users = self.repository.list(filter).await?;
        Ok(users.into_iter().map(UserProfile::from).collect())
    }

    /// Total users matching the filter's age bounds
    pub async fn count(&self, filter: &UserFilter) -> Result<u64, DomainError> {
        self.repository.count(filter).await
    }

    /// Apply the provided fields to an existing user.
    ///
    /// # Errors
    /// * `DomainError::NotFound` - No such user
    /// * `AuthError::EmailAlreadyExists` - New email belongs to another user
    pub async fn update(&self, id: i64, changes: UserChanges) -> Result<UserProfile, DomainError> {
        tracing::info!(user_id = id, "Updating user");

        let mut user = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("user"))?;

        if let Some(email) = changes.email {
            if email != user.email {
                if let Some(owner) = self.repository.find_by_email(&email).await? {
                    if owner.id != id {
                        return Err(AuthError::EmailAlreadyExists.into());
                    }
                }
                user.email = email;
            }
        }
        if let Some(name) = changes.name {
            user.name = name;
        }
        if let Some(age) = changes.age {
            user.age = age;
        }

        let user = self.repository.update(user).await?;
        tracing::info!(user_id = id, "User updated");
        Ok(user.into())
    }

    /// Delete a user and their orders.
    ///
    /// When callers delete their own account, the token they presented is
    /// revoked once the delete has succeeded.
    pub async fn delete(&self, id: i64, caller: &Caller) -> Result<(), DomainError> {
        tracing::info!(user_id = id, caller_id = caller.user_id, "Deleting user");

        if !self.repository.delete(id).await? {
            return Err(DomainError::not_found("user"));
        }

        if caller.is_self(id) {
            self.tokens.revoke(&caller.token);
        }

        tracing::info!(user_id = id, "User deleted");
        Ok(())
    }

    async fn hash_password(&self, password: String) -> Result<String, DomainError> {
        let hasher = Arc::clone(&self.hasher);
        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| DomainError::internal(format!("hashing task failed: {}", e)))?
    }

    async fn verify_password(&self, password: String, digest: String) -> Result<bool, DomainError> {
        let hasher = Arc::clone(&self.hasher);
        tokio::task::spawn_blocking(move || hasher.verify(&password, &digest))
            .await
            .map_err(|e| DomainError::internal(format!("hashing task failed: {}", e)))?
    }
}
