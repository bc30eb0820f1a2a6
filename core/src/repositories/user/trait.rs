//! User repository trait defining the interface for user persistence.
//!
//! Implementations own id assignment and email uniqueness. Callers check for
//! an existing email before inserting, but that check and the insert are not
//! atomic, so an implementation must also reject a duplicate email itself
//! with [`AuthError::EmailAlreadyExists`](crate::errors::AuthError).

use async_trait::async_trait;

use crate::domain::entities::user::{NewUser, User};
use crate::domain::value_objects::UserFilter;
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations
///
/// # Example Implementation
/// ```no_run
/// use async_trait::async_trait;
/// use sd_core::domain::entities::user::{NewUser, User};
/// use sd_core::domain::value_objects::UserFilter;
/// use sd_core::errors::DomainError;
/// use sd_core::repositories::UserRepository;
///
/// struct PgUserRepository {
///     // database connection pool
/// }
///
/// #[async_trait]
/// impl UserRepository for PgUserRepository {
///     async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError> {
///         // Implementation here
///         Ok(None)
///     }
///
///     // ... other methods
/// #   async fn find_by_email(&self, _: &str) -> Result<Option<User>, DomainError> { Ok(None) }
/// #   async fn create(&self, _: NewUser) -> Result<User, DomainError> { unimplemented!() }
/// #   async fn update(&self, user: User) -> Result<User, DomainError> { Ok(user) }
/// #   async fn delete(&self, _: i64) -> Result<bool, DomainError> { Ok(false) }
/// #   async fn list(&self, _: &UserFilter) -> Result<Vec<User>, DomainError> { Ok(vec![]) }
/// #   async fn count(&self, _: &UserFilter) -> Result<u64, DomainError> { Ok(0) }
/// }
/// ```
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by their identifier
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user with that id
    /// * `Err(DomainError)` - Storage failure
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError>;

    /// Find a user by exact email match
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Insert a new user and return it with its assigned id
    ///
    /// # Errors
    /// * `AuthError::EmailAlreadyExists` - Email is already taken
    async fn create(&self, user: NewUser) -> Result<User, DomainError>;

    /// Persist all mutable fields of an existing user
    ///
    /// # Errors
    /// * `DomainError::NotFound` - No user with `user.id`
    /// * `AuthError::EmailAlreadyExists` - Email belongs to another user
    async fn update(&self, user: User) -> Result<User, DomainError>;

    /// Delete a user and, with it, all of the user's orders
    ///
    /// # Returns
    /// * `Ok(true)` - User was deleted
    /// * `Ok(false)` - No user with that id
    async fn delete(&self, id: i64) -> Result<bool, DomainError>;

    /// List users matching the filter's age bounds, ordered by ascending id,
    /// skipping `(page - 1) * limit` rows and returning at most `limit`
    async fn list(&self, filter: &UserFilter) -> Result<Vec<User>, DomainError>;

    /// Count users matching the filter's age bounds, ignoring pagination
    async fn count(&self, filter: &UserFilter) -> Result<u64, DomainError>;
}
