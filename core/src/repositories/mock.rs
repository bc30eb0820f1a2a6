//! In-memory implementation of the user and order repositories
//!
//! Backs service and HTTP tests. It enforces the same constraints as the
//! PostgreSQL schema: unique emails, order foreign keys and cascading deletes.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::order::{NewOrder, Order};
use crate::domain::entities::user::{NewUser, User};
use crate::domain::value_objects::UserFilter;
use crate::errors::{AuthError, DomainError};

use super::order::OrderRepository;
use super::user::UserRepository;

#[derive(Default)]
struct StoreState {
    users: BTreeMap<i64, User>,
    orders: Vec<Order>,
    next_user_id: i64,
    next_order_id: i64,
}

/// Mock store shared by both repository traits
#[derive(Clone, Default)]
pub struct MockStore {
    state: Arc<RwLock<StoreState>>,
}

impl MockStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users
    pub async fn user_count(&self) -> usize {
        self.state.read().await.users.len()
    }

    /// Number of stored orders across all users
    pub async fn order_count(&self) -> usize {
        self.state.read().await.orders.len()
    }
}

#[async_trait]
impl UserRepository for MockStore {
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError> {
        let state = self.state.read().await;
        Ok(state.users.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let state = self.state.read().await;
        Ok(state.users.values().find(|u| u.email == email).cloned())
    }

    async fn create(&self, user: NewUser) -> Result<User, DomainError> {
        let mut state = self.state.write().await;

        if state.users.values().any(|u| u.email == user.email) {
            return Err(AuthError::EmailAlreadyExists.into());
        }

        state.next_user_id += 1;
        let user = User {
            id: state.next_user_id,
            name: user.name,
            email: user.email,
            age: user.age,
            password_hash: user.password_hash,
        };
        state.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn update(&self, user: User) -> Result<User, DomainError> {
        let mut state = self.state.write().await;

        if !state.users.contains_key(&user.id) {
            return Err(DomainError::not_found("user"));
        }
        if state
            .users
            .values()
            .any(|u| u.id != user.id && u.email == user.email)
        {
            return Err(AuthError::EmailAlreadyExists.into());
        }

        state.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        let mut state = self.state.write().await;

        if state.users.remove(&id).is_none() {
            return Ok(false);
        }
        state.orders.retain(|o| o.user_id != id);
        Ok(true)
    }

    async fn list(&self, filter: &UserFilter) -> Result<Vec<User>, DomainError> {
        let state = self.state.read().await;
        let offset = usize::try_from(filter.pagination.offset()).unwrap_or(usize::MAX);
        let limit = filter.pagination.limit as usize;

        Ok(state
            .users
            .values()
            .filter(|u| filter.matches_age(u.age))
            .skip(offset)
            .take(limit)
            .cloned()
            .collect())
    }

    async fn count(&self, filter: &UserFilter) -> Result<u64, DomainError> {
        let state = self.state.read().await;
        Ok(state
            .users
            .values()
            .filter(|u| filter.matches_age(u.age))
            .count() as u64)
    }
}

#[async_trait]
impl OrderRepository for MockStore {
    async fn create(&self, order: NewOrder) -> Result<Order, DomainError> {
        let mut state = self.state.write().await;

        if !state.users.contains_key(&order.user_id) {
            return Err(DomainError::not_found("user"));
        }

        state.next_order_id += 1;
        let order = Order {
            id: state.next_order_id,
            user_id: order.user_id,
            product: order.product,
            quantity: order.quantity,
            price: order.price,
            created_at: Utc::now(),
        };
        state.orders.push(order.clone());
        Ok(order)
    }

    async fn list_by_user(&self, user_id: i64) -> Result<Vec<Order>, DomainError> {
        let state = self.state.read().await;
        let mut orders: Vec<Order> = state
            .orders
            .iter()
            .filter(|o| o.user_id == user_id)
            .cloned()
            .collect();

        orders.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(orders)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sd_shared::types::Pagination;

    fn new_user(email: &str, age: i32) -> NewUser {
        NewUser {
            name: "Test".to_string(),
            email: email.to_string(),
            age,
            password_hash: "hash".to_string(),
        }
    }

    fn new_order(user_id: i64, product: &str) -> NewOrder {
        NewOrder {
            user_id,
            product: product.to_string(),
            quantity: 1,
            price: 9.99,
        }
    }

    #[tokio::test]
    async fn test_create_assigns_increasing_ids() {
        let store = MockStore::new();
        let first = UserRepository::create(&store, new_user("a@example.com", 20)).await.unwrap();
        let second = UserRepository::create(&store, new_user("b@example.com", 20)).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn test_create_rejects_duplicate_email() {
        let store = MockStore::new();
        UserRepository::create(&store, new_user("a@example.com", 20)).await.unwrap();

        let result = UserRepository::create(&store, new_user("a@example.com", 40)).await;
        assert_eq!(result, Err(DomainError::Auth(AuthError::EmailAlreadyExists)));
        assert_eq!(store.user_count().await, 1);
    }

    #[tokio::test]
    async fn test_list_filters_and_paginates() {
        let store = MockStore::new();
        for (i, age) in [15, 20, 25, 30, 35].iter().enumerate() {
            UserRepository::create(&store, new_user(&format!("u{}@example.com", i), *age))
                .await
                .unwrap();
        }

        let filter = UserFilter {
            min_age: Some(20),
            max_age: Some(35),
            pagination: Pagination::new(2, 2),
        };
        let page = store.list(&filter).await.unwrap();
        let ages: Vec<i32> = page.iter().map(|u| u.age).collect();

        assert_eq!(ages, vec![30, 35]);
        assert_eq!(store.count(&filter).await.unwrap(), 4);
    }

    #[tokio::test]
    async fn test_delete_cascades_orders() {
        let store = MockStore::new();
        let alice = UserRepository::create(&store, new_user("a@example.com", 20)).await.unwrap();
        let bob = UserRepository::create(&store, new_user("b@example.com", 20)).await.unwrap();
        OrderRepository::create(&store, new_order(alice.id, "Book")).await.unwrap();
        OrderRepository::create(&store, new_order(bob.id, "Pen")).await.unwrap();

        assert!(store.delete(alice.id).await.unwrap());
        assert!(!store.delete(alice.id).await.unwrap());
        assert_eq!(store.order_count().await, 1);
        assert!(store.list_by_user(alice.id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_order_requires_existing_user() {
        let store = MockStore::new();
        let result = OrderRepository::create(&store, new_order(42, "Book")).await;
        assert_eq!(result, Err(DomainError::not_found("user")));
    }

    #[tokio::test]
    async fn test_orders_listed_newest_first() {
        let store = MockStore::new();
        let user = UserRepository::create(&store, new_user("a@example.com", 20)).await.unwrap();
        for product in ["first", "second", "third"] {
            OrderRepository::create(&store, new_order(user.id, product)).await.unwrap();
        }

        let products: Vec<String> = store
            .list_by_user(user.id)
            .await
            .unwrap()
            .into_iter()
            .map(|o| o.product)
            .collect();
        assert_eq!(products, vec!["third", "second", "first"]);
    }
}
