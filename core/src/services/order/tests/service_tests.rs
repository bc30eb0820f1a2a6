//! Tests for the order service

use std::sync::Arc;

use crate::domain::entities::user::NewUser;
use crate::domain::value_objects::NewOrderInput;
use crate::errors::DomainError;
use crate::repositories::{MockStore, UserRepository};
use crate::services::order::OrderService;

async fn store_with_user() -> (Arc<MockStore>, i64) {
    let store = Arc::new(MockStore::new());
    let user = store
        .create(NewUser {
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            age: 30,
            password_hash: "hash".to_string(),
        })
        .await
        .unwrap();
    (store, user.id)
}

fn laptop() -> NewOrderInput {
    NewOrderInput {
        product: "Laptop".to_string(),
        quantity: 1,
        price: 1200.50,
    }
}

#[tokio::test]
async fn test_create_echoes_input() {
    let (store, user_id) = store_with_user().await;
    let service = OrderService::new(store);

    let order = service.create(user_id, laptop()).await.unwrap();

    assert!(order.id > 0);
    assert_eq!(order.user_id, user_id);
    assert_eq!(order.product, "Laptop");
    assert_eq!(order.quantity, 1);
    assert_eq!(order.price, 1200.50);
}

#[tokio::test]
async fn test_create_for_unknown_user() {
    let service = OrderService::new(Arc::new(MockStore::new()));
    let result = service.create(7, laptop()).await;
    assert_eq!(result, Err(DomainError::not_found("user")));
}

#[tokio::test]
async fn test_list_newest_first() {
    let (store, user_id) = store_with_user().await;
    let service = OrderService::new(store);

    let first = service.create(user_id, laptop()).await.unwrap();
    let second = service
        .create(
            user_id,
            NewOrderInput {
                product: "Mouse".to_string(),
                quantity: 2,
                price: 25.0,
            },
        )
        .await
        .unwrap();

    let orders = service.list_by_user(user_id).await.unwrap();
    let ids: Vec<i64> = orders.iter().map(|o| o.id).collect();
    assert_eq!(ids, vec![second.id, first.id]);
    assert!(orders[0].created_at >= orders[1].created_at);
}

#[tokio::test]
async fn test_list_for_user_without_orders() {
    let (store, user_id) = store_with_user().await;
    let service = OrderService::new(store);

    assert!(service.list_by_user(user_id).await.unwrap().is_empty());
    assert!(service.list_by_user(12345).await.unwrap().is_empty());
}
