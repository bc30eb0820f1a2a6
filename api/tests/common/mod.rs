//! Shared fixtures for the HTTP tests
//!
//! The app runs over the in-memory `MockStore` with a cheap bcrypt cost.

#![allow(dead_code)]

use std::sync::Arc;

use actix_web::{
    body::MessageBody,
    dev::{Service, ServiceResponse},
    http::StatusCode,
    test, web,
};
use serde_json::{json, Value};

use sd_api::AppState;
use sd_core::repositories::MockStore;
use sd_core::services::{BcryptPasswordHasher, RevocationList, TokenService, TokenServiceConfig};

pub const TEST_SECRET: &str = "shopdesk-api-test-secret";
pub const PASSWORD: &str = "secret123";

pub type TestState = AppState<MockStore, MockStore, BcryptPasswordHasher>;

pub struct Fixture {
    pub state: web::Data<TestState>,
    pub store: MockStore,
    pub tokens: Arc<TokenService>,
}

pub fn fixture() -> Fixture {
    fixture_with(TokenServiceConfig::with_secret(TEST_SECRET))
}

pub fn fixture_with(config: TokenServiceConfig) -> Fixture {
    let store = MockStore::new();
    let tokens = Arc::new(TokenService::new(config, Arc::new(RevocationList::new())));
    let state = web::Data::new(AppState::new(
        Arc::new(store.clone()),
        Arc::new(store.clone()),
        Arc::new(BcryptPasswordHasher::new(4)),
        Arc::clone(&tokens),
    ));

    Fixture {
        state,
        store,
        tokens,
    }
}

/// Send a request and decode the JSON body (`Null` when empty)
pub async fn send<S, R, B>(app: &S, req: R) -> (StatusCode, Value)
where
    S: Service<R, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let resp = test::call_service(app, req).await;
    let status = resp.status();
    let bytes = test::read_body(resp).await;
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("response body is not JSON")
    };
    (status, body)
}

pub fn register_req(name: &str, email: &str, age: i32) -> test::TestRequest {
    test::TestRequest::post().uri("/users").set_json(json!({
        "name": name,
        "email": email,
        "password": PASSWORD,
        "age": age,
    }))
}

pub fn login_req(email: &str, password: &str) -> test::TestRequest {
    test::TestRequest::post()
        .uri("/auth/login")
        .set_json(json!({ "email": email, "password": password }))
}

pub fn authed(req: test::TestRequest, token: &str) -> test::TestRequest {
    req.insert_header(("Authorization", format!("Bearer {}", token)))
}

pub fn token_of(body: &Value) -> String {
    body["token"]
        .as_str()
        .expect("login response has no token")
        .to_string()
}
