//! Integration tests for login and the JWT authentication middleware

mod common;

#[cfg(test)]
mod tests {
    use actix_web::{http::StatusCode, test, web, App, HttpResponse};
    use chrono::Utc;
    use jsonwebtoken::{encode, EncodingKey, Header};
    use serde_json::{json, Value};
    use std::sync::Arc;

    use sd_api::create_app;
    use sd_api::middleware::{AuthContext, JwtAuth};
    use sd_core::services::{RevocationList, TokenService, TokenServiceConfig};

    use crate::common::{
        authed, fixture, fixture_with, login_req, register_req, send, token_of, PASSWORD,
        TEST_SECRET,
    };

    fn forge(claims: Value, secret: &str) -> String {
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    #[actix_web::test]
    async fn test_login_returns_token_for_subject() {
        let fx = fixture();
        let app = test::init_service(create_app(fx.state.clone())).await;

        send(&app, register_req("Alice", "alice@example.com", 30).to_request()).await;
        let (status, body) =
            send(&app, login_req("alice@example.com", PASSWORD).to_request()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(fx.tokens.verify(&token_of(&body)).unwrap(), 1);
    }

    #[actix_web::test]
    async fn test_login_failures_look_the_same() {
        let fx = fixture();
        let app = test::init_service(create_app(fx.state.clone())).await;

        send(&app, register_req("Alice", "alice@example.com", 30).to_request()).await;

        let (status, wrong_password) =
            send(&app, login_req("alice@example.com", "wrong-pass").to_request()).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(wrong_password, json!({ "error": "invalid email or password" }));

        let (status, unknown_email) =
            send(&app, login_req("nobody@example.com", PASSWORD).to_request()).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(unknown_email, wrong_password);
    }

    #[actix_web::test]
    async fn test_login_validation() {
        let fx = fixture();
        let app = test::init_service(create_app(fx.state.clone())).await;

        let req = test::TestRequest::post()
            .uri("/auth/login")
            .set_json(json!({ "email": "not-an-email" }))
            .to_request();
        let (status, body) = send(&app, req).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            body,
            json!({
                "errors": [
                    "field 'email' must be a valid email",
                    "field 'password' is required"
                ]
            })
        );
    }

    #[actix_web::test]
    async fn test_login_empty_credentials_are_required() {
        let fx = fixture();
        let app = test::init_service(create_app(fx.state.clone())).await;

        send(&app, register_req("Alice", "alice@example.com", 30).to_request()).await;

        let (status, body) = send(&app, login_req("", "").to_request()).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            body,
            json!({
                "errors": [
                    "field 'email' is required",
                    "field 'password' is required"
                ]
            })
        );

        let (status, body) = send(&app, login_req("alice@example.com", "").to_request()).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body, json!({ "errors": ["field 'password' is required"] }));
    }

    #[actix_web::test]
    async fn test_login_without_secret_is_internal_error() {
        let fx = fixture_with(TokenServiceConfig::default());
        let app = test::init_service(create_app(fx.state.clone())).await;

        send(&app, register_req("Alice", "alice@example.com", 30).to_request()).await;
        let (status, body) =
            send(&app, login_req("alice@example.com", PASSWORD).to_request()).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "internal server error" }));
    }

    #[actix_web::test]
    async fn test_protected_routes_require_bearer() {
        let fx = fixture();
        let app = test::init_service(create_app(fx.state.clone())).await;

        let requests = [
            test::TestRequest::get().uri("/users"),
            test::TestRequest::get().uri("/users/1"),
            test::TestRequest::put().uri("/users/1").set_json(json!({})),
            test::TestRequest::delete().uri("/users/1"),
            test::TestRequest::post().uri("/users/1/orders").set_json(json!({})),
            test::TestRequest::get().uri("/users/1/orders"),
        ];

        for req in requests {
            let (status, body) = send(&app, req.to_request()).await;
            assert_eq!(status, StatusCode::UNAUTHORIZED);
            assert_eq!(body, json!({ "error": "authorization required" }));
        }
    }

    #[actix_web::test]
    async fn test_non_bearer_scheme_rejected() {
        let fx = fixture();
        let app = test::init_service(create_app(fx.state.clone())).await;

        let req = test::TestRequest::get()
            .uri("/users")
            .insert_header(("Authorization", "Basic YWxpY2U6c2VjcmV0"))
            .to_request();
        let (status, body) = send(&app, req).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, json!({ "error": "authorization required" }));
    }

    #[actix_web::test]
    async fn test_bad_tokens_rejected() {
        let fx = fixture();
        let app = test::init_service(create_app(fx.state.clone())).await;
        let now = Utc::now().timestamp();

        let tokens = [
            "not-a-jwt".to_string(),
            forge(json!({ "user_id": 1, "iat": now, "exp": now + 3600 }), "other-secret"),
            forge(
                json!({ "user_id": 1, "iat": now - 7200, "exp": now - 3600 }),
                TEST_SECRET,
            ),
        ];

        for token in tokens {
            let (status, body) = send(
                &app,
                authed(test::TestRequest::get().uri("/users"), &token).to_request(),
            )
            .await;
            assert_eq!(status, StatusCode::UNAUTHORIZED);
            assert_eq!(body, json!({ "error": "invalid token" }));
        }
    }

    #[actix_web::test]
    async fn test_bad_claims_rejected() {
        let fx = fixture();
        let app = test::init_service(create_app(fx.state.clone())).await;
        let now = Utc::now().timestamp();

        let claims = [
            json!({ "user_id": "abc", "iat": now, "exp": now + 3600 }),
            json!({ "user_id": 0, "iat": now, "exp": now + 3600 }),
            json!({ "iat": now, "exp": now + 3600 }),
        ];

        for claim in claims {
            let token = forge(claim, TEST_SECRET);
            let (status, body) = send(
                &app,
                authed(test::TestRequest::get().uri("/users"), &token).to_request(),
            )
            .await;
            assert_eq!(status, StatusCode::UNAUTHORIZED);
            assert_eq!(body, json!({ "error": "invalid data" }));
        }
    }

    #[actix_web::test]
    async fn test_errors_localized_to_russian() {
        let fx = fixture();
        let app = test::init_service(create_app(fx.state.clone())).await;

        let req = test::TestRequest::get()
            .uri("/users")
            .insert_header(("Accept-Language", "ru-RU,ru;q=0.9,en;q=0.8"))
            .to_request();
        let (status, body) = send(&app, req).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, json!({ "error": "требуется авторизация" }));
    }

    #[actix_web::test]
    async fn test_middleware_injects_auth_context() {
        async fn whoami(auth: AuthContext) -> HttpResponse {
            HttpResponse::Ok().json(json!({ "user_id": auth.user_id }))
        }

        let tokens = Arc::new(TokenService::new(
            TokenServiceConfig::with_secret(TEST_SECRET),
            Arc::new(RevocationList::new()),
        ));
        let token = tokens.issue(7).unwrap();

        let app = test::init_service(
            App::new()
                .wrap(JwtAuth::new(Arc::clone(&tokens)))
                .route("/whoami", web::get().to(whoami)),
        )
        .await;

        let (status, body) = send(
            &app,
            authed(test::TestRequest::get().uri("/whoami"), &token).to_request(),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "user_id": 7 }));
    }

    #[actix_web::test]
    async fn test_auth_context_extractor_without_middleware() {
        async fn whoami(auth: AuthContext) -> HttpResponse {
            HttpResponse::Ok().json(json!({ "user_id": auth.user_id }))
        }

        let app = test::init_service(App::new().route("/whoami", web::get().to(whoami))).await;

        let req = test::TestRequest::get().uri("/whoami").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }
}
