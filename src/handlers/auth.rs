//! Authentication HTTP Handlers
//!
//! 가입과 로그인을 처리하고, 성공하면 세션 토큰을 함께 반환합니다.
//!
//! - **가입**: `POST /api/v1/auth/register` → 201
//! - **로그인**: `POST /api/v1/auth/login` → 200 / 401
use actix_web::{post, web, HttpResponse};
use validator::Validate;
use crate::{
    domain::dto::users::{
        request::{LoginRequest, RegisterRequest},
        response::AuthResponse,
    },
    errors::AppError,
    services::accounts::AccountService,
};

/// 회원가입 핸들러
///
/// # Endpoint
/// `POST /api/v1/auth/register`
#[post("/register")]
pub async fn register(
    accounts: web::Data<AccountService>,
    payload: web::Json<RegisterRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let request = payload.into_inner();
    let user = accounts
        .register(
            &request.username,
            &request.email,
            &request.password,
            &request.role,
            request.artist_name(),
        )
        .await?;

    let access_token = accounts.issue_token(&user)?;
    let response = AuthResponse::bearer(user, access_token, accounts.token_lifetime_seconds());

    Ok(HttpResponse::Created().json(response))
}

/// 로그인 핸들러
///
/// 없는 사용자, 비활성 계정, 잘못된 비밀번호는 모두 같은 401 응답을 받습니다.
///
/// # Endpoint
/// `POST /api/v1/auth/login`
#[post("/login")]
pub async fn login(
    accounts: web::Data<AccountService>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let user = accounts
        .authenticate(&payload.username, &payload.password)
        .await?
        .ok_or_else(|| {
            AppError::AuthenticationError("잘못된 사용자명 또는 비밀번호입니다".to_string())
        })?;

    log::info!("로그인 성공 - 사용자: {}", user.username);

    let access_token = accounts.issue_token(&user)?;
    let response = AuthResponse::bearer(user, access_token, accounts.token_lifetime_seconds());

    Ok(HttpResponse::Ok().json(response))
}

#[cfg(test)]
mod tests {
    use actix_web::{http::StatusCode, test};
    use serde_json::{json, Value};
    use crate::domain::entities::users::user::Role;
    use crate::test_utils::{init_app, sample_user, TestContext, TEST_PASSWORD};

    #[actix_web::test]
    async fn test_register_returns_created_with_token() {
        let ctx = TestContext::new();
        let app = init_app!(ctx);

        let req = test::TestRequest::post()
            .uri("/api/v1/auth/register")
            .set_json(json!({
                "username": "the_band",
                "email": "band@example.com",
                "password": "longenough",
                "role": "artist",
                "artist_name": "The Band"
            }))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::CREATED);

        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["user"]["slug"], "the-band");
        assert_eq!(body["user"]["role"], "artist");
        assert_eq!(body["token_type"], "Bearer");
        assert_eq!(body["expires_in"], 3600);
        assert!(body["user"].get("password_hash").is_none());

        let claims = ctx.tokens.verify_token(body["access_token"].as_str().unwrap()).unwrap();
        assert_eq!(claims.unique_name, "the_band");
    }

    #[actix_web::test]
    async fn test_register_rejects_admin_role_and_invalid_input() {
        let ctx = TestContext::new();
        let app = init_app!(ctx);

        for payload in [
            json!({ "username": "boss", "email": "b@example.com", "password": "longenough", "role": "admin" }),
            json!({ "username": "b", "email": "b@example.com", "password": "longenough", "role": "listener" }),
            json!({ "username": "boss", "email": "not-an-email", "password": "longenough", "role": "listener" }),
            json!({ "username": "boss", "email": "b@example.com", "password": "short", "role": "listener" }),
            json!({ "username": "boss", "email": "b@example.com", "password": "longenough", "role": "artist" }),
        ] {
            let req = test::TestRequest::post()
                .uri("/api/v1/auth/register")
                .set_json(&payload)
                .to_request();
            let res = test::call_service(&app, req).await;
            assert_eq!(res.status(), StatusCode::BAD_REQUEST, "payload {}", payload);
        }
        assert_eq!(ctx.users.count(), 0);
    }

    #[actix_web::test]
    async fn test_register_duplicate_is_conflict() {
        let ctx = TestContext::with_users(vec![sample_user("dj_kim", Role::Listener)]);
        let app = init_app!(ctx);

        let req = test::TestRequest::post()
            .uri("/api/v1/auth/register")
            .set_json(json!({
                "username": "dj_kim",
                "email": "again@example.com",
                "password": "longenough",
                "role": "listener"
            }))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::CONFLICT);
    }

    #[actix_web::test]
    async fn test_login() {
        let ctx = TestContext::with_users(vec![sample_user("dj_kim", Role::Listener)]);
        let app = init_app!(ctx);

        let req = test::TestRequest::post()
            .uri("/api/v1/auth/login")
            .set_json(json!({ "username": "dj_kim", "password": TEST_PASSWORD }))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);

        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["user"]["username"], "dj_kim");
        assert!(body["access_token"].as_str().is_some());

        let req = test::TestRequest::post()
            .uri("/api/v1/auth/login")
            .set_json(json!({ "username": "dj_kim", "password": "wrong-password" }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::UNAUTHORIZED);

        let req = test::TestRequest::post()
            .uri("/api/v1/auth/login")
            .set_json(json!({ "username": "nobody", "password": TEST_PASSWORD }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::UNAUTHORIZED);
    }
}
