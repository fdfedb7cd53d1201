//! JWT 인증 미들웨어
//!
//! 요청 파이프라인에서 세션 토큰을 검증하고 사용자 정보를 추출합니다.

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
};
use crate::domain::models::auth::RequiredRole;
use crate::middlewares::auth_inner::AuthMiddlewareService;

/// JWT 인증 미들웨어
///
/// 감싼 스코프의 모든 요청에 유효한 토큰을 요구합니다.
pub struct AuthMiddleware {
    /// 접근에 필요한 역할 (선택사항)
    required_role: Option<RequiredRole>,
}

impl AuthMiddleware {
    /// 유효한 토큰만 요구하는 미들웨어
    pub fn required() -> Self {
        Self { required_role: None }
    }

    /// 나열된 역할 중 하나를 요구하는 미들웨어
    pub fn required_with_roles(roles: &[&str]) -> Self {
        Self {
            required_role: Some(RequiredRole::any_of(roles)),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
            required_role: self.required_role.clone(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, web, App, HttpResponse};
    use crate::domain::entities::users::user::Role;
    use crate::domain::models::auth::AuthenticatedUser;
    use crate::test_utils::{sample_user, TestContext};

    async fn whoami(user: AuthenticatedUser) -> HttpResponse {
        HttpResponse::Ok().body(user.username)
    }

    macro_rules! guarded_app {
        ($ctx:expr, $middleware:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::from($ctx.tokens.clone()))
                    .service(
                        web::scope("/guarded")
                            .wrap($middleware)
                            .route("", web::get().to(whoami)),
                    ),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_missing_or_malformed_header_is_unauthorized() {
        let ctx = TestContext::new();
        let app = guarded_app!(ctx, AuthMiddleware::required());

        let req = test::TestRequest::get().uri("/guarded").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

        let req = test::TestRequest::get()
            .uri("/guarded")
            .insert_header(("Authorization", "Bearer not-a-token"))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_valid_token_reaches_handler() {
        let ctx = TestContext::new();
        let user = sample_user("dj_kim", Role::Listener);
        let app = guarded_app!(ctx, AuthMiddleware::required());

        let req = test::TestRequest::get()
            .uri("/guarded")
            .insert_header(("Authorization", ctx.bearer_for(&user)))
            .to_request();
        let body = test::call_and_read_body(&app, req).await;

        assert_eq!(body, web::Bytes::from_static(b"dj_kim"));
    }

    #[actix_web::test]
    async fn test_role_gate_is_forbidden_for_other_roles() {
        let ctx = TestContext::new();
        let listener = sample_user("listener", Role::Listener);
        let admin = sample_user("boss", Role::Admin);
        let app = guarded_app!(ctx, AuthMiddleware::required_with_roles(&["admin"]));

        let req = test::TestRequest::get()
            .uri("/guarded")
            .insert_header(("Authorization", ctx.bearer_for(&listener)))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::FORBIDDEN);
        let body: serde_json::Value = test::read_body_json(res).await;
        assert!(body["error"].as_str().unwrap().starts_with("Authorization error"));

        let req = test::TestRequest::get()
            .uri("/guarded")
            .insert_header(("Authorization", ctx.bearer_for(&admin)))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_missing_token_service_is_server_error() {
        let ctx = TestContext::new();
        let user = sample_user("dj_kim", Role::Listener);
        let app = test::init_service(
            App::new().service(
                web::scope("/guarded")
                    .wrap(AuthMiddleware::required())
                    .route("", web::get().to(whoami)),
            ),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/guarded")
            .insert_header(("Authorization", ctx.bearer_for(&user)))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
