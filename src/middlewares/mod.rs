//! 미들웨어 모듈
//!
//! 요청 처리 파이프라인의 횡단 관심사를 처리합니다.
//!
//! # 제공 미들웨어
//!
//! ### 인증 미들웨어 (AuthMiddleware)
//! - `Authorization: Bearer <token>` 헤더 추출 및 세션 토큰 검증
//! - 역할 클레임 기반 접근 제어 (403)
//! - 검증된 사용자 정보를 request extension 에 저장
//!
//! 토큰 검증기는 앱 데이터로 등록된 `web::Data<TokenService>` 를 사용합니다.
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//! use crate::middlewares::AuthMiddleware;
//!
//! App::new()
//!     .app_data(web::Data::from(token_service.clone()))
//!     .service(
//!         web::scope("/api/v1/me")
//!             .wrap(AuthMiddleware::required())
//!             .route("", web::get().to(me))
//!     )
//!     .service(
//!         web::scope("/api/v1/admin")
//!             .wrap(AuthMiddleware::required_with_roles(&["admin"]))
//!             .route("/users/{id}/role", web::put().to(update_role))
//!     )
//! ```

pub mod auth_middleware;
mod auth_inner;

pub use auth_middleware::AuthMiddleware;
