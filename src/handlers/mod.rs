//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client (Web, Mobile, 다른 플랫폼 서비스)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리         ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   AccountService - 비즈니스 로직                  ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - 데이터 접근                     ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 상태 주입
//!
//! 핸들러는 앱 데이터로 등록된 서비스를 인자로 받습니다.
//!
//! - `web::Data<AccountService>` - 모든 계정 연산
//! - `web::Data<TokenService>` - 인증 미들웨어의 토큰 검증
//!
//! ## 모듈 구성
//!
//! - **`auth`**: 가입, 로그인 (`/api/v1/auth`)
//! - **`users`**: 공개 사용자 조회와 본인 프로필 관리 (`/api/v1/users`, `/api/v1/me`)
//! - **`admin`**: 역할 변경, 관리자 승격 (`/api/v1/admin`, admin 역할 필요)
//!
//! ## 에러 처리
//!
//! 모든 핸들러는 `Result<HttpResponse, AppError>` 를 반환하며,
//! `AppError` 의 `ResponseError` 구현이 상태 코드와 JSON 본문을 결정합니다.
//!
//! ```rust,ignore
//! #[get("/{user_id}")]
//! pub async fn get_user(
//!     accounts: web::Data<AccountService>,
//!     user_id: web::Path<String>,
//! ) -> Result<HttpResponse, AppError> {
//!     let user = accounts.find_by_id(&user_id).await?
//!         .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;
//!     Ok(HttpResponse::Ok().json(UserResponse::from(user)))
//! }
//! ```

pub mod auth;
pub mod users;
pub mod admin;
