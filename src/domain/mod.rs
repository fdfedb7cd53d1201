//! # Domain Layer Module
//!
//! 계정 서비스의 도메인 계층입니다. 저장소에 영속되는 엔티티, API 경계의 DTO,
//! 그리고 토큰/인증 컨텍스트 모델로 구성됩니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── entities     - MongoDB 문서와 1:1 매핑되는 엔티티 (User, Artist, SlugReservation)
//! ├── dto          - 요청/응답 객체 (validator 기반 입력 검증)
//! └── models       - 세션 토큰 클레임, 인증된 사용자 컨텍스트
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB)
//! ```
//!
//! ## 모듈 구성
//!
//! ### [`entities`]
//!
//! - [`User`](entities::users::user::User): 유일한 계정 레코드. `Role` 은
//!   `listener` / `artist` / `admin` 중 하나입니다.
//! - [`Artist`](entities::artists::artist::Artist): `artist` 역할로 가입한 사용자와
//!   같은 ID, 같은 슬러그를 공유하는 아티스트 레코드
//! - [`SlugReservation`](entities::slugs::slug::SlugReservation): 발급된 슬러그 예약
//!
//! ### [`dto`]
//!
//! HTTP 요청 본문과 응답 본문. 응답은 비밀번호 해시를 절대 포함하지 않습니다.
//!
//! ### [`models`]
//!
//! - [`TokenClaims`](models::token::token::TokenClaims): 외부 인가 계층과 공유하는 클레임 계약
//! - [`AuthenticatedUser`](models::auth::authenticated_user::AuthenticatedUser): 미들웨어가
//!   요청 확장에 저장하는 인증 컨텍스트

pub mod entities;
pub mod dto;
pub mod models;

pub use entities::{Artist, Role, SlugReservation, User};
pub use dto::{AuthResponse, RegisterRequest, UserResponse};
pub use models::{AuthenticatedUser, TokenClaims};
