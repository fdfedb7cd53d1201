//! # Data Transfer Objects (DTO) Module
//!
//! HTTP 경계에서 주고받는 요청/응답 객체를 정의합니다.
//!
//! | 역할 | 모듈 |
//! |------|------|
//! | HTTP 요청 본문 매핑 + `validator` 검증 | [`users::request`] |
//! | HTTP 응답 본문 매핑 (비밀번호 해시 제외) | [`users::response`] |
//!
//! 요청 DTO의 검증은 HTTP 계층의 추가 제약입니다. 서비스 계층의 규칙
//! (역할 허용 목록, 중복 사용자명 등)은 서비스가 직접 검사합니다.

pub mod users;

pub use users::*;
