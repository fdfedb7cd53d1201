//! 인증 및 보안 서비스 모듈
//!
//! # Features
//!
//! - bcrypt 비밀번호 해싱/검증 ([`PasswordService`](password_service::PasswordService))
//! - HS256 세션 토큰 발급/검증 ([`TokenService`](token_service::TokenService))
//!
//! # Security
//!
//! - HMAC-SHA256 토큰 서명
//! - 발급자/대상/만료 검증 (허용 오차 없음)
//! - 환경별 bcrypt cost
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::TokenService;
//!
//! let token = token_service.issue_token(&user)?;
//! let claims = token_service.verify_token(&token)?;
//! ```

pub mod password_service;
pub mod token_service;

pub use password_service::*;
pub use token_service::*;
