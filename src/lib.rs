//! 미디어 플랫폼 계정 서비스
//!
//! 계정 생성, 자격 증명 확인, 프로필 변경, 역할 관리, 서명된 세션 토큰 발급을
//! 제공하는 Rust 기반 서비스입니다.
//!
//! # Features
//!
//! - **계정 관리**: 가입(listener / artist), 프로필/아바타 변경, 고유 슬러그
//! - **역할 관리**: 관리자 승격, 역할 변경
//! - **세션 토큰**: HS256 JWT 발급 및 검증
//! - **MongoDB**: 사용자, 아티스트, 슬러그 예약 저장
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트 + 인증 미들웨어
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ AccountService  │ ← 비즈니스 로직 (생성자 주입)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← UserStore / SlugGenerator / ArtistRegistrar
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     MongoDB     │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use account_service::config::JwtSettings;
//! use account_service::services::{accounts::AccountService, auth::{PasswordService, TokenService}};
//!
//! let tokens = Arc::new(TokenService::new(JwtSettings::from_env()?));
//! let accounts = AccountService::new(users, slugs, artists, PasswordService::from_env(), tokens);
//!
//! let user = accounts.register("dj_kim", "dj@example.com", "password123", "listener", "").await?;
//! let token = accounts.issue_token(&user)?;
//! ```

pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
pub mod middlewares;

#[cfg(test)]
mod test_utils;
