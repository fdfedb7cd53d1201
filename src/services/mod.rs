//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 생성자 주입으로 협력자(저장소, 슬러그 발급기, 아티스트 등록기)와
//! 설정(`JwtSettings`)을 받습니다. 전역 상태는 없습니다.
//!
//! # Features
//!
//! - 계정 생명주기 (가입, 조회, 프로필/아바타/역할 변경)
//! - 비밀번호 해싱 및 검증 (bcrypt)
//! - 세션 토큰 발급 및 검증 (HS256 JWT)
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::{accounts::AccountService, auth::{PasswordService, TokenService}};
//!
//! let tokens = Arc::new(TokenService::new(JwtSettings::from_env()?));
//! let accounts = AccountService::new(users, slugs, artists, PasswordService::from_env(), tokens);
//! ```

pub mod accounts;
pub mod auth;
