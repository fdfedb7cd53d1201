//! 계정 관리 서비스 모듈
//!
//! 가입, 인증, 조회, 프로필/아바타/역할 변경, 세션 토큰 발급을
//! [`AccountService`](account_service::AccountService) 하나로 제공합니다.

pub mod account_service;

pub use account_service::AccountService;
