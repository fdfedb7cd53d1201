//! # Domain Models Module
//!
//! 저장소에 영속되지 않는 도메인 모델을 정의합니다.
//!
//! ## Entities vs Models 구분
//!
//! - **Entities** (`../entities/`): MongoDB 문서로 저장되는 객체 (`User`, `Artist`)
//! - **Models** (`./`): 요청 수명 동안만 존재하는 값 객체
//!
//! ## 구성
//!
//! - [`token`] - 세션 토큰 클레임과 클레임 이름 상수
//! - [`auth`] - 인증 미들웨어가 만들어 핸들러로 전달하는 인증 컨텍스트

pub mod token;
pub mod auth;

pub use token::*;
pub use auth::*;
