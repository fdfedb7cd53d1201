//! 세션 토큰 모델
//!
//! 외부 인가 계층이 검증하는 JWT 클레임 구조를 정의합니다.

pub mod token;

pub use token::TokenClaims;
