//! # 사용자 관련 응답 DTO 모듈
//!
//! - **데이터 은닉**: 비밀번호 해시는 응답에 포함하지 않습니다
//! - `UserResponse` - 표준 사용자 정보 응답
//! - `AuthResponse` - 가입/로그인 후 세션 토큰을 포함한 응답

pub mod user_response;

pub use user_response::{AuthResponse, UserResponse};
