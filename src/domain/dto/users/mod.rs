//! # User Data Transfer Objects Module
//!
//! ```text
//! users/
//! ├── request/
//! │   ├── register_request.rs   # 회원가입
//! │   ├── auth_request.rs       # 로그인
//! │   └── profile_request.rs    # 프로필/아바타/역할 변경
//! └── response/
//!     └── user_response.rs      # 사용자 정보, 토큰 응답
//! ```

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
