//! 인증 컨텍스트 모델
//!
//! - [`authenticated_user`] - 검증된 토큰에서 추출한 사용자 정보 (`FromRequest` 구현)
//! - [`authentication_request`] - 라우트별 역할 요구사항

pub mod authenticated_user;
pub mod authentication_request;

pub use authenticated_user::AuthenticatedUser;
pub use authentication_request::RequiredRole;
