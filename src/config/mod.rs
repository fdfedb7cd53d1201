//! # Configuration Module
//!
//! 계정 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 데이터베이스, 서버, 환경, 비밀번호 해싱 설정
//! - [`jwt_config`] - 세션 토큰 서명 설정 (시작 시점 검증 후 주입)
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="127.0.0.1"
//! export PORT="8080"
//!
//! # MongoDB
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="media_platform"
//!
//! # JWT 설정 (필수)
//! export JWT_SECRET_KEY="your-super-secret-key"
//! export JWT_ISSUER="media-platform-api"
//! export JWT_AUDIENCE="media-platform-clients"
//! export JWT_EXPIRY_IN_MINUTES="60"
//!
//! # 보안 설정
//! export ENVIRONMENT="production"  # development, test, staging, production
//! export BCRYPT_COST="12"          # 4-15 범위
//! ```

pub mod data_config;
pub mod jwt_config;

pub use data_config::*;
pub use jwt_config::JwtSettings;
