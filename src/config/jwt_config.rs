//! # JWT 서명 설정
//!
//! 세션 토큰 발급에 필요한 네 가지 값을 하나의 구조체로 묶어
//! 서비스 생성 시점에 주입합니다. 값이 누락되었거나 잘못된 경우
//! 요청 처리 중이 아니라 애플리케이션 시작 시점에 실패합니다.
//!
//! ## 환경 변수
//!
//! ```bash
//! export JWT_SECRET_KEY="at-least-32-bytes-of-random-secret"   # 필수
//! export JWT_ISSUER="media-platform-api"                        # 필수
//! export JWT_AUDIENCE="media-platform-clients"                  # 필수
//! export JWT_EXPIRY_IN_MINUTES="60"                             # 선택 (기본값 60)
//! ```

use std::env;
use crate::errors::AppError;

pub const SECRET_KEY_VAR: &str = "JWT_SECRET_KEY";
pub const ISSUER_VAR: &str = "JWT_ISSUER";
pub const AUDIENCE_VAR: &str = "JWT_AUDIENCE";
pub const EXPIRY_IN_MINUTES_VAR: &str = "JWT_EXPIRY_IN_MINUTES";

/// `JWT_EXPIRY_IN_MINUTES` 미설정 시 사용하는 토큰 수명
pub const DEFAULT_EXPIRY_IN_MINUTES: i64 = 60;

/// 허용하는 최대 토큰 수명 (1년)
pub const MAX_EXPIRY_IN_MINUTES: i64 = 60 * 24 * 365;

/// 토큰 서명 설정
///
/// `secret_key` 는 HMAC-SHA256 대칭키로 그대로 사용됩니다.
#[derive(Clone)]
pub struct JwtSettings {
    pub secret_key: String,
    pub issuer: String,
    pub audience: String,
    pub expiry_in_minutes: i64,
}

impl std::fmt::Debug for JwtSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtSettings")
            .field("secret_key", &"***")
            .field("issuer", &self.issuer)
            .field("audience", &self.audience)
            .field("expiry_in_minutes", &self.expiry_in_minutes)
            .finish()
    }
}

impl JwtSettings {
    /// 프로세스 환경 변수에서 설정을 읽고 검증합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConfigurationError` - 필수 값 누락 또는 만료 시간 파싱 실패
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 임의의 키 조회 함수로부터 설정을 구성합니다.
    ///
    /// 빈 문자열은 누락된 값으로 취급합니다.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| AppError::ConfigurationError(format!("{} 가 설정되지 않았습니다", key)))
        };

        let secret_key = required(SECRET_KEY_VAR)?;
        let issuer = required(ISSUER_VAR)?;
        let audience = required(AUDIENCE_VAR)?;

        let expiry_in_minutes = match lookup(EXPIRY_IN_MINUTES_VAR) {
            Some(raw) => raw.trim().parse::<i64>().map_err(|e| {
                AppError::ConfigurationError(format!("{} 파싱 실패 ({}): {}", EXPIRY_IN_MINUTES_VAR, raw, e))
            })?,
            None => DEFAULT_EXPIRY_IN_MINUTES,
        };

        Self::new(secret_key, issuer, audience, expiry_in_minutes)
    }

    pub fn new(
        secret_key: impl Into<String>,
        issuer: impl Into<String>,
        audience: impl Into<String>,
        expiry_in_minutes: i64,
    ) -> Result<Self, AppError> {
        if expiry_in_minutes <= 0 {
            return Err(AppError::ConfigurationError(format!(
                "{} 는 양수여야 합니다: {}",
                EXPIRY_IN_MINUTES_VAR, expiry_in_minutes
            )));
        }
        if expiry_in_minutes > MAX_EXPIRY_IN_MINUTES {
            return Err(AppError::ConfigurationError(format!(
                "{} 는 {} 이하여야 합니다: {}",
                EXPIRY_IN_MINUTES_VAR, MAX_EXPIRY_IN_MINUTES, expiry_in_minutes
            )));
        }

        Ok(Self {
            secret_key: secret_key.into(),
            issuer: issuer.into(),
            audience: audience.into(),
            expiry_in_minutes,
        })
    }

    /// 토큰 수명 (초)
    pub fn expiry_seconds(&self) -> i64 {
        self.expiry_in_minutes.saturating_mul(60)
    }
}
