//! JWT 세션 토큰 서비스 구현
//!
//! 플랫폼의 다른 서비스가 그대로 검증하는 HS256 세션 토큰을 발급합니다.
//! 서명 키, 발급자, 대상, 수명은 생성 시 주입된 [`JwtSettings`] 에서 옵니다.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use crate::{
    config::JwtSettings,
    domain::{entities::users::user::User, models::token::token::TokenClaims},
    errors::AppError,
    utils::string_utils::require_field,
};

const BEARER_PREFIX: &str = "Bearer ";

/// JWT 토큰 관리 서비스
///
/// 키는 생성 시 한 번만 만들어 재사용합니다.
#[derive(Clone)]
pub struct TokenService {
    settings: JwtSettings,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl TokenService {
    pub fn new(settings: JwtSettings) -> Self {
        let encoding_key = EncodingKey::from_secret(settings.secret_key.as_bytes());
        let decoding_key = DecodingKey::from_secret(settings.secret_key.as_bytes());

        Self {
            settings,
            encoding_key,
            decoding_key,
        }
    }

    pub fn settings(&self) -> &JwtSettings {
        &self.settings
    }

    /// 주어진 시각 기준으로 사용자의 클레임을 구성합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 사용자에 ID, 이메일 또는 사용자명이 없음
    /// * `AppError::InternalError` - 만료 시각 계산 범위 초과
    pub fn claims_for(&self, user: &User, now: DateTime<Utc>) -> Result<TokenClaims, AppError> {
        let user_id = user.id_string().ok_or_else(|| {
            AppError::ValidationError("사용자 ID가 없습니다".to_string())
        })?;
        let email = require_field(&user.email, "이메일")?;
        let username = require_field(&user.username, "사용자명")?;

        let expires_at = Duration::try_minutes(self.settings.expiry_in_minutes)
            .and_then(|lifetime| now.checked_add_signed(lifetime))
            .ok_or_else(|| AppError::InternalError(format!(
                "토큰 만료 시각을 계산할 수 없습니다: {}분",
                self.settings.expiry_in_minutes
            )))?;

        Ok(TokenClaims {
            name_id: user_id.clone(),
            unique_name: username.to_string(),
            email: email.to_string(),
            user_id,
            role: user.role_claim().to_string(),
            iss: self.settings.issuer.clone(),
            aud: self.settings.audience.clone(),
            exp: expires_at.timestamp(),
        })
    }

    /// 사용자를 위한 서명된 세션 토큰을 발급합니다.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let token = token_service.issue_token(&user)?;
    /// ```
    pub fn issue_token(&self, user: &User) -> Result<String, AppError> {
        let claims = self.claims_for(user, Utc::now())?;
        self.sign(&claims)
    }

    /// 클레임을 HS256 으로 서명합니다.
    pub fn sign(&self, claims: &TokenClaims) -> Result<String, AppError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(|e| AppError::InternalError(format!("JWT 토큰 생성 실패: {}", e)))
    }

    /// 서명, 발급자, 대상, 만료를 검증하고 클레임을 반환합니다.
    ///
    /// 만료 시각에 대한 허용 오차는 없습니다.
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 만료, 서명 불일치, 발급자/대상 불일치, 형식 오류
    pub fn verify_token(&self, token: &str) -> Result<TokenClaims, AppError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[self.settings.issuer.as_str()]);
        validation.set_audience(&[self.settings.audience.as_str()]);
        validation.set_required_spec_claims(&["exp", "iss", "aud"]);
        validation.leeway = 0;

        decode::<TokenClaims>(token, &self.decoding_key, &validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => {
                    AppError::AuthenticationError("토큰이 만료되었습니다".to_string())
                }
                ErrorKind::InvalidIssuer | ErrorKind::InvalidAudience => {
                    AppError::AuthenticationError("토큰 발급자 또는 대상이 올바르지 않습니다".to_string())
                }
                _ => AppError::AuthenticationError(format!("유효하지 않은 토큰입니다: {}", e)),
            })
    }

    /// `Authorization` 헤더 값에서 `Bearer ` 접두사를 제거합니다.
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> Result<&'a str, AppError> {
        auth_header
            .strip_prefix(BEARER_PREFIX)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| {
                AppError::AuthenticationError("유효하지 않은 인증 헤더 형식입니다".to_string())
            })
    }
}
