use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// 회원가입 요청 DTO
///
/// 역할 허용 목록(`listener` / `artist`)과 사용자명 중복은 서비스가 검사합니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_artist_name"))]
pub struct RegisterRequest {
    /// 사용자명 (3-30자, 영문/숫자/언더스코어만 허용)
    #[validate(length(
        min = 3,
        max = 30,
        message = "사용자명은 3-30자 사이여야 합니다"
    ))]
    #[validate(custom(function = "validate_username"))]
    pub username: String,

    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    #[validate(length(
        min = 8,
        message = "비밀번호는 최소 8자 이상이어야 합니다"
    ))]
    pub password: String,

    /// `listener` 또는 `artist`
    pub role: String,

    /// `artist` 역할일 때 생성될 아티스트 이름
    #[serde(default)]
    pub artist_name: Option<String>,
}

impl RegisterRequest {
    pub fn artist_name(&self) -> &str {
        self.artist_name.as_deref().unwrap_or_default()
    }
}

/// 사용자명 형식 검증 (영문, 숫자, 언더스코어만 허용)
fn validate_username(username: &str) -> Result<(), ValidationError> {
    if !username.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(ValidationError::new("invalid_username")
            .with_message("사용자명은 알파벳, 숫자, 언더스코어만 사용 가능합니다".into()));
    }
    Ok(())
}

/// 아티스트로 가입하는 경우 아티스트 이름 필수
fn validate_artist_name(req: &RegisterRequest) -> Result<(), ValidationError> {
    if req.role == "artist" && req.artist_name().trim().is_empty() {
        return Err(ValidationError::new("artist_name_required")
            .with_message("아티스트로 가입하려면 아티스트 이름이 필요합니다".into()));
    }
    Ok(())
}
