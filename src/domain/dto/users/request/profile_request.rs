use serde::{Deserialize, Serialize};
use validator::Validate;

/// 부분 프로필 수정 요청
///
/// 값이 있고 비어 있지 않은 필드만 적용됩니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateProfileRequest {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
}

/// 기본 정보 덮어쓰기 요청
///
/// 세 필드 모두 무조건 덮어씁니다. 누락된 필드는 비워집니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateBasicInfoRequest {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
}

/// 아바타 변경 요청. 빈 문자열도 유효한 값입니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateAvatarRequest {
    pub avatar_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateRoleRequest {
    #[validate(length(min = 1, message = "역할을 입력해주세요"))]
    pub role: String,
}
