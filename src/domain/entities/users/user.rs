use std::fmt;
use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 토큰의 역할 클레임에 역할이 없을 때 사용하는 값
pub const DEFAULT_ROLE_CLAIM: &str = "user";

/// 사용자 역할
///
/// 저장소에는 소문자 문자열로 저장됩니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Listener,
    Artist,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Listener => "listener",
            Role::Artist => "artist",
            Role::Admin => "admin",
        }
    }

    /// 정확히 일치하는 역할 이름만 허용합니다. (대소문자 구분)
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "listener" => Some(Role::Listener),
            "artist" => Some(Role::Artist),
            "admin" => Some(Role::Admin),
            _ => None,
        }
    }

    /// 가입 시점에 스스로 선택할 수 있는 역할인지 여부
    ///
    /// `admin` 은 명시적인 승격으로만 부여됩니다.
    pub fn is_self_assignable(&self) -> bool {
        matches!(self, Role::Listener | Role::Artist)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 사용자 엔티티
///
/// 시스템의 유일한 계정 레코드입니다. 가입으로만 생성되고,
/// 명시적인 수정 연산(아바타, 프로필, 역할)으로만 변경되며, 삭제되지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 사용자 이름 (unique, 생성 후 변경 불가)
    pub username: String,
    pub email: String,
    /// bcrypt 해시
    pub password_hash: String,
    /// 사용자 역할. 과거 문서에는 없을 수 있습니다.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    /// 사용자명에서 파생된 고유 슬러그
    pub slug: String,
    /// 프로필 이미지 URL (기본값: 빈 문자열)
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    /// 계정 활성화 여부 (인증 게이트)
    pub is_active: bool,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl User {
    /// 가입 요청으로부터 새 계정 레코드를 구성합니다.
    ///
    /// 활성 상태, 빈 아바타, 현재 시각의 타임스탬프로 시작합니다.
    pub fn new_account(
        id: ObjectId,
        username: String,
        email: String,
        password_hash: String,
        role: Role,
        slug: String,
    ) -> Self {
        let now = DateTime::now();

        Self {
            id: Some(id),
            username,
            email,
            password_hash,
            role: Some(role),
            slug,
            avatar: String::new(),
            first_name: None,
            last_name: None,
            bio: None,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    /// 토큰에 실리는 역할 이름. 역할이 없으면 `"user"`.
    pub fn role_claim(&self) -> &str {
        self.role.as_ref().map(Role::as_str).unwrap_or(DEFAULT_ROLE_CLAIM)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User::new_account(
            ObjectId::new(),
            "dj_kim".to_string(),
            "dj@example.com".to_string(),
            "$2b$04$hash".to_string(),
            Role::Listener,
            "dj-kim".to_string(),
        )
    }

    #[test]
    fn test_new_account_defaults() {
        let user = sample_user();

        assert!(user.id.is_some());
        assert!(user.is_active);
        assert_eq!(user.avatar, "");
        assert_eq!(user.first_name, None);
        assert_eq!(user.created_at, user.updated_at);
    }

    #[test]
    fn test_role_names_are_exact() {
        assert_eq!(Role::from_name("listener"), Some(Role::Listener));
        assert_eq!(Role::from_name("artist"), Some(Role::Artist));
        assert_eq!(Role::from_name("admin"), Some(Role::Admin));
        assert_eq!(Role::from_name("Admin"), None);
        assert_eq!(Role::from_name("superuser"), None);
        assert_eq!(Role::from_name(""), None);
    }

    #[test]
    fn test_only_listener_and_artist_are_self_assignable() {
        assert!(Role::Listener.is_self_assignable());
        assert!(Role::Artist.is_self_assignable());
        assert!(!Role::Admin.is_self_assignable());
    }

    #[test]
    fn test_role_claim_defaults_to_user() {
        let mut user = sample_user();
        assert_eq!(user.role_claim(), "listener");

        user.role = None;
        assert_eq!(user.role_claim(), DEFAULT_ROLE_CLAIM);
    }

    #[test]
    fn test_role_serializes_lowercase() {
        let json = serde_json::to_string(&Role::Artist).unwrap();
        assert_eq!(json, "\"artist\"");
    }

    #[test]
    fn test_legacy_document_without_role_or_avatar() {
        let doc = mongodb::bson::doc! {
            "_id": ObjectId::new(),
            "username": "old_timer",
            "email": "old@example.com",
            "password_hash": "$2b$04$hash",
            "slug": "old-timer",
            "is_active": true,
            "created_at": DateTime::now(),
            "updated_at": DateTime::now(),
        };

        let user: User = mongodb::bson::from_document(doc).unwrap();
        assert_eq!(user.role, None);
        assert_eq!(user.avatar, "");
        assert_eq!(user.role_claim(), "user");
    }
}
