//! 세션 토큰 클레임
//!
//! 플랫폼의 기존 인가 계층이 이 클레임 이름들을 그대로 읽으므로
//! 이름과 의미(발급자/대상/만료)는 외부 계약입니다.
//! 사용자 ID는 `nameid` 와 `userId` 두 키에 모두 실립니다.

use serde::{Deserialize, Serialize};

/// JWT 토큰의 클레임(Payload) 구조체
///
/// 직렬화 키: `nameid`, `unique_name`, `email`, `userId`, `role`, `iss`, `aud`, `exp`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// 사용자 ID (ObjectId 16진수)
    #[serde(rename = "nameid")]
    pub name_id: String,
    #[serde(rename = "unique_name")]
    pub unique_name: String,
    pub email: String,
    /// `name_id` 와 동일
    #[serde(rename = "userId")]
    pub user_id: String,
    /// 역할 이름. 역할이 없는 사용자는 `"user"`.
    pub role: String,
    pub iss: String,
    pub aud: String,
    /// 만료 시간 (Unix timestamp, 초)
    pub exp: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_claims() -> TokenClaims {
        TokenClaims {
            name_id: "id".to_string(),
            unique_name: "name".to_string(),
            email: "e@example.com".to_string(),
            user_id: "id".to_string(),
            role: "listener".to_string(),
            iss: "iss".to_string(),
            aud: "aud".to_string(),
            exp: 1_000,
        }
    }

    #[test]
    fn test_serialized_claim_names() {
        let value = serde_json::to_value(sample_claims()).unwrap();
        let object = value.as_object().unwrap();

        let expected = ["nameid", "unique_name", "email", "userId", "role", "iss", "aud", "exp"];
        assert_eq!(object.len(), expected.len());
        for name in expected {
            assert!(object.contains_key(name), "missing claim {}", name);
        }
        assert_eq!(object["userId"], object["nameid"]);
    }
}
