use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};

/// 슬러그 예약
///
/// 슬러그 값 자체가 `_id` 이므로 컬렉션의 기본 유니크 인덱스가
/// 중복 발급을 막습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlugReservation {
    #[serde(rename = "_id")]
    pub value: String,
    /// 슬러그를 파생한 원본 문자열 (사용자명)
    pub seed: String,
    pub created_at: DateTime,
}

impl SlugReservation {
    pub fn new(value: String, seed: &str) -> Self {
        Self {
            value,
            seed: seed.to_string(),
            created_at: DateTime::now(),
        }
    }
}
