use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 아티스트 엔티티
///
/// 연결된 사용자와 같은 `_id`, 같은 슬러그를 가집니다.
/// 가입 시 한 번 생성되며 계정 서비스는 이를 수정하지 않습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artist {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    pub slug: String,
    pub created_at: DateTime,
}

impl Artist {
    pub fn new(id: ObjectId, slug: String, name: String) -> Self {
        Self {
            id,
            name,
            slug,
            created_at: DateTime::now(),
        }
    }
}
