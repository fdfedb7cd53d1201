use async_trait::async_trait;
use log::{debug, warn};
use mongodb::{
    bson::{doc, oid::ObjectId},
    Collection,
};

use crate::{
    db::Database,
    domain::entities::artists::artist::Artist,
    errors::AppError,
};

/// 아티스트 레코드 등록기
#[async_trait]
pub trait ArtistRegistrar: Send + Sync {
    /// 사용자와 같은 ID, 같은 슬러그로 아티스트 레코드를 생성합니다.
    async fn create(&self, id: &ObjectId, slug: &str, name: &str) -> Result<(), AppError>;

    /// 가입 실패 시 보상 동작으로 레코드를 제거합니다.
    async fn remove(&self, id: &ObjectId) -> Result<(), AppError>;
}

/// `artists` 컬렉션 기반 구현
#[derive(Clone)]
pub struct ArtistRepository {
    artists: Collection<Artist>,
}

impl ArtistRepository {
    pub const COLLECTION: &'static str = "artists";

    pub fn new(database: &Database) -> Self {
        Self {
            artists: database.collection::<Artist>(Self::COLLECTION),
        }
    }
}

#[async_trait]
impl ArtistRegistrar for ArtistRepository {
    async fn create(&self, id: &ObjectId, slug: &str, name: &str) -> Result<(), AppError> {
        let artist = Artist::new(*id, slug.to_string(), name.to_string());
        self.artists.insert_one(&artist).await?;

        debug!("아티스트 레코드 생성: id={}, slug={}", id, slug);
        Ok(())
    }

    async fn remove(&self, id: &ObjectId) -> Result<(), AppError> {
        let result = self.artists.delete_one(doc! { "_id": *id }).await?;

        if result.deleted_count == 0 {
            warn!("제거할 아티스트 레코드가 없습니다: id={}", id);
        }
        Ok(())
    }
}
