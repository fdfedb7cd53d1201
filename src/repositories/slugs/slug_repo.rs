use async_trait::async_trait;
use log::{debug, warn};
use mongodb::{bson::doc, Collection};

use crate::{
    db::{is_duplicate_key_error, Database},
    domain::entities::slugs::slug::SlugReservation,
    errors::AppError,
    utils::string_utils::{slug_candidate, slugify},
};

/// 기본 슬러그 하나당 시도할 최대 후보 수
pub const MAX_SLUG_ATTEMPTS: u32 = 100;

/// 고유 슬러그 발급기
#[async_trait]
pub trait SlugGenerator: Send + Sync {
    /// `seed` (사용자명) 에서 파생된, 아직 발급되지 않은 슬러그를 예약합니다.
    async fn generate(&self, seed: &str) -> Result<String, AppError>;

    /// 예약을 해제합니다. 가입 실패 시 보상 동작으로 호출됩니다.
    async fn release(&self, value: &str) -> Result<(), AppError>;
}

/// `slugs` 컬렉션 기반 구현
///
/// 슬러그 값이 `_id` 이므로 삽입 자체가 원자적인 예약입니다.
#[derive(Clone)]
pub struct SlugRepository {
    slugs: Collection<SlugReservation>,
}

impl SlugRepository {
    pub const COLLECTION: &'static str = "slugs";

    pub fn new(database: &Database) -> Self {
        Self {
            slugs: database.collection::<SlugReservation>(Self::COLLECTION),
        }
    }
}

#[async_trait]
impl SlugGenerator for SlugRepository {
    async fn generate(&self, seed: &str) -> Result<String, AppError> {
        let base = slugify(seed);

        for attempt in 1..=MAX_SLUG_ATTEMPTS {
            let candidate = slug_candidate(&base, attempt);
            let reservation = SlugReservation::new(candidate.clone(), seed);

            match self.slugs.insert_one(&reservation).await {
                Ok(_) => {
                    debug!("슬러그 예약: {} (시도 {})", candidate, attempt);
                    return Ok(candidate);
                }
                Err(e) if is_duplicate_key_error(&e) => continue,
                Err(e) => return Err(e.into()),
            }
        }

        warn!("슬러그 후보 소진: base={}", base);
        Err(AppError::InternalError(
            format!("슬러그를 발급할 수 없습니다: {}", base)
        ))
    }

    async fn release(&self, value: &str) -> Result<(), AppError> {
        self.slugs.delete_one(doc! { "_id": value }).await?;
        Ok(())
    }
}
