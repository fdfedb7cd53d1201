//! # 사용자 리포지토리 구현
//!
//! `users` 컬렉션에 대한 [`UserStore`] 의 MongoDB 구현입니다.
//!
//! ## 특징
//!
//! - **유니크 제약**: 사용자명 중복은 유니크 인덱스가 최종적으로 막고,
//!   중복 키 에러(11000)는 `ConflictError` 로 변환됩니다.
//! - **조건부 갱신**: 값이 실제로 바뀌는 경우에만 매칭되는 필터로 단일 `update_one` 을
//!   수행하므로 `modified_count` 가 정확하고 `updated_at` 은 변경과 함께 원자적으로 갱신됩니다.

use async_trait::async_trait;
use log::debug;
use mongodb::{
    bson::{doc, oid::ObjectId, Bson, DateTime, Document},
    options::IndexOptions,
    Collection, IndexModel,
};

use crate::{
    db::{duplicate_key_message, Database},
    domain::entities::users::user::User,
    errors::AppError,
};
use super::user_store::{UserChange, UserLookup, UserStore};

/// 사용자 데이터 액세스 리포지토리
///
/// - **컬렉션명**: `users`
/// - **인덱스**: username(unique), slug(unique), email, created_at(desc)
#[derive(Clone)]
pub struct UserRepository {
    users: Collection<User>,
}

impl UserRepository {
    pub const COLLECTION: &'static str = "users";
    pub const USERNAME_INDEX: &'static str = "username_unique";
    pub const SLUG_INDEX: &'static str = "slug_unique";

    pub fn new(database: &Database) -> Self {
        Self {
            users: database.collection::<User>(Self::COLLECTION),
        }
    }

    /// 서버 시작 시 필요한 인덱스를 생성합니다. 이미 존재하면 아무 일도 하지 않습니다.
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let username_index = IndexModel::builder()
            .keys(doc! { "username": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name(Self::USERNAME_INDEX.to_string())
                .build())
            .build();

        let slug_index = IndexModel::builder()
            .keys(doc! { "slug": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name(Self::SLUG_INDEX.to_string())
                .build())
            .build();

        // 이메일은 유니크하지 않음 (조회 전용)
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .name("email".to_string())
                .build())
            .build();

        let created_at_index = IndexModel::builder()
            .keys(doc! { "created_at": -1 })
            .options(IndexOptions::builder()
                .name("created_at_desc".to_string())
                .build())
            .build();

        self.users
            .create_indexes([username_index, slug_index, email_index, created_at_index])
            .await?;

        Ok(())
    }
}

/// 중복 키 메시지에서 위반된 인덱스를 보고 충돌 에러를 만듭니다.
fn duplicate_key_conflict(message: &str) -> AppError {
    let index = message
        .split("index: ")
        .nth(1)
        .and_then(|rest| rest.split_whitespace().next())
        .unwrap_or_default();

    if index == UserRepository::USERNAME_INDEX {
        AppError::ConflictError("이미 사용 중인 사용자명입니다".to_string())
    } else {
        debug!("사용자 저장 중 중복 키: {}", message);
        AppError::ConflictError("이미 존재하는 사용자 정보와 충돌합니다".to_string())
    }
}

/// 변경 목록으로부터 `(filter, update)` 쌍을 만듭니다.
///
/// 필터는 최소 하나의 필드가 새 값과 다를 때만 매칭됩니다.
/// 변경이 없으면 `None`.
pub fn conditional_update(
    id: &ObjectId,
    changes: &[UserChange],
    now: DateTime,
) -> Option<(Document, Document)> {
    if changes.is_empty() {
        return None;
    }

    let mut set = Document::new();
    let mut any_differs = Vec::with_capacity(changes.len());

    for change in changes {
        let value = change.to_bson();

        let mut not_equal = Document::new();
        not_equal.insert(change.field_name(), doc! { "$ne": value.clone() });
        any_differs.push(Bson::Document(not_equal));

        set.insert(change.field_name(), value);
    }
    set.insert("updated_at", now);

    let filter = doc! { "_id": *id, "$or": any_differs };
    let update = doc! { "$set": set };

    Some((filter, update))
}

#[async_trait]
impl UserStore for UserRepository {
    async fn find(&self, lookup: UserLookup<'_>) -> Result<Option<User>, AppError> {
        let user = self.users.find_one(lookup.to_filter()).await?;
        Ok(user)
    }

    async fn insert(&self, user: &User) -> Result<(), AppError> {
        match self.users.insert_one(user).await {
            Ok(_) => Ok(()),
            Err(e) => match duplicate_key_message(&e) {
                Some(message) => Err(duplicate_key_conflict(message)),
                None => Err(e.into()),
            },
        }
    }

    async fn update(&self, id: &ObjectId, changes: &[UserChange]) -> Result<bool, AppError> {
        let Some((filter, update)) = conditional_update(id, changes, DateTime::now()) else {
            return Ok(false);
        };

        let result = self.users.update_one(filter, update).await?;

        debug!("사용자 갱신: id={}, modified={}", id, result.modified_count);
        Ok(result.modified_count > 0)
    }
}
