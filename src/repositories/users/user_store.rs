use async_trait::async_trait;
use mongodb::bson::{doc, oid::ObjectId, Bson, Document};

use crate::{
    domain::entities::users::user::{Role, User},
    errors::AppError,
};

/// 사용자 조회 키
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserLookup<'a> {
    Id(ObjectId),
    Username(&'a str),
    Email(&'a str),
}

impl UserLookup<'_> {
    /// 정확히 일치(대소문자 구분)하는 MongoDB 필터
    pub fn to_filter(&self) -> Document {
        match self {
            UserLookup::Id(id) => doc! { "_id": *id },
            UserLookup::Username(username) => doc! { "username": *username },
            UserLookup::Email(email) => doc! { "email": *email },
        }
    }

    pub fn matches(&self, user: &User) -> bool {
        match self {
            UserLookup::Id(id) => user.id.as_ref() == Some(id),
            UserLookup::Username(username) => user.username == *username,
            UserLookup::Email(email) => user.email == *email,
        }
    }
}

/// 사용자 레코드의 단일 필드 변경
///
/// `None` 은 필드를 비우는 것(null)을 의미합니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserChange {
    Avatar(String),
    FirstName(Option<String>),
    LastName(Option<String>),
    Bio(Option<String>),
    Role(Role),
}

impl UserChange {
    /// 저장소 문서의 필드 이름
    pub fn field_name(&self) -> &'static str {
        match self {
            UserChange::Avatar(_) => "avatar",
            UserChange::FirstName(_) => "first_name",
            UserChange::LastName(_) => "last_name",
            UserChange::Bio(_) => "bio",
            UserChange::Role(_) => "role",
        }
    }

    pub fn to_bson(&self) -> Bson {
        fn optional(value: &Option<String>) -> Bson {
            value.as_ref().map_or(Bson::Null, |v| Bson::String(v.clone()))
        }

        match self {
            UserChange::Avatar(url) => Bson::String(url.clone()),
            UserChange::FirstName(value)
            | UserChange::LastName(value)
            | UserChange::Bio(value) => optional(value),
            UserChange::Role(role) => Bson::String(role.as_str().to_string()),
        }
    }

    /// 메모리상의 레코드에 변경을 적용하고, 값이 실제로 바뀌었는지 반환합니다.
    pub fn apply(&self, user: &mut User) -> bool {
        fn replace<T: PartialEq + Clone>(slot: &mut T, value: &T) -> bool {
            if slot == value {
                return false;
            }
            *slot = value.clone();
            true
        }

        match self {
            UserChange::Avatar(url) => replace(&mut user.avatar, url),
            UserChange::FirstName(value) => replace(&mut user.first_name, value),
            UserChange::LastName(value) => replace(&mut user.last_name, value),
            UserChange::Bio(value) => replace(&mut user.bio, value),
            UserChange::Role(role) => replace(&mut user.role, &Some(*role)),
        }
    }
}

/// 사용자 레코드 저장소
///
/// `update` 는 최소 하나의 필드가 실제로 바뀐 경우에만 `true` 를 반환하며,
/// 그 경우에만 `updated_at` 을 갱신합니다.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find(&self, lookup: UserLookup<'_>) -> Result<Option<User>, AppError>;

    /// 사용자명이 이미 존재하면 `AppError::ConflictError`
    async fn insert(&self, user: &User) -> Result<(), AppError>;

    async fn update(&self, id: &ObjectId, changes: &[UserChange]) -> Result<bool, AppError>;
}
