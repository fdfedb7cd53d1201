//! # Domain Entities Module
//!
//! MongoDB 컬렉션과 직접 매핑되는 엔티티들을 정의합니다.
//!
//! | 엔티티 | 컬렉션 | 식별자 |
//! |--------|--------|--------|
//! | `User` | `users` | `_id` (ObjectId, 생성 시 발급) |
//! | `Artist` | `artists` | `_id` (연결된 사용자와 동일) |
//! | `SlugReservation` | `slugs` | `_id` (슬러그 값 자체) |
//!
//! 모든 타임스탬프는 `bson::DateTime` (UTC 밀리초) 으로 저장됩니다.

pub mod users;
pub mod artists;
pub mod slugs;

pub use users::*;
pub use artists::*;
pub use slugs::*;
