//! 슬러그 발급 리포지토리
//!
//! 사용자명에서 파생한 슬러그를 `slugs` 컬렉션에 예약하여 고유성을 보장합니다.

pub mod slug_repo;

pub use slug_repo::{SlugGenerator, SlugRepository};
