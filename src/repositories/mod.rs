//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 각 하위 모듈은 두 가지를 제공합니다.
//!
//! - 서비스 계층이 의존하는 좁은 비동기 트레이트 (`UserStore`, `SlugGenerator`, `ArtistRegistrar`)
//! - 해당 트레이트의 MongoDB 구현체 (`UserRepository`, `SlugRepository`, `ArtistRepository`)
//!
//! 서비스는 트레이트 객체(`Arc<dyn ...>`)만 알고 있으므로 테스트에서는
//! 메모리 기반 구현으로 교체할 수 있습니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::{UserRepository, UserStore, UserLookup};
//!
//! let users: Arc<dyn UserStore> = Arc::new(UserRepository::new(&database));
//! let user = users.find(UserLookup::Email("user@example.com")).await?;
//! ```

pub mod users;
pub mod artists;
pub mod slugs;

pub use users::{UserChange, UserLookup, UserRepository, UserStore};
pub use artists::{ArtistRegistrar, ArtistRepository};
pub use slugs::{SlugGenerator, SlugRepository};
