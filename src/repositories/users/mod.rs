//! 사용자 데이터 액세스 계층
//!
//! [`UserStore`](user_store::UserStore) 트레이트와 MongoDB 구현체
//! [`UserRepository`](user_repo::UserRepository) 를 제공합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::users::{UserChange, UserStore};
//!
//! let modified = store
//!     .update(&user_id, &[UserChange::Avatar("https://cdn/a.png".to_string())])
//!     .await?;
//! ```

pub mod user_store;
pub mod user_repo;

pub use user_store::{UserChange, UserLookup, UserStore};
pub use user_repo::UserRepository;
