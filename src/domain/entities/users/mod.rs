//! Users Entity Module
//!
//! 계정 레코드 [`User`](user::User) 와 역할 열거형 [`Role`](user::Role) 을 정의합니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::users::user::{Role, User};
//!
//! let user = User::new_account(
//!     ObjectId::new(),
//!     "dj_kim".to_string(),
//!     "dj@example.com".to_string(),
//!     password_hash,
//!     Role::Artist,
//!     "dj-kim".to_string(),
//! );
//! assert!(user.is_active);
//! assert_eq!(user.avatar, "");
//! ```

pub mod user;

pub use user::{Role, User};
