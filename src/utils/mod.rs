//! 공통 유틸리티 함수 모듈
//!
//! - [`string_utils`] - 필수 필드 검증, 선택 필드 정리, 슬러그 파생
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::string_utils::{require_field, slugify};
//!
//! let email = require_field(&user.email, "이메일")?;
//! assert_eq!(slugify("DJ Kim!"), "dj-kim");
//! ```

pub mod string_utils;
