//! Slugs Entity Module
//!
//! 발급된 슬러그를 예약하는 [`SlugReservation`](slug::SlugReservation) 을 정의합니다.

pub mod slug;

pub use slug::SlugReservation;
