//! Artists Entity Module
//!
//! `artist` 역할로 가입한 사용자와 연결되는 [`Artist`](artist::Artist) 레코드를 정의합니다.

pub mod artist;

pub use artist::Artist;
