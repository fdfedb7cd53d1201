//! 아티스트 레코드 리포지토리
//!
//! `artist` 역할로 가입하는 사용자에 대해 연결된 아티스트 레코드를 생성하고,
//! 가입이 실패하면 보상 동작으로 제거합니다.

pub mod artist_repo;

pub use artist_repo::{ArtistRegistrar, ArtistRepository};
