//! 비밀번호 해싱 서비스
//!
//! bcrypt 로 비밀번호를 해싱하고 검증합니다. 평문 비밀번호는 저장하거나
//! 로그에 남기지 않습니다.

use log::debug;
use crate::{
    config::PasswordConfig,
    errors::{AppResult, ErrorContext},
};

/// bcrypt 비밀번호 서비스
#[derive(Debug, Clone, Copy)]
pub struct PasswordService {
    cost: u32,
}

impl PasswordService {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// 현재 환경(`ENVIRONMENT`, `BCRYPT_COST`)에 맞는 cost 로 생성합니다.
    pub fn from_env() -> Self {
        Self::new(PasswordConfig::bcrypt_cost())
    }

    /// # Errors
    ///
    /// * `AppError::InternalError` - 해싱 실패
    pub fn hash(&self, plaintext: &str) -> AppResult<String> {
        let start = std::time::Instant::now();
        let hashed = bcrypt::hash(plaintext, self.cost).context("비밀번호 해싱 실패")?;

        debug!("Password hashing took: {:?}", start.elapsed());
        Ok(hashed)
    }

    /// 평문과 해시를 비교합니다. 해시 형식이 잘못된 경우에도 `false` 를 반환합니다.
    pub fn verify(&self, plaintext: &str, hash: &str) -> bool {
        match bcrypt::verify(plaintext, hash) {
            Ok(valid) => valid,
            Err(e) => {
                debug!("비밀번호 검증 불가: {}", e);
                false
            }
        }
    }
}
