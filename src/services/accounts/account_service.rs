//! # 계정 서비스 구현
//!
//! 미디어 플랫폼의 유일한 계정 레코드(`User`)에 대한 모든 비즈니스 규칙을 담당합니다.
//!
//! ## 서비스 아키텍처
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                        AccountService                        │
//! │                                                              │
//! │  Registration   Authentication   Lookup      Mutations       │
//! │  • 역할 검증     • 비밀번호 검증   • ID/이름     • 아바타         │
//! │  • 중복 확인     • 활성 상태      • 이메일      • 프로필         │
//! │  • 슬러그 발급                   • 슬러그      • 역할           │
//! │  • 보상 동작                                                   │
//! └──────────────────────────────────────────────────────────────┘
//!        │                 │                    │
//!        ▼                 ▼                    ▼
//!   UserStore        SlugGenerator       ArtistRegistrar
//! ```
//!
//! ## 에러 규칙
//!
//! - 잘못된 ID 형식, 허용되지 않는 역할, 누락된 필드 → `ValidationError`
//! - 중복 사용자명 → `ConflictError`
//! - 협력자 I/O 실패 → 변환 없이 전파
//! - 조회 결과 없음 → `Ok(None)` / 변경 없음 → `Ok(false)`

use std::sync::Arc;
use log::{debug, error, info, warn};
use mongodb::bson::oid::ObjectId;

use crate::{
    domain::{
        dto::users::request::UpdateProfileRequest,
        entities::users::user::{Role, User},
    },
    errors::{AppError, AppResult},
    repositories::{ArtistRegistrar, SlugGenerator, UserChange, UserLookup, UserStore},
    services::auth::{PasswordService, TokenService},
    utils::string_utils::present,
};

/// 계정 관리 비즈니스 로직 서비스
///
/// 모든 협력자는 생성 시 주입되며, 서비스 자체는 상태를 갖지 않습니다.
///
/// ```rust,ignore
/// let service = AccountService::new(users, slugs, artists, passwords, tokens);
/// let user = service.register("dj_kim", "dj@example.com", "secret123", "artist", "DJ Kim").await?;
/// let token = service.issue_token(&user)?;
/// ```
#[derive(Clone)]
pub struct AccountService {
    users: Arc<dyn UserStore>,
    slugs: Arc<dyn SlugGenerator>,
    artists: Arc<dyn ArtistRegistrar>,
    passwords: PasswordService,
    tokens: Arc<TokenService>,
}

impl AccountService {
    pub fn new(
        users: Arc<dyn UserStore>,
        slugs: Arc<dyn SlugGenerator>,
        artists: Arc<dyn ArtistRegistrar>,
        passwords: PasswordService,
        tokens: Arc<TokenService>,
    ) -> Self {
        Self {
            users,
            slugs,
            artists,
            passwords,
            tokens,
        }
    }

    /// 24자리 16진수 ObjectId 를 파싱합니다. 모두 0인 ID 도 잘못된 형식입니다.
    pub fn parse_user_id(id: &str) -> AppResult<ObjectId> {
        ObjectId::parse_str(id)
            .ok()
            .filter(|oid| oid.bytes() != [0u8; 12])
            .ok_or_else(|| AppError::ValidationError(
                format!("유효하지 않은 사용자 ID 형식입니다: {}", id)
            ))
    }

    pub async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        self.users.find(UserLookup::Username(username)).await
    }

    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        self.users.find(UserLookup::Email(email)).await
    }

    /// # Errors
    ///
    /// * `AppError::ValidationError` - ID 형식 오류 (없는 사용자는 `Ok(None)`)
    pub async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        let object_id = Self::parse_user_id(id)?;
        self.users.find(UserLookup::Id(object_id)).await
    }

    /// 새 계정을 생성합니다.
    ///
    /// `artist` 역할이면 같은 ID와 슬러그로 아티스트 레코드를 사용자보다 먼저 만듭니다.
    /// 아티스트 생성 또는 사용자 저장이 실패하면 슬러그 예약을 해제하고,
    /// 이미 만든 아티스트 레코드를 제거한 뒤 원래 에러를 반환합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 역할이 `listener` / `artist` 가 아님
    /// * `AppError::ConflictError` - 사용자명 중복
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
        role: &str,
        artist_name: &str,
    ) -> AppResult<User> {
        let role = Role::from_name(role)
            .filter(Role::is_self_assignable)
            .ok_or_else(|| AppError::ValidationError(
                format!("가입 시 선택할 수 없는 역할입니다: {}", role)
            ))?;

        if self.find_by_username(username).await?.is_some() {
            return Err(AppError::ConflictError("이미 사용 중인 사용자명입니다".to_string()));
        }

        let slug = self.slugs.generate(username).await?;
        let id = ObjectId::new();
        let mut artist_created = false;

        let outcome = self
            .create_records(id, username, email, password, role, &slug, artist_name, &mut artist_created)
            .await;

        match outcome {
            Ok(user) => {
                info!("✅ 가입 완료: username={}, role={}, slug={}", user.username, role, user.slug);
                Ok(user)
            }
            Err(e) => {
                warn!("가입 실패, 보상 동작 수행: username={}, error={}", username, e);
                self.compensate(&id, &slug, artist_created).await;
                Err(e)
            }
        }
    }

    #[allow(clippy::too_many_arguments)]
    async fn create_records(
        &self,
        id: ObjectId,
        username: &str,
        email: &str,
        password: &str,
        role: Role,
        slug: &str,
        artist_name: &str,
        artist_created: &mut bool,
    ) -> AppResult<User> {
        let password_hash = self.passwords.hash(password)?;

        let user = User::new_account(
            id,
            username.to_string(),
            email.to_string(),
            password_hash,
            role,
            slug.to_string(),
        );

        if role == Role::Artist {
            self.artists.create(&id, slug, artist_name).await?;
            *artist_created = true;
        }

        self.users.insert(&user).await?;
        Ok(user)
    }

    /// 보상 동작의 실패는 원래 에러를 가리지 않도록 로그로만 남깁니다.
    async fn compensate(&self, id: &ObjectId, slug: &str, artist_created: bool) {
        if artist_created {
            if let Err(e) = self.artists.remove(id).await {
                error!("아티스트 레코드 제거 실패: id={}, error={}", id, e);
            }
        }
        if let Err(e) = self.slugs.release(slug).await {
            error!("슬러그 예약 해제 실패: slug={}, error={}", slug, e);
        }
    }

    /// 사용자명과 비밀번호로 인증합니다.
    ///
    /// 없는 사용자, 비활성 사용자, 잘못된 비밀번호는 모두 `Ok(None)` 으로 구분되지 않습니다.
    pub async fn authenticate(&self, username: &str, password: &str) -> AppResult<Option<User>> {
        let Some(user) = self.find_by_username(username).await? else {
            debug!("인증 실패: 사용자 없음 ({})", username);
            return Ok(None);
        };

        if !user.is_active {
            debug!("인증 실패: 비활성 계정 ({})", username);
            return Ok(None);
        }

        if !self.passwords.verify(password, &user.password_hash) {
            debug!("인증 실패: 비밀번호 불일치 ({})", username);
            return Ok(None);
        }

        Ok(Some(user))
    }

    pub fn verify_password(&self, plaintext: &str, hash: &str) -> bool {
        self.passwords.verify(plaintext, hash)
    }

    /// 아바타 URL 을 설정합니다. 빈 문자열도 유효한 값입니다.
    pub async fn update_avatar(&self, user_id: &str, avatar_url: &str) -> AppResult<bool> {
        let id = Self::parse_user_id(user_id)?;
        self.users
            .update(&id, &[UserChange::Avatar(avatar_url.to_string())])
            .await
    }

    /// 이름, 성, 소개를 그대로 덮어씁니다. 비어 있거나 없는 값도 덮어씁니다.
    pub async fn update_basic_info(&self, user: &User) -> AppResult<bool> {
        let id = user.id.ok_or_else(|| {
            AppError::ValidationError("사용자 ID가 없습니다".to_string())
        })?;

        let changes = [
            UserChange::FirstName(user.first_name.clone()),
            UserChange::LastName(user.last_name.clone()),
            UserChange::Bio(user.bio.clone()),
        ];
        self.users.update(&id, &changes).await
    }

    /// 값이 있고 비어 있지 않은 필드만 적용합니다.
    /// 적용할 필드가 없으면 저장소를 건드리지 않고 `false` 를 반환합니다.
    pub async fn update_profile(&self, user_id: &str, request: &UpdateProfileRequest) -> AppResult<bool> {
        let id = Self::parse_user_id(user_id)?;

        let mut changes = Vec::new();
        if let Some(first_name) = present(&request.first_name) {
            changes.push(UserChange::FirstName(Some(first_name.to_string())));
        }
        if let Some(last_name) = present(&request.last_name) {
            changes.push(UserChange::LastName(Some(last_name.to_string())));
        }
        if let Some(bio) = present(&request.bio) {
            changes.push(UserChange::Bio(Some(bio.to_string())));
        }
        if let Some(avatar) = present(&request.avatar) {
            changes.push(UserChange::Avatar(avatar.to_string()));
        }

        if changes.is_empty() {
            return Ok(false);
        }
        self.users.update(&id, &changes).await
    }

    pub async fn promote_to_admin(&self, username: &str) -> AppResult<bool> {
        let Some(user) = self.find_by_username(username).await? else {
            return Ok(false);
        };
        let id = user.id.ok_or_else(|| {
            AppError::InternalError(format!("저장된 사용자에 ID가 없습니다: {}", username))
        })?;

        let modified = self.users.update(&id, &[UserChange::Role(Role::Admin)]).await?;
        if modified {
            info!("관리자 승격: username={}", username);
        }
        Ok(modified)
    }

    /// # Errors
    ///
    /// * `AppError::ValidationError` - ID 형식 오류, 빈 역할, `admin` / `artist` / `listener` 외의 역할
    pub async fn update_role(&self, user_id: &str, role: &str) -> AppResult<bool> {
        let id = Self::parse_user_id(user_id)?;

        if role.is_empty() {
            return Err(AppError::ValidationError("역할을 입력해주세요".to_string()));
        }
        let role = Role::from_name(role).ok_or_else(|| {
            AppError::ValidationError(format!("허용되지 않는 역할입니다: {}", role))
        })?;

        let modified = self.users.update(&id, &[UserChange::Role(role)]).await?;
        if modified {
            info!("역할 변경: id={}, role={}", id, role);
        }
        Ok(modified)
    }

    /// # Errors
    ///
    /// * `AppError::ValidationError` - ID 형식 오류 또는 없는 사용자
    pub async fn get_slug(&self, user_id: &str) -> AppResult<String> {
        self.find_by_id(user_id)
            .await?
            .map(|user| user.slug)
            .ok_or_else(|| AppError::ValidationError(
                format!("사용자를 찾을 수 없습니다: {}", user_id)
            ))
    }

    pub fn issue_token(&self, user: &User) -> AppResult<String> {
        self.tokens.issue_token(user)
    }

    pub fn token_lifetime_seconds(&self) -> i64 {
        self.tokens.settings().expiry_seconds()
    }
}
