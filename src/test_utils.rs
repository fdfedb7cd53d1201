//! 테스트 전용 메모리 기반 협력자와 픽스처
//!
//! MongoDB 없이 서비스와 핸들러를 검증하기 위해 저장소 트레이트들을
//! 메모리 구현으로 대체합니다. 실패 주입 플래그로 보상 동작도 검증합니다.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, RwLock};

use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, DateTime};

use crate::{
    config::JwtSettings,
    domain::entities::users::user::{Role, User},
    errors::AppError,
    repositories::{ArtistRegistrar, SlugGenerator, UserChange, UserLookup, UserStore},
    services::{
        accounts::AccountService,
        auth::{PasswordService, TokenService},
    },
    utils::string_utils::{slug_candidate, slugify},
};

pub const TEST_PASSWORD: &str = "password123";
pub const TEST_BCRYPT_COST: u32 = 4;

pub fn jwt_settings() -> JwtSettings {
    JwtSettings::new(
        "test-secret-key-with-enough-bytes!!",
        "media-platform-test",
        "media-platform-clients",
        60,
    )
    .unwrap()
}

/// `TEST_PASSWORD` 로 로그인할 수 있는 활성 사용자
pub fn sample_user(username: &str, role: Role) -> User {
    User::new_account(
        ObjectId::new(),
        username.to_string(),
        format!("{}@example.com", username),
        bcrypt::hash(TEST_PASSWORD, TEST_BCRYPT_COST).unwrap(),
        role,
        slugify(username),
    )
}

#[derive(Default)]
pub struct InMemoryUserStore {
    users: RwLock<Vec<User>>,
    update_calls: AtomicUsize,
    fail_inserts: AtomicBool,
}

impl InMemoryUserStore {
    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: RwLock::new(users),
            ..Self::default()
        }
    }

    pub fn fail_inserts(&self) {
        self.fail_inserts.store(true, Ordering::SeqCst);
    }

    pub fn update_calls(&self) -> usize {
        self.update_calls.load(Ordering::SeqCst)
    }

    pub fn count(&self) -> usize {
        self.users.read().unwrap().len()
    }

    pub fn get(&self, id: &ObjectId) -> Option<User> {
        self.users
            .read()
            .unwrap()
            .iter()
            .find(|u| u.id.as_ref() == Some(id))
            .cloned()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find(&self, lookup: UserLookup<'_>) -> Result<Option<User>, AppError> {
        Ok(self.users.read().unwrap().iter().find(|u| lookup.matches(u)).cloned())
    }

    async fn insert(&self, user: &User) -> Result<(), AppError> {
        if self.fail_inserts.load(Ordering::SeqCst) {
            return Err(AppError::DatabaseError("injected insert failure".to_string()));
        }

        let mut users = self.users.write().unwrap();
        if users.iter().any(|u| u.username == user.username) {
            return Err(AppError::ConflictError("이미 사용 중인 사용자명입니다".to_string()));
        }
        users.push(user.clone());
        Ok(())
    }

    async fn update(&self, id: &ObjectId, changes: &[UserChange]) -> Result<bool, AppError> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);

        let mut users = self.users.write().unwrap();
        let Some(user) = users.iter_mut().find(|u| u.id.as_ref() == Some(id)) else {
            return Ok(false);
        };

        let mut modified = false;
        for change in changes {
            modified |= change.apply(user);
        }
        if modified {
            user.updated_at = DateTime::now();
        }
        Ok(modified)
    }
}

#[derive(Default)]
pub struct InMemorySlugRegistry {
    reserved: Mutex<HashSet<String>>,
    released: Mutex<Vec<String>>,
}

impl InMemorySlugRegistry {
    pub fn is_reserved(&self, value: &str) -> bool {
        self.reserved.lock().unwrap().contains(value)
    }

    pub fn released(&self) -> Vec<String> {
        self.released.lock().unwrap().clone()
    }
}

#[async_trait]
impl SlugGenerator for InMemorySlugRegistry {
    async fn generate(&self, seed: &str) -> Result<String, AppError> {
        let base = slugify(seed);
        let mut reserved = self.reserved.lock().unwrap();

        let mut attempt = 1;
        loop {
            let candidate = slug_candidate(&base, attempt);
            if reserved.insert(candidate.clone()) {
                return Ok(candidate);
            }
            attempt += 1;
        }
    }

    async fn release(&self, value: &str) -> Result<(), AppError> {
        self.reserved.lock().unwrap().remove(value);
        self.released.lock().unwrap().push(value.to_string());
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryArtistRegistrar {
    artists: Mutex<HashMap<ObjectId, (String, String)>>,
    removed: Mutex<Vec<ObjectId>>,
    fail_creates: AtomicBool,
}

impl InMemoryArtistRegistrar {
    pub fn fail_creates(&self) {
        self.fail_creates.store(true, Ordering::SeqCst);
    }

    /// `(slug, name)`
    pub fn get(&self, id: &ObjectId) -> Option<(String, String)> {
        self.artists.lock().unwrap().get(id).cloned()
    }

    pub fn removed(&self) -> Vec<ObjectId> {
        self.removed.lock().unwrap().clone()
    }
}

#[async_trait]
impl ArtistRegistrar for InMemoryArtistRegistrar {
    async fn create(&self, id: &ObjectId, slug: &str, name: &str) -> Result<(), AppError> {
        if self.fail_creates.load(Ordering::SeqCst) {
            return Err(AppError::DatabaseError("injected artist failure".to_string()));
        }
        self.artists
            .lock()
            .unwrap()
            .insert(*id, (slug.to_string(), name.to_string()));
        Ok(())
    }

    async fn remove(&self, id: &ObjectId) -> Result<(), AppError> {
        self.artists.lock().unwrap().remove(id);
        self.removed.lock().unwrap().push(*id);
        Ok(())
    }
}

/// 메모리 협력자로 조립한 계정 서비스
pub struct TestContext {
    pub users: Arc<InMemoryUserStore>,
    pub slugs: Arc<InMemorySlugRegistry>,
    pub artists: Arc<InMemoryArtistRegistrar>,
    pub tokens: Arc<TokenService>,
    pub service: AccountService,
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_users(Vec::new())
    }

    pub fn with_users(users: Vec<User>) -> Self {
        let users = Arc::new(InMemoryUserStore::with_users(users));
        let slugs = Arc::new(InMemorySlugRegistry::default());
        let artists = Arc::new(InMemoryArtistRegistrar::default());
        let tokens = Arc::new(TokenService::new(jwt_settings()));

        let service = AccountService::new(
            users.clone(),
            slugs.clone(),
            artists.clone(),
            PasswordService::new(TEST_BCRYPT_COST),
            tokens.clone(),
        );

        Self {
            users,
            slugs,
            artists,
            tokens,
            service,
        }
    }

    /// 인증 헤더 값 (`Bearer ...`)
    pub fn bearer_for(&self, user: &User) -> String {
        format!("Bearer {}", self.tokens.issue_token(user).unwrap())
    }
}

/// 모든 라우트를 등록한 테스트 앱을 초기화합니다.
macro_rules! init_app {
    ($ctx:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new($ctx.service.clone()))
                .app_data(actix_web::web::Data::from($ctx.tokens.clone()))
                .configure(crate::routes::configure_all_routes),
        )
        .await
    };
}

pub(crate) use init_app;
