//! # User HTTP Handlers
//!
//! 공개 사용자 조회와, 인증된 사용자 본인의 프로필 관리 엔드포인트입니다.
//!
//! | 메서드 | 경로 | 설명 | 인증 |
//! |--------|------|------|------|
//! | `GET` | `/api/v1/users/{id}` | 사용자 조회 | - |
//! | `GET` | `/api/v1/users/{id}/slug` | 슬러그 조회 | - |
//! | `GET` | `/api/v1/me` | 내 정보 | Bearer |
//! | `PATCH` | `/api/v1/me/profile` | 부분 프로필 수정 | Bearer |
//! | `PUT` | `/api/v1/me/info` | 이름/소개 덮어쓰기 | Bearer |
//! | `PUT` | `/api/v1/me/avatar` | 아바타 변경 | Bearer |
//!
//! 수정 엔드포인트는 `{"modified": bool}` 을 반환합니다. 값이 이미 같으면 `false` 입니다.

use actix_web::{get, patch, put, web, HttpResponse};
use serde_json::json;
use crate::{
    domain::{
        dto::users::{
            request::{UpdateAvatarRequest, UpdateBasicInfoRequest, UpdateProfileRequest},
            response::UserResponse,
        },
        models::auth::AuthenticatedUser,
    },
    errors::AppError,
    services::accounts::AccountService,
};

fn user_not_found() -> AppError {
    AppError::NotFound("사용자를 찾을 수 없습니다".to_string())
}

/// # Endpoint
/// `GET /api/v1/users/{user_id}`
#[get("/{user_id}")]
pub async fn get_user(
    accounts: web::Data<AccountService>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let user = accounts
        .find_by_id(&user_id)
        .await?
        .ok_or_else(user_not_found)?;

    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

/// # Endpoint
/// `GET /api/v1/users/{user_id}/slug`
#[get("/{user_id}/slug")]
pub async fn get_user_slug(
    accounts: web::Data<AccountService>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let slug = accounts.get_slug(&user_id).await?;
    Ok(HttpResponse::Ok().json(json!({ "slug": slug })))
}

/// 토큰 주체의 사용자 정보
///
/// # Endpoint
/// `GET /api/v1/me`
#[get("")]
pub async fn me(
    accounts: web::Data<AccountService>,
    current: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let user = accounts
        .find_by_id(&current.user_id)
        .await?
        .ok_or_else(user_not_found)?;

    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

/// # Endpoint
/// `PATCH /api/v1/me/profile`
#[patch("/profile")]
pub async fn update_profile(
    accounts: web::Data<AccountService>,
    current: AuthenticatedUser,
    payload: web::Json<UpdateProfileRequest>,
) -> Result<HttpResponse, AppError> {
    let modified = accounts.update_profile(&current.user_id, &payload).await?;
    Ok(HttpResponse::Ok().json(json!({ "modified": modified })))
}

/// # Endpoint
/// `PUT /api/v1/me/info`
#[put("/info")]
pub async fn update_info(
    accounts: web::Data<AccountService>,
    current: AuthenticatedUser,
    payload: web::Json<UpdateBasicInfoRequest>,
) -> Result<HttpResponse, AppError> {
    let mut user = accounts
        .find_by_id(&current.user_id)
        .await?
        .ok_or_else(user_not_found)?;

    let request = payload.into_inner();
    user.first_name = request.first_name;
    user.last_name = request.last_name;
    user.bio = request.bio;

    let modified = accounts.update_basic_info(&user).await?;
    Ok(HttpResponse::Ok().json(json!({ "modified": modified })))
}

/// # Endpoint
/// `PUT /api/v1/me/avatar`
#[put("/avatar")]
pub async fn update_avatar(
    accounts: web::Data<AccountService>,
    current: AuthenticatedUser,
    payload: web::Json<UpdateAvatarRequest>,
) -> Result<HttpResponse, AppError> {
    let modified = accounts.update_avatar(&current.user_id, &payload.avatar_url).await?;
    Ok(HttpResponse::Ok().json(json!({ "modified": modified })))
}
