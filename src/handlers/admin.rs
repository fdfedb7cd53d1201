//! # Admin HTTP Handlers
//!
//! `admin` 역할 토큰으로만 접근할 수 있는 역할 관리 엔드포인트입니다.
//!
//! - `PUT /api/v1/admin/users/{user_id}/role` - 역할 변경
//! - `POST /api/v1/admin/users/{username}/promote` - 관리자 승격

use actix_web::{post, put, web, HttpResponse};
use serde_json::json;
use validator::Validate;
use crate::{
    domain::{dto::users::request::UpdateRoleRequest, models::auth::AuthenticatedUser},
    errors::AppError,
    services::accounts::AccountService,
};

/// # Endpoint
/// `PUT /api/v1/admin/users/{user_id}/role`
#[put("/users/{user_id}/role")]
pub async fn update_role(
    accounts: web::Data<AccountService>,
    admin: AuthenticatedUser,
    user_id: web::Path<String>,
    payload: web::Json<UpdateRoleRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let modified = accounts.update_role(&user_id, &payload.role).await?;

    log::info!("역할 변경 요청 - 관리자: {}, 대상: {}, 역할: {}, 변경: {}",
        admin.username, user_id, payload.role, modified);

    Ok(HttpResponse::Ok().json(json!({ "modified": modified })))
}

/// # Endpoint
/// `POST /api/v1/admin/users/{username}/promote`
#[post("/users/{username}/promote")]
pub async fn promote(
    accounts: web::Data<AccountService>,
    admin: AuthenticatedUser,
    username: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let modified = accounts.promote_to_admin(&username).await?;

    log::info!("관리자 승격 요청 - 관리자: {}, 대상: {}, 변경: {}",
        admin.username, username, modified);

    Ok(HttpResponse::Ok().json(json!({ "modified": modified })))
}

#[cfg(test)]
mod tests {
    use actix_web::{http::StatusCode, test};
    use serde_json::{json, Value};
    use crate::domain::entities::users::user::Role;
    use crate::test_utils::{init_app, sample_user, TestContext};

    #[actix_web::test]
    async fn test_update_role_as_admin() {
        let admin = sample_user("boss", Role::Admin);
        let target = sample_user("dj_kim", Role::Listener);
        let target_id = target.id.unwrap();
        let ctx = TestContext::with_users(vec![admin.clone(), target]);
        let app = init_app!(ctx);

        let req = test::TestRequest::put()
            .uri(&format!("/api/v1/admin/users/{}/role", target_id.to_hex()))
            .insert_header(("Authorization", ctx.bearer_for(&admin)))
            .set_json(json!({ "role": "admin" }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["modified"], true);
        assert_eq!(ctx.users.get(&target_id).unwrap().role, Some(Role::Admin));
    }

    #[actix_web::test]
    async fn test_update_role_rejects_unknown_role() {
        let admin = sample_user("boss", Role::Admin);
        let target = sample_user("dj_kim", Role::Listener);
        let target_id = target.id.unwrap();
        let ctx = TestContext::with_users(vec![admin.clone(), target]);
        let app = init_app!(ctx);

        let req = test::TestRequest::put()
            .uri(&format!("/api/v1/admin/users/{}/role", target_id.to_hex()))
            .insert_header(("Authorization", ctx.bearer_for(&admin)))
            .set_json(json!({ "role": "superuser" }))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ctx.users.get(&target_id).unwrap().role, Some(Role::Listener));
    }

    #[actix_web::test]
    async fn test_non_admin_is_forbidden() {
        let listener = sample_user("dj_kim", Role::Listener);
        let ctx = TestContext::with_users(vec![listener.clone()]);
        let app = init_app!(ctx);

        let req = test::TestRequest::post()
            .uri("/api/v1/admin/users/dj_kim/promote")
            .insert_header(("Authorization", ctx.bearer_for(&listener)))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::FORBIDDEN);
        assert_eq!(
            ctx.users.get(&listener.id.unwrap()).unwrap().role,
            Some(Role::Listener)
        );
    }

    #[actix_web::test]
    async fn test_promote() {
        let admin = sample_user("boss", Role::Admin);
        let target = sample_user("dj_kim", Role::Artist);
        let ctx = TestContext::with_users(vec![admin.clone(), target]);
        let app = init_app!(ctx);

        let req = test::TestRequest::post()
            .uri("/api/v1/admin/users/dj_kim/promote")
            .insert_header(("Authorization", ctx.bearer_for(&admin)))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["modified"], true);

        let req = test::TestRequest::post()
            .uri("/api/v1/admin/users/nobody/promote")
            .insert_header(("Authorization", ctx.bearer_for(&admin)))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["modified"], false);
    }
}
