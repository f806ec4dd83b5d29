//! User handlers.

use actix_web::{HttpResponse, web};

use commentary_core::services::users;
use commentary_shared::ApiResponse;
use commentary_shared::dto::{CreateUserRequest, UpdateUserRequest};

use super::parse_id;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/User
pub async fn get_all(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let users = users::get_all(state.begin().await?).await?;
    Ok(HttpResponse::Ok().json(users))
}

/// GET /api/User/{id}
pub async fn get_by_id(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path, "id")?;
    let user = users::get_by_id(state.begin().await?, id).await?;
    Ok(HttpResponse::Ok().json(user))
}

/// POST /api/User
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<CreateUserRequest>,
) -> AppResult<HttpResponse> {
    let user = users::create(state.begin().await?, &body.nickname).await?;
    Ok(HttpResponse::Ok().json(user))
}

/// PATCH /api/User
pub async fn update(
    state: web::Data<AppState>,
    body: web::Json<UpdateUserRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let user = users::update(state.begin().await?, req.user_id, &req.nickname).await?;
    Ok(HttpResponse::Ok().json(user))
}

/// DELETE /api/User/{id}
pub async fn delete(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path, "id")?;
    users::delete(state.begin().await?, id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok_with_message(id, "User deleted")))
}
