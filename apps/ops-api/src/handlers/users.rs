//! 用户 CRUD handlers
//!
//! - GET /users - 列出用户（角色/状态/搜索筛选 + 分页）
//! - POST /users - 创建用户（缺省权限按角色取默认集合）
//! - GET /users/{id} - 获取用户详情
//! - PUT /users/{id} - 更新用户
//! - DELETE /users/{id} - 删除用户

use crate::AppState;
use crate::middleware::require_permission;
use crate::utils::paginate;
use crate::utils::response::{not_found_error, storage_error, user_to_dto};
use crate::utils::{normalize_optional, normalize_required};
use api_contract::{ApiResponse, CreateUserRequest, PagedDto, UpdateUserRequest, UserDto};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use domain::permissions;
use uuid::Uuid;

#[derive(serde::Deserialize)]
pub struct UserPath {
    user_id: String,
}

/// 用户列表查询参数。
#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserListQuery {
    /// 姓名/邮箱/公司子串搜索
    pub q: Option<String>,
    pub role: Option<String>,
    pub status: Option<String>,
    pub page: Option<usize>,
    pub page_size: Option<usize>,
}

/// 列出用户
pub async fn list_users(
    State(state): State<AppState>,
    Query(query): Query<UserListQuery>,
) -> Response {
    let ctx = &state.operator;
    if let Err(response) = require_permission(ctx, permissions::VIEW_DASHBOARD) {
        return response;
    }
    match state.user_store.list_users(ctx).await {
        Ok(mut items) => {
            ops_telemetry::record_catalog_read();
            if let Some(q) = query.q.as_deref().map(str::to_lowercase) {
                items.retain(|user| {
                    user.name.to_lowercase().contains(&q)
                        || user.email.to_lowercase().contains(&q)
                        || user.company.to_lowercase().contains(&q)
                });
            }
            if let Some(role) = query.role.as_deref() {
                items.retain(|user| user.role.as_str() == role);
            }
            if let Some(status) = query.status.as_deref() {
                items.retain(|user| user.status.as_str() == status);
            }
            items.sort_by(|a, b| a.user_id.cmp(&b.user_id));
            let page = query.page.unwrap_or(1);
            let page_size = query.page_size.unwrap_or(10);
            let (paged, total) = paginate(items, page, page_size);
            let data = PagedDto::<UserDto> {
                items: paged.into_iter().map(user_to_dto).collect(),
                total,
                page: page.max(1),
                page_size: page_size.max(1),
            };
            (StatusCode::OK, Json(ApiResponse::success(data))).into_response()
        }
        Err(err) => storage_error(err),
    }
}

/// 创建用户
///
/// 未显式给出权限集合时，按角色取默认权限。
pub async fn create_user(
    State(state): State<AppState>,
    Json(req): Json<CreateUserRequest>,
) -> Response {
    let ctx = &state.operator;
    if let Err(response) = require_permission(ctx, permissions::CREATE_USERS) {
        return response;
    }
    let name = match normalize_required(req.name, "name") {
        Ok(value) => value,
        Err(response) => return response,
    };
    let email = match normalize_required(req.email, "email") {
        Ok(value) => value,
        Err(response) => return response,
    };
    let record = ops_storage::UserRecord {
        user_id: format!("USR-{}", Uuid::new_v4()),
        name,
        email,
        phone: req.phone.unwrap_or_default(),
        role: req.role,
        status: req.status.unwrap_or(domain::UserStatus::Pending),
        company: req.company.unwrap_or_default(),
        permissions: req
            .permissions
            .unwrap_or_else(|| permissions::defaults_for_role(req.role)),
        projects: req.projects.unwrap_or_default(),
        sites: req.sites.unwrap_or_default(),
        last_active_ms: 0,
        created_at_ms: chrono::Utc::now().timestamp_millis(),
    };
    match state.user_store.create_user(ctx, record).await {
        Ok(item) => {
            ops_telemetry::record_catalog_write();
            (StatusCode::OK, Json(ApiResponse::success(user_to_dto(item)))).into_response()
        }
        Err(err) => storage_error(err),
    }
}

/// 获取用户详情
pub async fn get_user(State(state): State<AppState>, Path(path): Path<UserPath>) -> Response {
    let ctx = &state.operator;
    if let Err(response) = require_permission(ctx, permissions::VIEW_DASHBOARD) {
        return response;
    }
    match state.user_store.find_user(ctx, &path.user_id).await {
        Ok(Some(item)) => {
            ops_telemetry::record_catalog_read();
            (StatusCode::OK, Json(ApiResponse::success(user_to_dto(item)))).into_response()
        }
        Ok(None) => not_found_error(),
        Err(err) => storage_error(err),
    }
}

/// 更新用户
pub async fn update_user(
    State(state): State<AppState>,
    Path(path): Path<UserPath>,
    Json(req): Json<UpdateUserRequest>,
) -> Response {
    let ctx = &state.operator;
    if let Err(response) = require_permission(ctx, permissions::EDIT_USERS) {
        return response;
    }
    let name = match normalize_optional(req.name, "name") {
        Ok(value) => value,
        Err(response) => return response,
    };
    let email = match normalize_optional(req.email, "email") {
        Ok(value) => value,
        Err(response) => return response,
    };
    let update = ops_storage::UserUpdate {
        name,
        email,
        phone: req.phone,
        role: req.role,
        status: req.status,
        company: req.company,
        permissions: req.permissions,
        projects: req.projects,
        sites: req.sites,
    };
    if update.name.is_none()
        && update.email.is_none()
        && update.phone.is_none()
        && update.role.is_none()
        && update.status.is_none()
        && update.company.is_none()
        && update.permissions.is_none()
        && update.projects.is_none()
        && update.sites.is_none()
    {
        return crate::utils::response::bad_request_error("empty update");
    }
    match state.user_store.update_user(ctx, &path.user_id, update).await {
        Ok(Some(item)) => {
            ops_telemetry::record_catalog_write();
            (StatusCode::OK, Json(ApiResponse::success(user_to_dto(item)))).into_response()
        }
        Ok(None) => not_found_error(),
        Err(err) => storage_error(err),
    }
}

/// 删除用户
pub async fn delete_user(State(state): State<AppState>, Path(path): Path<UserPath>) -> Response {
    let ctx = &state.operator;
    if let Err(response) = require_permission(ctx, permissions::EDIT_USERS) {
        return response;
    }
    match state.user_store.delete_user(ctx, &path.user_id).await {
        Ok(true) => {
            ops_telemetry::record_catalog_write();
            (StatusCode::OK, Json(ApiResponse::success(()))).into_response()
        }
        Ok(false) => not_found_error(),
        Err(err) => storage_error(err),
    }
}
