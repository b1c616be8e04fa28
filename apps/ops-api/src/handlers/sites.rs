//! 站点 CRUD handlers
//!
//! 提供站点资源的增删改查接口：
//! - GET /sites - 列出站点（支持搜索/筛选/分页）
//! - POST /sites - 创建站点
//! - GET /sites/{id} - 获取站点详情
//! - PUT /sites/{id} - 更新站点
//! - DELETE /sites/{id} - 删除站点
//!
//! 权限要求：
//! - 读接口需要 view_sites
//! - 写接口需要 edit_sites

use crate::AppState;
use crate::middleware::require_permission;
use crate::utils::paginate;
use crate::utils::response::{bad_request_error, not_found_error, site_to_dto, storage_error};
use crate::utils::{normalize_optional, normalize_required, require_finite_coordinate};
use api_contract::{ApiResponse, CreateSiteRequest, PagedDto, SiteDto, UpdateSiteRequest};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use domain::permissions;
use uuid::Uuid;

#[derive(serde::Deserialize)]
pub struct SitePath {
    site_id: String,
}

/// 站点列表查询参数（展示层内存筛选 + 分页）。
#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteListQuery {
    /// 名称/编号/郡名子串搜索
    pub q: Option<String>,
    pub county: Option<String>,
    pub status: Option<String>,
    pub page: Option<usize>,
    pub page_size: Option<usize>,
}

/// 列出站点
///
/// 查询站点目录，按条件做内存筛选与分页后返回。
///
/// # 参数
///
/// - `state`: 应用状态，包含 `site_store` 存储实例
/// - `query`: 查询参数（q/county/status/page/pageSize）
///
/// # 返回
///
/// 成功时返回 `200 OK` 和分页后的站点列表。
///
/// # 流程
///
/// 1. 校验 view_sites 权限
/// 2. 调用 `site_store.list_sites` 取全量快照
/// 3. 依次应用搜索与筛选条件，按站点编号排序
/// 4. 分页并转换为 `SiteDto` 列表
///
/// # 错误处理
///
/// - `403 FORBIDDEN`: 权限不足
/// - `500 INTERNAL SERVER ERROR`: 存储层错误
pub async fn list_sites(
    State(state): State<AppState>,
    Query(query): Query<SiteListQuery>,
) -> Response {
    let ctx = &state.operator;
    if let Err(response) = require_permission(ctx, permissions::VIEW_SITES) {
        return response;
    }
    match state.site_store.list_sites(ctx).await {
        Ok(mut items) => {
            ops_telemetry::record_catalog_read();
            if let Some(q) = query.q.as_deref().map(str::to_lowercase) {
                items.retain(|site| {
                    site.name.to_lowercase().contains(&q)
                        || site.site_id.to_lowercase().contains(&q)
                        || site.county.to_lowercase().contains(&q)
                });
            }
            if let Some(county) = query.county.as_deref() {
                items.retain(|site| site.county == county);
            }
            if let Some(status) = query.status.as_deref() {
                items.retain(|site| site.status.as_str() == status);
            }
            items.sort_by(|a, b| a.site_id.cmp(&b.site_id));
            let page = query.page.unwrap_or(1);
            let page_size = query.page_size.unwrap_or(10);
            let (paged, total) = paginate(items, page, page_size);
            let data = PagedDto::<SiteDto> {
                items: paged.into_iter().map(site_to_dto).collect(),
                total,
                page: page.max(1),
                page_size: page_size.max(1),
            };
            (StatusCode::OK, Json(ApiResponse::success(data))).into_response()
        }
        Err(err) => storage_error(err),
    }
}

/// 创建站点
///
/// 在站点目录下创建新站点。
///
/// # 参数
///
/// - `state`: 应用状态，包含 `site_store` 存储实例
/// - `req`: 请求体，包含站点创建信息（name、county、经纬度等）
///
/// # 返回
///
/// 成功时返回 `200 OK` 和创建的站点信息。
///
/// # 流程
///
/// 1. 校验 edit_sites 权限
/// 2. 使用 `normalize_required` 验证必填字段（name、county）
/// 3. 校验经纬度为有限数值
/// 4. 生成新的站点 ID（SITE- 前缀 + UUID v4）
/// 5. 创建 `SiteRecord` 并调用 `site_store.create_site` 保存
///
/// # 错误处理
///
/// - `400 BAD REQUEST`: 必填字段缺失或经纬度非法
/// - `403 FORBIDDEN`: 权限不足
/// - `500 INTERNAL SERVER ERROR`: 存储层错误
pub async fn create_site(
    State(state): State<AppState>,
    Json(req): Json<CreateSiteRequest>,
) -> Response {
    let ctx = &state.operator;
    if let Err(response) = require_permission(ctx, permissions::EDIT_SITES) {
        return response;
    }
    let name = match normalize_required(req.name, "name") {
        Ok(value) => value,
        Err(response) => return response,
    };
    let county = match normalize_required(req.county, "county") {
        Ok(value) => value,
        Err(response) => return response,
    };
    let latitude = match require_finite_coordinate(req.latitude, "latitude") {
        Ok(value) => value,
        Err(response) => return response,
    };
    let longitude = match require_finite_coordinate(req.longitude, "longitude") {
        Ok(value) => value,
        Err(response) => return response,
    };
    let record = ops_storage::SiteRecord {
        site_id: format!("SITE-{}", Uuid::new_v4()),
        name,
        county,
        address: req.address.unwrap_or_default(),
        latitude,
        longitude,
        capacity_kw: req.capacity_kw.unwrap_or_default(),
        status: req.status.unwrap_or(domain::SiteStatus::Active),
        contact_name: req.contact_name,
        contact_phone: req.contact_phone,
        contact_email: req.contact_email,
        created_at_ms: chrono::Utc::now().timestamp_millis(),
    };
    match state.site_store.create_site(ctx, record).await {
        Ok(item) => {
            ops_telemetry::record_catalog_write();
            (StatusCode::OK, Json(ApiResponse::success(site_to_dto(item)))).into_response()
        }
        Err(err) => storage_error(err),
    }
}

/// 获取站点详情
///
/// # 错误处理
///
/// - `403 FORBIDDEN`: 权限不足
/// - `404 NOT FOUND`: 站点不存在
/// - `500 INTERNAL SERVER ERROR`: 存储层错误
pub async fn get_site(State(state): State<AppState>, Path(path): Path<SitePath>) -> Response {
    let ctx = &state.operator;
    if let Err(response) = require_permission(ctx, permissions::VIEW_SITES) {
        return response;
    }
    match state.site_store.find_site(ctx, &path.site_id).await {
        Ok(Some(item)) => {
            ops_telemetry::record_catalog_read();
            (StatusCode::OK, Json(ApiResponse::success(site_to_dto(item)))).into_response()
        }
        Ok(None) => not_found_error(),
        Err(err) => storage_error(err),
    }
}

/// 更新站点
///
/// 更新指定站点的信息，至少需要提供一个更新字段。
///
/// # 流程
///
/// 1. 校验 edit_sites 权限
/// 2. 使用 `normalize_optional` 验证可选字段（name、county）
/// 3. 检查是否至少有一个更新字段
/// 4. 调用 `site_store.update_site` 更新站点
///
/// # 错误处理
///
/// - `400 BAD REQUEST`: 没有提供更新字段或字段格式错误
/// - `403 FORBIDDEN`: 权限不足
/// - `404 NOT FOUND`: 站点不存在
/// - `500 INTERNAL SERVER ERROR`: 存储层错误
pub async fn update_site(
    State(state): State<AppState>,
    Path(path): Path<SitePath>,
    Json(req): Json<UpdateSiteRequest>,
) -> Response {
    let ctx = &state.operator;
    if let Err(response) = require_permission(ctx, permissions::EDIT_SITES) {
        return response;
    }
    let name = match normalize_optional(req.name, "name") {
        Ok(value) => value,
        Err(response) => return response,
    };
    let county = match normalize_optional(req.county, "county") {
        Ok(value) => value,
        Err(response) => return response,
    };
    if let Some(latitude) = req.latitude {
        if let Err(response) = require_finite_coordinate(latitude, "latitude") {
            return response;
        }
    }
    if let Some(longitude) = req.longitude {
        if let Err(response) = require_finite_coordinate(longitude, "longitude") {
            return response;
        }
    }
    let update = ops_storage::SiteUpdate {
        name,
        county,
        address: req.address,
        latitude: req.latitude,
        longitude: req.longitude,
        capacity_kw: req.capacity_kw,
        status: req.status,
        contact_name: req.contact_name,
        contact_phone: req.contact_phone,
        contact_email: req.contact_email,
    };
    if update.name.is_none()
        && update.county.is_none()
        && update.address.is_none()
        && update.latitude.is_none()
        && update.longitude.is_none()
        && update.capacity_kw.is_none()
        && update.status.is_none()
        && update.contact_name.is_none()
        && update.contact_phone.is_none()
        && update.contact_email.is_none()
    {
        return bad_request_error("empty update");
    }
    match state.site_store.update_site(ctx, &path.site_id, update).await {
        Ok(Some(item)) => {
            ops_telemetry::record_catalog_write();
            (StatusCode::OK, Json(ApiResponse::success(site_to_dto(item)))).into_response()
        }
        Ok(None) => not_found_error(),
        Err(err) => storage_error(err),
    }
}

/// 删除站点
///
/// 删除指定的站点。删除成功后返回空数据。
///
/// # 错误处理
///
/// - `403 FORBIDDEN`: 权限不足
/// - `404 NOT FOUND`: 站点不存在
/// - `500 INTERNAL SERVER ERROR`: 存储层错误
pub async fn delete_site(State(state): State<AppState>, Path(path): Path<SitePath>) -> Response {
    let ctx = &state.operator;
    if let Err(response) = require_permission(ctx, permissions::EDIT_SITES) {
        return response;
    }
    match state.site_store.delete_site(ctx, &path.site_id).await {
        Ok(true) => {
            ops_telemetry::record_catalog_write();
            (StatusCode::OK, Json(ApiResponse::success(()))).into_response()
        }
        Ok(false) => not_found_error(),
        Err(err) => storage_error(err),
    }
}
