//! 项目 handlers
//!
//! - GET /projects - 列出项目（状态/郡名/搜索筛选 + 分页）
//! - GET /projects/{id} - 获取项目详情（含甘特任务与里程碑）

use crate::AppState;
use crate::middleware::require_permission;
use crate::utils::paginate;
use crate::utils::response::{not_found_error, project_to_dto, storage_error};
use api_contract::{ApiResponse, PagedDto, ProjectDto};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use domain::permissions;

#[derive(serde::Deserialize)]
pub struct ProjectPath {
    project_id: String,
}

/// 项目列表查询参数。
#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectListQuery {
    pub q: Option<String>,
    pub status: Option<String>,
    pub county: Option<String>,
    pub page: Option<usize>,
    pub page_size: Option<usize>,
}

/// 列出项目
pub async fn list_projects(
    State(state): State<AppState>,
    Query(query): Query<ProjectListQuery>,
) -> Response {
    let ctx = &state.operator;
    if let Err(response) = require_permission(ctx, permissions::VIEW_PROJECTS) {
        return response;
    }
    match state.project_store.list_projects(ctx).await {
        Ok(mut items) => {
            ops_telemetry::record_catalog_read();
            if let Some(q) = query.q.as_deref().map(str::to_lowercase) {
                items.retain(|project| {
                    project.name.to_lowercase().contains(&q)
                        || project.project_id.to_lowercase().contains(&q)
                        || project.county.to_lowercase().contains(&q)
                });
            }
            if let Some(status) = query.status.as_deref() {
                items.retain(|project| project.status.as_str() == status);
            }
            if let Some(county) = query.county.as_deref() {
                items.retain(|project| project.county == county);
            }
            items.sort_by(|a, b| a.project_id.cmp(&b.project_id));
            let page = query.page.unwrap_or(1);
            let page_size = query.page_size.unwrap_or(10);
            let (paged, total) = paginate(items, page, page_size);
            let data = PagedDto::<ProjectDto> {
                items: paged.into_iter().map(project_to_dto).collect(),
                total,
                page: page.max(1),
                page_size: page_size.max(1),
            };
            (StatusCode::OK, Json(ApiResponse::success(data))).into_response()
        }
        Err(err) => storage_error(err),
    }
}

/// 获取项目详情
pub async fn get_project(
    State(state): State<AppState>,
    Path(path): Path<ProjectPath>,
) -> Response {
    let ctx = &state.operator;
    if let Err(response) = require_permission(ctx, permissions::VIEW_PROJECTS) {
        return response;
    }
    match state
        .project_store
        .find_project(ctx, &path.project_id)
        .await
    {
        Ok(Some(item)) => {
            ops_telemetry::record_catalog_read();
            (
                StatusCode::OK,
                Json(ApiResponse::success(project_to_dto(item))),
            )
                .into_response()
        }
        Ok(None) => not_found_error(),
        Err(err) => storage_error(err),
    }
}
