//! 站点批量导入 handlers
//!
//! - GET /sites/import/template - 下载 CSV 模板（逐字节固定）
//! - POST /sites/import/validate - 校验行数据，返回行级错误
//! - POST /sites/import - 校验 + 模拟导入；成功行写入站点目录
//!
//! 模拟导入按配置的失败概率逐行独立成败（种子化随机源，
//! 同一进程内的第 N 次导入结果可复现）。存在校验错误时整体拒绝。

use crate::AppState;
use crate::middleware::require_permission;
use crate::utils::response::{bad_request_error, row_error_to_dto, storage_error};
use api_contract::{
    ApiResponse, ImportOutcomeDto, ImportRowsRequest, ValidateImportDto,
};
use axum::{
    Json,
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use domain::permissions;
use ops_import::{ImportRow, ImportSimulator, csv_template, drafts_from_rows, validate_rows};
use std::sync::atomic::Ordering;
use uuid::Uuid;

/// 下载 CSV 模板
pub async fn download_import_template(State(state): State<AppState>) -> Response {
    if let Err(response) = require_permission(&state.operator, permissions::VIEW_SITES) {
        return response;
    }
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"site_upload_template.csv\"",
            ),
        ],
        csv_template(),
    )
        .into_response()
}

fn to_import_rows(req: ImportRowsRequest) -> Vec<ImportRow> {
    req.rows.into_iter().map(ImportRow::new).collect()
}

/// 校验导入行
///
/// 纯结构校验：必填字段非空、经纬度可解析。错误带行号（从 1 起）。
pub async fn validate_import(
    State(state): State<AppState>,
    Json(req): Json<ImportRowsRequest>,
) -> Response {
    if let Err(response) = require_permission(&state.operator, permissions::VIEW_SITES) {
        return response;
    }
    let rows = to_import_rows(req);
    let errors = validate_rows(&rows);
    ops_telemetry::record_import_rows_validated(rows.len() as u64);
    let rejected: std::collections::HashSet<usize> =
        errors.iter().map(|error| error.row).collect();
    ops_telemetry::record_import_rows_rejected(rejected.len() as u64);
    let data = ValidateImportDto {
        valid: errors.is_empty(),
        row_count: rows.len(),
        errors: errors.into_iter().map(row_error_to_dto).collect(),
    };
    (StatusCode::OK, Json(ApiResponse::success(data))).into_response()
}

/// 运行模拟导入
///
/// # 流程
///
/// 1. 校验 edit_sites 权限
/// 2. 行校验；存在任何行级错误时整体拒绝
/// 3. 以 mock_seed + 运行序号派生本次随机种子，逐行掷签
/// 4. 成功行写入站点目录，失败行进入错误汇总
///
/// # 错误处理
///
/// - `400 BAD REQUEST`: 行校验未通过
/// - `403 FORBIDDEN`: 权限不足
/// - `500 INTERNAL SERVER ERROR`: 存储层错误
pub async fn run_import(
    State(state): State<AppState>,
    Json(req): Json<ImportRowsRequest>,
) -> Response {
    let ctx = &state.operator;
    if let Err(response) = require_permission(ctx, permissions::EDIT_SITES) {
        return response;
    }
    let rows = to_import_rows(req);
    ops_telemetry::record_import_rows_validated(rows.len() as u64);
    let drafts = match drafts_from_rows(&rows) {
        Ok(drafts) => drafts,
        Err(errors) => {
            ops_telemetry::record_import_rows_rejected(errors.len() as u64);
            return bad_request_error(format!(
                "validation failed for {} row(s)",
                errors
                    .iter()
                    .map(|error| error.row)
                    .collect::<std::collections::HashSet<_>>()
                    .len()
            ));
        }
    };

    // 每次运行派生独立种子：同一进程内第 N 次导入可复现
    let run = state.import_runs.fetch_add(1, Ordering::Relaxed);
    let seed = state.mock_seed.wrapping_add(run);
    let mut simulator = ImportSimulator::new(seed, state.import_failure_rate);
    let (accepted, outcome) = simulator.run(&drafts);

    for index in &accepted {
        let draft = &drafts[*index];
        let record = ops_storage::SiteRecord {
            site_id: format!("SITE-{}", Uuid::new_v4()),
            name: draft.name.clone(),
            county: draft.county.clone(),
            address: draft.address.clone(),
            latitude: draft.latitude,
            longitude: draft.longitude,
            capacity_kw: draft.capacity_kw,
            status: draft.status,
            contact_name: draft.contact_name.clone(),
            contact_phone: draft.contact_phone.clone(),
            contact_email: draft.contact_email.clone(),
            created_at_ms: chrono::Utc::now().timestamp_millis(),
        };
        if let Err(err) = state.site_store.create_site(ctx, record).await {
            return storage_error(err);
        }
    }
    ops_telemetry::record_import_rows_committed(outcome.successful as u64);
    ops_telemetry::record_import_rows_failed(outcome.failed as u64);

    let data = ImportOutcomeDto {
        total: outcome.total,
        successful: outcome.successful,
        failed: outcome.failed,
        errors: outcome.errors.into_iter().map(row_error_to_dto).collect(),
    };
    (StatusCode::OK, Json(ApiResponse::success(data))).into_response()
}
