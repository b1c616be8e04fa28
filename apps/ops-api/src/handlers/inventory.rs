//! 库存 CRUD handlers
//!
//! - GET /inventory - 列出库存条目（类别/水位/搜索筛选 + 分页，
//!   行内携带派生的水位状态与毛利率）
//! - POST /inventory - 创建库存条目
//! - GET /inventory/{id} - 获取条目详情
//! - PUT /inventory/{id} - 更新条目
//! - DELETE /inventory/{id} - 删除条目

use crate::AppState;
use crate::middleware::require_permission;
use crate::utils::paginate;
use crate::utils::response::{
    bad_request_error, inventory_item_to_dto, not_found_error, storage_error,
};
use crate::utils::{normalize_optional, normalize_required, require_non_negative};
use api_contract::{
    ApiResponse, CreateInventoryItemRequest, InventoryItemDto, PagedDto,
    UpdateInventoryItemRequest,
};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use domain::{StockStatus, permissions};
use uuid::Uuid;

#[derive(serde::Deserialize)]
pub struct ItemPath {
    item_id: String,
}

/// 库存列表查询参数。
#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryListQuery {
    /// 名称/编号/供应商子串搜索
    pub q: Option<String>,
    pub category: Option<String>,
    /// 水位筛选：low | normal
    pub stock: Option<String>,
    pub page: Option<usize>,
    pub page_size: Option<usize>,
}

/// 列出库存条目
pub async fn list_inventory(
    State(state): State<AppState>,
    Query(query): Query<InventoryListQuery>,
) -> Response {
    let ctx = &state.operator;
    if let Err(response) = require_permission(ctx, permissions::VIEW_DASHBOARD) {
        return response;
    }
    match state.inventory_store.list_items(ctx).await {
        Ok(mut items) => {
            ops_telemetry::record_catalog_read();
            if let Some(q) = query.q.as_deref().map(str::to_lowercase) {
                items.retain(|item| {
                    item.name.to_lowercase().contains(&q)
                        || item.item_id.to_lowercase().contains(&q)
                        || item.supplier.to_lowercase().contains(&q)
                });
            }
            if let Some(category) = query.category.as_deref() {
                items.retain(|item| item.category == category);
            }
            match query.stock.as_deref() {
                Some("low") => items.retain(|item| item.stock_status() == StockStatus::Low),
                Some("normal") => {
                    items.retain(|item| item.stock_status() == StockStatus::InStock)
                }
                _ => {}
            }
            items.sort_by(|a, b| a.item_id.cmp(&b.item_id));
            let page = query.page.unwrap_or(1);
            let page_size = query.page_size.unwrap_or(10);
            let (paged, total) = paginate(items, page, page_size);
            let data = PagedDto::<InventoryItemDto> {
                items: paged.into_iter().map(inventory_item_to_dto).collect(),
                total,
                page: page.max(1),
                page_size: page_size.max(1),
            };
            (StatusCode::OK, Json(ApiResponse::success(data))).into_response()
        }
        Err(err) => storage_error(err),
    }
}

/// 创建库存条目
pub async fn create_inventory_item(
    State(state): State<AppState>,
    Json(req): Json<CreateInventoryItemRequest>,
) -> Response {
    let ctx = &state.operator;
    if let Err(response) = require_permission(ctx, permissions::EDIT_INVENTORY) {
        return response;
    }
    let name = match normalize_required(req.name, "name") {
        Ok(value) => value,
        Err(response) => return response,
    };
    let category = match normalize_required(req.category, "category") {
        Ok(value) => value,
        Err(response) => return response,
    };
    if req.quantity < 0 || req.min_quantity < 0 {
        return bad_request_error("quantity must be non-negative");
    }
    let selling_price = match require_non_negative(req.selling_price, "selling price") {
        Ok(value) => value,
        Err(response) => return response,
    };
    let buying_price = match require_non_negative(req.buying_price, "buying price") {
        Ok(value) => value,
        Err(response) => return response,
    };
    let record = ops_storage::InventoryItemRecord {
        item_id: format!("INV-{}", Uuid::new_v4()),
        name,
        category,
        selling_price,
        buying_price,
        quantity: req.quantity,
        min_quantity: req.min_quantity,
        location: req.location.unwrap_or_default(),
        supplier: req.supplier.unwrap_or_default(),
        last_restocked: req
            .last_restocked
            .unwrap_or_else(|| chrono::Utc::now().date_naive()),
    };
    match state.inventory_store.create_item(ctx, record).await {
        Ok(item) => {
            ops_telemetry::record_catalog_write();
            (
                StatusCode::OK,
                Json(ApiResponse::success(inventory_item_to_dto(item))),
            )
                .into_response()
        }
        Err(err) => storage_error(err),
    }
}

/// 获取库存条目详情
pub async fn get_inventory_item(
    State(state): State<AppState>,
    Path(path): Path<ItemPath>,
) -> Response {
    let ctx = &state.operator;
    if let Err(response) = require_permission(ctx, permissions::VIEW_DASHBOARD) {
        return response;
    }
    match state.inventory_store.find_item(ctx, &path.item_id).await {
        Ok(Some(item)) => {
            ops_telemetry::record_catalog_read();
            (
                StatusCode::OK,
                Json(ApiResponse::success(inventory_item_to_dto(item))),
            )
                .into_response()
        }
        Ok(None) => not_found_error(),
        Err(err) => storage_error(err),
    }
}

/// 更新库存条目
pub async fn update_inventory_item(
    State(state): State<AppState>,
    Path(path): Path<ItemPath>,
    Json(req): Json<UpdateInventoryItemRequest>,
) -> Response {
    let ctx = &state.operator;
    if let Err(response) = require_permission(ctx, permissions::EDIT_INVENTORY) {
        return response;
    }
    let name = match normalize_optional(req.name, "name") {
        Ok(value) => value,
        Err(response) => return response,
    };
    let category = match normalize_optional(req.category, "category") {
        Ok(value) => value,
        Err(response) => return response,
    };
    if matches!(req.quantity, Some(quantity) if quantity < 0)
        || matches!(req.min_quantity, Some(min) if min < 0)
    {
        return bad_request_error("quantity must be non-negative");
    }
    let update = ops_storage::InventoryItemUpdate {
        name,
        category,
        selling_price: req.selling_price,
        buying_price: req.buying_price,
        quantity: req.quantity,
        min_quantity: req.min_quantity,
        location: req.location,
        supplier: req.supplier,
        last_restocked: req.last_restocked,
    };
    if update.name.is_none()
        && update.category.is_none()
        && update.selling_price.is_none()
        && update.buying_price.is_none()
        && update.quantity.is_none()
        && update.min_quantity.is_none()
        && update.location.is_none()
        && update.supplier.is_none()
        && update.last_restocked.is_none()
    {
        return bad_request_error("empty update");
    }
    match state
        .inventory_store
        .update_item(ctx, &path.item_id, update)
        .await
    {
        Ok(Some(item)) => {
            ops_telemetry::record_catalog_write();
            (
                StatusCode::OK,
                Json(ApiResponse::success(inventory_item_to_dto(item))),
            )
                .into_response()
        }
        Ok(None) => not_found_error(),
        Err(err) => storage_error(err),
    }
}

/// 删除库存条目
pub async fn delete_inventory_item(
    State(state): State<AppState>,
    Path(path): Path<ItemPath>,
) -> Response {
    let ctx = &state.operator;
    if let Err(response) = require_permission(ctx, permissions::EDIT_INVENTORY) {
        return response;
    }
    match state.inventory_store.delete_item(ctx, &path.item_id).await {
        Ok(true) => {
            ops_telemetry::record_catalog_write();
            (StatusCode::OK, Json(ApiResponse::success(()))).into_response()
        }
        Ok(false) => not_found_error(),
        Err(err) => storage_error(err),
    }
}
