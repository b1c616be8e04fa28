//! 工单 CRUD 与盈利分析 handlers
//!
//! - GET /service-orders - 列出工单（状态/类型/优先级/搜索筛选 + 分页）
//! - POST /service-orders - 创建工单（用料按库存现价做快照，需验证站点存在）
//! - GET /service-orders/{id} - 获取工单详情
//! - PUT /service-orders/{id} - 更新工单
//! - DELETE /service-orders/{id} - 删除工单
//! - GET /service-orders/{id}/profitability - 盈利分析报告
//!
//! 工单 DTO 携带的成本合计/利润/利润率全部在读取时重算，
//! 不存在任何隐藏累计。

use crate::AppState;
use crate::middleware::require_permission;
use crate::utils::paginate;
use crate::utils::response::{
    bad_request_error, not_found_error, order_to_dto, part_usage_to_dto, storage_error,
};
use crate::utils::{normalize_optional, require_non_negative};
use api_contract::{
    ApiResponse, CostLineDto, CreateServiceOrderRequest, PagedDto, PartUsageInput,
    ProfitabilityDto, ServiceOrderDto, UpdateServiceOrderRequest,
};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use domain::permissions;
use ops_storage::PartUsage;
use uuid::Uuid;

#[derive(serde::Deserialize)]
pub struct OrderPath {
    order_id: String,
}

/// 工单列表查询参数。
#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderListQuery {
    /// 标题/编号/站点/技师子串搜索
    pub q: Option<String>,
    pub status: Option<String>,
    pub service_type: Option<String>,
    pub priority: Option<String>,
    pub page: Option<usize>,
    pub page_size: Option<usize>,
}

/// 列出工单
pub async fn list_service_orders(
    State(state): State<AppState>,
    Query(query): Query<OrderListQuery>,
) -> Response {
    let ctx = &state.operator;
    if let Err(response) = require_permission(ctx, permissions::VIEW_DASHBOARD) {
        return response;
    }
    match state.order_store.list_orders(ctx).await {
        Ok(mut items) => {
            ops_telemetry::record_catalog_read();
            if let Some(q) = query.q.as_deref().map(str::to_lowercase) {
                items.retain(|order| {
                    order.title.to_lowercase().contains(&q)
                        || order.order_id.to_lowercase().contains(&q)
                        || order.site_name.to_lowercase().contains(&q)
                        || order.technician_name.to_lowercase().contains(&q)
                });
            }
            if let Some(status) = query.status.as_deref() {
                items.retain(|order| order.status.as_str() == status);
            }
            if let Some(service_type) = query.service_type.as_deref() {
                items.retain(|order| order.service_type.as_str() == service_type);
            }
            if let Some(priority) = query.priority.as_deref() {
                items.retain(|order| order.priority.as_str() == priority);
            }
            items.sort_by(|a, b| a.order_id.cmp(&b.order_id));
            let page = query.page.unwrap_or(1);
            let page_size = query.page_size.unwrap_or(10);
            let (paged, total) = paginate(items, page, page_size);
            let data = PagedDto::<ServiceOrderDto> {
                items: paged.into_iter().map(order_to_dto).collect(),
                total,
                page: page.max(1),
                page_size: page_size.max(1),
            };
            (StatusCode::OK, Json(ApiResponse::success(data))).into_response()
        }
        Err(err) => storage_error(err),
    }
}

/// 按库存现价把用料输入解析为快照。
async fn resolve_parts(
    state: &AppState,
    inputs: &[PartUsageInput],
) -> Result<Vec<PartUsage>, Response> {
    let ctx = &state.operator;
    let mut parts = Vec::with_capacity(inputs.len());
    for input in inputs {
        if input.quantity < 0 {
            return Err(bad_request_error("part quantity must be non-negative"));
        }
        let item = match state.inventory_store.find_item(ctx, &input.item_id).await {
            Ok(Some(item)) => item,
            Ok(None) => {
                return Err(bad_request_error(format!(
                    "inventory item not found: {}",
                    input.item_id
                )));
            }
            Err(err) => return Err(storage_error(err)),
        };
        parts.push(PartUsage {
            item_id: item.item_id,
            name: item.name,
            quantity: input.quantity,
            unit_price: item.selling_price,
            buying_price: item.buying_price,
        });
    }
    Ok(parts)
}

/// 创建工单
///
/// # 流程
///
/// 1. 校验 edit_service_orders 权限
/// 2. 验证站点存在，取其名称与郡名
/// 3. 用料输入逐条按库存现价做快照（条目不存在则拒绝）
/// 4. 生成工单 ID（SO- 前缀 + UUID v4）并保存
///
/// # 错误处理
///
/// - `400 BAD REQUEST`: 站点/库存条目不存在，或数值非法
/// - `403 FORBIDDEN`: 权限不足
/// - `500 INTERNAL SERVER ERROR`: 存储层错误
pub async fn create_service_order(
    State(state): State<AppState>,
    Json(req): Json<CreateServiceOrderRequest>,
) -> Response {
    let ctx = &state.operator;
    if let Err(response) = require_permission(ctx, permissions::EDIT_SERVICE_ORDERS) {
        return response;
    }
    let site = match state.site_store.find_site(ctx, &req.site_id).await {
        Ok(Some(site)) => site,
        Ok(None) => return bad_request_error("site not found"),
        Err(err) => return storage_error(err),
    };
    let parts_used = match resolve_parts(&state, &req.parts).await {
        Ok(parts) => parts,
        Err(response) => return response,
    };
    let invoice_amount = match require_non_negative(req.invoice_amount, "invoice amount") {
        Ok(value) => value,
        Err(response) => return response,
    };
    let title = match req.title {
        Some(title) if !title.trim().is_empty() => title.trim().to_string(),
        _ => format!("{} - {}", req.service_type.as_str(), site.name),
    };
    let record = ops_storage::ServiceOrderRecord {
        order_id: format!("SO-{}", Uuid::new_v4()),
        title,
        site_id: site.site_id,
        site_name: site.name,
        county: site.county,
        service_type: req.service_type,
        status: domain::ServiceOrderStatus::Scheduled,
        priority: req.priority.unwrap_or(domain::ServiceOrderPriority::Medium),
        scheduled_date: req.scheduled_date,
        completed_date: None,
        technician_id: req.technician_id.unwrap_or_default(),
        technician_name: req.technician_name.unwrap_or_default(),
        description: req.description.unwrap_or_default(),
        parts_used,
        labor_hours: req.labor_hours.unwrap_or_default(),
        labor_rate: req.labor_rate.unwrap_or(ops_mockgen::DEFAULT_LABOR_RATE),
        travel_cost: req.travel_cost.unwrap_or_default(),
        other_costs: req.other_costs.unwrap_or_default(),
        invoice_amount,
    };
    match state.order_store.create_order(ctx, record).await {
        Ok(item) => {
            ops_telemetry::record_catalog_write();
            (StatusCode::OK, Json(ApiResponse::success(order_to_dto(item)))).into_response()
        }
        Err(err) => storage_error(err),
    }
}

/// 获取工单详情
pub async fn get_service_order(
    State(state): State<AppState>,
    Path(path): Path<OrderPath>,
) -> Response {
    let ctx = &state.operator;
    if let Err(response) = require_permission(ctx, permissions::VIEW_DASHBOARD) {
        return response;
    }
    match state.order_store.find_order(ctx, &path.order_id).await {
        Ok(Some(item)) => {
            ops_telemetry::record_catalog_read();
            (StatusCode::OK, Json(ApiResponse::success(order_to_dto(item)))).into_response()
        }
        Ok(None) => not_found_error(),
        Err(err) => storage_error(err),
    }
}

/// 更新工单
pub async fn update_service_order(
    State(state): State<AppState>,
    Path(path): Path<OrderPath>,
    Json(req): Json<UpdateServiceOrderRequest>,
) -> Response {
    let ctx = &state.operator;
    if let Err(response) = require_permission(ctx, permissions::EDIT_SERVICE_ORDERS) {
        return response;
    }
    let title = match normalize_optional(req.title, "title") {
        Ok(value) => value,
        Err(response) => return response,
    };
    let parts_used = match req.parts {
        Some(inputs) => match resolve_parts(&state, &inputs).await {
            Ok(parts) => Some(parts),
            Err(response) => return response,
        },
        None => None,
    };
    if let Some(amount) = req.invoice_amount {
        if let Err(response) = require_non_negative(amount, "invoice amount") {
            return response;
        }
    }
    let update = ops_storage::ServiceOrderUpdate {
        title,
        status: req.status,
        priority: req.priority,
        scheduled_date: req.scheduled_date,
        completed_date: req.completed_date,
        technician_id: req.technician_id,
        technician_name: req.technician_name,
        description: req.description,
        parts_used,
        labor_hours: req.labor_hours,
        labor_rate: req.labor_rate,
        travel_cost: req.travel_cost,
        other_costs: req.other_costs,
        invoice_amount: req.invoice_amount,
    };
    match state
        .order_store
        .update_order(ctx, &path.order_id, update)
        .await
    {
        Ok(Some(item)) => {
            ops_telemetry::record_catalog_write();
            (StatusCode::OK, Json(ApiResponse::success(order_to_dto(item)))).into_response()
        }
        Ok(None) => not_found_error(),
        Err(err) => storage_error(err),
    }
}

/// 删除工单
pub async fn delete_service_order(
    State(state): State<AppState>,
    Path(path): Path<OrderPath>,
) -> Response {
    let ctx = &state.operator;
    if let Err(response) = require_permission(ctx, permissions::EDIT_SERVICE_ORDERS) {
        return response;
    }
    match state.order_store.delete_order(ctx, &path.order_id).await {
        Ok(true) => {
            ops_telemetry::record_catalog_write();
            (StatusCode::OK, Json(ApiResponse::success(()))).into_response()
        }
        Ok(false) => not_found_error(),
        Err(err) => storage_error(err),
    }
}

/// 工单盈利分析
///
/// 从工单当前字段重算成本表：用料成本/人工/差旅/其他的合计与分解、
/// 利润与利润率分档，并给出低于 15% 目标线的提示位。
///
/// # 错误处理
///
/// - `403 FORBIDDEN`: 权限不足（需要 view_reports）
/// - `404 NOT FOUND`: 工单不存在
/// - `500 INTERNAL SERVER ERROR`: 存储层错误
pub async fn get_order_profitability(
    State(state): State<AppState>,
    Path(path): Path<OrderPath>,
) -> Response {
    let ctx = &state.operator;
    if let Err(response) = require_permission(ctx, permissions::VIEW_REPORTS) {
        return response;
    }
    let order = match state.order_store.find_order(ctx, &path.order_id).await {
        Ok(Some(order)) => order,
        Ok(None) => return not_found_error(),
        Err(err) => return storage_error(err),
    };
    let summary = ops_costing::order_costs(&order).summarize();
    ops_telemetry::record_order_priced();
    let breakdown = summary
        .breakdown()
        .into_iter()
        .map(|line| CostLineDto {
            category: line.category.as_str().to_string(),
            amount: line.amount,
            share_of_total: line.share_of_total,
        })
        .collect();
    let data = ProfitabilityDto {
        order_id: order.order_id,
        title: order.title,
        service_type: order.service_type,
        status: order.status,
        site_name: order.site_name,
        scheduled_date: order.scheduled_date,
        completed_date: order.completed_date,
        technician_name: order.technician_name,
        invoice_amount: summary.invoice_amount,
        parts_cost: summary.parts_cost,
        parts_revenue: summary.parts_revenue,
        labor_cost: summary.labor_cost,
        travel_cost: summary.travel_cost,
        other_costs: summary.other_costs,
        total_cost: summary.total_cost,
        profit: summary.profit,
        profit_margin: summary.margin,
        profit_band: summary.band().as_str().to_string(),
        below_target: summary.below_target(),
        breakdown,
        parts: order.parts_used.into_iter().map(part_usage_to_dto).collect(),
    };
    (StatusCode::OK, Json(ApiResponse::success(data))).into_response()
}
