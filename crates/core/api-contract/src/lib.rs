//! 稳定的 DTO 与 API 响应契约。

use chrono::NaiveDate;
use domain::{
    MilestoneStatus, ProjectStatus, ServiceOrderPriority, ServiceOrderStatus, ServiceType,
    SiteStatus, StockStatus, TaskStatus, UserRole, UserStatus,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 标准 API 响应封装。
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<ApiError>,
}

/// 失败响应的错误体。
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(ApiError {
                code: code.into(),
                message: message.into(),
            }),
        }
    }
}

/// 列表分页封装（展示层内存分页）。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedDto<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub page: usize,
    pub page_size: usize,
}

// ============================================================================
// 站点
// ============================================================================

/// 站点返回结构。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteDto {
    pub site_id: String,
    pub name: String,
    pub county: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub capacity_kw: f64,
    pub status: SiteStatus,
    pub contact_name: Option<String>,
    pub contact_phone: Option<String>,
    pub contact_email: Option<String>,
    pub created_at_ms: i64,
}

/// 站点创建请求体。
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSiteRequest {
    pub name: String,
    pub county: String,
    pub address: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub capacity_kw: Option<f64>,
    pub status: Option<SiteStatus>,
    pub contact_name: Option<String>,
    pub contact_phone: Option<String>,
    pub contact_email: Option<String>,
}

/// 站点更新请求体。
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSiteRequest {
    pub name: Option<String>,
    pub county: Option<String>,
    pub address: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub capacity_kw: Option<f64>,
    pub status: Option<SiteStatus>,
    pub contact_name: Option<String>,
    pub contact_phone: Option<String>,
    pub contact_email: Option<String>,
}

// ============================================================================
// 库存
// ============================================================================

/// 库存条目返回结构（含派生的水位状态与毛利率）。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItemDto {
    pub item_id: String,
    pub name: String,
    pub category: String,
    pub selling_price: f64,
    pub buying_price: f64,
    pub quantity: i64,
    pub min_quantity: i64,
    pub location: String,
    pub supplier: String,
    pub last_restocked: NaiveDate,
    pub stock_status: StockStatus,
    pub margin_percent: f64,
}

/// 库存条目创建请求体。
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateInventoryItemRequest {
    pub name: String,
    pub category: String,
    pub selling_price: f64,
    pub buying_price: f64,
    pub quantity: i64,
    pub min_quantity: i64,
    pub location: Option<String>,
    pub supplier: Option<String>,
    pub last_restocked: Option<NaiveDate>,
}

/// 库存条目更新请求体。
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateInventoryItemRequest {
    pub name: Option<String>,
    pub category: Option<String>,
    pub selling_price: Option<f64>,
    pub buying_price: Option<f64>,
    pub quantity: Option<i64>,
    pub min_quantity: Option<i64>,
    pub location: Option<String>,
    pub supplier: Option<String>,
    pub last_restocked: Option<NaiveDate>,
}

// ============================================================================
// 工单
// ============================================================================

/// 工单用料返回结构（快照）。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PartUsageDto {
    pub item_id: String,
    pub name: String,
    pub quantity: i64,
    pub unit_price: f64,
    pub buying_price: f64,
}

/// 工单用料输入：按库存条目现价做快照。
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartUsageInput {
    pub item_id: String,
    pub quantity: i64,
}

/// 工单返回结构（合计/利润/利润率为读取时重算的派生值）。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceOrderDto {
    pub order_id: String,
    pub title: String,
    pub site_id: String,
    pub site_name: String,
    pub county: String,
    pub service_type: ServiceType,
    pub status: ServiceOrderStatus,
    pub priority: ServiceOrderPriority,
    pub scheduled_date: NaiveDate,
    pub completed_date: Option<NaiveDate>,
    pub technician_id: String,
    pub technician_name: String,
    pub description: String,
    pub parts_used: Vec<PartUsageDto>,
    pub labor_hours: f64,
    pub labor_rate: f64,
    pub travel_cost: f64,
    pub other_costs: f64,
    pub invoice_amount: f64,
    pub total_cost: f64,
    pub profit: f64,
    pub profit_margin: f64,
}

/// 工单创建请求体。
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateServiceOrderRequest {
    pub title: Option<String>,
    pub site_id: String,
    pub service_type: ServiceType,
    pub priority: Option<ServiceOrderPriority>,
    pub scheduled_date: NaiveDate,
    pub technician_id: Option<String>,
    pub technician_name: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub parts: Vec<PartUsageInput>,
    pub labor_hours: Option<f64>,
    pub labor_rate: Option<f64>,
    pub travel_cost: Option<f64>,
    pub other_costs: Option<f64>,
    pub invoice_amount: f64,
}

/// 工单更新请求体。
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateServiceOrderRequest {
    pub title: Option<String>,
    pub status: Option<ServiceOrderStatus>,
    pub priority: Option<ServiceOrderPriority>,
    pub scheduled_date: Option<NaiveDate>,
    pub completed_date: Option<NaiveDate>,
    pub technician_id: Option<String>,
    pub technician_name: Option<String>,
    pub description: Option<String>,
    pub parts: Option<Vec<PartUsageInput>>,
    pub labor_hours: Option<f64>,
    pub labor_rate: Option<f64>,
    pub travel_cost: Option<f64>,
    pub other_costs: Option<f64>,
    pub invoice_amount: Option<f64>,
}

/// 成本分解行。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CostLineDto {
    pub category: String,
    pub amount: f64,
    pub share_of_total: f64,
}

/// 工单盈利分析返回结构。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfitabilityDto {
    pub order_id: String,
    pub title: String,
    pub service_type: ServiceType,
    pub status: ServiceOrderStatus,
    pub site_name: String,
    pub scheduled_date: NaiveDate,
    pub completed_date: Option<NaiveDate>,
    pub technician_name: String,
    pub invoice_amount: f64,
    pub parts_cost: f64,
    pub parts_revenue: f64,
    pub labor_cost: f64,
    pub travel_cost: f64,
    pub other_costs: f64,
    pub total_cost: f64,
    pub profit: f64,
    pub profit_margin: f64,
    pub profit_band: String,
    /// 低于 15% 目标线时的提示位
    pub below_target: bool,
    pub breakdown: Vec<CostLineDto>,
    pub parts: Vec<PartUsageDto>,
}

// ============================================================================
// 项目与时间轴
// ============================================================================

/// 甘特任务节点返回结构。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskMilestoneDto {
    pub milestone_id: String,
    pub name: String,
    pub date: NaiveDate,
    pub completed: bool,
}

/// 甘特任务返回结构。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDto {
    pub task_id: String,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub progress: u8,
    pub status: TaskStatus,
    pub assignee: Option<String>,
    pub milestones: Vec<TaskMilestoneDto>,
}

/// 项目里程碑返回结构。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MilestoneDto {
    pub milestone_id: String,
    pub title: String,
    pub description: String,
    pub due_date: NaiveDate,
    pub completed_date: Option<NaiveDate>,
    pub status: MilestoneStatus,
}

/// 项目返回结构。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDto {
    pub project_id: String,
    pub name: String,
    pub county: String,
    pub location: String,
    pub capacity_kw: f64,
    pub status: ProjectStatus,
    pub start_date: NaiveDate,
    pub target_completion_date: NaiveDate,
    pub actual_completion_date: Option<NaiveDate>,
    pub progress: u8,
    pub milestones: Vec<MilestoneDto>,
    pub tasks: Vec<TaskDto>,
}

/// 时间轴上的节点标记（已通过可见谓词）。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineMilestoneDto {
    pub milestone_id: String,
    pub name: String,
    pub date: NaiveDate,
    pub completed: bool,
    pub offset_px: i64,
}

/// 时间轴上的任务条（已裁剪到窗口内）。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineBarDto {
    pub task_id: String,
    pub name: String,
    pub status: TaskStatus,
    pub progress: u8,
    pub offset_px: i64,
    pub width_px: i64,
    pub milestones: Vec<TimelineMilestoneDto>,
}

/// 时间轴中的项目行。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineProjectDto {
    pub project_id: String,
    pub name: String,
    pub rows: Vec<TimelineBarDto>,
}

/// 甘特时间轴返回结构。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineDto {
    pub window_start: NaiveDate,
    pub visible_days: i64,
    pub cell_width: i64,
    pub width_px: i64,
    pub today_offset_px: Option<i64>,
    pub projects: Vec<TimelineProjectDto>,
}

// ============================================================================
// 用户
// ============================================================================

/// 用户返回结构。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: UserRole,
    pub status: UserStatus,
    pub company: String,
    pub permissions: Vec<String>,
    pub projects: Vec<String>,
    pub sites: Vec<String>,
    pub last_active_ms: i64,
    pub created_at_ms: i64,
}

/// 用户创建请求体。
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub role: UserRole,
    pub status: Option<UserStatus>,
    pub company: Option<String>,
    /// 缺省时按角色取默认权限集合
    pub permissions: Option<Vec<String>>,
    pub projects: Option<Vec<String>>,
    pub sites: Option<Vec<String>>,
}

/// 用户更新请求体。
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub role: Option<UserRole>,
    pub status: Option<UserStatus>,
    pub company: Option<String>,
    pub permissions: Option<Vec<String>>,
    pub projects: Option<Vec<String>>,
    pub sites: Option<Vec<String>>,
}

// ============================================================================
// 批量导入
// ============================================================================

/// 批量导入请求体：松散的字符串键值行。
#[derive(Debug, Deserialize)]
pub struct ImportRowsRequest {
    pub rows: Vec<HashMap<String, String>>,
}

/// 行级错误返回结构。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RowErrorDto {
    pub row: usize,
    pub field: String,
    pub message: String,
}

/// 校验结果返回结构。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateImportDto {
    pub valid: bool,
    pub row_count: usize,
    pub errors: Vec<RowErrorDto>,
}

/// 模拟导入汇总返回结构。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportOutcomeDto {
    pub total: usize,
    pub successful: usize,
    pub failed: usize,
    pub errors: Vec<RowErrorDto>,
}

// ============================================================================
// 指标
// ============================================================================

/// 指标快照返回结构。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSnapshotDto {
    pub catalog_reads: u64,
    pub catalog_writes: u64,
    pub orders_priced: u64,
    pub timelines_rendered: u64,
    pub import_rows_validated: u64,
    pub import_rows_rejected: u64,
    pub import_rows_committed: u64,
    pub import_rows_failed: u64,
}
