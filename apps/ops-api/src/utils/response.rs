//! HTTP 响应辅助函数和 DTO 转换
//!
//! 提供统一的错误响应构造函数和 DTO 转换函数：
//! - 错误响应：forbidden_error, bad_request_error, not_found_error, storage_error
//! - DTO 转换：site_to_dto, inventory_item_to_dto, order_to_dto,
//!   project_to_dto, user_to_dto, row_error_to_dto
//!
//! 设计原则：
//! - 所有错误返回统一的 ApiResponse 格式
//! - HTTP 状态码与错误码对应
//! - 派生值（成本合计、利润率、库存水位、毛利率）在转换时重算

use api_contract::{
    ApiResponse, InventoryItemDto, MilestoneDto, PartUsageDto, ProjectDto, RowErrorDto,
    ServiceOrderDto, SiteDto, TaskDto, TaskMilestoneDto, UserDto,
};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use ops_import::RowError;
use ops_storage::{
    InventoryItemRecord, MilestoneRecord, PartUsage, ProjectRecord, ServiceOrderRecord,
    SiteRecord, StorageError, TaskMilestone, TaskRecord, UserRecord,
};

/// 禁止访问错误响应
pub fn forbidden_error() -> Response {
    (
        StatusCode::FORBIDDEN,
        Json(ApiResponse::<()>::error("AUTH.FORBIDDEN", "forbidden")),
    )
        .into_response()
}

/// 错误请求响应
pub fn bad_request_error(message: impl Into<String>) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ApiResponse::<()>::error("INVALID.REQUEST", message.into())),
    )
        .into_response()
}

/// 资源未找到错误响应
pub fn not_found_error() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ApiResponse::<()>::error("RESOURCE.NOT_FOUND", "not found")),
    )
        .into_response()
}

/// 存储错误响应
pub fn storage_error(err: StorageError) -> Response {
    let message = err.to_string();
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiResponse::<()>::error("INTERNAL.ERROR", message)),
    )
        .into_response()
}

/// SiteRecord 转 SiteDto
pub fn site_to_dto(record: SiteRecord) -> SiteDto {
    SiteDto {
        site_id: record.site_id,
        name: record.name,
        county: record.county,
        address: record.address,
        latitude: record.latitude,
        longitude: record.longitude,
        capacity_kw: record.capacity_kw,
        status: record.status,
        contact_name: record.contact_name,
        contact_phone: record.contact_phone,
        contact_email: record.contact_email,
        created_at_ms: record.created_at_ms,
    }
}

/// InventoryItemRecord 转 InventoryItemDto（重算水位状态与毛利率）
pub fn inventory_item_to_dto(record: InventoryItemRecord) -> InventoryItemDto {
    let stock_status = record.stock_status();
    let margin_percent =
        ops_costing::margin_percent(record.selling_price, record.buying_price);
    InventoryItemDto {
        item_id: record.item_id,
        name: record.name,
        category: record.category,
        selling_price: record.selling_price,
        buying_price: record.buying_price,
        quantity: record.quantity,
        min_quantity: record.min_quantity,
        location: record.location,
        supplier: record.supplier,
        last_restocked: record.last_restocked,
        stock_status,
        margin_percent,
    }
}

/// PartUsage 转 PartUsageDto
pub fn part_usage_to_dto(record: PartUsage) -> PartUsageDto {
    PartUsageDto {
        item_id: record.item_id,
        name: record.name,
        quantity: record.quantity,
        unit_price: record.unit_price,
        buying_price: record.buying_price,
    }
}

/// ServiceOrderRecord 转 ServiceOrderDto（重算成本合计/利润/利润率）
pub fn order_to_dto(record: ServiceOrderRecord) -> ServiceOrderDto {
    let summary = ops_costing::order_costs(&record).summarize();
    ServiceOrderDto {
        order_id: record.order_id,
        title: record.title,
        site_id: record.site_id,
        site_name: record.site_name,
        county: record.county,
        service_type: record.service_type,
        status: record.status,
        priority: record.priority,
        scheduled_date: record.scheduled_date,
        completed_date: record.completed_date,
        technician_id: record.technician_id,
        technician_name: record.technician_name,
        description: record.description,
        parts_used: record.parts_used.into_iter().map(part_usage_to_dto).collect(),
        labor_hours: record.labor_hours,
        labor_rate: record.labor_rate,
        travel_cost: record.travel_cost,
        other_costs: record.other_costs,
        invoice_amount: summary.invoice_amount,
        total_cost: summary.total_cost,
        profit: summary.profit,
        profit_margin: summary.margin,
    }
}

/// TaskMilestone 转 TaskMilestoneDto
pub fn task_milestone_to_dto(record: TaskMilestone) -> TaskMilestoneDto {
    TaskMilestoneDto {
        milestone_id: record.milestone_id,
        name: record.name,
        date: record.date,
        completed: record.completed,
    }
}

/// TaskRecord 转 TaskDto
pub fn task_to_dto(record: TaskRecord) -> TaskDto {
    TaskDto {
        task_id: record.task_id,
        name: record.name,
        start_date: record.start_date,
        end_date: record.end_date,
        progress: record.progress,
        status: record.status,
        assignee: record.assignee,
        milestones: record
            .milestones
            .into_iter()
            .map(task_milestone_to_dto)
            .collect(),
    }
}

/// MilestoneRecord 转 MilestoneDto
pub fn milestone_to_dto(record: MilestoneRecord) -> MilestoneDto {
    MilestoneDto {
        milestone_id: record.milestone_id,
        title: record.title,
        description: record.description,
        due_date: record.due_date,
        completed_date: record.completed_date,
        status: record.status,
    }
}

/// ProjectRecord 转 ProjectDto
pub fn project_to_dto(record: ProjectRecord) -> ProjectDto {
    ProjectDto {
        project_id: record.project_id,
        name: record.name,
        county: record.county,
        location: record.location,
        capacity_kw: record.capacity_kw,
        status: record.status,
        start_date: record.start_date,
        target_completion_date: record.target_completion_date,
        actual_completion_date: record.actual_completion_date,
        progress: record.progress,
        milestones: record.milestones.into_iter().map(milestone_to_dto).collect(),
        tasks: record.tasks.into_iter().map(task_to_dto).collect(),
    }
}

/// UserRecord 转 UserDto
pub fn user_to_dto(record: UserRecord) -> UserDto {
    UserDto {
        user_id: record.user_id,
        name: record.name,
        email: record.email,
        phone: record.phone,
        role: record.role,
        status: record.status,
        company: record.company,
        permissions: record.permissions,
        projects: record.projects,
        sites: record.sites,
        last_active_ms: record.last_active_ms,
        created_at_ms: record.created_at_ms,
    }
}

/// RowError 转 RowErrorDto
pub fn row_error_to_dto(error: RowError) -> RowErrorDto {
    RowErrorDto {
        row: error.row,
        field: error.field,
        message: error.message,
    }
}
