//! 数据模型
//!
//! 定义所有存储相关的数据模型和更新结构：
//! - 用户模型：UserRecord, UserUpdate
//! - 站点模型：SiteRecord, SiteUpdate
//! - 库存模型：InventoryItemRecord, InventoryItemUpdate
//! - 工单模型：ServiceOrderRecord, ServiceOrderUpdate（含 PartUsage 用料快照）
//! - 项目模型：ProjectRecord, ProjectUpdate（含 TaskRecord、里程碑）
//!
//! 工单的成本合计、利润与利润率是派生值，不在此落存储，
//! 读取时由 costing 能力按当前字段重算。

use chrono::NaiveDate;
use domain::{
    MilestoneStatus, OperatorContext, ProjectStatus, ServiceOrderPriority, ServiceOrderStatus,
    ServiceType, SiteStatus, StockStatus, TaskStatus, UserRole, UserStatus,
};

/// 用户记录。
#[derive(Debug, Clone)]
pub struct UserRecord {
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: UserRole,
    pub status: UserStatus,
    pub company: String,
    pub permissions: Vec<String>,
    /// 关联项目名称列表
    pub projects: Vec<String>,
    /// 关联站点名称列表
    pub sites: Vec<String>,
    pub last_active_ms: i64,
    pub created_at_ms: i64,
}

impl UserRecord {
    /// 将用户记录转换为 OperatorContext。
    pub fn to_operator_context(&self) -> OperatorContext {
        OperatorContext::new(
            self.user_id.clone(),
            self.name.clone(),
            self.role,
            self.permissions.clone(),
        )
    }
}

/// 用户更新输入。
#[derive(Debug, Clone, Default)]
pub struct UserUpdate {
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

/// 站点记录。
#[derive(Debug, Clone)]
pub struct SiteRecord {
    pub site_id: String,
    pub name: String,
    pub county: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    /// 装机容量（kW）
    pub capacity_kw: f64,
    pub status: SiteStatus,
    pub contact_name: Option<String>,
    pub contact_phone: Option<String>,
    pub contact_email: Option<String>,
    pub created_at_ms: i64,
}

/// 站点更新输入。
#[derive(Debug, Clone, Default)]
pub struct SiteUpdate {
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

/// 库存条目记录。
///
/// selling_price 为对外售价，buying_price 为进货价。
#[derive(Debug, Clone)]
pub struct InventoryItemRecord {
    pub item_id: String,
    pub name: String,
    pub category: String,
    pub selling_price: f64,
    pub buying_price: f64,
    pub quantity: i64,
    /// 补货阈值
    pub min_quantity: i64,
    pub location: String,
    pub supplier: String,
    pub last_restocked: NaiveDate,
}

impl InventoryItemRecord {
    /// 库存水位状态（quantity <= min_quantity 即 Low，相等算 Low）。
    pub fn stock_status(&self) -> StockStatus {
        if self.quantity <= self.min_quantity {
            StockStatus::Low
        } else {
            StockStatus::InStock
        }
    }
}

/// 库存条目更新输入。
#[derive(Debug, Clone, Default)]
pub struct InventoryItemUpdate {
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

/// 工单用料快照。
///
/// 记录用料时刻的单价与进货价，不回指库存的实时价格。
#[derive(Debug, Clone)]
pub struct PartUsage {
    pub item_id: String,
    pub name: String,
    pub quantity: i64,
    /// 售价快照
    pub unit_price: f64,
    /// 进货价快照
    pub buying_price: f64,
}

/// 工单记录。
#[derive(Debug, Clone)]
pub struct ServiceOrderRecord {
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
    pub parts_used: Vec<PartUsage>,
    pub labor_hours: f64,
    pub labor_rate: f64,
    pub travel_cost: f64,
    pub other_costs: f64,
    pub invoice_amount: f64,
}

/// 工单更新输入。
#[derive(Debug, Clone, Default)]
pub struct ServiceOrderUpdate {
    pub title: Option<String>,
    pub status: Option<ServiceOrderStatus>,
    pub priority: Option<ServiceOrderPriority>,
    pub scheduled_date: Option<NaiveDate>,
    pub completed_date: Option<NaiveDate>,
    pub technician_id: Option<String>,
    pub technician_name: Option<String>,
    pub description: Option<String>,
    pub parts_used: Option<Vec<PartUsage>>,
    pub labor_hours: Option<f64>,
    pub labor_rate: Option<f64>,
    pub travel_cost: Option<f64>,
    pub other_costs: Option<f64>,
    pub invoice_amount: Option<f64>,
}

/// 甘特任务节点标记。
///
/// completed 为生成时刻的展示性标记（date < 当日），不具权威性。
#[derive(Debug, Clone)]
pub struct TaskMilestone {
    pub milestone_id: String,
    pub name: String,
    pub date: NaiveDate,
    pub completed: bool,
}

/// 甘特任务记录（end_date >= start_date）。
#[derive(Debug, Clone)]
pub struct TaskRecord {
    pub task_id: String,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// 进度百分比 [0, 100]
    pub progress: u8,
    pub status: TaskStatus,
    pub assignee: Option<String>,
    pub milestones: Vec<TaskMilestone>,
}

/// 项目级里程碑记录。
#[derive(Debug, Clone)]
pub struct MilestoneRecord {
    pub milestone_id: String,
    pub title: String,
    pub description: String,
    pub due_date: NaiveDate,
    pub completed_date: Option<NaiveDate>,
    pub status: MilestoneStatus,
}

/// 项目记录。
#[derive(Debug, Clone)]
pub struct ProjectRecord {
    pub project_id: String,
    pub name: String,
    pub county: String,
    pub location: String,
    pub capacity_kw: f64,
    pub status: ProjectStatus,
    pub start_date: NaiveDate,
    pub target_completion_date: NaiveDate,
    pub actual_completion_date: Option<NaiveDate>,
    /// 进度百分比 [0, 100]
    pub progress: u8,
    pub milestones: Vec<MilestoneRecord>,
    pub tasks: Vec<TaskRecord>,
}

/// 项目更新输入。
#[derive(Debug, Clone, Default)]
pub struct ProjectUpdate {
    pub name: Option<String>,
    pub status: Option<ProjectStatus>,
    pub progress: Option<u8>,
    pub target_completion_date: Option<NaiveDate>,
    pub actual_completion_date: Option<NaiveDate>,
}
