//! 角色与状态枚举
//!
//! 各目录实体共享的枚举类型。序列化形式即展示文案
//! （带空格的状态使用 serde rename）。

use serde::{Deserialize, Serialize};

/// 用户角色。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Contractor,
    Engineer,
    Management,
    Client,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Contractor => "contractor",
            UserRole::Engineer => "engineer",
            UserRole::Management => "management",
            UserRole::Client => "client",
        }
    }
}

/// 用户账号状态。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Inactive,
    Pending,
}

impl UserStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Active => "active",
            UserStatus::Inactive => "inactive",
            UserStatus::Pending => "pending",
        }
    }
}

/// 站点状态。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SiteStatus {
    Active,
    Inactive,
    Pending,
}

impl SiteStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SiteStatus::Active => "active",
            SiteStatus::Inactive => "inactive",
            SiteStatus::Pending => "pending",
        }
    }
}

/// 工单类型。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServiceType {
    Installation,
    Maintenance,
    Repair,
    Inspection,
}

impl ServiceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceType::Installation => "Installation",
            ServiceType::Maintenance => "Maintenance",
            ServiceType::Repair => "Repair",
            ServiceType::Inspection => "Inspection",
        }
    }
}

/// 工单状态。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServiceOrderStatus {
    Scheduled,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
    Cancelled,
    #[serde(rename = "On Hold")]
    OnHold,
}

impl ServiceOrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceOrderStatus::Scheduled => "Scheduled",
            ServiceOrderStatus::InProgress => "In Progress",
            ServiceOrderStatus::Completed => "Completed",
            ServiceOrderStatus::Cancelled => "Cancelled",
            ServiceOrderStatus::OnHold => "On Hold",
        }
    }
}

/// 工单优先级。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServiceOrderPriority {
    Low,
    Medium,
    High,
    Critical,
}

impl ServiceOrderPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceOrderPriority::Low => "Low",
            ServiceOrderPriority::Medium => "Medium",
            ServiceOrderPriority::High => "High",
            ServiceOrderPriority::Critical => "Critical",
        }
    }
}

/// 项目状态。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectStatus {
    Planned,
    #[serde(rename = "In Progress")]
    InProgress,
    #[serde(rename = "On Hold")]
    OnHold,
    Completed,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Planned => "Planned",
            ProjectStatus::InProgress => "In Progress",
            ProjectStatus::OnHold => "On Hold",
            ProjectStatus::Completed => "Completed",
        }
    }
}

/// 甘特任务状态。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskStatus {
    Completed,
    #[serde(rename = "In Progress")]
    InProgress,
    Planned,
    #[serde(rename = "On Hold")]
    OnHold,
    Delayed,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Completed => "Completed",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Planned => "Planned",
            TaskStatus::OnHold => "On Hold",
            TaskStatus::Delayed => "Delayed",
        }
    }
}

/// 项目里程碑状态。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MilestoneStatus {
    Pending,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
    Delayed,
}

impl MilestoneStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MilestoneStatus::Pending => "Pending",
            MilestoneStatus::InProgress => "In Progress",
            MilestoneStatus::Completed => "Completed",
            MilestoneStatus::Delayed => "Delayed",
        }
    }
}

/// 库存水位状态（派生值，不落存储）。
///
/// quantity <= min_quantity 即为 Low（边界相等算 Low）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StockStatus {
    #[serde(rename = "Low Stock")]
    Low,
    #[serde(rename = "In Stock")]
    InStock,
}

impl StockStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StockStatus::Low => "Low Stock",
            StockStatus::InStock => "In Stock",
        }
    }
}
