//! 存储接口 Trait 定义
//!
//! 定义所有目录存储的异步接口：
//! - UserStore：用户目录
//! - SiteStore：站点目录
//! - InventoryStore：库存目录
//! - ServiceOrderStore：工单目录
//! - ProjectStore：项目目录
//!
//! 设计原则：
//! - 所有接口显式接收 OperatorContext
//! - 所有接口返回 StorageError
//! - 使用 async_trait 支持动态分发
//! - 列表接口返回全量快照，筛选/分页由展示层完成

use crate::error::StorageError;
use crate::models::{
    InventoryItemRecord, InventoryItemUpdate, ProjectRecord, ProjectUpdate, ServiceOrderRecord,
    ServiceOrderUpdate, SiteRecord, SiteUpdate, UserRecord, UserUpdate,
};
use async_trait::async_trait;
use domain::OperatorContext;

/// 用户目录接口
///
/// 提供用户 CRUD 与按用户名查找（启动时定位演示操作者用）。
#[async_trait]
pub trait UserStore: Send + Sync {
    /// 列出所有用户
    async fn list_users(&self, ctx: &OperatorContext) -> Result<Vec<UserRecord>, StorageError>;

    /// 查找指定用户
    async fn find_user(
        &self,
        ctx: &OperatorContext,
        user_id: &str,
    ) -> Result<Option<UserRecord>, StorageError>;

    /// 根据姓名查找用户
    async fn find_by_name(
        &self,
        ctx: &OperatorContext,
        name: &str,
    ) -> Result<Option<UserRecord>, StorageError>;

    /// 创建新用户
    async fn create_user(
        &self,
        ctx: &OperatorContext,
        record: UserRecord,
    ) -> Result<UserRecord, StorageError>;

    /// 更新用户
    async fn update_user(
        &self,
        ctx: &OperatorContext,
        user_id: &str,
        update: UserUpdate,
    ) -> Result<Option<UserRecord>, StorageError>;

    /// 删除用户
    async fn delete_user(
        &self,
        ctx: &OperatorContext,
        user_id: &str,
    ) -> Result<bool, StorageError>;
}

/// 站点目录接口
///
/// 提供站点 CRUD 操作。
#[async_trait]
pub trait SiteStore: Send + Sync {
    /// 列出所有站点
    async fn list_sites(&self, ctx: &OperatorContext) -> Result<Vec<SiteRecord>, StorageError>;

    /// 查找指定站点
    async fn find_site(
        &self,
        ctx: &OperatorContext,
        site_id: &str,
    ) -> Result<Option<SiteRecord>, StorageError>;

    /// 创建新站点
    async fn create_site(
        &self,
        ctx: &OperatorContext,
        record: SiteRecord,
    ) -> Result<SiteRecord, StorageError>;

    /// 更新站点
    async fn update_site(
        &self,
        ctx: &OperatorContext,
        site_id: &str,
        update: SiteUpdate,
    ) -> Result<Option<SiteRecord>, StorageError>;

    /// 删除站点
    async fn delete_site(
        &self,
        ctx: &OperatorContext,
        site_id: &str,
    ) -> Result<bool, StorageError>;
}

/// 库存目录接口
///
/// 提供库存条目 CRUD 操作。
#[async_trait]
pub trait InventoryStore: Send + Sync {
    /// 列出所有库存条目
    async fn list_items(
        &self,
        ctx: &OperatorContext,
    ) -> Result<Vec<InventoryItemRecord>, StorageError>;

    /// 查找指定库存条目
    async fn find_item(
        &self,
        ctx: &OperatorContext,
        item_id: &str,
    ) -> Result<Option<InventoryItemRecord>, StorageError>;

    /// 创建新库存条目
    async fn create_item(
        &self,
        ctx: &OperatorContext,
        record: InventoryItemRecord,
    ) -> Result<InventoryItemRecord, StorageError>;

    /// 更新库存条目
    async fn update_item(
        &self,
        ctx: &OperatorContext,
        item_id: &str,
        update: InventoryItemUpdate,
    ) -> Result<Option<InventoryItemRecord>, StorageError>;

    /// 删除库存条目
    async fn delete_item(
        &self,
        ctx: &OperatorContext,
        item_id: &str,
    ) -> Result<bool, StorageError>;
}

/// 工单目录接口
///
/// 提供工单 CRUD 操作。
#[async_trait]
pub trait ServiceOrderStore: Send + Sync {
    /// 列出所有工单
    async fn list_orders(
        &self,
        ctx: &OperatorContext,
    ) -> Result<Vec<ServiceOrderRecord>, StorageError>;

    /// 查找指定工单
    async fn find_order(
        &self,
        ctx: &OperatorContext,
        order_id: &str,
    ) -> Result<Option<ServiceOrderRecord>, StorageError>;

    /// 创建新工单
    async fn create_order(
        &self,
        ctx: &OperatorContext,
        record: ServiceOrderRecord,
    ) -> Result<ServiceOrderRecord, StorageError>;

    /// 更新工单
    async fn update_order(
        &self,
        ctx: &OperatorContext,
        order_id: &str,
        update: ServiceOrderUpdate,
    ) -> Result<Option<ServiceOrderRecord>, StorageError>;

    /// 删除工单
    async fn delete_order(
        &self,
        ctx: &OperatorContext,
        order_id: &str,
    ) -> Result<bool, StorageError>;
}

/// 项目目录接口
///
/// 提供项目 CRUD 操作（含甘特任务与里程碑的整体读写）。
#[async_trait]
pub trait ProjectStore: Send + Sync {
    /// 列出所有项目
    async fn list_projects(
        &self,
        ctx: &OperatorContext,
    ) -> Result<Vec<ProjectRecord>, StorageError>;

    /// 查找指定项目
    async fn find_project(
        &self,
        ctx: &OperatorContext,
        project_id: &str,
    ) -> Result<Option<ProjectRecord>, StorageError>;

    /// 创建新项目
    async fn create_project(
        &self,
        ctx: &OperatorContext,
        record: ProjectRecord,
    ) -> Result<ProjectRecord, StorageError>;

    /// 更新项目
    async fn update_project(
        &self,
        ctx: &OperatorContext,
        project_id: &str,
        update: ProjectUpdate,
    ) -> Result<Option<ProjectRecord>, StorageError>;

    /// 删除项目
    async fn delete_project(
        &self,
        ctx: &OperatorContext,
        project_id: &str,
    ) -> Result<bool, StorageError>;
}
