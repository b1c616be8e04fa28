//! 用户内存存储实现
//!
//! 功能：
//! - 内置默认操作者（user-1，管理角色，全量权限）
//! - 用户 CRUD 操作
//! - 按姓名查找（启动时定位演示操作者）

use crate::error::StorageError;
use crate::models::{UserRecord, UserUpdate};
use crate::traits::UserStore;
use crate::validation::ensure_operator;
use domain::{OperatorContext, UserRole, UserStatus, permissions};
use std::collections::HashMap;
use std::sync::RwLock;

/// 用户内存存储
///
/// 使用 RwLock + HashMap 提供线程安全的内存存储。
pub struct InMemoryUserStore {
    users: RwLock<HashMap<String, UserRecord>>,
}

impl InMemoryUserStore {
    /// 创建空存储。
    pub fn new() -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
        }
    }

    /// 内置默认操作者
    ///
    /// 创建包含一名管理角色操作者的存储（演示与测试用）。
    pub fn with_default_operator() -> Self {
        let mut users = HashMap::new();
        users.insert(
            "user-1".to_string(),
            UserRecord {
                user_id: "user-1".to_string(),
                name: "Demo Operator".to_string(),
                email: "operator@ofgen.co.ke".to_string(),
                phone: "+254700000000".to_string(),
                role: UserRole::Management,
                status: UserStatus::Active,
                company: "Ofgen Solar".to_string(),
                permissions: permissions::defaults_for_role(UserRole::Management),
                projects: Vec::new(),
                sites: Vec::new(),
                last_active_ms: 0,
                created_at_ms: 0,
            },
        );
        Self {
            users: RwLock::new(users),
        }
    }

    /// 从记录列表构建存储（演示数据注入）。
    pub fn from_records(records: Vec<UserRecord>) -> Self {
        let mut users = HashMap::new();
        for record in records {
            users.insert(record.user_id.clone(), record);
        }
        Self {
            users: RwLock::new(users),
        }
    }
}

impl Default for InMemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl UserStore for InMemoryUserStore {
    /// 列出所有用户
    async fn list_users(&self, ctx: &OperatorContext) -> Result<Vec<UserRecord>, StorageError> {
        ensure_operator(ctx)?;
        let users = self
            .users
            .read()
            .map(|map| map.values().cloned().collect())
            .unwrap_or_default();
        Ok(users)
    }

    /// 查找指定用户
    async fn find_user(
        &self,
        ctx: &OperatorContext,
        user_id: &str,
    ) -> Result<Option<UserRecord>, StorageError> {
        ensure_operator(ctx)?;
        let user = self
            .users
            .read()
            .ok()
            .and_then(|map| map.get(user_id).cloned());
        Ok(user)
    }

    /// 根据姓名查找用户
    async fn find_by_name(
        &self,
        ctx: &OperatorContext,
        name: &str,
    ) -> Result<Option<UserRecord>, StorageError> {
        ensure_operator(ctx)?;
        let user = self
            .users
            .read()
            .ok()
            .and_then(|map| map.values().find(|user| user.name == name).cloned());
        Ok(user)
    }

    /// 创建新用户
    async fn create_user(
        &self,
        ctx: &OperatorContext,
        record: UserRecord,
    ) -> Result<UserRecord, StorageError> {
        ensure_operator(ctx)?;
        let mut map = self
            .users
            .write()
            .map_err(|_| StorageError::new("lock failed"))?;
        if map.contains_key(&record.user_id) {
            return Err(StorageError::new("user exists"));
        }
        map.insert(record.user_id.clone(), record.clone());
        Ok(record)
    }

    /// 更新用户
    async fn update_user(
        &self,
        ctx: &OperatorContext,
        user_id: &str,
        update: UserUpdate,
    ) -> Result<Option<UserRecord>, StorageError> {
        ensure_operator(ctx)?;
        let mut map = self
            .users
            .write()
            .map_err(|_| StorageError::new("lock failed"))?;
        let user = match map.get_mut(user_id) {
            Some(user) => user,
            None => return Ok(None),
        };
        if let Some(name) = update.name {
            user.name = name;
        }
        if let Some(email) = update.email {
            user.email = email;
        }
        if let Some(phone) = update.phone {
            user.phone = phone;
        }
        if let Some(role) = update.role {
            user.role = role;
        }
        if let Some(status) = update.status {
            user.status = status;
        }
        if let Some(company) = update.company {
            user.company = company;
        }
        if let Some(permissions) = update.permissions {
            user.permissions = permissions;
        }
        if let Some(projects) = update.projects {
            user.projects = projects;
        }
        if let Some(sites) = update.sites {
            user.sites = sites;
        }
        Ok(Some(user.clone()))
    }

    /// 删除用户
    async fn delete_user(
        &self,
        ctx: &OperatorContext,
        user_id: &str,
    ) -> Result<bool, StorageError> {
        ensure_operator(ctx)?;
        let mut map = self
            .users
            .write()
            .map_err(|_| StorageError::new("lock failed"))?;
        Ok(map.remove(user_id).is_some())
    }
}
