//! 项目内存存储实现
//!
//! 功能：
//! - 项目 CRUD 操作（含甘特任务与里程碑的整体读写）
//! - 支持从演示数据批量构建

use crate::error::StorageError;
use crate::models::{ProjectRecord, ProjectUpdate};
use crate::traits::ProjectStore;
use crate::validation::ensure_operator;
use domain::OperatorContext;
use std::collections::HashMap;
use std::sync::RwLock;

/// 项目内存存储
///
/// 使用 RwLock + HashMap 提供线程安全的内存存储。
pub struct InMemoryProjectStore {
    projects: RwLock<HashMap<String, ProjectRecord>>,
}

impl InMemoryProjectStore {
    /// 创建空存储。
    pub fn new() -> Self {
        Self {
            projects: RwLock::new(HashMap::new()),
        }
    }

    /// 从记录列表构建存储（演示数据注入）。
    pub fn from_records(records: Vec<ProjectRecord>) -> Self {
        let mut projects = HashMap::new();
        for record in records {
            projects.insert(record.project_id.clone(), record);
        }
        Self {
            projects: RwLock::new(projects),
        }
    }
}

impl Default for InMemoryProjectStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl ProjectStore for InMemoryProjectStore {
    /// 列出所有项目
    async fn list_projects(
        &self,
        ctx: &OperatorContext,
    ) -> Result<Vec<ProjectRecord>, StorageError> {
        ensure_operator(ctx)?;
        let projects = self
            .projects
            .read()
            .map(|map| map.values().cloned().collect())
            .unwrap_or_default();
        Ok(projects)
    }

    /// 查找指定项目
    async fn find_project(
        &self,
        ctx: &OperatorContext,
        project_id: &str,
    ) -> Result<Option<ProjectRecord>, StorageError> {
        ensure_operator(ctx)?;
        let project = self
            .projects
            .read()
            .ok()
            .and_then(|map| map.get(project_id).cloned());
        Ok(project)
    }

    /// 创建新项目
    async fn create_project(
        &self,
        ctx: &OperatorContext,
        record: ProjectRecord,
    ) -> Result<ProjectRecord, StorageError> {
        ensure_operator(ctx)?;
        let mut map = self
            .projects
            .write()
            .map_err(|_| StorageError::new("lock failed"))?;
        if map.contains_key(&record.project_id) {
            return Err(StorageError::new("project exists"));
        }
        map.insert(record.project_id.clone(), record.clone());
        Ok(record)
    }

    /// 更新项目
    async fn update_project(
        &self,
        ctx: &OperatorContext,
        project_id: &str,
        update: ProjectUpdate,
    ) -> Result<Option<ProjectRecord>, StorageError> {
        ensure_operator(ctx)?;
        let mut map = self
            .projects
            .write()
            .map_err(|_| StorageError::new("lock failed"))?;
        let project = match map.get_mut(project_id) {
            Some(project) => project,
            None => return Ok(None),
        };
        if let Some(name) = update.name {
            project.name = name;
        }
        if let Some(status) = update.status {
            project.status = status;
        }
        if let Some(progress) = update.progress {
            project.progress = progress.min(100);
        }
        if let Some(target_completion_date) = update.target_completion_date {
            project.target_completion_date = target_completion_date;
        }
        if let Some(actual_completion_date) = update.actual_completion_date {
            project.actual_completion_date = Some(actual_completion_date);
        }
        Ok(Some(project.clone()))
    }

    /// 删除项目
    async fn delete_project(
        &self,
        ctx: &OperatorContext,
        project_id: &str,
    ) -> Result<bool, StorageError> {
        ensure_operator(ctx)?;
        let mut map = self
            .projects
            .write()
            .map_err(|_| StorageError::new("lock failed"))?;
        Ok(map.remove(project_id).is_some())
    }
}
