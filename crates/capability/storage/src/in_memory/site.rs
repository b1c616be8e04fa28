//! 站点内存存储实现
//!
//! 功能：
//! - 站点 CRUD 操作
//! - 支持从演示数据批量构建
//! - 操作者上下文验证

use crate::error::StorageError;
use crate::models::{SiteRecord, SiteUpdate};
use crate::traits::SiteStore;
use crate::validation::ensure_operator;
use domain::OperatorContext;
use std::collections::HashMap;
use std::sync::RwLock;

/// 站点内存存储
///
/// 使用 RwLock + HashMap 提供线程安全的内存存储。
pub struct InMemorySiteStore {
    sites: RwLock<HashMap<String, SiteRecord>>,
}

impl InMemorySiteStore {
    /// 创建空存储。
    pub fn new() -> Self {
        Self {
            sites: RwLock::new(HashMap::new()),
        }
    }

    /// 从记录列表构建存储（演示数据注入）。
    pub fn from_records(records: Vec<SiteRecord>) -> Self {
        let mut sites = HashMap::new();
        for record in records {
            sites.insert(record.site_id.clone(), record);
        }
        Self {
            sites: RwLock::new(sites),
        }
    }
}

impl Default for InMemorySiteStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl SiteStore for InMemorySiteStore {
    /// 列出所有站点
    async fn list_sites(&self, ctx: &OperatorContext) -> Result<Vec<SiteRecord>, StorageError> {
        ensure_operator(ctx)?;
        let sites = self
            .sites
            .read()
            .map(|map| map.values().cloned().collect())
            .unwrap_or_default();
        Ok(sites)
    }

    /// 查找指定站点
    async fn find_site(
        &self,
        ctx: &OperatorContext,
        site_id: &str,
    ) -> Result<Option<SiteRecord>, StorageError> {
        ensure_operator(ctx)?;
        let site = self
            .sites
            .read()
            .ok()
            .and_then(|map| map.get(site_id).cloned());
        Ok(site)
    }

    /// 创建新站点
    async fn create_site(
        &self,
        ctx: &OperatorContext,
        record: SiteRecord,
    ) -> Result<SiteRecord, StorageError> {
        ensure_operator(ctx)?;
        let mut map = self
            .sites
            .write()
            .map_err(|_| StorageError::new("lock failed"))?;
        if map.contains_key(&record.site_id) {
            return Err(StorageError::new("site exists"));
        }
        map.insert(record.site_id.clone(), record.clone());
        Ok(record)
    }

    /// 更新站点
    async fn update_site(
        &self,
        ctx: &OperatorContext,
        site_id: &str,
        update: SiteUpdate,
    ) -> Result<Option<SiteRecord>, StorageError> {
        ensure_operator(ctx)?;
        let mut map = self
            .sites
            .write()
            .map_err(|_| StorageError::new("lock failed"))?;
        let site = match map.get_mut(site_id) {
            Some(site) => site,
            None => return Ok(None),
        };
        if let Some(name) = update.name {
            site.name = name;
        }
        if let Some(county) = update.county {
            site.county = county;
        }
        if let Some(address) = update.address {
            site.address = address;
        }
        if let Some(latitude) = update.latitude {
            site.latitude = latitude;
        }
        if let Some(longitude) = update.longitude {
            site.longitude = longitude;
        }
        if let Some(capacity_kw) = update.capacity_kw {
            site.capacity_kw = capacity_kw;
        }
        if let Some(status) = update.status {
            site.status = status;
        }
        if let Some(contact_name) = update.contact_name {
            site.contact_name = Some(contact_name);
        }
        if let Some(contact_phone) = update.contact_phone {
            site.contact_phone = Some(contact_phone);
        }
        if let Some(contact_email) = update.contact_email {
            site.contact_email = Some(contact_email);
        }
        Ok(Some(site.clone()))
    }

    /// 删除站点
    async fn delete_site(
        &self,
        ctx: &OperatorContext,
        site_id: &str,
    ) -> Result<bool, StorageError> {
        ensure_operator(ctx)?;
        let mut map = self
            .sites
            .write()
            .map_err(|_| StorageError::new("lock failed"))?;
        Ok(map.remove(site_id).is_some())
    }
}
