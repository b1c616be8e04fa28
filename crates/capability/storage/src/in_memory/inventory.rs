//! 库存内存存储实现
//!
//! 功能：
//! - 库存条目 CRUD 操作
//! - 支持从演示数据批量构建
//!
//! 库存水位状态与毛利率不落存储，由展示层按当前字段派生。

use crate::error::StorageError;
use crate::models::{InventoryItemRecord, InventoryItemUpdate};
use crate::traits::InventoryStore;
use crate::validation::ensure_operator;
use domain::OperatorContext;
use std::collections::HashMap;
use std::sync::RwLock;

/// 库存内存存储
pub struct InMemoryInventoryStore {
    items: RwLock<HashMap<String, InventoryItemRecord>>,
}

impl InMemoryInventoryStore {
    /// 创建空存储。
    pub fn new() -> Self {
        Self {
            items: RwLock::new(HashMap::new()),
        }
    }

    /// 从记录列表构建存储（演示数据注入）。
    pub fn from_records(records: Vec<InventoryItemRecord>) -> Self {
        let mut items = HashMap::new();
        for record in records {
            items.insert(record.item_id.clone(), record);
        }
        Self {
            items: RwLock::new(items),
        }
    }
}

impl Default for InMemoryInventoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl InventoryStore for InMemoryInventoryStore {
    /// 列出所有库存条目
    async fn list_items(
        &self,
        ctx: &OperatorContext,
    ) -> Result<Vec<InventoryItemRecord>, StorageError> {
        ensure_operator(ctx)?;
        let items = self
            .items
            .read()
            .map(|map| map.values().cloned().collect())
            .unwrap_or_default();
        Ok(items)
    }

    /// 查找指定库存条目
    async fn find_item(
        &self,
        ctx: &OperatorContext,
        item_id: &str,
    ) -> Result<Option<InventoryItemRecord>, StorageError> {
        ensure_operator(ctx)?;
        let item = self
            .items
            .read()
            .ok()
            .and_then(|map| map.get(item_id).cloned());
        Ok(item)
    }

    /// 创建新库存条目
    async fn create_item(
        &self,
        ctx: &OperatorContext,
        record: InventoryItemRecord,
    ) -> Result<InventoryItemRecord, StorageError> {
        ensure_operator(ctx)?;
        let mut map = self
            .items
            .write()
            .map_err(|_| StorageError::new("lock failed"))?;
        if map.contains_key(&record.item_id) {
            return Err(StorageError::new("item exists"));
        }
        map.insert(record.item_id.clone(), record.clone());
        Ok(record)
    }

    /// 更新库存条目
    async fn update_item(
        &self,
        ctx: &OperatorContext,
        item_id: &str,
        update: InventoryItemUpdate,
    ) -> Result<Option<InventoryItemRecord>, StorageError> {
        ensure_operator(ctx)?;
        let mut map = self
            .items
            .write()
            .map_err(|_| StorageError::new("lock failed"))?;
        let item = match map.get_mut(item_id) {
            Some(item) => item,
            None => return Ok(None),
        };
        if let Some(name) = update.name {
            item.name = name;
        }
        if let Some(category) = update.category {
            item.category = category;
        }
        if let Some(selling_price) = update.selling_price {
            item.selling_price = selling_price;
        }
        if let Some(buying_price) = update.buying_price {
            item.buying_price = buying_price;
        }
        if let Some(quantity) = update.quantity {
            item.quantity = quantity;
        }
        if let Some(min_quantity) = update.min_quantity {
            item.min_quantity = min_quantity;
        }
        if let Some(location) = update.location {
            item.location = location;
        }
        if let Some(supplier) = update.supplier {
            item.supplier = supplier;
        }
        if let Some(last_restocked) = update.last_restocked {
            item.last_restocked = last_restocked;
        }
        Ok(Some(item.clone()))
    }

    /// 删除库存条目
    async fn delete_item(
        &self,
        ctx: &OperatorContext,
        item_id: &str,
    ) -> Result<bool, StorageError> {
        ensure_operator(ctx)?;
        let mut map = self
            .items
            .write()
            .map_err(|_| StorageError::new("lock failed"))?;
        Ok(map.remove(item_id).is_some())
    }
}
