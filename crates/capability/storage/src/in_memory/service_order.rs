//! 工单内存存储实现
//!
//! 功能：
//! - 工单 CRUD 操作
//! - 支持从演示数据批量构建
//!
//! 工单记录只保存原始成本字段（用料快照、工时、差旅等），
//! 合计/利润/利润率由 costing 能力在读取时重算。

use crate::error::StorageError;
use crate::models::{ServiceOrderRecord, ServiceOrderUpdate};
use crate::traits::ServiceOrderStore;
use crate::validation::ensure_operator;
use domain::OperatorContext;
use std::collections::HashMap;
use std::sync::RwLock;

/// 工单内存存储
pub struct InMemoryServiceOrderStore {
    orders: RwLock<HashMap<String, ServiceOrderRecord>>,
}

impl InMemoryServiceOrderStore {
    /// 创建空存储。
    pub fn new() -> Self {
        Self {
            orders: RwLock::new(HashMap::new()),
        }
    }

    /// 从记录列表构建存储（演示数据注入）。
    pub fn from_records(records: Vec<ServiceOrderRecord>) -> Self {
        let mut orders = HashMap::new();
        for record in records {
            orders.insert(record.order_id.clone(), record);
        }
        Self {
            orders: RwLock::new(orders),
        }
    }
}

impl Default for InMemoryServiceOrderStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl ServiceOrderStore for InMemoryServiceOrderStore {
    /// 列出所有工单
    async fn list_orders(
        &self,
        ctx: &OperatorContext,
    ) -> Result<Vec<ServiceOrderRecord>, StorageError> {
        ensure_operator(ctx)?;
        let orders = self
            .orders
            .read()
            .map(|map| map.values().cloned().collect())
            .unwrap_or_default();
        Ok(orders)
    }

    /// 查找指定工单
    async fn find_order(
        &self,
        ctx: &OperatorContext,
        order_id: &str,
    ) -> Result<Option<ServiceOrderRecord>, StorageError> {
        ensure_operator(ctx)?;
        let order = self
            .orders
            .read()
            .ok()
            .and_then(|map| map.get(order_id).cloned());
        Ok(order)
    }

    /// 创建新工单
    async fn create_order(
        &self,
        ctx: &OperatorContext,
        record: ServiceOrderRecord,
    ) -> Result<ServiceOrderRecord, StorageError> {
        ensure_operator(ctx)?;
        let mut map = self
            .orders
            .write()
            .map_err(|_| StorageError::new("lock failed"))?;
        if map.contains_key(&record.order_id) {
            return Err(StorageError::new("order exists"));
        }
        map.insert(record.order_id.clone(), record.clone());
        Ok(record)
    }

    /// 更新工单
    async fn update_order(
        &self,
        ctx: &OperatorContext,
        order_id: &str,
        update: ServiceOrderUpdate,
    ) -> Result<Option<ServiceOrderRecord>, StorageError> {
        ensure_operator(ctx)?;
        let mut map = self
            .orders
            .write()
            .map_err(|_| StorageError::new("lock failed"))?;
        let order = match map.get_mut(order_id) {
            Some(order) => order,
            None => return Ok(None),
        };
        if let Some(title) = update.title {
            order.title = title;
        }
        if let Some(status) = update.status {
            order.status = status;
        }
        if let Some(priority) = update.priority {
            order.priority = priority;
        }
        if let Some(scheduled_date) = update.scheduled_date {
            order.scheduled_date = scheduled_date;
        }
        if let Some(completed_date) = update.completed_date {
            order.completed_date = Some(completed_date);
        }
        if let Some(technician_id) = update.technician_id {
            order.technician_id = technician_id;
        }
        if let Some(technician_name) = update.technician_name {
            order.technician_name = technician_name;
        }
        if let Some(description) = update.description {
            order.description = description;
        }
        if let Some(parts_used) = update.parts_used {
            order.parts_used = parts_used;
        }
        if let Some(labor_hours) = update.labor_hours {
            order.labor_hours = labor_hours;
        }
        if let Some(labor_rate) = update.labor_rate {
            order.labor_rate = labor_rate;
        }
        if let Some(travel_cost) = update.travel_cost {
            order.travel_cost = travel_cost;
        }
        if let Some(other_costs) = update.other_costs {
            order.other_costs = other_costs;
        }
        if let Some(invoice_amount) = update.invoice_amount {
            order.invoice_amount = invoice_amount;
        }
        Ok(Some(order.clone()))
    }

    /// 删除工单
    async fn delete_order(
        &self,
        ctx: &OperatorContext,
        order_id: &str,
    ) -> Result<bool, StorageError> {
        ensure_operator(ctx)?;
        let mut map = self
            .orders
            .write()
            .map_err(|_| StorageError::new("lock failed"))?;
        Ok(map.remove(order_id).is_some())
    }
}
