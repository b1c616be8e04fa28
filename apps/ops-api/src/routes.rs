//! 路由定义
//!
//! 集中管理所有 API 路由，将路径映射到对应的 handlers。
//! 路由包括：
//! - 健康检查：/health
//! - 站点管理：/sites/*（含批量导入 /sites/import/*）
//! - 库存管理：/inventory/*
//! - 工单管理：/service-orders/*（含盈利分析）
//! - 项目管理：/projects/*（含甘特时间轴 /projects/timeline）
//! - 用户管理：/users/*
//! - 指标快照：/metrics

use super::AppState;
use super::handlers::*;
use axum::{
    Router,
    routing::{get, post},
};

/// 创建 API 路由
///
/// 返回包含所有 API 端点的 Router，main 中以 / 和 /api/ 两种前缀挂载
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/sites", get(list_sites).post(create_site))
        .route("/sites/import/template", get(download_import_template))
        .route("/sites/import/validate", post(validate_import))
        .route("/sites/import", post(run_import))
        .route(
            "/sites/:site_id",
            get(get_site).put(update_site).delete(delete_site),
        )
        .route("/inventory", get(list_inventory).post(create_inventory_item))
        .route(
            "/inventory/:item_id",
            get(get_inventory_item)
                .put(update_inventory_item)
                .delete(delete_inventory_item),
        )
        .route(
            "/service-orders",
            get(list_service_orders).post(create_service_order),
        )
        .route(
            "/service-orders/:order_id",
            get(get_service_order)
                .put(update_service_order)
                .delete(delete_service_order),
        )
        .route(
            "/service-orders/:order_id/profitability",
            get(get_order_profitability),
        )
        .route("/projects", get(list_projects))
        .route("/projects/timeline", get(get_timeline))
        .route("/projects/:project_id", get(get_project))
        .route("/users", get(list_users).post(create_user))
        .route(
            "/users/:user_id",
            get(get_user).put(update_user).delete(delete_user),
        )
        .route("/metrics", get(get_metrics))
}
