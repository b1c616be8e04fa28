//! Handlers 模块

pub mod imports;
pub mod inventory;
pub mod metrics;
pub mod projects;
pub mod service_orders;
pub mod sites;
pub mod timeline;
pub mod users;

pub use imports::*;
pub use inventory::*;
pub use metrics::*;
pub use projects::*;
pub use service_orders::*;
pub use sites::*;
pub use timeline::*;
pub use users::*;

use axum::{Json, response::IntoResponse};

/// 健康检查
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "ok": true }))
}
