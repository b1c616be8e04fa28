//! 请求上下文与权限中间件
//!
//! 提供以下中间件和辅助函数：
//! - request_context：请求上下文中间件，注入 request_id/trace_id
//! - simulated_latency：模拟接口延迟（配置驱动，默认关闭）
//! - require_permission：校验操作者权限码
//!
//! 进程以固定的演示操作者身份运行（无认证流程），
//! 权限校验仍逐接口执行，保持与真实部署相同的检查路径。

use axum::{
    body::Body,
    extract::{Request, State},
    http::HeaderValue,
    middleware::Next,
    response::Response,
};
use domain::OperatorContext;
use ops_telemetry::new_request_ids;
use std::time::Duration;
use tracing::{Instrument, info_span};

use crate::AppState;
use crate::utils::response::forbidden_error;

/// 请求上下文中间件：注入 request_id/trace_id
pub async fn request_context(mut req: Request<Body>, next: Next) -> Response {
    let ids = new_request_ids();
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    req.extensions_mut().insert(ids.clone());

    let span = info_span!(
        "request",
        request_id = %ids.request_id,
        trace_id = %ids.trace_id,
        method = %method,
        path = %path
    );

    let mut response: axum::response::Response = next.run(req).instrument(span).await;
    response.headers_mut().insert(
        "x-request-id",
        HeaderValue::from_str(&ids.request_id).unwrap_or_else(|_| HeaderValue::from_static("")),
    );
    response.headers_mut().insert(
        "x-trace-id",
        HeaderValue::from_str(&ids.trace_id).unwrap_or_else(|_| HeaderValue::from_static("")),
    );
    response
}

/// 模拟接口延迟中间件
///
/// 在异步边界上注入固定延迟，模拟真实后端的响应时间（演示加载态用），
/// 配置为 0 时不生效。
pub async fn simulated_latency(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Response {
    if state.simulated_latency_ms > 0 {
        tokio::time::sleep(Duration::from_millis(state.simulated_latency_ms)).await;
    }
    next.run(req).await
}

/// 校验操作者权限码
pub fn require_permission(ctx: &OperatorContext, code: &str) -> Result<(), Response> {
    if ctx.has_permission(code) {
        Ok(())
    } else {
        Err(forbidden_error())
    }
}
