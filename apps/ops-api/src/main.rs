//! 运营后台 HTTP API：目录、成本核算、甘特时间轴与批量导入。

mod handlers;
mod middleware;
mod routes;
mod utils;

use axum::Router;
use axum::middleware::{from_fn, from_fn_with_state};
use domain::{OperatorContext, UserRole, permissions};
use ops_config::AppConfig;
use ops_mockgen::{CatalogSizes, MockGenerator};
use ops_storage::{
    InMemoryInventoryStore, InMemoryProjectStore, InMemoryServiceOrderStore, InMemorySiteStore,
    InMemoryUserStore, InventoryStore, ProjectStore, ServiceOrderStore, SiteStore, UserStore,
};
use ops_telemetry::init_tracing;
use std::sync::Arc;
use std::sync::atomic::AtomicU64;
use tracing::info;

/// 应用状态：各目录存储 + 演示操作者上下文 + 模拟参数。
#[derive(Clone)]
pub struct AppState {
    pub site_store: Arc<dyn SiteStore>,
    pub inventory_store: Arc<dyn InventoryStore>,
    pub order_store: Arc<dyn ServiceOrderStore>,
    pub project_store: Arc<dyn ProjectStore>,
    pub user_store: Arc<dyn UserStore>,
    pub operator: OperatorContext,
    pub mock_seed: u64,
    pub import_failure_rate: f64,
    pub simulated_latency_ms: u64,
    /// 模拟导入运行序号（派生每次运行的随机种子）
    pub import_runs: Arc<AtomicU64>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 加载本地 .env（如存在），便于直接 cargo run 启动
    dotenvy::dotenv().ok();
    // 从环境变量加载运行配置
    let config = AppConfig::from_env()?;
    // 初始化结构化日志
    init_tracing();

    // 种子化生成演示目录并注入内存存储（同一种子生成同一目录）
    let today = chrono::Utc::now().date_naive();
    let mut generator = MockGenerator::new(config.mock_seed, today);
    let catalog = generator.catalog(CatalogSizes {
        sites: config.mock_sites,
        service_orders: config.mock_service_orders,
        users: config.mock_users,
    });
    info!(
        seed = config.mock_seed,
        sites = catalog.sites.len(),
        inventory = catalog.inventory.len(),
        service_orders = catalog.service_orders.len(),
        projects = catalog.projects.len(),
        users = catalog.users.len(),
        "seeded demo catalog"
    );

    // 演示操作者：固定一名管理角色账号（认证流程不在范围内）
    let operator = OperatorContext::new(
        "user-1",
        "Demo Operator",
        UserRole::Management,
        permissions::defaults_for_role(UserRole::Management),
    );

    let state = AppState {
        site_store: Arc::new(InMemorySiteStore::from_records(catalog.sites)),
        inventory_store: Arc::new(InMemoryInventoryStore::from_records(catalog.inventory)),
        order_store: Arc::new(InMemoryServiceOrderStore::from_records(
            catalog.service_orders,
        )),
        project_store: Arc::new(InMemoryProjectStore::from_records(catalog.projects)),
        user_store: Arc::new(InMemoryUserStore::from_records(catalog.users)),
        operator,
        mock_seed: config.mock_seed,
        import_failure_rate: config.import_failure_rate,
        simulated_latency_ms: config.simulated_latency_ms,
        import_runs: Arc::new(AtomicU64::new(0)),
    };

    // 路由支持 / 和 /api/ 两种前缀
    let api = routes::create_api_router();
    let app = Router::new()
        .merge(api.clone())
        .nest("/api", api)
        .with_state(state.clone())
        // 模拟接口延迟（演示加载态用，默认关闭）
        .layer(from_fn_with_state(state, middleware::simulated_latency))
        // 注入 request_id/trace_id
        .layer(from_fn(middleware::request_context));

    let listener = tokio::net::TcpListener::bind(&config.http_addr).await?;
    info!(addr = %config.http_addr, "ops-api listening");
    axum::serve(listener, app).await?;
    Ok(())
}
