//! 应用运行配置加载。

use std::env;

/// 配置加载错误。
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {0}: {1}")]
    Invalid(String, String),
}

/// 应用运行配置。
///
/// 全部配置项都有默认值：演示进程无需任何外部依赖即可启动。
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub http_addr: String,
    /// 演示数据种子（同一种子生成同一目录）
    pub mock_seed: u64,
    pub mock_sites: usize,
    pub mock_service_orders: usize,
    pub mock_users: usize,
    /// 模拟导入的行级失败概率 [0, 1]
    pub import_failure_rate: f64,
    /// 模拟接口延迟（毫秒，0 表示关闭）
    pub simulated_latency_ms: u64,
}

impl AppConfig {
    /// 从环境变量读取配置。
    pub fn from_env() -> Result<Self, ConfigError> {
        let http_addr = env::var("OPS_HTTP_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());
        let mock_seed = read_u64_with_default("OPS_MOCK_SEED", 42)?;
        let mock_sites = read_usize_with_default("OPS_MOCK_SITES", 15)?;
        let mock_service_orders = read_usize_with_default("OPS_MOCK_SERVICE_ORDERS", 12)?;
        let mock_users = read_usize_with_default("OPS_MOCK_USERS", 12)?;
        let import_failure_rate = read_f64_with_default("OPS_IMPORT_FAILURE_RATE", 0.10)?;
        let simulated_latency_ms = read_u64_with_default("OPS_SIMULATED_LATENCY_MS", 0)?;

        if !(0.0..=1.0).contains(&import_failure_rate) {
            return Err(ConfigError::Invalid(
                "OPS_IMPORT_FAILURE_RATE".to_string(),
                import_failure_rate.to_string(),
            ));
        }

        Ok(Self {
            http_addr,
            mock_seed,
            mock_sites,
            mock_service_orders,
            mock_users,
            import_failure_rate,
            simulated_latency_ms,
        })
    }
}

fn read_u64_with_default(key: &str, default: u64) -> Result<u64, ConfigError> {
    let value = match env::var(key) {
        Ok(value) => value,
        Err(_) => return Ok(default),
    };
    value
        .parse::<u64>()
        .map_err(|_| ConfigError::Invalid(key.to_string(), value))
}

fn read_usize_with_default(key: &str, default: usize) -> Result<usize, ConfigError> {
    let value = match env::var(key) {
        Ok(value) => value,
        Err(_) => return Ok(default),
    };
    value
        .parse::<usize>()
        .map_err(|_| ConfigError::Invalid(key.to_string(), value))
}

fn read_f64_with_default(key: &str, default: f64) -> Result<f64, ConfigError> {
    let value = match env::var(key) {
        Ok(value) => value,
        Err(_) => return Ok(default),
    };
    value
        .parse::<f64>()
        .map_err(|_| ConfigError::Invalid(key.to_string(), value))
}
