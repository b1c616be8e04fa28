//! 追踪与请求 ID 生成。

use std::sync::OnceLock;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing_subscriber::{EnvFilter, fmt};

/// 请求级追踪标识。
#[derive(Debug, Clone)]
pub struct RequestIds {
    pub request_id: String,
    pub trace_id: String,
}

/// 基础指标快照。
#[derive(Debug, Clone, Copy, Default)]
pub struct MetricsSnapshot {
    pub catalog_reads: u64,
    pub catalog_writes: u64,
    pub orders_priced: u64,
    pub timelines_rendered: u64,
    pub import_rows_validated: u64,
    pub import_rows_rejected: u64,
    pub import_rows_committed: u64,
    pub import_rows_failed: u64,
}

/// 基础指标。
pub struct TelemetryMetrics {
    catalog_reads: AtomicU64,
    catalog_writes: AtomicU64,
    orders_priced: AtomicU64,
    timelines_rendered: AtomicU64,
    import_rows_validated: AtomicU64,
    import_rows_rejected: AtomicU64,
    import_rows_committed: AtomicU64,
    import_rows_failed: AtomicU64,
}

impl TelemetryMetrics {
    pub fn new() -> Self {
        Self {
            catalog_reads: AtomicU64::new(0),
            catalog_writes: AtomicU64::new(0),
            orders_priced: AtomicU64::new(0),
            timelines_rendered: AtomicU64::new(0),
            import_rows_validated: AtomicU64::new(0),
            import_rows_rejected: AtomicU64::new(0),
            import_rows_committed: AtomicU64::new(0),
            import_rows_failed: AtomicU64::new(0),
        }
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            catalog_reads: self.catalog_reads.load(Ordering::Relaxed),
            catalog_writes: self.catalog_writes.load(Ordering::Relaxed),
            orders_priced: self.orders_priced.load(Ordering::Relaxed),
            timelines_rendered: self.timelines_rendered.load(Ordering::Relaxed),
            import_rows_validated: self.import_rows_validated.load(Ordering::Relaxed),
            import_rows_rejected: self.import_rows_rejected.load(Ordering::Relaxed),
            import_rows_committed: self.import_rows_committed.load(Ordering::Relaxed),
            import_rows_failed: self.import_rows_failed.load(Ordering::Relaxed),
        }
    }
}

impl Default for TelemetryMetrics {
    fn default() -> Self {
        Self::new()
    }
}

static METRICS: OnceLock<TelemetryMetrics> = OnceLock::new();

/// 获取全局指标实例。
pub fn metrics() -> &'static TelemetryMetrics {
    METRICS.get_or_init(TelemetryMetrics::new)
}

/// 初始化 tracing（默认 info）。
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt().with_env_filter(filter).try_init();
}

/// 生成新的 request_id 与 trace_id。
pub fn new_request_ids() -> RequestIds {
    RequestIds {
        request_id: uuid::Uuid::new_v4().to_string(),
        trace_id: uuid::Uuid::new_v4().to_string(),
    }
}

/// 记录目录读取次数。
pub fn record_catalog_read() {
    metrics().catalog_reads.fetch_add(1, Ordering::Relaxed);
}

/// 记录目录写入次数。
pub fn record_catalog_write() {
    metrics().catalog_writes.fetch_add(1, Ordering::Relaxed);
}

/// 记录工单成本核算次数。
pub fn record_order_priced() {
    metrics().orders_priced.fetch_add(1, Ordering::Relaxed);
}

/// 记录甘特时间轴布局次数。
pub fn record_timeline_rendered() {
    metrics().timelines_rendered.fetch_add(1, Ordering::Relaxed);
}

/// 记录导入校验的行数。
pub fn record_import_rows_validated(rows: u64) {
    metrics()
        .import_rows_validated
        .fetch_add(rows, Ordering::Relaxed);
}

/// 记录校验拒绝的行数。
pub fn record_import_rows_rejected(rows: u64) {
    metrics()
        .import_rows_rejected
        .fetch_add(rows, Ordering::Relaxed);
}

/// 记录模拟导入成功的行数。
pub fn record_import_rows_committed(rows: u64) {
    metrics()
        .import_rows_committed
        .fetch_add(rows, Ordering::Relaxed);
}

/// 记录模拟导入失败的行数。
pub fn record_import_rows_failed(rows: u64) {
    metrics()
        .import_rows_failed
        .fetch_add(rows, Ordering::Relaxed);
}
