//! 站点批量导入
//!
//! 三个阶段：
//! 1. 行校验：必填字段非空、经纬度可解析为数字（纯结构校验，
//!    不做去重、跨行一致性或地理范围检查）
//! 2. 成稿：通过校验的行转换为 SiteDraft
//! 3. 模拟落库：每行按固定概率独立成败（种子化随机源，可复现），
//!    输出汇总结果；无回滚、无重试、无部分提交语义
//!
//! 另提供逐字节固定的 CSV 模板（表头 + 一行示例）。

use domain::SiteStatus;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;

/// 必填字段。
pub const REQUIRED_FIELDS: [&str; 4] = ["name", "county", "latitude", "longitude"];

/// 模板表头（逐字节固定）。
pub const TEMPLATE_HEADER: &str =
    "name,county,address,latitude,longitude,capacity,status,contactName,contactPhone,contactEmail";

/// 模板示例行。
pub const TEMPLATE_EXAMPLE_ROW: &str =
    "Site Name,Nairobi,123 Example St,-1.2921,36.8219,5.5,active,John Doe,+254712345678,john@example.com";

/// 默认的模拟导入失败概率。
pub const DEFAULT_FAILURE_RATE: f64 = 0.10;

/// 下载用 CSV 模板内容。
pub fn csv_template() -> String {
    format!("{TEMPLATE_HEADER}\n{TEMPLATE_EXAMPLE_ROW}")
}

/// 待导入的松散行：字段名 -> 原始字符串。
#[derive(Debug, Clone, Default)]
pub struct ImportRow {
    values: HashMap<String, String>,
}

impl ImportRow {
    pub fn new(values: HashMap<String, String>) -> Self {
        Self { values }
    }

    /// 读取字段；仅空白的值视为缺失。
    pub fn value(&self, field: &str) -> Option<&str> {
        self.values
            .get(field)
            .map(|value| value.trim())
            .filter(|value| !value.is_empty())
    }
}

impl From<HashMap<String, String>> for ImportRow {
    fn from(values: HashMap<String, String>) -> Self {
        Self::new(values)
    }
}

/// 行级错误：行号（从 1 起）、字段、消息。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowError {
    pub row: usize,
    pub field: String,
    pub message: String,
}

impl RowError {
    fn new(row: usize, field: &str, message: impl Into<String>) -> Self {
        Self {
            row,
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// 校验全部行，返回行级错误列表。
pub fn validate_rows(rows: &[ImportRow]) -> Vec<RowError> {
    let mut errors = Vec::new();
    for (index, row) in rows.iter().enumerate() {
        let row_number = index + 1;
        for field in REQUIRED_FIELDS {
            if row.value(field).is_none() {
                errors.push(RowError::new(
                    row_number,
                    field,
                    format!("{field} is required"),
                ));
            }
        }
        if let Some(latitude) = row.value("latitude") {
            if latitude.parse::<f64>().is_err() {
                errors.push(RowError::new(
                    row_number,
                    "latitude",
                    "Invalid latitude format",
                ));
            }
        }
        if let Some(longitude) = row.value("longitude") {
            if longitude.parse::<f64>().is_err() {
                errors.push(RowError::new(
                    row_number,
                    "longitude",
                    "Invalid longitude format",
                ));
            }
        }
    }
    errors
}

/// 通过校验的行转换出的站点草稿。
#[derive(Debug, Clone)]
pub struct SiteDraft {
    pub name: String,
    pub county: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub capacity_kw: f64,
    pub status: SiteStatus,
    pub contact_name: Option<String>,
    pub contact_phone: Option<String>,
    pub contact_email: Option<String>,
}

/// 校验并转换全部行；存在任何错误时整体拒绝。
pub fn drafts_from_rows(rows: &[ImportRow]) -> Result<Vec<SiteDraft>, Vec<RowError>> {
    let errors = validate_rows(rows);
    if !errors.is_empty() {
        return Err(errors);
    }
    // 已通过校验的行解析不会失败；缺省字段取空值/默认状态
    let drafts = rows
        .iter()
        .map(|row| SiteDraft {
            name: row.value("name").unwrap_or_default().to_string(),
            county: row.value("county").unwrap_or_default().to_string(),
            address: row.value("address").unwrap_or_default().to_string(),
            latitude: row
                .value("latitude")
                .and_then(|value| value.parse().ok())
                .unwrap_or_default(),
            longitude: row
                .value("longitude")
                .and_then(|value| value.parse().ok())
                .unwrap_or_default(),
            capacity_kw: row
                .value("capacity")
                .and_then(|value| value.parse().ok())
                .unwrap_or_default(),
            status: match row.value("status") {
                Some("inactive") => SiteStatus::Inactive,
                Some("pending") => SiteStatus::Pending,
                _ => SiteStatus::Active,
            },
            contact_name: row.value("contactName").map(str::to_string),
            contact_phone: row.value("contactPhone").map(str::to_string),
            contact_email: row.value("contactEmail").map(str::to_string),
        })
        .collect();
    Ok(drafts)
}

/// 模拟导入汇总。
#[derive(Debug, Clone)]
pub struct ImportOutcome {
    pub total: usize,
    pub successful: usize,
    pub failed: usize,
    pub errors: Vec<RowError>,
}

/// 模拟导入器：种子化随机源 + 固定失败概率。
pub struct ImportSimulator {
    rng: StdRng,
    failure_rate: f64,
}

impl ImportSimulator {
    pub fn new(seed: u64, failure_rate: f64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            failure_rate: failure_rate.clamp(0.0, 1.0),
        }
    }

    /// 逐行掷签：返回成功行的下标与整体汇总。
    pub fn run(&mut self, drafts: &[SiteDraft]) -> (Vec<usize>, ImportOutcome) {
        let mut accepted = Vec::new();
        let mut errors = Vec::new();
        for (index, _draft) in drafts.iter().enumerate() {
            if self.rng.r#gen::<f64>() < self.failure_rate {
                errors.push(RowError::new(index + 1, "import", "Failed to import site"));
            } else {
                accepted.push(index);
            }
        }
        let outcome = ImportOutcome {
            total: drafts.len(),
            successful: accepted.len(),
            failed: errors.len(),
            errors,
        };
        (accepted, outcome)
    }
}
