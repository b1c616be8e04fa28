//! 工单成本核算
//!
//! 从工单的原始字段（用料快照、工时、差旅、其他费用、开票金额）
//! 纯函数式地重算成本合计、利润与利润率。同一输入永远得到同一结果，
//! 不存在任何隐藏累计。

use serde::Serialize;

/// 利润率分档阈值：达到即为 High。
pub const HIGH_MARGIN_THRESHOLD: f64 = 0.30;
/// 利润率分档阈值：达到即为 Average（同时也是经营目标线）。
pub const TARGET_MARGIN: f64 = 0.15;

/// 金额统一保留两位小数。
pub fn round_currency(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// 库存条目毛利率（百分比）。
///
/// 售价 <= 0 时显式取 0.0，绝不产生 NaN。
pub fn margin_percent(selling_price: f64, buying_price: f64) -> f64 {
    if selling_price <= 0.0 {
        return 0.0;
    }
    (selling_price - buying_price) / selling_price * 100.0
}

/// 用料行：数量与买卖价快照。
#[derive(Debug, Clone)]
pub struct PartLine {
    pub quantity: i64,
    pub buying_price: f64,
    pub selling_price: f64,
}

/// 成本核算输入。
#[derive(Debug, Clone)]
pub struct OrderCosts {
    pub parts: Vec<PartLine>,
    pub labor_hours: f64,
    pub labor_rate: f64,
    pub travel_cost: f64,
    pub other_costs: f64,
    pub invoice_amount: f64,
}

/// 成本分类。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CostCategory {
    Parts,
    Labor,
    Travel,
    Other,
}

impl CostCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            CostCategory::Parts => "Parts",
            CostCategory::Labor => "Labor",
            CostCategory::Travel => "Travel",
            CostCategory::Other => "Other",
        }
    }
}

/// 成本分解行。
#[derive(Debug, Clone, Serialize)]
pub struct CostLine {
    pub category: CostCategory,
    pub amount: f64,
    /// 占成本合计的百分比；合计为零时取 0.0
    pub share_of_total: f64,
}

/// 利润率分档。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ProfitBand {
    High,
    Average,
    Low,
    Loss,
}

impl ProfitBand {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProfitBand::High => "High Profit Margin",
            ProfitBand::Average => "Average Profit Margin",
            ProfitBand::Low => "Low Profit Margin",
            ProfitBand::Loss => "Loss",
        }
    }
}

/// 成本核算结果（金额均已保留两位小数）。
#[derive(Debug, Clone, PartialEq)]
pub struct CostSummary {
    pub parts_cost: f64,
    pub parts_revenue: f64,
    pub labor_cost: f64,
    pub travel_cost: f64,
    pub other_costs: f64,
    pub total_cost: f64,
    pub invoice_amount: f64,
    pub profit: f64,
    /// 利润率比值；开票金额 <= 0 时取 0.0，绝不为 NaN
    pub margin: f64,
}

impl OrderCosts {
    /// 重算成本合计、利润与利润率。
    pub fn summarize(&self) -> CostSummary {
        let parts_cost = round_currency(
            self.parts
                .iter()
                .map(|part| part.quantity as f64 * part.buying_price)
                .sum(),
        );
        let parts_revenue = round_currency(
            self.parts
                .iter()
                .map(|part| part.quantity as f64 * part.selling_price)
                .sum(),
        );
        let labor_cost = round_currency(self.labor_hours * self.labor_rate);
        let travel_cost = round_currency(self.travel_cost);
        let other_costs = round_currency(self.other_costs);
        let total_cost = round_currency(parts_cost + labor_cost + travel_cost + other_costs);
        let invoice_amount = round_currency(self.invoice_amount);
        let profit = round_currency(invoice_amount - total_cost);
        let margin = if invoice_amount > 0.0 {
            profit / invoice_amount
        } else {
            0.0
        };
        CostSummary {
            parts_cost,
            parts_revenue,
            labor_cost,
            travel_cost,
            other_costs,
            total_cost,
            invoice_amount,
            profit,
            margin,
        }
    }
}

impl CostSummary {
    /// 按成本分类生成分解行（Parts/Labor/Travel/Other）。
    pub fn breakdown(&self) -> Vec<CostLine> {
        let share = |amount: f64| {
            if self.total_cost > 0.0 {
                amount / self.total_cost * 100.0
            } else {
                0.0
            }
        };
        vec![
            CostLine {
                category: CostCategory::Parts,
                amount: self.parts_cost,
                share_of_total: share(self.parts_cost),
            },
            CostLine {
                category: CostCategory::Labor,
                amount: self.labor_cost,
                share_of_total: share(self.labor_cost),
            },
            CostLine {
                category: CostCategory::Travel,
                amount: self.travel_cost,
                share_of_total: share(self.travel_cost),
            },
            CostLine {
                category: CostCategory::Other,
                amount: self.other_costs,
                share_of_total: share(self.other_costs),
            },
        ]
    }

    /// 利润率分档：>=0.30 High，>=0.15 Average，>0 Low，否则 Loss。
    pub fn band(&self) -> ProfitBand {
        if self.margin >= HIGH_MARGIN_THRESHOLD {
            ProfitBand::High
        } else if self.margin >= TARGET_MARGIN {
            ProfitBand::Average
        } else if self.margin > 0.0 {
            ProfitBand::Low
        } else {
            ProfitBand::Loss
        }
    }

    /// 是否低于经营目标线（展示层提示用）。
    pub fn below_target(&self) -> bool {
        self.margin < TARGET_MARGIN
    }
}

/// 从工单记录构造成本核算输入。
pub fn order_costs(record: &ops_storage::ServiceOrderRecord) -> OrderCosts {
    OrderCosts {
        parts: record
            .parts_used
            .iter()
            .map(|part| PartLine {
                quantity: part.quantity,
                buying_price: part.buying_price,
                selling_price: part.unit_price,
            })
            .collect(),
        labor_hours: record.labor_hours,
        labor_rate: record.labor_rate,
        travel_cost: record.travel_cost,
        other_costs: record.other_costs,
        invoice_amount: record.invoice_amount,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_costs() -> OrderCosts {
        OrderCosts {
            parts: vec![PartLine {
                quantity: 2,
                buying_price: 18.0,
                selling_price: 25.0,
            }],
            labor_hours: 4.0,
            labor_rate: 35.0,
            travel_cost: 75.0,
            other_costs: 20.0,
            invoice_amount: 450.0,
        }
    }

    #[test]
    fn summary_matches_reference_order() {
        let summary = sample_costs().summarize();
        assert_eq!(summary.parts_cost, 36.0);
        assert_eq!(summary.labor_cost, 140.0);
        assert_eq!(summary.total_cost, 271.0);
        assert_eq!(summary.profit, 179.0);
        assert!((summary.margin - 179.0 / 450.0).abs() < 1e-9);
        assert_eq!(summary.band(), ProfitBand::High);
    }

    #[test]
    fn summarize_is_idempotent() {
        let costs = sample_costs();
        assert_eq!(costs.summarize(), costs.summarize());
    }

    #[test]
    fn zero_invoice_margin_is_zero() {
        let mut costs = sample_costs();
        costs.invoice_amount = 0.0;
        let summary = costs.summarize();
        assert_eq!(summary.margin, 0.0);
        assert!(summary.margin.is_finite());
        assert_eq!(summary.band(), ProfitBand::Loss);
    }

    #[test]
    fn breakdown_shares_sum_to_hundred() {
        let summary = sample_costs().summarize();
        let lines = summary.breakdown();
        assert_eq!(lines.len(), 4);
        let total: f64 = lines.iter().map(|line| line.share_of_total).sum();
        assert!((total - 100.0).abs() < 1e-6);
        assert_eq!(lines[0].category, CostCategory::Parts);
        assert_eq!(lines[0].amount, 36.0);
    }

    #[test]
    fn zero_total_cost_shares_are_zero() {
        let costs = OrderCosts {
            parts: Vec::new(),
            labor_hours: 0.0,
            labor_rate: 0.0,
            travel_cost: 0.0,
            other_costs: 0.0,
            invoice_amount: 100.0,
        };
        let lines = costs.summarize().breakdown();
        assert!(lines.iter().all(|line| line.share_of_total == 0.0));
    }

    #[test]
    fn band_thresholds() {
        let mut costs = sample_costs();
        // total_cost = 271；开票 320 → margin ≈ 0.153
        costs.invoice_amount = 320.0;
        assert_eq!(costs.summarize().band(), ProfitBand::Average);
        costs.invoice_amount = 280.0;
        assert_eq!(costs.summarize().band(), ProfitBand::Low);
        costs.invoice_amount = 200.0;
        assert_eq!(costs.summarize().band(), ProfitBand::Loss);
    }

    #[test]
    fn unit_margin_guards_zero_selling_price() {
        assert_eq!(margin_percent(0.0, 100.0), 0.0);
        assert_eq!(margin_percent(15_000.0, 12_000.0), 20.0);
    }
}
