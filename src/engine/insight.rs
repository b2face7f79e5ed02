// ==========================================
// 采购需求合并建议器 - 合并理由生成
// ==========================================
// 职责: 根据成员需求生成可读的合并理由
// 模板: 单一供应商 / 单一类别 / 混合（locales/*.yml insight.*）
// ==========================================

use crate::domain::{sum_value, ProcurementRequest};
use crate::engine::efficiency::EfficiencyScorer;
use crate::i18n::t_with_args;
use std::collections::HashSet;

/// 合并理由的数值要素
#[derive(Debug, Clone, PartialEq)]
pub struct InsightFacts {
    pub item_count: usize,
    pub total_value: f64,
    pub category_count: usize,
    pub vendor_count: usize,
    /// 最晚交付日期 - 最早交付日期（天）
    pub date_span_days: i64,
    pub efficiency: u32,
    /// 全部需求同一供应商时取该供应商
    pub shared_vendor: Option<String>,
    /// 全部需求同一类别时取该类别
    pub shared_category: Option<String>,
}

// ==========================================
// InsightGenerator - 合并理由生成器
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct InsightGenerator {
    scorer: EfficiencyScorer,
}

impl InsightGenerator {
    pub fn new(scorer: EfficiencyScorer) -> Self {
        Self { scorer }
    }

    /// 汇总数值要素
    pub fn facts(&self, requests: &[ProcurementRequest]) -> InsightFacts {
        let total_value = sum_value(requests);

        let categories: HashSet<&str> = requests.iter().map(|r| r.category.as_str()).collect();
        let vendors: HashSet<&str> = requests.iter().map(|r| r.vendor.as_str()).collect();

        let date_span_days = match (
            requests.iter().map(|r| r.delivery_date).min(),
            requests.iter().map(|r| r.delivery_date).max(),
        ) {
            (Some(min), Some(max)) => (max - min).num_days(),
            _ => 0,
        };

        let shared_vendor = if vendors.len() == 1 {
            requests.first().and_then(|r| r.vendor_key()).map(str::to_string)
        } else {
            None
        };
        let shared_category = if categories.len() == 1 {
            requests.first().and_then(|r| r.category_key()).map(str::to_string)
        } else {
            None
        };

        InsightFacts {
            item_count: requests.len(),
            total_value,
            category_count: categories.len(),
            vendor_count: vendors.len(),
            date_span_days,
            efficiency: self.scorer.score(requests.len(), total_value),
            shared_vendor,
            shared_category,
        }
    }

    /// 生成合并理由文本
    pub fn generate(&self, requests: &[ProcurementRequest]) -> String {
        render(&self.facts(requests))
    }
}

/// 按数值要素选择模板并填充
pub fn render(facts: &InsightFacts) -> String {
    let count = facts.item_count.to_string();
    let total = format!("{:.2}", facts.total_value);
    let categories = facts.category_count.to_string();
    let vendors = facts.vendor_count.to_string();
    let span = facts.date_span_days.to_string();
    let efficiency = facts.efficiency.to_string();

    if let Some(vendor) = facts.shared_vendor.as_deref() {
        return t_with_args(
            "insight.same_vendor",
            &[
                ("count", count.as_str()),
                ("vendor", vendor),
                ("total", total.as_str()),
                ("span", span.as_str()),
                ("categories", categories.as_str()),
                ("efficiency", efficiency.as_str()),
            ],
        );
    }

    if let Some(category) = facts.shared_category.as_deref() {
        return t_with_args(
            "insight.same_category",
            &[
                ("count", count.as_str()),
                ("category", category),
                ("vendors", vendors.as_str()),
                ("total", total.as_str()),
                ("span", span.as_str()),
                ("efficiency", efficiency.as_str()),
            ],
        );
    }

    t_with_args(
        "insight.mixed",
        &[
            ("count", count.as_str()),
            ("categories", categories.as_str()),
            ("vendors", vendors.as_str()),
            ("total", total.as_str()),
            ("span", span.as_str()),
            ("efficiency", efficiency.as_str()),
        ],
    )
}
