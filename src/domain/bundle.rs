// ==========================================
// 采购需求合并建议器 - 合并包领域模型
// ==========================================
// 红线: 同一需求ID最多出现在一个输出合并包中（由合并器保证）
// ==========================================

use crate::domain::request::ProcurementRequest;
use crate::domain::types::{BundleCriterion, BundleHeuristic, BundleStatus};
use serde::{Deserialize, Serialize};

// ==========================================
// BundleGroup - 合并包
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleGroup {
    pub id: String,                        // 包ID（启发式 + 分组键 [+ 后缀]）
    pub name: String,                      // 显示名称
    pub heuristic: BundleHeuristic,        // 产生该包的启发式
    pub criteria: Vec<BundleCriterion>,    // 合并依据（有序）
    pub requests: Vec<ProcurementRequest>, // 成员需求
    pub total_value: f64,                  // 成员金额之和
    pub estimated_efficiency: u32,         // 效率评分 [0, 25]
    pub ai_insight: String,                // 合并理由说明
    pub status: BundleStatus,              // 初始为 Draft
}

impl BundleGroup {
    /// 成员数量
    pub fn item_count(&self) -> usize {
        self.requests.len()
    }

    /// 成员需求ID（保持成员顺序）
    pub fn request_ids(&self) -> Vec<&str> {
        self.requests.iter().map(|r| r.id.as_str()).collect()
    }

    /// 综合优先度 = 效率评分 × 总金额
    pub fn desirability(&self) -> f64 {
        self.estimated_efficiency as f64 * self.total_value
    }

    /// 是否包含指定需求
    pub fn contains(&self, request_id: &str) -> bool {
        self.requests.iter().any(|r| r.id == request_id)
    }
}

/// 金额求和（按输入顺序累加）
pub fn sum_value(requests: &[ProcurementRequest]) -> f64 {
    requests.iter().map(|r| r.value).sum()
}
