// ==========================================
// 采购需求合并建议器 - 候选包合并去重
// ==========================================
// 规则（贪心，非全局最优）:
// 1) 按 效率评分 × 总金额 降序稳定排序（同分保持输入顺序）
// 2) 依次遍历，成员全部未被占用则整包接受并占用全部成员
// 3) 任一成员已被占用则整包丢弃（不做部分接受）
// 红线: 每个需求ID最多出现在一个输出包中
// ==========================================

use crate::domain::{BundleGroup, ProcurementRequest};
use std::cmp::Ordering;
use std::collections::HashSet;

/// 合并策略 Trait
///
/// 输入为全部启发式的候选（已按轮次拼接），输出为互不重叠的接受列表
pub trait ConsolidationStrategy: Send + Sync {
    fn consolidate(&self, candidates: Vec<BundleGroup>) -> Vec<BundleGroup>;
}

// ==========================================
// GreedyConsolidator - 贪心合并
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct GreedyConsolidator;

impl GreedyConsolidator {
    pub fn new() -> Self {
        Self
    }
}

impl ConsolidationStrategy for GreedyConsolidator {
    fn consolidate(&self, mut candidates: Vec<BundleGroup>) -> Vec<BundleGroup> {
        let candidate_count = candidates.len();

        // sort_by 为稳定排序
        candidates.sort_by(|a, b| {
            b.desirability()
                .partial_cmp(&a.desirability())
                .unwrap_or(Ordering::Equal)
        });

        let mut claimed: HashSet<String> = HashSet::new();
        let mut accepted = Vec::new();

        for candidate in candidates {
            let overlaps = candidate
                .requests
                .iter()
                .any(|r| claimed.contains(&r.id));

            if overlaps {
                tracing::trace!(bundle_id = %candidate.id, "候选包与已接受包重叠，丢弃");
                continue;
            }

            claimed.extend(candidate.requests.iter().map(|r| r.id.clone()));
            accepted.push(candidate);
        }

        tracing::debug!(
            candidates = candidate_count,
            accepted = accepted.len(),
            "候选包合并完成"
        );

        accepted
    }
}

/// 未进入任何合并包的需求（保持输入顺序）
pub fn get_unbundled_requests(
    all_requests: &[ProcurementRequest],
    bundles: &[BundleGroup],
) -> Vec<ProcurementRequest> {
    let bundled: HashSet<&str> = bundles.iter().flat_map(|b| b.request_ids()).collect();

    all_requests
        .iter()
        .filter(|r| !bundled.contains(r.id.as_str()))
        .cloned()
        .collect()
}
