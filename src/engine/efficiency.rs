// ==========================================
// 采购需求合并建议器 - 效率评分引擎
// ==========================================
// 规则: 基础分 + 金额加分 + 规模加分，结果封顶
// 输出: [0, max_efficiency] 整数
// ==========================================

use crate::config::BundlingConfig;

/// 基础分：每条需求 2 分
const BASE_POINTS_PER_ITEM: u32 = 2;
/// 基础分上限
const BASE_CAP: u32 = 10;
/// 金额超过高档阈值的加分
const HIGH_VALUE_BONUS: u32 = 5;
/// 金额超过中档阈值的加分
const MID_VALUE_BONUS: u32 = 3;
/// 规模 >= 4 的加分
const LARGE_SIZE_BONUS: u32 = 4;
/// 规模 >= 3 的加分
const MEDIUM_SIZE_BONUS: u32 = 2;

// ==========================================
// EfficiencyScorer - 效率评分
// ==========================================
#[derive(Debug, Clone)]
pub struct EfficiencyScorer {
    mid_value_threshold: f64,
    high_value_threshold: f64,
    max_efficiency: u32,
}

impl EfficiencyScorer {
    pub fn new(config: &BundlingConfig) -> Self {
        Self {
            mid_value_threshold: config.mid_value_threshold,
            high_value_threshold: config.high_value_threshold,
            max_efficiency: config.max_efficiency,
        }
    }

    /// 计算效率评分
    ///
    /// # 参数
    /// - `item_count`: 成员数量（调用方保证 >= 2）
    /// - `total_value`: 成员金额之和
    pub fn score(&self, item_count: usize, total_value: f64) -> u32 {
        let count = u32::try_from(item_count).unwrap_or(u32::MAX);
        let base = count.saturating_mul(BASE_POINTS_PER_ITEM).min(BASE_CAP);

        let value_bonus = if total_value > self.high_value_threshold {
            HIGH_VALUE_BONUS
        } else if total_value > self.mid_value_threshold {
            MID_VALUE_BONUS
        } else {
            0
        };

        let size_bonus = if item_count >= 4 {
            LARGE_SIZE_BONUS
        } else if item_count >= 3 {
            MEDIUM_SIZE_BONUS
        } else {
            0
        };

        (base + value_bonus + size_bonus).min(self.max_efficiency)
    }
}

impl Default for EfficiencyScorer {
    fn default() -> Self {
        Self::new(&BundlingConfig::default())
    }
}

/// 使用默认阈值计算效率评分
pub fn calculate_efficiency(item_count: usize, total_value: f64) -> u32 {
    EfficiencyScorer::default().score(item_count, total_value)
}
