// ==========================================
// 采购需求合并建议器 - 编排器
// ==========================================
// 数据流: 需求清单 -> 四轮分组 -> 效率评分 -> 合并去重 -> 合并包列表
// 职责: 组装分组、评分、合并、编号生成
// 说明: 纯内存同步计算，不修改输入
// ==========================================

use crate::config::BundlingConfig;
use crate::domain::{BundleGroup, ProcurementRequest};
use crate::engine::consolidator::{
    get_unbundled_requests, ConsolidationStrategy, GreedyConsolidator,
};
use crate::engine::efficiency::EfficiencyScorer;
use crate::engine::grouping::GroupingHeuristics;
use crate::engine::id_gen::{IdGenerator, SystemIdGenerator};
use crate::engine::insight::InsightGenerator;
use crate::perf::PerfGuard;
use std::sync::Arc;
use tracing::instrument;

// ==========================================
// BundlingAdvisor - 合并建议编排器
// ==========================================
pub struct BundlingAdvisor {
    config: BundlingConfig,
    heuristics: GroupingHeuristics,
    insight: InsightGenerator,
    strategy: Box<dyn ConsolidationStrategy>,
    id_gen: Arc<dyn IdGenerator>,
}

impl BundlingAdvisor {
    /// 构造函数（贪心合并策略）
    pub fn new(config: BundlingConfig, id_gen: Arc<dyn IdGenerator>) -> Self {
        Self::with_strategy(config, id_gen, Box::new(GreedyConsolidator::new()))
    }

    /// 指定合并策略
    pub fn with_strategy(
        config: BundlingConfig,
        id_gen: Arc<dyn IdGenerator>,
        strategy: Box<dyn ConsolidationStrategy>,
    ) -> Self {
        Self {
            heuristics: GroupingHeuristics::new(&config, id_gen.clone()),
            insight: InsightGenerator::new(EfficiencyScorer::new(&config)),
            config,
            strategy,
            id_gen,
        }
    }

    pub fn config(&self) -> &BundlingConfig {
        &self.config
    }

    /// 分析合并机会
    ///
    /// # 返回
    /// 互不重叠的合并包，按接受顺序（综合优先度降序）
    #[instrument(skip_all, fields(request_count = requests.len()))]
    pub fn analyze(&self, requests: &[ProcurementRequest]) -> Vec<BundleGroup> {
        let _perf = PerfGuard::new("analyze_bundling_opportunities", requests.len());

        let candidates = self.heuristics.all_candidates(requests);
        let bundles = self.strategy.consolidate(candidates);

        tracing::info!(
            request_count = requests.len(),
            bundle_count = bundles.len(),
            bundled_count = bundles.iter().map(|b| b.item_count()).sum::<usize>(),
            "合并机会分析完成"
        );

        bundles
    }

    /// 未入包需求
    pub fn unbundled(
        &self,
        all_requests: &[ProcurementRequest],
        bundles: &[BundleGroup],
    ) -> Vec<ProcurementRequest> {
        get_unbundled_requests(all_requests, bundles)
    }

    /// 生成合并理由
    pub fn insight(&self, requests: &[ProcurementRequest]) -> String {
        self.insight.generate(requests)
    }

    /// 人工合并包（成员与名称由调用方决定，不做去重）
    pub fn manual_bundle(&self, requests: &[ProcurementRequest], bundle_name: &str) -> BundleGroup {
        self.heuristics.manual(requests, bundle_name)
    }

    /// 寻源事件编号
    pub fn sourcing_event_id(&self) -> String {
        self.id_gen.sourcing_event_id()
    }
}

impl Default for BundlingAdvisor {
    fn default() -> Self {
        Self::new(BundlingConfig::default(), Arc::new(SystemIdGenerator::new()))
    }
}

// ==========================================
// 默认配置下的便捷入口
// ==========================================

/// 分析合并机会（默认配置 + 系统编号）
pub fn analyze_bundling_opportunities(requests: &[ProcurementRequest]) -> Vec<BundleGroup> {
    BundlingAdvisor::default().analyze(requests)
}

/// 生成合并理由（默认阈值）
pub fn generate_bundling_insight(requests: &[ProcurementRequest]) -> String {
    InsightGenerator::default().generate(requests)
}

/// 人工合并包（系统编号）
pub fn create_manual_bundle(requests: &[ProcurementRequest], bundle_name: &str) -> BundleGroup {
    BundlingAdvisor::default().manual_bundle(requests, bundle_name)
}

/// 寻源事件编号: SRC-{年份}-{4位随机数}
pub fn generate_sourcing_event_id() -> String {
    SystemIdGenerator::new().sourcing_event_id()
}
