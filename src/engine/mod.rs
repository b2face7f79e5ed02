// ==========================================
// 采购需求合并建议器 - 引擎层
// ==========================================
// 职责: 实现合并规则,不做 I/O
// 红线: 引擎函数对合法类型输入全部有定义，不返回错误
// ==========================================

pub mod advisor;
pub mod consolidator;
pub mod efficiency;
pub mod grouping;
pub mod id_gen;
pub mod insight;

// 重导出核心引擎
pub use advisor::{
    analyze_bundling_opportunities, create_manual_bundle, generate_bundling_insight,
    generate_sourcing_event_id, BundlingAdvisor,
};
pub use consolidator::{get_unbundled_requests, ConsolidationStrategy, GreedyConsolidator};
pub use efficiency::{calculate_efficiency, EfficiencyScorer};
pub use grouping::{partition_by, split_by_time_window, GroupingHeuristics};
pub use id_gen::{IdGenerator, SequenceIdGenerator, SystemIdGenerator};
pub use insight::{InsightFacts, InsightGenerator};
