// ==========================================
// 采购需求合并建议器 - 核心库
// ==========================================
// 系统定位: 决策支持（合并包为建议，最终由人工确认）
// 数据流: 需求清单 -> 四轮分组 -> 效率评分 -> 合并去重 -> 合并包
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "en");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 合并规则
pub mod engine;

// 导入层 - 外部需求清单
pub mod importer;

// 配置层 - 合并规则参数
pub mod config;

// 日志系统
pub mod logging;

// 性能统计
pub mod perf;

// 国际化
pub mod i18n;

// API 层 - 业务接口
pub mod api;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::{
    BundleCriterion, BundleGroup, BundleHeuristic, BundleStatus, DqLevel, DqViolation, Priority,
    ProcurementRequest, ProcurementType,
};

// 引擎
pub use engine::{
    analyze_bundling_opportunities, calculate_efficiency, create_manual_bundle,
    generate_bundling_insight, generate_sourcing_event_id, get_unbundled_requests,
    BundlingAdvisor, ConsolidationStrategy, EfficiencyScorer, GreedyConsolidator, IdGenerator,
    InsightGenerator, SequenceIdGenerator, SystemIdGenerator,
};

// 配置
pub use config::{load_config, BundlingConfig, ConfigError};

// API
pub use api::{ApiError, BundlingApi, BundlingReport, BundlingSummary};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "采购需求合并建议器";
