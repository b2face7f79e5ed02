// ==========================================
// 采购需求合并建议器 - 领域模型层
// ==========================================
// 职责: 定义领域实体、类型、数据质量模型
// 红线: 不含数据访问逻辑,不含引擎逻辑
// ==========================================

pub mod bundle;
pub mod quality;
pub mod request;
pub mod types;

// 重导出核心类型
pub use bundle::{sum_value, BundleGroup};
pub use quality::{DqLevel, DqViolation};
pub use request::ProcurementRequest;
pub use types::{BundleCriterion, BundleHeuristic, BundleStatus, Priority, ProcurementType};
