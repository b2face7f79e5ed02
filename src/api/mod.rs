// ==========================================
// 采购需求合并建议器 - API 层
// ==========================================
// 职责: 对外业务接口,边界校验,错误转换
// ==========================================

pub mod bundling_api;
pub mod error;

pub use bundling_api::{BundlingApi, BundlingReport, BundlingSummary};
pub use error::{ApiError, ApiResult};
