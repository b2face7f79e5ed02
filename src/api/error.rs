// ==========================================
// 采购需求合并建议器 - API层错误类型
// ==========================================
// 职责: 边界校验失败、导入失败、配置失败统一为 API 错误
// 所有错误信息必须包含显式原因
// ==========================================

use crate::config::ConfigError;
use crate::domain::DqViolation;
use crate::importer::ImportError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 业务规则错误
    // ==========================================
    #[error("无效输入: {0}")]
    InvalidInput(String),

    /// 输入记录未通过数据质量校验（带明细）
    #[error("数据验证失败: {message}")]
    ValidationError {
        message: String,
        violations: Vec<DqViolation>,
    },

    // ==========================================
    // 下层错误
    // ==========================================
    #[error("文件导入失败: {0}")]
    Import(#[from] ImportError),

    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
}

impl ApiError {
    /// 校验违规明细（非校验错误返回空）
    pub fn violations(&self) -> &[DqViolation] {
        match self {
            ApiError::ValidationError { violations, .. } => violations,
            _ => &[],
        }
    }
}

/// API层Result类型别名
pub type ApiResult<T> = Result<T, ApiError>;
