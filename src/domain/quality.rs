// ==========================================
// 采购需求合并建议器 - 数据质量模型
// ==========================================
// Error/Conflict 级别的记录在边界处拒绝，Warning/Info 仅记录
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

/// 数据质量级别
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DqLevel {
    Info,
    Warning,
    Conflict,
    Error,
}

impl DqLevel {
    /// 是否导致记录被拒绝
    pub fn is_blocking(&self) -> bool {
        matches!(self, DqLevel::Error | DqLevel::Conflict)
    }
}

impl fmt::Display for DqLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DqLevel::Info => write!(f, "INFO"),
            DqLevel::Warning => write!(f, "WARNING"),
            DqLevel::Conflict => write!(f, "CONFLICT"),
            DqLevel::Error => write!(f, "ERROR"),
        }
    }
}

/// 单条数据质量违规
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DqViolation {
    pub row_number: usize,          // 行号（从 1 开始，不含表头）
    pub request_id: Option<String>, // 需求ID（若可识别）
    pub level: DqLevel,
    pub field: String,
    pub message: String,
}

impl fmt::Display for DqViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] row={} id={} field={}: {}",
            self.level,
            self.row_number,
            self.request_id.as_deref().unwrap_or("-"),
            self.field,
            self.message
        )
    }
}
