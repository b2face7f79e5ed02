// ==========================================
// 采购需求合并建议器 - 需求导入器
// ==========================================
// 导入流程:
// 1. 文件读取与解析（CSV / JSON）
// 2. 字段映射与空值标准化
// 3. DQ 校验 + 类型转换（阻断级违规记录被拒绝）
// 4. 生成导入报告
// ==========================================

use crate::domain::{DqLevel, DqViolation, ProcurementRequest};
use crate::importer::dq_validator::DqValidator;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::field_mapper::FieldMapper;
use crate::importer::file_parser::{FileParser, UniversalFileParser};
use serde::Serialize;
use std::collections::HashSet;
use std::path::Path;
use uuid::Uuid;

/// 导入报告
#[derive(Debug, Clone, Serialize)]
pub struct ImportReport {
    pub batch_id: String,
    pub file_name: String,
    pub total_rows: usize,
    pub requests: Vec<ProcurementRequest>,
    pub violations: Vec<DqViolation>,
}

impl ImportReport {
    /// 被拒绝的行数
    pub fn rejected_rows(&self) -> usize {
        self.violations
            .iter()
            .filter(|v| v.level.is_blocking())
            .map(|v| v.row_number)
            .collect::<HashSet<_>>()
            .len()
    }

    /// 指定级别的违规数
    pub fn count_level(&self, level: DqLevel) -> usize {
        self.violations.iter().filter(|v| v.level == level).count()
    }
}

// ==========================================
// RequestImporter - 需求导入器
// ==========================================
pub struct RequestImporter {
    parser: Box<dyn FileParser>,
    mapper: FieldMapper,
    validator: DqValidator,
}

impl RequestImporter {
    pub fn new() -> Self {
        Self::with_parser(Box::new(UniversalFileParser))
    }

    pub fn with_parser(parser: Box<dyn FileParser>) -> Self {
        Self {
            parser,
            mapper: FieldMapper,
            validator: DqValidator,
        }
    }

    /// 导入需求文件
    pub fn import_file(&self, file_path: &Path) -> ImportResult<ImportReport> {
        let batch_id = Uuid::new_v4().to_string();
        tracing::info!(batch_id = %batch_id, path = %file_path.display(), "开始导入采购需求");

        let rows = self.parser.parse_to_raw_records(file_path)?;
        if let Some(field) = self.mapper.missing_required_field(&rows) {
            return Err(ImportError::MissingColumn(field.to_string()));
        }
        let records: Vec<_> = rows
            .iter()
            .enumerate()
            .map(|(idx, row)| self.mapper.map_row(row, idx + 1))
            .collect();

        let (requests, violations) = self.validator.validate_records(&records);

        for v in violations.iter().filter(|v| v.level.is_blocking()) {
            tracing::warn!(batch_id = %batch_id, "{}", v);
        }

        let report = ImportReport {
            batch_id,
            file_name: file_path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default(),
            total_rows: records.len(),
            requests,
            violations,
        };

        tracing::info!(
            batch_id = %report.batch_id,
            total_rows = report.total_rows,
            accepted = report.requests.len(),
            rejected = report.rejected_rows(),
            "采购需求导入完成"
        );

        Ok(report)
    }
}

impl Default for RequestImporter {
    fn default() -> Self {
        Self::new()
    }
}
