// ==========================================
// 采购需求合并建议器 - 导入层
// ==========================================
// 职责: 外部需求清单导入,边界处做数据质量校验
// 支持: CSV, JSON
// ==========================================

// 模块声明
pub mod dq_validator;
pub mod error;
pub mod field_mapper;
pub mod file_parser;
pub mod request_importer;

// 重导出核心类型
pub use dq_validator::{parse_delivery_date, DqValidator};
pub use error::{ImportError, ImportResult};
pub use field_mapper::{FieldMapper, RawRequestRecord};
pub use file_parser::{CsvParser, FileParser, JsonParser, RawRow, UniversalFileParser};
pub use request_importer::{ImportReport, RequestImporter};
