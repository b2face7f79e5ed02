// ==========================================
// 采购需求合并建议器 - 字段映射器实现
// ==========================================
// 职责: 源表头 -> 标准字段（只做定位与空值标准化，不做类型转换）
// 表头匹配忽略大小写、空格、下划线、连字符
// ==========================================

use crate::importer::file_parser::RawRow;
use std::collections::HashSet;

/// 标准字段 -> 可接受的源表头别名（已归一化）
const FIELD_ALIASES: &[(&str, &[&str])] = &[
    ("id", &["id", "requestid", "prid"]),
    ("unit", &["unit", "requestingunit"]),
    ("material", &["material", "item", "description"]),
    ("category", &["category", "materialcategory"]),
    ("vendor", &["vendor", "supplier"]),
    ("region", &["region"]),
    ("project_id", &["projectid", "project"]),
    ("value", &["value", "amount", "estimatedvalue"]),
    ("delivery_date", &["deliverydate", "requireddate"]),
    ("type", &["type", "procurementtype"]),
    ("priority", &["priority"]),
];

/// 整个文件都缺失时无法导入的字段
const REQUIRED_FIELDS: &[&str] = &["id", "value", "delivery_date"];

fn aliases_of(field: &str) -> &'static [&'static str] {
    FIELD_ALIASES
        .iter()
        .find(|(name, _)| *name == field)
        .map(|(_, a)| *a)
        .unwrap_or(&[])
}

/// 映射后的原始需求记录（全部为文本，空值为 None）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRequestRecord {
    pub id: Option<String>,
    pub unit: Option<String>,
    pub material: Option<String>,
    pub category: Option<String>,
    pub vendor: Option<String>,
    pub region: Option<String>,
    pub project_id: Option<String>,
    pub value: Option<String>,
    pub delivery_date: Option<String>,
    pub procurement_type: Option<String>,
    pub priority: Option<String>,

    // 元信息
    pub row_number: usize,
}

fn normalize_header(h: &str) -> String {
    h.chars()
        .filter(|c| !matches!(c, ' ' | '_' | '-'))
        .flat_map(char::to_lowercase)
        .collect()
}

pub struct FieldMapper;

impl FieldMapper {
    /// 查找所有行都没有的必需字段（返回第一个）
    ///
    /// 没有数据行时不做检查：空文件是合法输入
    pub fn missing_required_field(&self, rows: &[RawRow]) -> Option<&'static str> {
        if rows.is_empty() {
            return None;
        }

        let headers: HashSet<String> = rows
            .iter()
            .flat_map(|row| row.keys())
            .map(|k| normalize_header(k))
            .collect();

        REQUIRED_FIELDS
            .iter()
            .copied()
            .find(|field| !aliases_of(field).iter().any(|alias| headers.contains(*alias)))
    }

    /// 映射一行
    ///
    /// # 参数
    /// - row: 原始行
    /// - row_number: 行号（从 1 开始）
    pub fn map_row(&self, row: &RawRow, row_number: usize) -> RawRequestRecord {
        let normalized: Vec<(String, &String)> =
            row.iter().map(|(k, v)| (normalize_header(k), v)).collect();

        let get = |field: &str| -> Option<String> {
            aliases_of(field).iter().find_map(|alias| {
                normalized
                    .iter()
                    .find(|(k, _)| k.as_str() == *alias)
                    .map(|(_, v)| v.trim().to_string())
                    .filter(|v| !v.is_empty())
            })
        };

        RawRequestRecord {
            id: get("id"),
            unit: get("unit"),
            material: get("material"),
            category: get("category"),
            vendor: get("vendor"),
            region: get("region"),
            project_id: get("project_id"),
            value: get("value"),
            delivery_date: get("delivery_date"),
            procurement_type: get("type"),
            priority: get("priority"),
            row_number,
        }
    }
}
