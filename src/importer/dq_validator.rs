// ==========================================
// 采购需求合并建议器 - 数据质量校验器实现
// ==========================================
// 职责: 记录级 DQ 校验 + 类型转换
// 规则:
// - ERROR: 主键缺失 / 金额非法 / 日期非法 / 采购类型非法 / 优先级非法
// - CONFLICT: 同批次主键重复
// - WARNING: 供应商或类别为空（记录保留）
// - INFO: 优先级缺失，取 Medium
// ==========================================

use crate::domain::{DqLevel, DqViolation, Priority, ProcurementRequest, ProcurementType};
use crate::importer::field_mapper::RawRequestRecord;
use chrono::NaiveDate;
use std::collections::HashSet;

/// 可接受的日期格式
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y%m%d", "%Y/%m/%d"];
const DATE_FORMATS_HINT: &str = "YYYY-MM-DD / YYYYMMDD / YYYY/MM/DD";

/// 解析交付日期
pub fn parse_delivery_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
}

pub struct DqValidator;

impl DqValidator {
    fn violation(
        row_number: usize,
        request_id: Option<&str>,
        level: DqLevel,
        field: &str,
        message: impl Into<String>,
    ) -> DqViolation {
        DqViolation {
            row_number,
            request_id: request_id.map(str::to_string),
            level,
            field: field.to_string(),
            message: message.into(),
        }
    }

    /// 校验并转换一批记录
    ///
    /// # 返回
    /// (通过的需求, 全部违规)；存在 ERROR/CONFLICT 的记录不进入结果
    ///
    /// 只有通过校验的记录才占用需求ID：被拒绝的记录不会让后续同ID的合法记录冲突
    pub fn validate_records(
        &self,
        records: &[RawRequestRecord],
    ) -> (Vec<ProcurementRequest>, Vec<DqViolation>) {
        let mut accepted = Vec::new();
        let mut violations = Vec::new();
        let mut accepted_ids: HashSet<String> = HashSet::new();

        for record in records {
            let mut row_violations = Vec::new();
            let converted = self.convert(record, &accepted_ids, &mut row_violations);

            if let Some(req) = converted {
                if !row_violations.iter().any(|v| v.level.is_blocking()) {
                    accepted_ids.insert(req.id.clone());
                    accepted.push(req);
                }
            }
            violations.extend(row_violations);
        }

        (accepted, violations)
    }

    fn convert(
        &self,
        record: &RawRequestRecord,
        accepted_ids: &HashSet<String>,
        out: &mut Vec<DqViolation>,
    ) -> Option<ProcurementRequest> {
        let row = record.row_number;

        // 主键
        let Some(id) = record.id.clone() else {
            out.push(Self::violation(row, None, DqLevel::Error, "id", "主键缺失"));
            return None;
        };
        let rid = Some(id.as_str());

        if accepted_ids.contains(&id) {
            out.push(Self::violation(
                row,
                rid,
                DqLevel::Conflict,
                "id",
                "重复需求ID（同批次内）",
            ));
        }

        // 金额
        let value = match record.value.as_deref() {
            None => {
                out.push(Self::violation(row, rid, DqLevel::Error, "value", "金额缺失"));
                None
            }
            Some(raw) => match raw.replace(',', "").parse::<f64>() {
                Ok(v) if v.is_finite() && v >= 0.0 => Some(v),
                Ok(v) => {
                    let message = format!("金额必须为非负有限数: {}", v);
                    out.push(Self::violation(row, rid, DqLevel::Error, "value", message));
                    None
                }
                Err(_) => {
                    let message = format!("金额无法解析: {}", raw);
                    out.push(Self::violation(row, rid, DqLevel::Error, "value", message));
                    None
                }
            },
        };

        // 交付日期
        let delivery_date = match record.delivery_date.as_deref() {
            None => {
                out.push(Self::violation(
                    row,
                    rid,
                    DqLevel::Error,
                    "delivery_date",
                    "交付日期缺失",
                ));
                None
            }
            Some(raw) => {
                let parsed = parse_delivery_date(raw);
                if parsed.is_none() {
                    out.push(Self::violation(
                        row,
                        rid,
                        DqLevel::Error,
                        "delivery_date",
                        format!("日期格式错误: 期望 {}，实际 {}", DATE_FORMATS_HINT, raw),
                    ));
                }
                parsed
            }
        };

        // 采购类型
        let procurement_type = match record.procurement_type.as_deref() {
            None => {
                out.push(Self::violation(row, rid, DqLevel::Error, "type", "采购类型缺失"));
                None
            }
            Some(raw) => {
                let parsed = ProcurementType::from_str(raw);
                if parsed.is_none() {
                    out.push(Self::violation(
                        row,
                        rid,
                        DqLevel::Error,
                        "type",
                        format!("采购类型非法: {}（仅支持 CAPEX/OPEX）", raw),
                    ));
                }
                parsed
            }
        };

        // 优先级
        let priority = match record.priority.as_deref() {
            None => {
                out.push(Self::violation(
                    row,
                    rid,
                    DqLevel::Info,
                    "priority",
                    "优先级缺失，设为 Medium",
                ));
                Some(Priority::Medium)
            }
            Some(raw) => {
                let parsed = Priority::from_str(raw);
                if parsed.is_none() {
                    out.push(Self::violation(
                        row,
                        rid,
                        DqLevel::Error,
                        "priority",
                        format!("优先级非法: {}（仅支持 High/Medium/Low）", raw),
                    ));
                }
                parsed
            }
        };

        // 分组维度：记录保留，但不参与对应维度的分组
        for (field, v) in [("vendor", &record.vendor), ("category", &record.category)] {
            if v.is_none() {
                out.push(Self::violation(
                    row,
                    rid,
                    DqLevel::Warning,
                    field,
                    format!("{} 为空，不参与该维度分组", field),
                ));
            }
        }

        Some(ProcurementRequest {
            unit: record.unit.clone().unwrap_or_default(),
            material: record.material.clone().unwrap_or_default(),
            category: record.category.clone().unwrap_or_default(),
            vendor: record.vendor.clone().unwrap_or_default(),
            region: record.region.clone(),
            project_id: record.project_id.clone(),
            value: value?,
            delivery_date: delivery_date?,
            procurement_type: procurement_type?,
            priority: priority?,
            id,
        })
    }

    /// 校验已构造的需求（内存输入）
    ///
    /// 行号为输入序号（从 1 开始）；只产出阻断级违规
    pub fn validate_requests(&self, requests: &[ProcurementRequest]) -> Vec<DqViolation> {
        let mut violations = Vec::new();
        let mut seen_ids: HashSet<&str> = HashSet::new();

        for (idx, req) in requests.iter().enumerate() {
            let row = idx + 1;
            let id = req.id.trim();

            if id.is_empty() {
                violations.push(Self::violation(row, None, DqLevel::Error, "id", "主键缺失"));
            } else if !seen_ids.insert(id) {
                violations.push(Self::violation(
                    row,
                    Some(id),
                    DqLevel::Conflict,
                    "id",
                    "重复需求ID（同批次内）",
                ));
            }

            if !req.value.is_finite() || req.value < 0.0 {
                violations.push(Self::violation(
                    row,
                    Some(id),
                    DqLevel::Error,
                    "value",
                    format!("金额必须为非负有限数: {}", req.value),
                ));
            }
        }

        violations
    }
}
