// ==========================================
// 采购需求合并建议器 - 采购需求领域模型
// ==========================================
// 红线: 输入记录构造后不可变，引擎只读不写
// ==========================================

use crate::domain::types::{Priority, ProcurementType};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// ProcurementRequest - 采购需求
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcurementRequest {
    pub id: String,                 // 需求ID（单次运行内唯一）
    pub unit: String,               // 需求单位
    pub material: String,           // 物资描述
    pub category: String,           // 物资类别
    pub vendor: String,             // 供应商
    #[serde(default)]
    pub region: Option<String>,     // 区域（可选）
    #[serde(default)]
    pub project_id: Option<String>, // 项目ID（可选）
    pub value: f64,                 // 金额（同一批次内单位一致）
    pub delivery_date: NaiveDate,   // 交付日期
    #[serde(rename = "type")]
    pub procurement_type: ProcurementType,
    #[serde(default)]
    pub priority: Priority,         // 仅透传
}

impl ProcurementRequest {
    /// 供应商（空白视为缺失，不参与同供应商分组）
    pub fn vendor_key(&self) -> Option<&str> {
        Some(self.vendor.as_str()).filter(|s| !s.trim().is_empty())
    }

    /// 物资类别（空白视为缺失，不参与按类别分组）
    pub fn category_key(&self) -> Option<&str> {
        Some(self.category.as_str()).filter(|s| !s.trim().is_empty())
    }

    /// 区域（空串视为无区域）
    pub fn region_key(&self) -> Option<&str> {
        self.region.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }

    /// 项目ID（空串视为无项目）
    pub fn project_key(&self) -> Option<&str> {
        self.project_id.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_camel_case_record() {
        let raw = r#"{
            "id": "PR-001",
            "unit": "Unit Pembangkit A",
            "material": "Gas Turbine Spare Parts",
            "category": "Spare Parts",
            "vendor": "Siemens Energy",
            "projectId": "PRJ-9",
            "value": 12.5,
            "deliveryDate": "2026-03-01",
            "type": "OPEX",
            "priority": "High"
        }"#;

        let req: ProcurementRequest = serde_json::from_str(raw).unwrap();
        assert_eq!(req.procurement_type, ProcurementType::Opex);
        assert_eq!(req.project_key(), Some("PRJ-9"));
        assert_eq!(req.region_key(), None);
        assert_eq!(req.priority, Priority::High);
    }

    #[test]
    fn test_blank_optional_keys_are_none() {
        let req = ProcurementRequest {
            id: "PR-002".to_string(),
            unit: "U".to_string(),
            material: "M".to_string(),
            category: "C".to_string(),
            vendor: "V".to_string(),
            region: Some("  ".to_string()),
            project_id: Some(String::new()),
            value: 1.0,
            delivery_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            procurement_type: ProcurementType::Capex,
            priority: Priority::Low,
        };
        assert_eq!(req.region_key(), None);
        assert_eq!(req.project_key(), None);
        assert_eq!(req.vendor_key(), Some("V"));

        let blank = ProcurementRequest {
            vendor: " ".to_string(),
            category: String::new(),
            ..req
        };
        assert_eq!(blank.vendor_key(), None);
        assert_eq!(blank.category_key(), None);
    }
}
