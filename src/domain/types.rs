// ==========================================
// 采购需求合并建议器 - 领域类型定义
// ==========================================
// 序列化格式与上游需求清单保持一致（CAPEX/OPEX, High/Medium/Low）
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 采购类型 (Procurement Type)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProcurementType {
    #[serde(rename = "CAPEX")]
    Capex, // 资本性支出
    #[serde(rename = "OPEX")]
    Opex, // 运营性支出
}

impl fmt::Display for ProcurementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcurementType::Capex => write!(f, "CAPEX"),
            ProcurementType::Opex => write!(f, "OPEX"),
        }
    }
}

impl ProcurementType {
    /// 从字符串解析（大小写不敏感）
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "CAPEX" => Some(ProcurementType::Capex),
            "OPEX" => Some(ProcurementType::Opex),
            _ => None,
        }
    }
}

// ==========================================
// 优先级 (Priority)
// ==========================================
// 仅透传，不参与分组
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Priority::High => write!(f, "High"),
            Priority::Medium => write!(f, "Medium"),
            Priority::Low => write!(f, "Low"),
        }
    }
}

impl Priority {
    /// 从字符串解析（大小写不敏感）
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "high" => Some(Priority::High),
            "medium" => Some(Priority::Medium),
            "low" => Some(Priority::Low),
            _ => None,
        }
    }
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Medium
    }
}

// ==========================================
// 合并包状态 (Bundle Status)
// ==========================================
// 本模块只产出 Draft；后续流转由下游工作流负责
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BundleStatus {
    Draft,
    Finalized,
    #[serde(rename = "Converted to Sourcing Event")]
    ConvertedToSourcingEvent,
}

impl fmt::Display for BundleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BundleStatus::Draft => write!(f, "Draft"),
            BundleStatus::Finalized => write!(f, "Finalized"),
            BundleStatus::ConvertedToSourcingEvent => write!(f, "Converted to Sourcing Event"),
        }
    }
}

impl Default for BundleStatus {
    fn default() -> Self {
        BundleStatus::Draft
    }
}

// ==========================================
// 合并依据标签 (Bundle Criterion)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BundleCriterion {
    #[serde(rename = "Same Vendor")]
    SameVendor,
    #[serde(rename = "Volume Discount Potential")]
    VolumeDiscountPotential,
    #[serde(rename = "Same Project")]
    SameProject,
    #[serde(rename = "Funding Source Alignment")]
    FundingSourceAlignment,
    #[serde(rename = "Same Category")]
    SameCategory,
    #[serde(rename = "Similar Delivery Period")]
    SimilarDeliveryPeriod,
    #[serde(rename = "Procurement Type Match")]
    ProcurementTypeMatch,
    #[serde(rename = "Same Region")]
    SameRegion,
    #[serde(rename = "Logistics Optimization")]
    LogisticsOptimization,
    #[serde(rename = "Category Match")]
    CategoryMatch,
    #[serde(rename = "Manual Selection")]
    ManualSelection,
}

impl BundleCriterion {
    pub fn as_str(&self) -> &'static str {
        match self {
            BundleCriterion::SameVendor => "Same Vendor",
            BundleCriterion::VolumeDiscountPotential => "Volume Discount Potential",
            BundleCriterion::SameProject => "Same Project",
            BundleCriterion::FundingSourceAlignment => "Funding Source Alignment",
            BundleCriterion::SameCategory => "Same Category",
            BundleCriterion::SimilarDeliveryPeriod => "Similar Delivery Period",
            BundleCriterion::ProcurementTypeMatch => "Procurement Type Match",
            BundleCriterion::SameRegion => "Same Region",
            BundleCriterion::LogisticsOptimization => "Logistics Optimization",
            BundleCriterion::CategoryMatch => "Category Match",
            BundleCriterion::ManualSelection => "Manual Selection",
        }
    }
}

impl fmt::Display for BundleCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ==========================================
// 分组启发式 (Bundle Heuristic)
// ==========================================
// 记录候选包由哪一轮分组产生
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BundleHeuristic {
    Vendor,
    Project,
    CategoryTime,
    RegionCategory,
    Manual,
}

impl BundleHeuristic {
    /// 用作包 ID 前缀
    pub fn id_prefix(&self) -> &'static str {
        match self {
            BundleHeuristic::Vendor => "vendor",
            BundleHeuristic::Project => "project",
            BundleHeuristic::CategoryTime => "category",
            BundleHeuristic::RegionCategory => "region",
            BundleHeuristic::Manual => "manual",
        }
    }

    /// 该启发式产出的依据标签（有序）
    pub fn criteria(&self) -> Vec<BundleCriterion> {
        match self {
            BundleHeuristic::Vendor => vec![
                BundleCriterion::SameVendor,
                BundleCriterion::VolumeDiscountPotential,
            ],
            BundleHeuristic::Project => vec![
                BundleCriterion::SameProject,
                BundleCriterion::FundingSourceAlignment,
            ],
            BundleHeuristic::CategoryTime => vec![
                BundleCriterion::SameCategory,
                BundleCriterion::SimilarDeliveryPeriod,
                BundleCriterion::ProcurementTypeMatch,
            ],
            BundleHeuristic::RegionCategory => vec![
                BundleCriterion::SameRegion,
                BundleCriterion::LogisticsOptimization,
                BundleCriterion::CategoryMatch,
            ],
            BundleHeuristic::Manual => vec![BundleCriterion::ManualSelection],
        }
    }
}

impl fmt::Display for BundleHeuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BundleHeuristic::Vendor => write!(f, "vendor"),
            BundleHeuristic::Project => write!(f, "project"),
            BundleHeuristic::CategoryTime => write!(f, "category_time"),
            BundleHeuristic::RegionCategory => write!(f, "region_category"),
            BundleHeuristic::Manual => write!(f, "manual"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_procurement_type_parse() {
        assert_eq!(ProcurementType::from_str("capex"), Some(ProcurementType::Capex));
        assert_eq!(ProcurementType::from_str(" OPEX "), Some(ProcurementType::Opex));
        assert_eq!(ProcurementType::from_str("both"), None);
    }

    #[test]
    fn test_priority_parse() {
        assert_eq!(Priority::from_str("HIGH"), Some(Priority::High));
        assert_eq!(Priority::from_str("low"), Some(Priority::Low));
        assert_eq!(Priority::from_str(""), None);
    }

    #[test]
    fn test_criterion_serializes_as_tag_text() {
        let json = serde_json::to_string(&BundleCriterion::SimilarDeliveryPeriod).unwrap();
        assert_eq!(json, "\"Similar Delivery Period\"");
    }

    #[test]
    fn test_status_serializes_as_label() {
        let json = serde_json::to_string(&BundleStatus::ConvertedToSourcingEvent).unwrap();
        assert_eq!(json, "\"Converted to Sourcing Event\"");
        assert_eq!(BundleStatus::default(), BundleStatus::Draft);
    }
}
