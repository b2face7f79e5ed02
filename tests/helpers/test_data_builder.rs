// ==========================================
// 测试数据构建器 - 用于集成测试
// ==========================================

#![allow(dead_code)]

use chrono::NaiveDate;
use procurement_bundling::domain::{
    BundleCriterion, BundleGroup, BundleHeuristic, BundleStatus, Priority, ProcurementRequest,
    ProcurementType,
};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// ==========================================
// ProcurementRequest 构建器
// ==========================================
// 默认各维度互不相同，避免意外成包

pub struct RequestBuilder {
    id: String,
    unit: String,
    material: String,
    category: String,
    vendor: String,
    region: Option<String>,
    project_id: Option<String>,
    value: f64,
    delivery_date: NaiveDate,
    procurement_type: ProcurementType,
    priority: Priority,
}

impl RequestBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            unit: "Unit Pembangkit".to_string(),
            material: format!("Material {}", id),
            category: format!("Category {}", id),
            vendor: format!("Vendor {}", id),
            region: None,
            project_id: None,
            value: 1.0,
            delivery_date: date(2026, 1, 15),
            procurement_type: ProcurementType::Opex,
            priority: Priority::Medium,
        }
    }

    pub fn vendor(mut self, vendor: &str) -> Self {
        self.vendor = vendor.to_string();
        self
    }

    pub fn category(mut self, category: &str) -> Self {
        self.category = category.to_string();
        self
    }

    pub fn region(mut self, region: &str) -> Self {
        self.region = Some(region.to_string());
        self
    }

    pub fn project(mut self, project_id: &str) -> Self {
        self.project_id = Some(project_id.to_string());
        self
    }

    pub fn value(mut self, value: f64) -> Self {
        self.value = value;
        self
    }

    pub fn delivery(mut self, delivery_date: NaiveDate) -> Self {
        self.delivery_date = delivery_date;
        self
    }

    pub fn capex(mut self) -> Self {
        self.procurement_type = ProcurementType::Capex;
        self
    }

    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn build(self) -> ProcurementRequest {
        ProcurementRequest {
            id: self.id,
            unit: self.unit,
            material: self.material,
            category: self.category,
            vendor: self.vendor,
            region: self.region,
            project_id: self.project_id,
            value: self.value,
            delivery_date: self.delivery_date,
            procurement_type: self.procurement_type,
            priority: self.priority,
        }
    }
}

/// 手工构造候选包（用于合并器测试）
pub fn candidate(
    id: &str,
    heuristic: BundleHeuristic,
    requests: Vec<ProcurementRequest>,
    efficiency: u32,
) -> BundleGroup {
    let total_value = requests.iter().map(|r| r.value).sum();
    BundleGroup {
        id: id.to_string(),
        name: id.to_string(),
        heuristic,
        criteria: vec![BundleCriterion::ManualSelection],
        requests,
        total_value,
        estimated_efficiency: efficiency,
        ai_insight: String::new(),
        status: BundleStatus::Draft,
    }
}

/// 成员ID（排序后）
pub fn sorted_ids(bundle: &BundleGroup) -> Vec<String> {
    let mut ids: Vec<String> = bundle.request_ids().into_iter().map(str::to_string).collect();
    ids.sort();
    ids
}

/// 电力行业样例需求（含供应商/项目/区域/类别交叉）
pub fn sample_requests() -> Vec<ProcurementRequest> {
    vec![
        RequestBuilder::new("PR-001")
            .vendor("Siemens Energy")
            .category("Gas Turbine Parts")
            .region("Jawa")
            .project("PRJ-A")
            .value(12.5)
            .delivery(date(2026, 2, 10))
            .build(),
        RequestBuilder::new("PR-002")
            .vendor("Siemens Energy")
            .category("Control Systems")
            .value(7.3)
            .delivery(date(2026, 3, 5))
            .build(),
        RequestBuilder::new("PR-003")
            .vendor("Siemens Energy")
            .category("Gas Turbine Parts")
            .region("Jawa")
            .value(18.2)
            .delivery(date(2026, 2, 25))
            .build(),
        RequestBuilder::new("PR-004")
            .vendor("ABB")
            .category("Transformers")
            .region("Sumatera")
            .project("PRJ-A")
            .value(25.0)
            .delivery(date(2026, 4, 1))
            .capex()
            .build(),
        RequestBuilder::new("PR-005")
            .vendor("Hitachi Energy")
            .category("Transformers")
            .region("Sumatera")
            .value(22.0)
            .delivery(date(2026, 4, 20))
            .capex()
            .build(),
        RequestBuilder::new("PR-006")
            .vendor("Schneider Electric")
            .category("Cables")
            .value(3.1)
            .delivery(date(2026, 1, 5))
            .build(),
        RequestBuilder::new("PR-007")
            .vendor("Prysmian")
            .category("Cables")
            .value(2.4)
            .delivery(date(2026, 5, 30))
            .build(),
    ]
}
