// ==========================================
// 采购需求合并建议器 - 合并建议 API
// ==========================================
// 职责: 边界校验 -> 调用引擎 -> 汇总报告
// 说明: 引擎对合法输入全部有定义；非法输入在此拒绝，不产出失真结果
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::config::BundlingConfig;
use crate::domain::{sum_value, BundleGroup, ProcurementRequest};
use crate::engine::{BundlingAdvisor, IdGenerator, SystemIdGenerator};
use crate::importer::{DqValidator, ImportReport, RequestImporter};
use serde::Serialize;
use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

/// 合并分析汇总
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BundlingSummary {
    pub request_count: usize,
    pub bundle_count: usize,
    pub bundled_count: usize,
    pub unbundled_count: usize,
    pub total_value: f64,
    pub bundled_value: f64,
    /// 入包金额占比 [0, 1]；总金额为 0 时为 0
    pub value_coverage: f64,
}

/// 合并分析报告
#[derive(Debug, Clone, Serialize)]
pub struct BundlingReport {
    pub bundles: Vec<BundleGroup>,
    pub unbundled: Vec<ProcurementRequest>,
    pub summary: BundlingSummary,
}

// ==========================================
// BundlingApi - 合并建议 API
// ==========================================
pub struct BundlingApi {
    advisor: BundlingAdvisor,
    validator: DqValidator,
    importer: RequestImporter,
}

impl BundlingApi {
    /// 使用系统编号生成器
    pub fn new(config: BundlingConfig) -> ApiResult<Self> {
        Self::with_id_generator(config, Arc::new(SystemIdGenerator::new()))
    }

    /// 指定编号生成器（测试注入顺序号）
    pub fn with_id_generator(
        config: BundlingConfig,
        id_gen: Arc<dyn IdGenerator>,
    ) -> ApiResult<Self> {
        config.validate()?;
        Ok(Self {
            advisor: BundlingAdvisor::new(config, id_gen),
            validator: DqValidator,
            importer: RequestImporter::new(),
        })
    }

    pub fn config(&self) -> &BundlingConfig {
        self.advisor.config()
    }

    fn ensure_valid(&self, requests: &[ProcurementRequest]) -> ApiResult<()> {
        let violations = self.validator.validate_requests(requests);
        if violations.is_empty() {
            return Ok(());
        }

        for v in &violations {
            tracing::warn!("{}", v);
        }
        Err(ApiError::ValidationError {
            message: format!("{} 条需求记录不合法", violations.len()),
            violations,
        })
    }

    /// 分析合并机会
    ///
    /// # 错误
    /// - ValidationError: 空ID / 重复ID / 金额为负或非有限数
    pub fn analyze(&self, requests: &[ProcurementRequest]) -> ApiResult<BundlingReport> {
        self.ensure_valid(requests)?;

        let bundles = self.advisor.analyze(requests);
        let unbundled = self.advisor.unbundled(requests, &bundles);

        let total_value = sum_value(requests);
        let bundled_value: f64 = bundles.iter().map(|b| b.total_value).sum();
        let bundled_count: usize = bundles.iter().map(|b| b.item_count()).sum();

        let summary = BundlingSummary {
            request_count: requests.len(),
            bundle_count: bundles.len(),
            bundled_count,
            unbundled_count: unbundled.len(),
            total_value,
            bundled_value,
            value_coverage: if total_value > 0.0 {
                bundled_value / total_value
            } else {
                0.0
            },
        };

        Ok(BundlingReport {
            bundles,
            unbundled,
            summary,
        })
    }

    /// 人工合并包
    ///
    /// # 错误
    /// - InvalidInput: 名称为空 / 成员不足 / 成员ID重复
    /// - ValidationError: 成员记录不合法
    pub fn create_manual_bundle(
        &self,
        requests: &[ProcurementRequest],
        bundle_name: &str,
    ) -> ApiResult<BundleGroup> {
        let name = bundle_name.trim();
        if name.is_empty() {
            return Err(ApiError::InvalidInput("合并包名称不能为空".to_string()));
        }

        let min = self.config().min_bundle_size;
        if requests.len() < min {
            return Err(ApiError::InvalidInput(format!(
                "合并包至少需要 {} 条需求，实际 {}",
                min,
                requests.len()
            )));
        }

        let distinct: HashSet<&str> = requests.iter().map(|r| r.id.as_str()).collect();
        if distinct.len() != requests.len() {
            return Err(ApiError::InvalidInput("合并包成员ID重复".to_string()));
        }

        self.ensure_valid(requests)?;

        let bundle = self.advisor.manual_bundle(requests, name);
        tracing::info!(
            bundle_id = %bundle.id,
            item_count = bundle.item_count(),
            total_value = bundle.total_value,
            "人工合并包已创建"
        );
        Ok(bundle)
    }

    /// 寻源事件编号
    pub fn generate_sourcing_event_id(&self) -> String {
        self.advisor.sourcing_event_id()
    }

    /// 合并理由
    pub fn generate_insight(&self, requests: &[ProcurementRequest]) -> String {
        self.advisor.insight(requests)
    }

    /// 未入包需求
    pub fn unbundled_requests(
        &self,
        all_requests: &[ProcurementRequest],
        bundles: &[BundleGroup],
    ) -> Vec<ProcurementRequest> {
        self.advisor.unbundled(all_requests, bundles)
    }

    /// 导入需求文件并分析
    ///
    /// 未通过 DQ 校验的行已在导入阶段剔除，见 ImportReport.violations
    pub fn import_and_analyze(
        &self,
        file_path: &Path,
    ) -> ApiResult<(ImportReport, BundlingReport)> {
        let import = self.importer.import_file(file_path)?;
        let report = self.analyze(&import.requests)?;
        Ok((import, report))
    }
}
