// ==========================================
// 采购需求合并建议器 - 分组启发式
// ==========================================
// 四轮相互独立的分组:
// 1) 同供应商  2) 同项目  3) 同类别+同采购类型+交付时间窗口  4) 同区域+同类别
// 红线: 不足 min_bundle_size 的分组不成包
// 说明: 各轮候选允许重叠，去重由合并器负责
// ==========================================

use crate::config::BundlingConfig;
use crate::domain::{
    sum_value, BundleGroup, BundleHeuristic, BundleStatus, ProcurementRequest, ProcurementType,
};
use crate::engine::efficiency::EfficiencyScorer;
use crate::engine::id_gen::IdGenerator;
use crate::engine::insight::InsightGenerator;
use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;

/// 按键分区，保持键的首次出现顺序及组内输入顺序
///
/// `key_fn` 返回 None 的记录不参与分区
pub fn partition_by<'a, K, F>(
    requests: &'a [ProcurementRequest],
    key_fn: F,
) -> Vec<(K, Vec<&'a ProcurementRequest>)>
where
    K: Eq + Hash + Clone,
    F: Fn(&ProcurementRequest) -> Option<K>,
{
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut groups: Vec<(K, Vec<&'a ProcurementRequest>)> = Vec::new();

    for request in requests {
        let Some(key) = key_fn(request) else {
            continue;
        };
        match index.get(&key) {
            Some(&pos) => groups[pos].1.push(request),
            None => {
                index.insert(key.clone(), groups.len());
                groups.push((key, vec![request]));
            }
        }
    }

    groups
}

/// 交付时间窗口切分
///
/// 按交付日期升序（稳定排序）遍历；当前记录距子组首条日期超过 `window_days`
/// 时开启新子组。窗口锚定子组起点，不是滚动窗口。
pub fn split_by_time_window<'a>(
    members: &[&'a ProcurementRequest],
    window_days: i64,
) -> Vec<Vec<&'a ProcurementRequest>> {
    let mut sorted: Vec<&'a ProcurementRequest> = members.to_vec();
    sorted.sort_by_key(|r| r.delivery_date);

    let mut windows: Vec<Vec<&'a ProcurementRequest>> = Vec::new();
    let mut current: Vec<&'a ProcurementRequest> = Vec::new();

    for request in sorted {
        let within = current
            .first()
            .map(|anchor| (request.delivery_date - anchor.delivery_date).num_days() <= window_days)
            .unwrap_or(false);

        if !within && !current.is_empty() {
            windows.push(std::mem::take(&mut current));
        }
        current.push(request);
    }

    if !current.is_empty() {
        windows.push(current);
    }

    windows
}

// ==========================================
// GroupingHeuristics - 分组启发式集合
// ==========================================
pub struct GroupingHeuristics {
    min_bundle_size: usize,
    time_window_days: i64,
    scorer: EfficiencyScorer,
    insight: InsightGenerator,
    id_gen: Arc<dyn IdGenerator>,
}

impl GroupingHeuristics {
    pub fn new(config: &BundlingConfig, id_gen: Arc<dyn IdGenerator>) -> Self {
        let scorer = EfficiencyScorer::new(config);
        Self {
            min_bundle_size: config.min_bundle_size,
            time_window_days: config.time_window_days,
            insight: InsightGenerator::new(scorer.clone()),
            scorer,
            id_gen,
        }
    }

    /// 依次执行四轮分组，按轮次顺序拼接候选
    pub fn all_candidates(&self, requests: &[ProcurementRequest]) -> Vec<BundleGroup> {
        let by_vendor = self.by_vendor(requests);
        let by_project = self.by_project(requests);
        let by_category_time = self.by_category_time(requests);
        let by_region = self.by_region_category(requests);

        tracing::debug!(
            vendor = by_vendor.len(),
            project = by_project.len(),
            category_time = by_category_time.len(),
            region_category = by_region.len(),
            "候选合并包生成完成"
        );

        let mut candidates = Vec::with_capacity(
            by_vendor.len() + by_project.len() + by_category_time.len() + by_region.len(),
        );
        candidates.extend(by_vendor);
        candidates.extend(by_project);
        candidates.extend(by_category_time);
        candidates.extend(by_region);
        candidates
    }

    /// 同供应商（供应商为空的需求不参与）
    pub fn by_vendor(&self, requests: &[ProcurementRequest]) -> Vec<BundleGroup> {
        partition_by(requests, |r| r.vendor_key().map(str::to_string))
            .into_iter()
            .filter(|(_, members)| members.len() >= self.min_bundle_size)
            .map(|(vendor, members)| {
                self.build(
                    BundleHeuristic::Vendor,
                    format!("{}-{}", BundleHeuristic::Vendor.id_prefix(), vendor),
                    format!("{} Bundle", vendor),
                    &members,
                )
            })
            .collect()
    }

    /// 同项目（无项目的需求不参与）
    pub fn by_project(&self, requests: &[ProcurementRequest]) -> Vec<BundleGroup> {
        partition_by(requests, |r| r.project_key().map(str::to_string))
            .into_iter()
            .filter(|(_, members)| members.len() >= self.min_bundle_size)
            .map(|(project_id, members)| {
                self.build(
                    BundleHeuristic::Project,
                    format!("{}-{}", BundleHeuristic::Project.id_prefix(), project_id),
                    format!("Project {} Bundle", project_id),
                    &members,
                )
            })
            .collect()
    }

    /// 同类别 + 同采购类型，再按交付时间窗口切分
    pub fn by_category_time(&self, requests: &[ProcurementRequest]) -> Vec<BundleGroup> {
        let mut bundles = Vec::new();

        let partitions: Vec<((String, ProcurementType), Vec<&ProcurementRequest>)> =
            partition_by(requests, |r| {
                r.category_key()
                    .map(|category| (category.to_string(), r.procurement_type))
            });

        for ((category, kind), members) in partitions {
            if members.len() < self.min_bundle_size {
                continue;
            }

            for window in split_by_time_window(&members, self.time_window_days) {
                if window.len() < self.min_bundle_size {
                    continue;
                }
                let period = window[0].delivery_date.format("%b %Y");
                let heuristic = BundleHeuristic::CategoryTime;
                let suffix = self.id_gen.next_suffix();
                bundles.push(self.build(
                    heuristic,
                    format!("{}-{}-{}-{}", heuristic.id_prefix(), category, kind, suffix),
                    format!("{} {} - {}", category, kind, period),
                    &window,
                ));
            }
        }

        bundles
    }

    /// 同区域 + 同类别（无区域的需求不参与）
    pub fn by_region_category(&self, requests: &[ProcurementRequest]) -> Vec<BundleGroup> {
        partition_by(requests, |r| {
            let region = r.region_key()?;
            let category = r.category_key()?;
            Some((region.to_string(), category.to_string()))
        })
        .into_iter()
        .filter(|(_, members)| members.len() >= self.min_bundle_size)
        .map(|((region, category), members)| {
            let heuristic = BundleHeuristic::RegionCategory;
            self.build(
                heuristic,
                format!("{}-{}-{}", heuristic.id_prefix(), region, category),
                format!("{} {} Bundle", region, category),
                &members,
            )
        })
        .collect()
    }

    /// 人工指定成员生成合并包
    pub fn manual(&self, requests: &[ProcurementRequest], bundle_name: &str) -> BundleGroup {
        let members: Vec<&ProcurementRequest> = requests.iter().collect();
        let heuristic = BundleHeuristic::Manual;
        self.build(
            heuristic,
            format!("{}-{}", heuristic.id_prefix(), self.id_gen.next_suffix()),
            bundle_name.to_string(),
            &members,
        )
    }

    fn build(
        &self,
        heuristic: BundleHeuristic,
        id: String,
        name: String,
        members: &[&ProcurementRequest],
    ) -> BundleGroup {
        let requests: Vec<ProcurementRequest> = members.iter().map(|r| (*r).clone()).collect();
        let total_value = sum_value(&requests);

        BundleGroup {
            id,
            name,
            heuristic,
            criteria: heuristic.criteria(),
            estimated_efficiency: self.scorer.score(requests.len(), total_value),
            ai_insight: self.insight.generate(&requests),
            total_value,
            requests,
            status: BundleStatus::Draft,
        }
    }
}
