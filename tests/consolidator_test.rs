// ==========================================
// GreedyConsolidator 单元测试
// ==========================================

mod helpers;

use helpers::test_data_builder::*;
use procurement_bundling::config::BundlingConfig;
use procurement_bundling::domain::{BundleGroup, BundleHeuristic};
use procurement_bundling::engine::{
    BundlingAdvisor, ConsolidationStrategy, GreedyConsolidator, SequenceIdGenerator,
};
use std::sync::Arc;

fn req(id: &str, value: f64) -> procurement_bundling::ProcurementRequest {
    RequestBuilder::new(id).value(value).build()
}

#[test]
fn test_empty_candidates() {
    assert!(GreedyConsolidator::new().consolidate(Vec::new()).is_empty());
}

#[test]
fn test_vendor_400_beats_region_320() {
    // 供应商包 10 x 40 = 400，区域包 8 x 40 = 320，共享 S
    let vendor = candidate(
        "vendor",
        BundleHeuristic::Vendor,
        vec![req("S", 20.0), req("V", 20.0)],
        10,
    );
    let region = candidate(
        "region",
        BundleHeuristic::RegionCategory,
        vec![req("S", 20.0), req("R1", 10.0), req("R2", 10.0)],
        8,
    );

    // 区域包排在前面输入，仍按综合优先度落败
    let accepted = GreedyConsolidator::new().consolidate(vec![region, vendor]);
    assert_eq!(accepted.len(), 1);
    assert_eq!(accepted[0].id, "vendor");
    assert!(!accepted.iter().any(|b| b.contains("R1")));
}

#[test]
fn test_ties_keep_input_order() {
    let first = candidate(
        "first",
        BundleHeuristic::Vendor,
        vec![req("A", 5.0), req("B", 5.0)],
        4,
    );
    let second = candidate(
        "second",
        BundleHeuristic::Project,
        vec![req("B", 5.0), req("C", 5.0)],
        4,
    );

    let accepted = GreedyConsolidator::new().consolidate(vec![first.clone(), second.clone()]);
    assert_eq!(accepted.len(), 1);
    assert_eq!(accepted[0].id, "first");

    let accepted = GreedyConsolidator::new().consolidate(vec![second, first]);
    assert_eq!(accepted[0].id, "second");
}

#[test]
fn test_disjoint_candidates_all_accepted_in_score_order() {
    let low = candidate(
        "low",
        BundleHeuristic::Vendor,
        vec![req("A", 1.0), req("B", 1.0)],
        4,
    );
    let high = candidate(
        "high",
        BundleHeuristic::Project,
        vec![req("C", 50.0), req("D", 50.0)],
        9,
    );
    let mid = candidate(
        "mid",
        BundleHeuristic::CategoryTime,
        vec![req("E", 6.0), req("F", 6.0)],
        7,
    );

    let accepted = GreedyConsolidator::new().consolidate(vec![low, high, mid]);
    let ids: Vec<&str> = accepted.iter().map(|b| b.id.as_str()).collect();
    assert_eq!(ids, vec!["high", "mid", "low"]);
}

#[test]
fn test_same_grouping_from_several_heuristics_survives_once() {
    let members = vec![req("A", 15.0), req("B", 15.0)];
    let candidates = vec![
        candidate("vendor", BundleHeuristic::Vendor, members.clone(), 9),
        candidate("project", BundleHeuristic::Project, members.clone(), 9),
        candidate("category", BundleHeuristic::CategoryTime, members.clone(), 9),
        candidate("region", BundleHeuristic::RegionCategory, members, 9),
    ];

    let accepted = GreedyConsolidator::new().consolidate(candidates);
    assert_eq!(accepted.len(), 1);
    assert_eq!(accepted[0].id, "vendor");
}

/// 只接受最大的一个候选包
struct LargestOnly;

impl ConsolidationStrategy for LargestOnly {
    fn consolidate(&self, candidates: Vec<BundleGroup>) -> Vec<BundleGroup> {
        candidates
            .into_iter()
            .max_by_key(|b| b.item_count())
            .into_iter()
            .collect()
    }
}

#[test]
fn test_strategy_is_pluggable() {
    let advisor = BundlingAdvisor::with_strategy(
        BundlingConfig::default(),
        Arc::new(SequenceIdGenerator::new(2026)),
        Box::new(LargestOnly),
    );

    let bundles = advisor.analyze(&sample_requests());
    assert_eq!(bundles.len(), 1);
    assert_eq!(bundles[0].item_count(), 3);
}
