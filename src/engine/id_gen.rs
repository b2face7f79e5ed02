// ==========================================
// 采购需求合并建议器 - 编号生成
// ==========================================
// 职责: 包ID后缀、寻源事件编号的生成入口
// 说明: 生产环境用时钟 + 随机数；测试注入顺序号以获得确定性输出
// ==========================================

use chrono::{Datelike, Utc};
use rand::Rng;
use std::sync::atomic::{AtomicU64, Ordering};

/// 编号生成 Trait
pub trait IdGenerator: Send + Sync {
    /// 包ID后缀（时间窗口包、人工包使用），同一生成器内不重复
    fn next_suffix(&self) -> String;

    /// 寻源事件编号: SRC-{年份}-{4位数字}
    fn sourcing_event_id(&self) -> String;
}

// ==========================================
// SystemIdGenerator - 时钟 + 随机数
// ==========================================
#[derive(Debug, Default)]
pub struct SystemIdGenerator {
    seq: AtomicU64,
}

impl SystemIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SystemIdGenerator {
    fn next_suffix(&self) -> String {
        // 同一毫秒内多次调用依靠序号区分
        let seq = self.seq.fetch_add(1, Ordering::Relaxed);
        format!("{}-{}", Utc::now().timestamp_millis(), seq)
    }

    fn sourcing_event_id(&self) -> String {
        let year = Utc::now().year();
        let n: u32 = rand::thread_rng().gen_range(0..10_000);
        format!("SRC-{}-{:04}", year, n)
    }
}

// ==========================================
// SequenceIdGenerator - 确定性顺序号
// ==========================================
#[derive(Debug)]
pub struct SequenceIdGenerator {
    year: i32,
    counter: AtomicU64,
}

impl SequenceIdGenerator {
    pub fn new(year: i32) -> Self {
        Self {
            year,
            counter: AtomicU64::new(0),
        }
    }

    fn next(&self) -> u64 {
        self.counter.fetch_add(1, Ordering::Relaxed) + 1
    }
}

impl IdGenerator for SequenceIdGenerator {
    fn next_suffix(&self) -> String {
        format!("{:04}", self.next())
    }

    fn sourcing_event_id(&self) -> String {
        format!("SRC-{}-{:04}", self.year, self.next() % 10_000)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn assert_sourcing_format(id: &str) {
        let parts: Vec<&str> = id.split('-').collect();
        assert_eq!(parts.len(), 3, "{}", id);
        assert_eq!(parts[0], "SRC");
        assert_eq!(parts[1].len(), 4);
        assert_eq!(parts[2].len(), 4);
        assert!(parts[2].chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_system_suffixes_unique() {
        let gen = SystemIdGenerator::new();
        let ids: HashSet<String> = (0..500).map(|_| gen.next_suffix()).collect();
        assert_eq!(ids.len(), 500);
    }

    #[test]
    fn test_system_sourcing_format() {
        let gen = SystemIdGenerator::new();
        for _ in 0..50 {
            assert_sourcing_format(&gen.sourcing_event_id());
        }
    }

    #[test]
    fn test_sequence_is_deterministic() {
        let gen = SequenceIdGenerator::new(2026);
        assert_eq!(gen.next_suffix(), "0001");
        assert_eq!(gen.next_suffix(), "0002");
        assert_eq!(gen.sourcing_event_id(), "SRC-2026-0003");
    }
}
