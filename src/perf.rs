use std::cell::Cell;
use std::time::Instant;

thread_local! {
    static PERF_DEPTH: Cell<u32> = Cell::new(0);
}

/// 性能统计 Guard：记录 elapsed_ms + 处理条数 + 嵌套深度
///
/// 使用方式：
/// ```ignore
/// let _perf = procurement_bundling::perf::PerfGuard::new("analyze_bundling_opportunities", requests.len());
/// // do work...
/// ```
pub struct PerfGuard {
    op: &'static str,
    item_count: usize,
    depth: u32,
    start: Instant,
}

impl PerfGuard {
    pub fn new(op: &'static str, item_count: usize) -> Self {
        let depth = PERF_DEPTH.with(|d| {
            let next = d.get().saturating_add(1);
            d.set(next);
            next
        });
        Self {
            op,
            item_count,
            depth,
            start: Instant::now(),
        }
    }
}

impl Drop for PerfGuard {
    fn drop(&mut self) {
        let elapsed_ms = self.start.elapsed().as_millis() as u64;

        tracing::info!(
            target: "perf",
            op = self.op,
            elapsed_ms,
            item_count = self.item_count,
            depth = self.depth,
            "done"
        );

        PERF_DEPTH.with(|d| d.set(d.get().saturating_sub(1)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_guards_restore_depth() {
        {
            let outer = PerfGuard::new("outer", 1);
            assert_eq!(outer.depth, 1);
            {
                let inner = PerfGuard::new("inner", 2);
                assert_eq!(inner.depth, 2);
            }
        }
        assert_eq!(PERF_DEPTH.with(|d| d.get()), 0);
    }
}
