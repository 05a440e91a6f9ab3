// crates/domain/src/statistics/none.rs
use line_filter_shared_kernel::{ClassifiedLine, DomainResult};

use super::StatsCollector;

/// Collects nothing and reports nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoStats;

impl StatsCollector for NoStats {
    fn accept(&mut self, _line: ClassifiedLine<'_>) -> DomainResult<()> {
        Ok(())
    }

    fn report(&self) -> String {
        String::new()
    }
}
