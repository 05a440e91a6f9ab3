// crates/domain/src/statistics/mod.rs
//! Statistics collectors fed with every successfully written line.

mod full;
mod none;
mod short;

pub use full::FullStats;
pub use none::NoStats;
pub use short::ShortStats;

use line_filter_shared_kernel::{ClassifiedLine, DomainResult};

use crate::options::StatsMode;

/// Common interface of the statistics variants.
pub trait StatsCollector {
    /// Record one line that reached its output file.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::NumberParse`](line_filter_shared_kernel::DomainError::NumberParse)
    /// when a numeric line cannot be re-parsed; the value is left out of the
    /// aggregates and the collector stays usable.
    fn accept(&mut self, line: ClassifiedLine<'_>) -> DomainResult<()>;

    /// Render the final report. Empty when nothing is to be printed.
    fn report(&self) -> String;
}

/// Build the collector for `mode`.
pub fn collector_for(mode: StatsMode) -> Box<dyn StatsCollector> {
    match mode {
        StatsMode::None => Box::new(NoStats),
        StatsMode::Short => Box::new(ShortStats::default()),
        StatsMode::Full => Box::new(FullStats::default()),
    }
}
