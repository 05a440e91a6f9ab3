// crates/domain/src/statistics/short.rs
use std::fmt;

use line_filter_shared_kernel::{ClassifiedLine, DomainResult, ValueType};

use super::StatsCollector;

/// Per-category line counters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShortStats {
    counts: [u64; 3],
}

impl ShortStats {
    pub fn count(&self, value_type: ValueType) -> u64 {
        self.counts[value_type.index()]
    }
}

impl StatsCollector for ShortStats {
    fn accept(&mut self, line: ClassifiedLine<'_>) -> DomainResult<()> {
        self.counts[line.value_type.index()] += 1;
        Ok(())
    }

    fn report(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ShortStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Integers written: {}", self.count(ValueType::Integer))?;
        writeln!(f, "Floats written:   {}", self.count(ValueType::Float))?;
        writeln!(f, "Strings written:  {}", self.count(ValueType::String))
    }
}
