// crates/domain/src/statistics/full.rs
use std::{fmt, ops::AddAssign, str::FromStr};

use bigdecimal::BigDecimal;
use line_filter_shared_kernel::{ClassifiedLine, DomainError, DomainResult, ValueType};
use num_bigint::BigInt;

use super::StatsCollector;

/// Significant digits kept when dividing for the average (IEEE decimal128).
const AVERAGE_PRECISION: u64 = 34;

/// Running count/min/max/sum over one numeric category.
#[derive(Debug, Clone, Default)]
struct NumericSummary<T> {
    count: u64,
    min: Option<T>,
    max: Option<T>,
    sum: T,
}

impl<T> NumericSummary<T>
where
    T: Ord + Clone + for<'a> AddAssign<&'a T>,
{
    fn record(&mut self, value: T) {
        if self.min.as_ref().is_none_or(|min| value < *min) {
            self.min = Some(value.clone());
        }
        if self.max.as_ref().is_none_or(|max| value > *max) {
            self.max = Some(value.clone());
        }
        self.sum += &value;
        self.count += 1;
    }

    fn average(&self, to_decimal: impl Fn(&T) -> BigDecimal) -> Option<BigDecimal> {
        if self.count == 0 {
            return None;
        }
        let sum = to_decimal(&self.sum);
        let (_, preferred_scale) = sum.as_bigint_and_exponent();
        let avg = (sum / BigDecimal::from(self.count)).with_prec(AVERAGE_PRECISION).normalized();

        // Exact quotients keep the scale of the sum while the precision allows it.
        let (_, scale) = avg.as_bigint_and_exponent();
        let headroom = i64::try_from(AVERAGE_PRECISION.saturating_sub(avg.digits())).unwrap_or(0);
        let pad = (preferred_scale - scale).clamp(0, headroom);
        Some(if pad > 0 { avg.with_scale(scale + pad) } else { avg })
    }
}

impl<T: fmt::Display> NumericSummary<T> {
    fn write_section(&self, f: &mut fmt::Formatter<'_>, title: &str, avg: Option<BigDecimal>) -> fmt::Result {
        let (Some(min), Some(max), Some(avg)) = (&self.min, &self.max, avg) else {
            return writeln!(f, "{title}: no data");
        };
        writeln!(f, "{title}:")?;
        writeln!(f, "  Count = {}", self.count)?;
        writeln!(f, "  Min   = {min}")?;
        writeln!(f, "  Max   = {max}")?;
        writeln!(f, "  Sum   = {}", self.sum)?;
        writeln!(f, "  Avg   = {avg}")
    }
}

/// Count and character-length extrema of string lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct LengthSummary {
    count: u64,
    min: Option<usize>,
    max: Option<usize>,
}

impl LengthSummary {
    fn record(&mut self, len: usize) {
        self.count += 1;
        self.min = Some(self.min.map_or(len, |m| m.min(len)));
        self.max = Some(self.max.map_or(len, |m| m.max(len)));
    }
}

/// Exact aggregates for integers and floats plus string length bounds.
///
/// Integers are summed as [`BigInt`] and floats as [`BigDecimal`] so that no
/// input, however long, can overflow or round the running totals.
#[derive(Debug, Clone, Default)]
pub struct FullStats {
    integers: NumericSummary<BigInt>,
    floats: NumericSummary<BigDecimal>,
    strings: LengthSummary,
}

impl FullStats {
    pub fn count(&self, value_type: ValueType) -> u64 {
        match value_type {
            ValueType::Integer => self.integers.count,
            ValueType::Float => self.floats.count,
            ValueType::String => self.strings.count,
        }
    }

    pub fn integer_sum(&self) -> &BigInt {
        &self.integers.sum
    }

    pub fn integer_average(&self) -> Option<BigDecimal> {
        self.integers.average(|sum| BigDecimal::new(sum.clone(), 0))
    }

    pub fn float_sum(&self) -> &BigDecimal {
        &self.floats.sum
    }

    pub fn float_average(&self) -> Option<BigDecimal> {
        self.floats.average(BigDecimal::clone)
    }

    /// Shortest and longest string line, in characters.
    pub fn string_lengths(&self) -> Option<(usize, usize)> {
        self.strings.min.zip(self.strings.max)
    }
}

fn parse_number<T>(kind: &'static str, text: &str) -> DomainResult<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    text.parse().map_err(|e: T::Err| DomainError::NumberParse {
        kind,
        text: text.to_string(),
        details: e.to_string(),
    })
}

/// Floats whose scale does not fit in 32 bits are rejected instead of summed.
fn parse_float(text: &str) -> DomainResult<BigDecimal> {
    let value: BigDecimal = parse_number("float", text)?;
    let (_, scale) = value.as_bigint_and_exponent();
    if i32::try_from(scale).is_err() {
        return Err(DomainError::NumberParse {
            kind: "float",
            text: text.to_string(),
            details: format!("exponent out of range: scale {scale}"),
        });
    }
    Ok(value)
}

impl StatsCollector for FullStats {
    fn accept(&mut self, line: ClassifiedLine<'_>) -> DomainResult<()> {
        match line.value_type {
            ValueType::Integer => self.integers.record(parse_number("integer", line.raw.trim())?),
            ValueType::Float => self.floats.record(parse_float(line.raw.trim())?),
            ValueType::String => self.strings.record(line.raw.chars().count()),
        }
        Ok(())
    }

    fn report(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for FullStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.integers.write_section(f, "Integers", self.integer_average())?;
        self.floats.write_section(f, "Floats", self.float_average())?;

        let (Some(min), Some(max)) = (self.strings.min, self.strings.max) else {
            return writeln!(f, "Strings: no data");
        };
        writeln!(f, "Strings:")?;
        writeln!(f, "  Count     = {}", self.strings.count)?;
        writeln!(f, "  MinLength = {min}")?;
        writeln!(f, "  MaxLength = {max}")
    }
}
