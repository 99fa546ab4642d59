use crate::domain::decimal::Decimal;
use crate::domain::model::{LineKind, Partition};
use num_bigint::BigInt;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatisticsMode {
    #[default]
    None,
    Short,
    Full,
}

impl StatisticsMode {
    pub fn from_flags(short: bool, full: bool) -> Self {
        match (short, full) {
            (_, true) => StatisticsMode::Full,
            (true, false) => StatisticsMode::Short,
            (false, false) => StatisticsMode::None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct IntegerSummary {
    pub count: usize,
    pub min: BigInt,
    pub max: BigInt,
    pub sum: BigInt,
    pub average: BigInt,
}

#[derive(Debug, Clone)]
pub struct FloatSummary {
    pub count: usize,
    pub min: Decimal,
    pub max: Decimal,
    pub sum: Decimal,
    pub average: Decimal,
}

#[derive(Debug, Clone)]
pub struct TextSummary {
    pub count: usize,
    pub shortest: usize,
    pub longest: usize,
}

/// Full statistics over a partition. A kind without lines has no summary.
#[derive(Debug, Clone)]
pub struct Statistics {
    pub integers: Option<IntegerSummary>,
    pub floats: Option<FloatSummary>,
    pub strings: Option<TextSummary>,
}

// Ties keep the later element.
fn pick<T, F>(items: impl IntoIterator<Item = T>, keep_left: F) -> Option<T>
where
    F: Fn(&T, &T) -> bool,
{
    items
        .into_iter()
        .reduce(|a, b| if keep_left(&a, &b) { a } else { b })
}

impl Statistics {
    pub fn collect(partition: &Partition) -> Self {
        Self {
            integers: Self::integer_summary(partition),
            floats: Self::float_summary(partition),
            strings: Self::text_summary(partition),
        }
    }

    fn integer_summary(partition: &Partition) -> Option<IntegerSummary> {
        let values = || partition.integers.iter().map(|p| &p.value);
        let count = partition.integers.len();

        let min = pick(values(), |a, b| a < b)?.clone();
        let max = pick(values(), |a, b| a > b)?.clone();
        let sum: BigInt = values().sum();
        // BigInt division truncates toward zero
        let average = &sum / BigInt::from(count);

        Some(IntegerSummary {
            count,
            min,
            max,
            sum,
            average,
        })
    }

    fn float_summary(partition: &Partition) -> Option<FloatSummary> {
        let values = || partition.floats.iter().map(|p| &p.value);
        let count = partition.floats.len();

        let min = pick(values(), |a, b| a < b)?.clone();
        let max = pick(values(), |a, b| a > b)?.clone();
        let sum = values().cloned().reduce(|a, b| a + b)?;
        let average = sum.div_half_up(count);

        Some(FloatSummary {
            count,
            min,
            max,
            sum,
            average,
        })
    }

    fn text_summary(partition: &Partition) -> Option<TextSummary> {
        // lengths in UTF-16 code units
        let lengths = || partition.strings.iter().map(|s| s.encode_utf16().count());

        Some(TextSummary {
            count: partition.strings.len(),
            shortest: lengths().min()?,
            longest: lengths().max()?,
        })
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.integers {
            Some(s) => writeln!(
                f,
                "{}: count = {}, min = {}, max = {}, sum = {}, average = {}",
                LineKind::Integer,
                s.count,
                s.min,
                s.max,
                s.sum,
                s.average
            )?,
            None => writeln!(f, "{}: count = 0", LineKind::Integer)?,
        }

        match &self.floats {
            Some(s) => writeln!(
                f,
                "{}: count = {}, min = {}, max = {}, sum = {}, average = {}",
                LineKind::Float,
                s.count,
                s.min,
                s.max,
                s.sum,
                s.average
            )?,
            None => writeln!(f, "{}: count = 0", LineKind::Float)?,
        }

        match &self.strings {
            Some(s) => write!(
                f,
                "{}: count = {}, min = {}, max = {}",
                LineKind::Text,
                s.count,
                s.shortest,
                s.longest
            ),
            None => write!(f, "{}: count = 0", LineKind::Text),
        }
    }
}

pub fn short_report(partition: &Partition) -> String {
    LineKind::ALL
        .iter()
        .map(|kind| format!("{}: count = {}", kind, partition.count(*kind)))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render(mode: StatisticsMode, partition: &Partition) -> Option<String> {
    match mode {
        StatisticsMode::None => None,
        StatisticsMode::Short => Some(short_report(partition)),
        StatisticsMode::Full => Some(Statistics::collect(partition).to_string()),
    }
}
