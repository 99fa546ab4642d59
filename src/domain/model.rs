use crate::domain::classify;
use crate::domain::decimal::Decimal;
use num_bigint::BigInt;
use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    Integer,
    Float,
    Text,
}

impl LineKind {
    pub const ALL: [LineKind; 3] = [LineKind::Integer, LineKind::Float, LineKind::Text];

    pub fn default_file_name(self) -> &'static str {
        match self {
            LineKind::Integer => "integers.txt",
            LineKind::Float => "floats.txt",
            LineKind::Text => "strings.txt",
        }
    }

    /// Heading used in statistics reports.
    pub fn label(self) -> &'static str {
        match self {
            LineKind::Integer => "Integers",
            LineKind::Float => "Floats",
            LineKind::Text => "Strings",
        }
    }
}

impl fmt::Display for LineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A line together with the number it was parsed as.
#[derive(Debug, Clone)]
pub struct Parsed<T> {
    pub raw: String,
    pub value: T,
}

/// Input lines split by kind, each kind in input order.
#[derive(Debug, Clone, Default)]
pub struct Partition {
    pub integers: Vec<Parsed<BigInt>>,
    pub floats: Vec<Parsed<Decimal>>,
    pub strings: Vec<String>,
}

impl Partition {
    pub fn from_lines<I>(lines: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut partition = Partition::default();
        for line in lines {
            partition.push(line);
        }
        partition
    }

    pub fn push(&mut self, line: String) {
        if let Ok(value) = classify::parse_integer(&line) {
            self.integers.push(Parsed { raw: line, value });
        } else if let Ok(value) = Decimal::parse(&line) {
            self.floats.push(Parsed { raw: line, value });
        } else {
            self.strings.push(line);
        }
    }

    pub fn count(&self, kind: LineKind) -> usize {
        match kind {
            LineKind::Integer => self.integers.len(),
            LineKind::Float => self.floats.len(),
            LineKind::Text => self.strings.len(),
        }
    }

    /// Raw lines of one kind, exactly as they were read.
    pub fn lines(&self, kind: LineKind) -> Vec<&str> {
        match kind {
            LineKind::Integer => self.integers.iter().map(|p| p.raw.as_str()).collect(),
            LineKind::Float => self.floats.iter().map(|p| p.raw.as_str()).collect(),
            LineKind::Text => self.strings.iter().map(String::as_str).collect(),
        }
    }

    pub fn total(&self) -> usize {
        self.integers.len() + self.floats.len() + self.strings.len()
    }
}

/// Where result files go: `<dir>/<prefix><default name>`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputLayout {
    pub dir: Option<PathBuf>,
    pub prefix: String,
}

impl OutputLayout {
    pub fn new(dir: Option<PathBuf>, prefix: impl Into<String>) -> Self {
        Self {
            dir,
            prefix: prefix.into(),
        }
    }

    pub fn path_for(&self, kind: LineKind) -> PathBuf {
        let file_name = format!("{}{}", self.prefix, kind.default_file_name());
        match self.dir.as_deref() {
            Some(dir) if !dir.as_os_str().is_empty() => dir.join(file_name),
            _ => Path::new(&file_name).to_path_buf(),
        }
    }
}
