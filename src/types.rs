use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::error::{LabelMapError, Result};

// ---------------------------------------------------------------------------
// Id kind
// ---------------------------------------------------------------------------

/// Numeric kind of the ids a map hands out, fixed at construction.
///
/// The kind drives both synthesis of sequential ids and parsing of
/// explicit id cells during CSV import.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdKind {
    #[default]
    Int,
    Float,
}

impl IdKind {
    /// Synthesize the id for the `n`-th accepted entry.
    pub fn synthesize(&self, n: u64) -> LabelId {
        match self {
            IdKind::Int => LabelId::Int(n as i64),
            IdKind::Float => LabelId::Float(n as f64),
        }
    }

    /// Parse an explicit id cell into this kind.
    pub fn parse_id(&self, raw: &str) -> Result<LabelId> {
        let trimmed = raw.trim();
        match self {
            IdKind::Int => trimmed.parse::<i64>().map(LabelId::Int).map_err(|e| {
                LabelMapError::InvalidArgument(format!("invalid integer id {:?}: {}", raw, e))
            }),
            IdKind::Float => trimmed.parse::<f64>().map(LabelId::Float).map_err(|e| {
                LabelMapError::InvalidArgument(format!("invalid float id {:?}: {}", raw, e))
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// Label id
// ---------------------------------------------------------------------------

/// A numeric identifier bound to a label.
///
/// Serializes as a bare JSON number. Equality and hashing on the float
/// arm use the raw bit pattern so a `LabelId` can key the reverse map;
/// ids synthesized by [`IdKind::synthesize`] are always finite, so bit
/// equality coincides with numeric equality in practice.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LabelId {
    Int(i64),
    Float(f64),
}

impl LabelId {
    pub fn kind(&self) -> IdKind {
        match self {
            LabelId::Int(_) => IdKind::Int,
            LabelId::Float(_) => IdKind::Float,
        }
    }
}

impl PartialEq for LabelId {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (LabelId::Int(a), LabelId::Int(b)) => a == b,
            (LabelId::Float(a), LabelId::Float(b)) => a.to_bits() == b.to_bits(),
            _ => false,
        }
    }
}

impl Eq for LabelId {}

impl Hash for LabelId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            LabelId::Int(v) => {
                state.write_u8(0);
                v.hash(state);
            }
            LabelId::Float(v) => {
                state.write_u8(1);
                v.to_bits().hash(state);
            }
        }
    }
}

impl fmt::Display for LabelId {
    /// Delegates to the inner value so width/alignment flags pass
    /// through. Floats render via `Debug` (`2.0`, not `2`) so the kind
    /// stays visible in exports and reports.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LabelId::Int(v) => fmt::Display::fmt(v, f),
            LabelId::Float(v) => fmt::Debug::fmt(v, f),
        }
    }
}

// ---------------------------------------------------------------------------
// Record table
// ---------------------------------------------------------------------------

/// Raw tabular snapshot of an imported CSV: the header row plus every
/// data row, extra columns retained verbatim.
///
/// Independent of the live map — rows skipped by exclusion or
/// duplicate filtering are still present here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl RecordTable {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Index of a named column, if present.
    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Cell at `row` in the named column.
    pub fn get(&self, row: usize, column: &str) -> Option<&str> {
        let col = self.column(column)?;
        self.rows.get(row)?.get(col).map(String::as_str)
    }

    /// Number of data rows (the header is not counted).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
