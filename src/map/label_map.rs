use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use tracing::debug;

use super::reverse::ReverseIndex;
use crate::error::{LabelMapError, Result};
use crate::io::{self, CsvOptions};
use crate::types::{IdKind, LabelId, RecordTable};

/// Bidirectional mapping between textual labels and numeric ids.
///
/// The forward map assigns each label a unique id and remembers
/// insertion order; the reverse map is derived lazily and rebuilt only
/// when a lookup happens after a mutation. Each `LabelMap` owns its
/// state independently — nothing is shared between instances.
#[derive(Debug, Clone)]
pub struct LabelMap {
    forward: HashMap<String, LabelId>,
    order: Vec<String>,
    reverse: ReverseIndex,
    id_kind: IdKind,
    next_id: u64,
    excluded: HashSet<String>,
    source: RecordTable,
}

impl Default for LabelMap {
    fn default() -> Self {
        Self::new()
    }
}

impl LabelMap {
    /// Empty map handing out integer ids.
    pub fn new() -> Self {
        Self::with_id_kind(IdKind::Int)
    }

    /// Empty map handing out ids of the given kind.
    pub fn with_id_kind(id_kind: IdKind) -> Self {
        Self {
            forward: HashMap::new(),
            order: Vec::new(),
            reverse: ReverseIndex::new(),
            id_kind,
            next_id: 0,
            excluded: HashSet::new(),
            source: RecordTable::default(),
        }
    }

    /// Add labels that may never be inserted.
    pub fn exclude<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded.extend(labels.into_iter().map(Into::into));
        self
    }

    /// Build a map from a CSV file.
    ///
    /// Rows are processed in file order: a label already present is
    /// skipped (first occurrence wins), an excluded label is skipped,
    /// and the id comes from the explicit id column when
    /// [`CsvOptions::with_id_column`] named one, otherwise it is
    /// synthesized sequentially. The raw row set is retained as the
    /// source table regardless of filtering.
    ///
    /// A malformed CSV row fails the whole import with the parser's
    /// error; an unknown column name is an invalid-argument error.
    pub fn from_csv<P: AsRef<Path>>(path: P, options: CsvOptions) -> Result<Self> {
        let path = path.as_ref();
        let table = io::read_table(path)?;

        if options.label_column.is_empty() {
            return Err(LabelMapError::InvalidArgument(
                "label column name must not be empty".to_string(),
            ));
        }
        let label_idx = table.column(&options.label_column).ok_or_else(|| {
            LabelMapError::InvalidArgument(format!(
                "label column {:?} not found in {:?}",
                options.label_column,
                table.headers()
            ))
        })?;
        let id_idx = match &options.id_column {
            Some(name) => Some(table.column(name).ok_or_else(|| {
                LabelMapError::InvalidArgument(format!(
                    "id column {:?} not found in {:?}",
                    name,
                    table.headers()
                ))
            })?),
            None => None,
        };

        let mut map = Self::with_id_kind(options.id_kind).exclude(options.excluded);
        for (row_no, row) in table.rows().iter().enumerate() {
            let label = &row[label_idx];
            if map.forward.contains_key(label) || map.excluded.contains(label) {
                continue;
            }
            let id = match id_idx {
                Some(idx) => options.id_kind.parse_id(&row[idx]).map_err(|e| match e {
                    LabelMapError::InvalidArgument(msg) => LabelMapError::InvalidArgument(
                        format!("row {}: {}", row_no + 1, msg),
                    ),
                    other => other,
                })?,
                None => map.id_kind.synthesize(map.next_id),
            };
            map.insert_entry(label.clone(), id);
        }

        debug!(
            "imported {} of {} rows from {}",
            map.len(),
            table.len(),
            path.display()
        );
        map.source = table;
        Ok(map)
    }

    fn insert_entry(&mut self, label: String, id: LabelId) {
        self.forward.insert(label.clone(), id);
        self.order.push(label);
        self.next_id += 1;
        self.reverse.invalidate();
    }

    /// Insert `label` with the next synthesized id. No-op when the
    /// label is already present or excluded.
    pub fn add(&mut self, label: &str) {
        if self.excluded.contains(label) || self.forward.contains_key(label) {
            return;
        }
        let id = self.id_kind.synthesize(self.next_id);
        self.insert_entry(label.to_string(), id);
    }

    /// Remove `label` from the map. No-op when absent. The id counter
    /// is not rolled back, so the removed entry's id is never reused.
    pub fn remove(&mut self, label: &str) {
        if self.forward.remove(label).is_some() {
            self.order.retain(|l| l != label);
            self.reverse.invalidate();
        }
    }

    /// Id for `label`, inserting it first when absent.
    ///
    /// Returns `None` only for an excluded label, which can never be
    /// inserted.
    pub fn force_get(&mut self, label: &str) -> Option<LabelId> {
        if !self.forward.contains_key(label) {
            self.add(label);
        }
        self.forward.get(label).copied()
    }

    /// Id for an existing label.
    pub fn to_id(&self, label: &str) -> Result<LabelId> {
        self.forward
            .get(label)
            .copied()
            .ok_or_else(|| LabelMapError::UnknownLabel(label.to_string()))
    }

    /// Label for an existing id. Rebuilds the reverse index first when
    /// any mutation happened since the last rebuild.
    pub fn to_text(&mut self, id: LabelId) -> Result<&str> {
        if self.reverse.is_dirty() {
            let forward = &self.forward;
            let entries = self.order.iter().map(move |l| (l.as_str(), forward[l]));
            self.reverse.rebuild(entries);
        }
        self.reverse.get(&id).ok_or(LabelMapError::UnknownId(id))
    }

    /// Live read-only view of the forward mapping. Iteration order of
    /// the underlying map is unspecified; use [`iter`](Self::iter) for
    /// insertion order.
    pub fn map(&self) -> &HashMap<String, LabelId> {
        &self.forward
    }

    /// `(label, id)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, LabelId)> + '_ {
        self.order.iter().map(move |l| (l.as_str(), self.forward[l]))
    }

    /// Labels in insertion order.
    pub fn labels(&self) -> Vec<&str> {
        self.order.iter().map(String::as_str).collect()
    }

    /// Number of entries currently in the map. Distinct from the id
    /// counter, which never decreases.
    pub fn len(&self) -> usize {
        self.forward.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    pub fn id_kind(&self) -> IdKind {
        self.id_kind
    }

    /// Raw imported rows, untouched by mutations made since import.
    pub fn source_records(&self) -> &RecordTable {
        &self.source
    }

    /// Print the mapping as a fixed-width table to stdout.
    pub fn info(&self) {
        println!("{}", crate::report::render(self));
    }

    /// Export the mapping as `id,label` CSV.
    ///
    /// A `.csv` suffix is appended when missing. Fails with
    /// [`LabelMapError::AlreadyExists`] when the target exists and
    /// `overwrite` is false, leaving the file untouched. Returns the
    /// path actually written.
    pub fn save_csv<P: AsRef<Path>>(&self, path: P, overwrite: bool) -> Result<PathBuf> {
        io::write_labels(path.as_ref(), overwrite, self.iter())
    }
}
