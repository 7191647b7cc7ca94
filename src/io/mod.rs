mod export;
mod import;

pub use import::read_table;
pub(crate) use export::write_labels;

use crate::types::IdKind;

/// Options for [`LabelMap::from_csv`](crate::LabelMap::from_csv).
///
/// The label column is required by construction; everything else is
/// optional builder state.
#[derive(Debug, Clone)]
pub struct CsvOptions {
    pub(crate) label_column: String,
    pub(crate) id_column: Option<String>,
    pub(crate) id_kind: IdKind,
    pub(crate) excluded: Vec<String>,
}

impl CsvOptions {
    pub fn new(label_column: impl Into<String>) -> Self {
        Self {
            label_column: label_column.into(),
            id_column: None,
            id_kind: IdKind::Int,
            excluded: Vec::new(),
        }
    }

    /// Take explicit ids from the named column instead of synthesizing
    /// sequential ones.
    pub fn with_id_column(mut self, name: impl Into<String>) -> Self {
        self.id_column = Some(name.into());
        self
    }

    pub fn with_id_kind(mut self, kind: IdKind) -> Self {
        self.id_kind = kind;
        self
    }

    /// Labels that may never be inserted.
    pub fn with_excluded<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded.extend(labels.into_iter().map(Into::into));
        self
    }
}
