use std::collections::HashMap;

use tracing::warn;

use crate::types::LabelId;

/// Reverse index from ids back to labels, rebuilt lazily.
///
/// Starts dirty so the first lookup always builds it. Every forward
/// mutation calls `invalidate`; `rebuild` is only invoked from the
/// reverse-lookup path, so staleness is never observable from outside.
#[derive(Debug, Clone)]
pub(crate) struct ReverseIndex {
    id_to_label: HashMap<LabelId, String>,
    dirty: bool,
}

impl Default for ReverseIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl ReverseIndex {
    pub(crate) fn new() -> Self {
        Self {
            id_to_label: HashMap::new(),
            dirty: true,
        }
    }

    pub(crate) fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub(crate) fn invalidate(&mut self) {
        self.dirty = true;
    }

    /// Rebuild the full inverse mapping from forward entries, given in
    /// insertion order. On duplicate ids (possible when explicit
    /// imported ids collide with synthesized ones) the later entry
    /// wins; the collision is logged, not rejected.
    pub(crate) fn rebuild<'a, I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (&'a str, LabelId)>,
    {
        self.id_to_label.clear();
        for (label, id) in entries {
            if let Some(prev) = self.id_to_label.insert(id, label.to_string()) {
                warn!(
                    "id {} maps to both {:?} and {:?}; keeping the latter",
                    id, prev, label
                );
            }
        }
        self.dirty = false;
    }

    pub(crate) fn get(&self, id: &LabelId) -> Option<&str> {
        self.id_to_label.get(id).map(String::as_str)
    }
}
