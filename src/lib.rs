//! Bidirectional label/id maps built from CSV files.
//!
//! A [`LabelMap`] holds a forward map from textual labels to numeric
//! ids, derives the reverse map lazily, and round-trips through flat
//! `id,label` CSV. It serves classification pipelines that need a
//! stable label-to-id assignment across runs.
//!
//! ```
//! use labelmap::{LabelId, LabelMap};
//!
//! let mut map = LabelMap::new();
//! map.add("cat");
//! map.add("dog");
//! map.add("cat"); // duplicate, ignored
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.to_id("dog").unwrap(), LabelId::Int(1));
//! assert_eq!(map.to_text(LabelId::Int(0)).unwrap(), "cat");
//! ```

pub mod error;
pub mod io;
pub mod map;
pub mod report;
pub mod types;

pub use error::{LabelMapError, Result};
pub use io::CsvOptions;
pub use map::LabelMap;
pub use types::{IdKind, LabelId, RecordTable};
