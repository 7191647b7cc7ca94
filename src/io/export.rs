use std::ffi::OsStr;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{LabelMapError, Result};
use crate::types::LabelId;

/// Write forward-map entries as `id,label` CSV.
///
/// Appends a `.csv` extension when the path has none. The existence
/// check happens before any write, so a refused export leaves the
/// target untouched. Labels are written verbatim, unquoted — a label
/// containing a comma or newline corrupts the format, matching the
/// documented export contract.
pub(crate) fn write_labels<'a, I>(path: &Path, overwrite: bool, entries: I) -> Result<PathBuf>
where
    I: Iterator<Item = (&'a str, LabelId)>,
{
    let path = ensure_csv_suffix(path);
    if path.exists() && !overwrite {
        return Err(LabelMapError::AlreadyExists(path));
    }

    let mut contents = String::from("id,label\n");
    let mut count = 0usize;
    for (label, id) in entries {
        if count > 0 {
            contents.push('\n');
        }
        // write! into a String cannot fail
        let _ = write!(contents, "{},{}", id, label);
        count += 1;
    }

    fs::write(&path, contents)?;
    debug!("wrote {} entries to {}", count, path.display());
    Ok(path)
}

fn ensure_csv_suffix(path: &Path) -> PathBuf {
    if path.extension() == Some(OsStr::new("csv")) {
        path.to_path_buf()
    } else {
        let mut raw = path.as_os_str().to_os_string();
        raw.push(".csv");
        PathBuf::from(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suffix_appended_when_missing() {
        assert_eq!(ensure_csv_suffix(Path::new("out")), Path::new("out.csv"));
        assert_eq!(
            ensure_csv_suffix(Path::new("out.txt")),
            Path::new("out.txt.csv")
        );
    }

    #[test]
    fn suffix_kept_when_present() {
        assert_eq!(
            ensure_csv_suffix(Path::new("out.csv")),
            Path::new("out.csv")
        );
    }
}
