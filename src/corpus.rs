use std::{collections::BTreeMap, path::Path};

use crate::error::{Error, Result};

/// Load every `.txt` file directly inside `dir` (non-recursive), keyed by
/// file name.
///
/// Subdirectories and files with other extensions are ignored. Contents
/// must be valid UTF-8; an unreadable file aborts the load. A `BTreeMap`
/// keeps corpus iteration order deterministic.
pub fn load_corpus(dir: &Path) -> Result<BTreeMap<String, String>> {
    if !dir.is_dir() {
        return Err(Error::Corpus(format!(
            "not a readable directory: {}",
            dir.display()
        )));
    }

    let mut corpus = BTreeMap::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();

        if !entry.file_type()?.is_file() || !has_txt_extension(&path) {
            continue;
        }

        let name = entry.file_name().to_string_lossy().to_string();
        let text = std::fs::read_to_string(&path).map_err(|e| {
            Error::Corpus(format!("cannot read {}: {e}", path.display()))
        })?;
        corpus.insert(name, text);
    }

    Ok(corpus)
}

fn has_txt_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext == "txt")
}
