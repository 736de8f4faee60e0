use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// List the playlist files of one store, keyed by playlist name.
///
/// Only regular files directly inside `dir` whose name ends with `ext` count;
/// an empty `ext` matches every file (the cmus store convention). The key is
/// the file's base name without its extension, which is what ties the same
/// playlist together across the three stores.
pub fn list_store(dir: &Path, ext: &str) -> io::Result<BTreeMap<String, PathBuf>> {
    let mut found = BTreeMap::new();
    for entry in WalkDir::new(dir).max_depth(1) {
        let entry = entry.map_err(io::Error::other)?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(file_name) = path.file_name().and_then(|s| s.to_str()) else {
            continue;
        };
        if !file_name.ends_with(ext) {
            continue;
        }
        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(file_name);
        found.insert(name.to_string(), path.to_path_buf());
    }
    Ok(found)
}
