use crate::record::DocumentCollection;
use crate::StoreError;
use std::fs;
use std::path::Path;

/// Writes the document collection to disk as a JSON array
///
/// The format is self-describing: an array of objects with `url`, `title`,
/// `body`, and `position` fields. Any existing file at the path is
/// replaced; parent directories are created if missing. The write goes
/// through a temp file and a rename so a crash mid-write never leaves a
/// truncated collection behind.
///
/// # Arguments
///
/// * `collection` - The ordered records to persist
/// * `path` - Destination file path
///
/// # Returns
///
/// * `Ok(())` - Collection written
/// * `Err(StoreError)` - Serialization or filesystem failure (fatal to the
///   run; there is no partial-write recovery)
pub fn write_collection(collection: &DocumentCollection, path: &Path) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let json = serde_json::to_string_pretty(collection)?;

    let tmp = path.with_extension("tmp");
    fs::write(&tmp, json.as_bytes())?;
    fs::rename(&tmp, path)?;

    Ok(())
}

/// Loads a previously written document collection
///
/// This is the read side the serving collaborators use: once loaded,
/// records are looked up by URL via
/// [`DocumentCollection::get_by_url`](crate::record::DocumentCollection::get_by_url).
pub fn load_collection(path: &Path) -> Result<DocumentCollection, StoreError> {
    let content = fs::read_to_string(path)?;
    let collection = serde_json::from_str(&content)?;
    Ok(collection)
}
