// src/storage/mod.rs
use std::fs;
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::extractors::ExcerptRecord;
use crate::naming::build_folder_name;
use crate::utils::error::StorageError;

pub const RECORD_FILE_NAME: &str = "record.json";

// Characters no common filesystem accepts in a path component.
static RESERVED_CHARS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[<>:"/\\|?*]"#).expect("Failed to compile RESERVED_CHARS_RE"));

/// Replaces filesystem-reserved characters with `_`.
pub fn safe_path_component(name: &str) -> String {
    RESERVED_CHARS_RE.replace_all(name, "_").into_owned()
}

pub struct StorageManager {
    base_dir: PathBuf,
}

impl StorageManager {
    /// Creates a new StorageManager with the specified base directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self, StorageError> {
        let base_path = base_dir.as_ref().to_path_buf();

        // Create the base directory if it doesn't exist
        if !base_path.exists() {
            fs::create_dir_all(&base_path).map_err(StorageError::IoError)?;
        }

        Ok(Self { base_dir: base_path })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Creates (if needed) and returns the artifact folder of one company.
    pub fn company_dir(&self, name: &str, city: &str, shorten: bool) -> Result<PathBuf, StorageError> {
        let folder = safe_path_component(&build_folder_name(name, city, shorten));
        if folder.is_empty() || folder == "." || folder == ".." {
            return Err(StorageError::InvalidFolderName(folder));
        }

        let target_dir = self.base_dir.join(&folder);
        if !target_dir.exists() {
            fs::create_dir_all(&target_dir).map_err(StorageError::IoError)?;
        }
        Ok(target_dir)
    }

    /// Saves the record and its metadata as JSON into the company folder.
    pub fn save_record(
        &self,
        record: &ExcerptRecord,
        city: &str,
        shorten: bool,
        source_file: &str,
    ) -> Result<PathBuf, StorageError> {
        let target_dir = self.company_dir(&record.company_name, city, shorten)?;
        let file_path = target_dir.join(RECORD_FILE_NAME);

        let metadata = serde_json::json!({
            "record": record,
            "city": city,
            "source_file": source_file,
            "extraction_timestamp": chrono::Utc::now().to_rfc3339(),
        });

        let metadata_str = serde_json::to_string_pretty(&metadata)
            .map_err(|e| StorageError::SerializationError(e.to_string()))?;

        fs::write(&file_path, metadata_str).map_err(StorageError::IoError)?;

        tracing::info!("Saved record to {}", file_path.display());

        Ok(file_path)
    }
}
