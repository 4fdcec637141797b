//! Directory snapshot loading
//!
//! The host application owns the directory file; this module only reads it.
//! Format:
//!
//! ```json
//! { "nick": "alice", "twturl": "https://a.example/twtxt.txt",
//!   "following": [ { "nick": "bob", "url": "https://b.example/twtxt.txt" } ] }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{MentionsError, Result};
use crate::source::SourceDirectory;

impl SourceDirectory {
    /// Parse a directory snapshot from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a directory snapshot. A missing file yields an empty directory.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no directory file, using empty directory");
            return Ok(Self::default());
        }

        let data = fs::read_to_string(path)?;
        let directory = Self::from_json(&data)?;
        debug!(
            path = %path.display(),
            following = directory.followed().len(),
            "loaded source directory"
        );
        Ok(directory)
    }
}

/// Default location of the directory file.
pub fn default_path() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| MentionsError::Config("Failed to get config directory".to_string()))?;

    Ok(config_dir.join("twtxt").join("directory.json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::SourceResolver;
    use std::io::Write;

    #[test]
    fn parses_full_snapshot() {
        let dir = SourceDirectory::from_json(
            r#"{
                "nick": "alice",
                "twturl": "https://a.example/twtxt.txt",
                "following": [
                    { "nick": "bob", "url": "https://b.example/twtxt.txt" }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(dir.own_nick(), Some("alice"));
        assert_eq!(dir.followed().len(), 1);
        assert_eq!(
            dir.resolve_by_url("https://a.example/twtxt.txt").unwrap().nick,
            "alice"
        );
    }

    #[test]
    fn missing_keys_are_unset() {
        let dir = SourceDirectory::from_json("{}").unwrap();
        assert!(dir.own_source().is_none());
        assert!(dir.followed().is_empty());
    }

    #[test]
    fn rejects_malformed_json() {
        let err = SourceDirectory::from_json("{ nick: ").unwrap_err();
        assert!(matches!(err, MentionsError::Serialization(_)));
    }

    #[test]
    fn load_missing_file_is_empty() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = SourceDirectory::load(&tmp.path().join("absent.json")).unwrap();
        assert!(dir.followed().is_empty());
    }

    #[test]
    fn load_reads_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("directory.json");
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(br#"{"following":[{"nick":"carol","url":"https://c.example/twtxt.txt"}]}"#)
            .unwrap();
        drop(file);

        let dir = SourceDirectory::load(&path).unwrap();
        assert_eq!(
            dir.resolve_by_name("carol").unwrap().url,
            "https://c.example/twtxt.txt"
        );
    }

    #[test]
    fn snapshot_serializes_back_to_file_shape() {
        let dir = SourceDirectory::new("alice", "https://a.example/twtxt.txt", vec![]);
        let value = serde_json::to_value(&dir).unwrap();
        assert_eq!(value["nick"], "alice");
        assert_eq!(value["twturl"], "https://a.example/twtxt.txt");
    }

    #[test]
    fn default_path_ends_with_file_name() {
        if let Ok(path) = default_path() {
            assert!(path.ends_with("twtxt/directory.json"));
        }
    }
}
