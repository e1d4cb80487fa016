// src/core/engine.rs
use crate::core::index::{SignatureIndex, SourceStamp};
use crate::core::matcher;
use crate::errors::IndexError;
use crate::persistence::{load_from_disk, save_to_disk};
use std::collections::HashSet;
use std::io;
use std::path::Path;

/// Facade owning a ready-to-query index plus the load-or-build policy.
///
/// Both the index path and the word-list path are explicit parameters;
/// there is no process-wide implicit file location.
#[derive(Debug)]
pub struct SubgramEngine {
    index: SignatureIndex,
}

impl SubgramEngine {
    /// Produces a query-ready engine, reusing the persisted index at
    /// `index_path` when it is structurally valid AND its source stamp
    /// still matches the word list at `wordlist_path`. Otherwise the index
    /// is rebuilt from the word list and persisted atomically.
    ///
    /// Freshness policy: a cached index whose stamp disagrees with the
    /// current word-list content is stale and gets rebuilt, so editing the
    /// word list is enough to invalidate the cache. If the word list
    /// itself is unreadable, a valid cached index is still served (with a
    /// warning); with neither available the error from reading the word
    /// list surfaces.
    pub fn load_or_build(index_path: &Path, wordlist_path: &Path) -> Result<Self, IndexError> {
        match load_from_disk(index_path) {
            Ok(index) => match SourceStamp::of_file(wordlist_path) {
                Ok(current) if current == index.stamp => {
                    log::debug!(
                        "using cached index at {} ({} signatures)",
                        index_path.display(),
                        index.len()
                    );
                    return Ok(Self { index });
                }
                Ok(_) => {
                    log::info!("word list changed since last build; rebuilding index");
                }
                Err(e) => {
                    log::warn!(
                        "word list unreadable ({e}); serving cached index of unverified freshness"
                    );
                    return Ok(Self { index });
                }
            },
            Err(IndexError::Io(ref e)) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!("no cached index at {}", index_path.display());
            }
            Err(e) => {
                log::warn!("cached index unusable ({e}); rebuilding from word list");
            }
        }

        let index = SignatureIndex::build_from_path(wordlist_path)?;
        log::info!(
            "built index: {} signatures from {}",
            index.len(),
            wordlist_path.display()
        );
        save_to_disk(&index, index_path)?;
        Ok(Self { index })
    }

    /// Wraps an already-built index, bypassing persistence entirely.
    pub fn from_index(index: SignatureIndex) -> Self {
        Self { index }
    }

    /// See [`matcher::subanagrams`].
    pub fn subanagrams(&self, query: &str) -> HashSet<String> {
        matcher::subanagrams(&self.index, query)
    }

    pub fn index(&self) -> &SignatureIndex {
        &self.index
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_wordlist(dir: &Path, contents: &str) -> std::path::PathBuf {
        let path = dir.join("words.txt");
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn builds_and_persists_on_first_run() {
        let dir = tempfile::tempdir().unwrap();
        let wordlist = write_wordlist(dir.path(), "arc\ncar\nac\na\ncars\n");
        let index_path = dir.path().join("lookup.bin");

        let engine = SubgramEngine::load_or_build(&index_path, &wordlist).unwrap();
        assert!(index_path.exists());
        assert!(engine.subanagrams("cars").contains("arc"));
    }

    #[test]
    fn second_run_reuses_cached_index() {
        let dir = tempfile::tempdir().unwrap();
        let wordlist = write_wordlist(dir.path(), "arc\ncar\n");
        let index_path = dir.path().join("lookup.bin");

        let first = SubgramEngine::load_or_build(&index_path, &wordlist).unwrap();
        let second = SubgramEngine::load_or_build(&index_path, &wordlist).unwrap();
        assert_eq!(first.index(), second.index());
    }

    #[test]
    fn edited_word_list_invalidates_cache() {
        let dir = tempfile::tempdir().unwrap();
        let wordlist = write_wordlist(dir.path(), "arc\ncar\n");
        let index_path = dir.path().join("lookup.bin");

        SubgramEngine::load_or_build(&index_path, &wordlist).unwrap();
        fs::write(&wordlist, "arc\ncar\nrace\n").unwrap();

        let engine = SubgramEngine::load_or_build(&index_path, &wordlist).unwrap();
        assert!(engine.subanagrams("racer").contains("race"));
    }

    #[test]
    fn corrupt_cache_triggers_rebuild() {
        let dir = tempfile::tempdir().unwrap();
        let wordlist = write_wordlist(dir.path(), "arc\ncar\n");
        let index_path = dir.path().join("lookup.bin");
        fs::write(&index_path, b"garbage").unwrap();

        let engine = SubgramEngine::load_or_build(&index_path, &wordlist).unwrap();
        assert!(engine.subanagrams("cart").contains("arc"));
    }

    #[test]
    fn missing_word_list_without_cache_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = SubgramEngine::load_or_build(
            &dir.path().join("lookup.bin"),
            &dir.path().join("absent.txt"),
        )
        .unwrap_err();
        assert!(matches!(err, IndexError::Io(_)));
    }

    #[test]
    fn missing_word_list_with_valid_cache_is_served() {
        let dir = tempfile::tempdir().unwrap();
        let wordlist = write_wordlist(dir.path(), "arc\ncar\n");
        let index_path = dir.path().join("lookup.bin");

        SubgramEngine::load_or_build(&index_path, &wordlist).unwrap();
        fs::remove_file(&wordlist).unwrap();

        let engine = SubgramEngine::load_or_build(&index_path, &wordlist).unwrap();
        assert!(engine.subanagrams("cart").contains("car"));
    }
}
