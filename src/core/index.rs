// src/core/index.rs
use crate::core::types::{signature_of, LetterVector, Signature};
use crate::errors::IndexError;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Content fingerprint of the word list an index was built from.
///
/// Recorded inside the persisted index and compared against the current
/// word list on load, so a stale index is rebuilt instead of silently
/// served after the word list changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceStamp {
    content_hash: u64,
    byte_len: u64,
}

impl SourceStamp {
    /// FNV-1a over the raw word-list bytes, plus the byte length.
    pub fn of_bytes(bytes: &[u8]) -> Self {
        let content_hash = bytes
            .iter()
            .fold(FNV_OFFSET_BASIS, |hash, &byte| {
                (hash ^ u64::from(byte)).wrapping_mul(FNV_PRIME)
            });
        Self {
            content_hash,
            byte_len: bytes.len() as u64,
        }
    }

    pub fn of_file(path: &Path) -> Result<Self, IndexError> {
        let bytes = fs::read(path)?;
        Ok(Self::of_bytes(&bytes))
    }
}

/// The lookup structure for subanagram retrieval: two mappings co-keyed by
/// sorted-letter signature.
///
/// `anagrams` maps a signature to every source word sharing it (e.g. "acr"
/// to {"arc", "car"}); `vectors` caches the decoded letter-count vector for
/// each signature so queries never re-derive it. Both maps always hold the
/// same key set. The index is immutable once built and is reconstructed
/// wholesale whenever the word list changes, never patched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignatureIndex {
    pub anagrams: HashMap<Signature, HashSet<String>>,
    pub vectors: HashMap<Signature, LetterVector>,
    pub stamp: SourceStamp,
}

impl SignatureIndex {
    /// Builds the index from raw word-list contents, one word token per
    /// line. Lines are trimmed of surrounding whitespace; blank lines are
    /// skipped. Words are NOT lowercased here: the word list is assumed to
    /// be lowercase already, and any stray uppercase letters simply never
    /// match a query vector slot.
    ///
    /// O(total characters) for signature computation, plus
    /// O(unique signatures * 26) for vector derivation.
    pub fn build_from_str(contents: &str) -> Self {
        let mut anagrams: HashMap<Signature, HashSet<String>> = HashMap::new();
        let mut vectors: HashMap<Signature, LetterVector> = HashMap::new();

        for raw_line in contents.lines() {
            let word = raw_line.trim();
            if word.is_empty() {
                continue;
            }

            let signature = signature_of(word);
            if !anagrams.contains_key(&signature) {
                // First sighting: decode the vector once per signature.
                vectors.insert(signature.clone(), LetterVector::from_word(&signature));
                anagrams.insert(signature.clone(), HashSet::new());
            }
            // Set semantics: duplicate words in the list collapse.
            if let Some(words) = anagrams.get_mut(&signature) {
                words.insert(word.to_string());
            }
        }

        Self {
            anagrams,
            vectors,
            stamp: SourceStamp::of_bytes(contents.as_bytes()),
        }
    }

    /// Reads the word list at `path` and builds the index from it.
    pub fn build_from_path(path: &Path) -> Result<Self, IndexError> {
        let contents = fs::read_to_string(path)?;
        Ok(Self::build_from_str(&contents))
    }

    /// Number of unique signatures.
    pub fn len(&self) -> usize {
        self.anagrams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.anagrams.is_empty()
    }
}
