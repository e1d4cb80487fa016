// src/core/types.rs
use serde::{Deserialize, Serialize};

/// Number of symbols in the lowercase Latin alphabet.
pub const ALPHABET_LEN: usize = 26;

/// A sorted-letter key grouping exact anagrams.
/// Example: "arc" and "car" both map to the signature "acr".
pub type Signature = String;

/// A letter-count vector in the 26-dimensional space whose basis is the
/// lowercase Latin alphabet. Slot `i` holds the number of occurrences of
/// the `i`-th letter (a=0 .. z=25).
///
/// Two words are exact anagrams iff their vectors are equal; a word is a
/// subanagram of another iff its vector is dominated component-wise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterVector([u32; ALPHABET_LEN]);

impl LetterVector {
    /// Counts the lowercase ASCII letters of `word` into a fixed vector.
    ///
    /// Lenient policy: bytes outside `a..=z` (uppercase included) match no
    /// slot and are silently ignored. Permutation-invariant, so both "abc"
    /// and "cab" map to `[1,1,1,0,...,0]`.
    pub fn from_word(word: &str) -> Self {
        let mut counts = [0u32; ALPHABET_LEN];
        for byte in word.bytes() {
            if byte.is_ascii_lowercase() {
                counts[(byte - b'a') as usize] += 1;
            }
        }
        Self(counts)
    }

    /// Subanagram test: true iff every slot of `self` is `<=` the
    /// corresponding slot of `other`. A vector dominates itself.
    pub fn is_dominated_by(&self, other: &LetterVector) -> bool {
        self.0.iter().zip(other.0.iter()).all(|(c, q)| c <= q)
    }

    /// Total letter count, i.e. the length of the (letters-only) word.
    pub fn total(&self) -> u32 {
        self.0.iter().sum()
    }
}

/// Returns the canonical sorted-letter signature of `word`.
/// O(k log k) in the word length.
pub fn signature_of(word: &str) -> Signature {
    let mut letters: Vec<char> = word.chars().collect();
    letters.sort_unstable();
    letters.into_iter().collect()
}
