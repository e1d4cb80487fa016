// File: src/persistence.rs
use crate::core::index::SignatureIndex;
use crate::errors::IndexError;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::Path;
use tempfile::NamedTempFile;

/// Format marker written at the head of every persisted index.
const MAGIC: [u8; 4] = *b"SGIX";
/// Bumped whenever the on-disk layout changes incompatibly.
const FORMAT_VERSION: u32 = 1;

/// The on-disk envelope around the index.
///
/// Magic and version are checked before the payload is trusted, so a
/// future layout change is detected instead of silently misread.
#[derive(serde::Serialize, serde::Deserialize)]
struct PersistedIndex {
    magic: [u8; 4],
    version: u32,
    index: SignatureIndex,
}

/// Serializes the index to `path` via an atomic replace: the blob is
/// written to a temp file in the destination directory, then renamed into
/// place. A concurrent reader never observes a half-written index.
pub fn save_to_disk(index: &SignatureIndex, path: &Path) -> Result<(), IndexError> {
    let parent_dir = path.parent().unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent_dir)?;

    let envelope = PersistedIndex {
        magic: MAGIC,
        version: FORMAT_VERSION,
        index: index.clone(),
    };

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    let writer = BufWriter::new(&temp_file);
    bincode::serialize_into(writer, &envelope)?;

    temp_file.persist(path).map_err(|e| IndexError::Io(e.error))?;
    Ok(())
}

/// Loads a previously persisted index from `path`.
///
/// Returns `IndexError::Io` when the file is missing/unreadable and
/// `IndexError::Format` when the blob fails decoding or the magic/version
/// check. Callers decide whether a format failure is fatal or a rebuild
/// trigger; this function only reports it.
pub fn load_from_disk(path: &Path) -> Result<SignatureIndex, IndexError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let envelope: PersistedIndex =
        bincode::deserialize_from(reader).map_err(|e| IndexError::Format {
            reason: e.to_string(),
        })?;

    if envelope.magic != MAGIC {
        return Err(IndexError::Format {
            reason: "bad magic marker".to_string(),
        });
    }
    if envelope.version != FORMAT_VERSION {
        return Err(IndexError::Format {
            reason: format!(
                "unsupported format version {} (expected {})",
                envelope.version, FORMAT_VERSION
            ),
        });
    }

    Ok(envelope.index)
}
