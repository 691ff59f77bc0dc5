use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use tracing::debug;

use crate::dataset::METADATA_FILE_NAME;
use crate::error::FetchError;
use crate::Result;

/// Encode `descriptor` as a JSON object indented with four spaces.
pub fn render<T: Serialize>(descriptor: &T) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    descriptor.serialize(&mut ser)?;
    Ok(buf)
}

/// Write `descriptor` to `<dir>/dataset_metadata.json`, replacing any previous file.
pub fn write_metadata<T: Serialize>(dir: &Path, descriptor: &T) -> Result<PathBuf> {
    let path = dir.join(METADATA_FILE_NAME);
    let bytes = render(descriptor)?;
    fs::write(&path, &bytes).map_err(|source| FetchError::WriteMetadata {
        path: path.clone(),
        source,
    })?;
    debug!(path = %path.display(), bytes = bytes.len(), "metadata written");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::DESCRIPTOR;
    use tempfile::tempdir;

    const EXPECTED: &str = "{\n    \"platform\": \"PacBio\",\n    \"technology\": \"IsoSeq\"\n}";

    #[test]
    fn renders_with_four_space_indent() {
        let bytes = render(&DESCRIPTOR).unwrap();
        assert_eq!(String::from_utf8(bytes).unwrap(), EXPECTED);
    }

    #[test]
    fn overwrites_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(METADATA_FILE_NAME);
        fs::write(&path, "{\"platform\": \"Illumina\", \"extra\": \"a much longer stale value\"}").unwrap();

        let written = write_metadata(dir.path(), &DESCRIPTOR).unwrap();
        assert_eq!(written, path);
        assert_eq!(fs::read_to_string(&path).unwrap(), EXPECTED);
    }

    #[test]
    fn repeated_writes_are_identical() {
        let dir = tempdir().unwrap();
        let path = write_metadata(dir.path(), &DESCRIPTOR).unwrap();
        let first = fs::read(&path).unwrap();
        write_metadata(dir.path(), &DESCRIPTOR).unwrap();
        assert_eq!(fs::read(&path).unwrap(), first);
    }

    #[test]
    fn missing_directory_is_a_write_error() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope");
        let err = write_metadata(&missing, &DESCRIPTOR).unwrap_err();
        assert!(matches!(err, FetchError::WriteMetadata { .. }));
    }
}
