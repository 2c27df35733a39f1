//! Capability-based file access for the loaders.

use std::io::Read;

use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8};

use crate::DataError;

/// Open a UTF-8 file path using ambient authority.
pub(crate) fn open_utf8_file(path: &Utf8Path) -> Result<fs_utf8::File, DataError> {
    fs_utf8::File::open_ambient(path, ambient_authority()).map_err(|source| DataError::Open {
        path: path.to_path_buf(),
        source,
    })
}

/// Return whether `path` exists and is a regular file.
pub(crate) fn file_is_file(path: &Utf8Path) -> bool {
    let parent = path
        .parent()
        .filter(|parent| !parent.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    let Some(name) = path.file_name() else {
        return false;
    };
    fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())
        .and_then(|dir| dir.metadata(name))
        .is_ok_and(|meta| meta.is_file())
}

/// Headerless CSV reader that trims every field and allows ragged rows.
pub(crate) fn csv_reader<R: Read>(reader: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader)
}
