use chrono::NaiveDateTime;
use std::path::{Path, PathBuf};

use super::config::OutputNaming;

/// Propose an output file name such as `T2-20241015-0930.xml`.
///
/// The caller decides the directory and whether an existing file may be
/// overwritten.
pub fn output_file_name(now: NaiveDateTime, naming: &OutputNaming) -> String {
    format!(
        "{}{}.{}",
        naming.prefix,
        now.format(&naming.stamp_format),
        naming.extension
    )
}

/// [`output_file_name`] resolved against a directory.
pub fn output_path(dir: impl AsRef<Path>, now: NaiveDateTime, naming: &OutputNaming) -> PathBuf {
    dir.as_ref().join(output_file_name(now, naming))
}
