// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Batch file output.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Write `lines` newline-delimited to `path` (truncating) and return its absolute path.
pub fn write_batch<S: AsRef<str>>(path: &Path, lines: &[S]) -> io::Result<PathBuf> {
    let mut out = BufWriter::new(File::create(path)?);
    for line in lines {
        out.write_all(line.as_ref().as_bytes())?;
        out.write_all(b"\n")?;
    }
    out.flush()?;
    fs::canonicalize(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_line_per_command_and_absolute_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("out.txt");
        let abs = write_batch(&path, &["a", "b"]).expect("write");
        assert!(abs.is_absolute());
        assert_eq!(fs::read_to_string(&abs).expect("read"), "a\nb\n");
    }

    #[test]
    fn empty_batch_truncates() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("out.txt");
        fs::write(&path, "stale\n").expect("seed file");
        write_batch::<&str>(&path, &[]).expect("write");
        assert_eq!(fs::read_to_string(&path).expect("read"), "");
    }
}
