// src/file.rs

use std::{
    fs::{self, File, OpenOptions},
    io::BufWriter,
    path::Path,
};

use crate::error::{Error, Result};

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.as_os_str().is_empty() {
        return Ok(());
    }
    if dir.exists() && !dir.is_dir() {
        return Err(Error::io(
            dir,
            std::io::Error::new(std::io::ErrorKind::AlreadyExists, "path exists but is not a directory"),
        ));
    }
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))?;
    }
    Ok(())
}

/// Ensure parent dir exists, then create/truncate.
pub fn create_truncate(path: &Path) -> Result<BufWriter<File>> {
    if let Some(parent) = path.parent() {
        ensure_directory(parent)?;
    }
    let file = File::create(path).map_err(|e| Error::io(path, e))?;
    Ok(BufWriter::new(file))
}

/// Append to a file this run already created.
pub fn open_append(path: &Path) -> Result<BufWriter<File>> {
    let file = OpenOptions::new().append(true).open(path).map_err(|e| Error::io(path, e))?;
    Ok(BufWriter::new(file))
}

/// Remove files with extension `ext` directly under `dir`. Subdirectories
/// and other files are left alone. Returns how many were removed.
pub fn clear_files_with_ext(dir: &Path, ext: &str) -> Result<usize> {
    if !dir.is_dir() {
        return Ok(0);
    }
    let mut removed = 0;
    for entry in fs::read_dir(dir).map_err(|e| Error::io(dir, e))? {
        let path = entry.map_err(|e| Error::io(dir, e))?.path();
        if !path.is_file() { continue; }
        if path.extension().and_then(|s| s.to_str()) != Some(ext) { continue; }
        fs::remove_file(&path).map_err(|e| Error::io(&path, e))?;
        removed += 1;
    }
    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn clears_only_matching_extension() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.jsonl"), "x").unwrap();
        fs::write(dir.path().join("b.jsonl"), "x").unwrap();
        fs::write(dir.path().join("notes.txt"), "x").unwrap();
        assert_eq!(clear_files_with_ext(dir.path(), "jsonl").unwrap(), 2);
        assert!(dir.path().join("notes.txt").exists());
        assert_eq!(clear_files_with_ext(&dir.path().join("missing"), "jsonl").unwrap(), 0);
    }

    #[test]
    fn truncate_then_append() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("nested/out.txt");
        {
            let mut w = create_truncate(&p).unwrap();
            write!(w, "one").unwrap();
        }
        {
            let mut w = open_append(&p).unwrap();
            write!(w, "two").unwrap();
        }
        assert_eq!(fs::read_to_string(&p).unwrap(), "onetwo");
        let mut w = create_truncate(&p).unwrap();
        write!(w, "three").unwrap();
        drop(w);
        assert_eq!(fs::read_to_string(&p).unwrap(), "three");
    }

    #[test]
    fn file_in_place_of_dir_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("f");
        fs::write(&p, "x").unwrap();
        assert!(ensure_directory(&p).is_err());
    }
}
