use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// List the immediate children of `dir` as full paths, in the order the
/// platform yields them. `.` and `..` are never included.
///
/// The directory stream is dropped before returning, on success and on
/// error alike, so callers may change the directory (or its mode) while
/// walking the returned list.
pub(crate) fn read_children(dir: &Path) -> io::Result<Vec<PathBuf>> {
    fs::read_dir(dir)?
        .map(|entry| entry.map(|e| e.path()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;
    use tempfile::tempdir;

    #[test]
    fn children_are_full_paths_without_dot_entries() {
        let td = tempdir().expect("tempdir");
        fs::write(td.path().join("a.txt"), b"a").unwrap();
        fs::create_dir(td.path().join("sub")).unwrap();

        let got: BTreeSet<PathBuf> = read_children(td.path()).unwrap().into_iter().collect();
        let want: BTreeSet<PathBuf> = [td.path().join("a.txt"), td.path().join("sub")]
            .into_iter()
            .collect();
        assert_eq!(got, want);
    }

    #[test]
    fn reading_a_file_as_directory_fails() {
        let td = tempdir().expect("tempdir");
        let f = td.path().join("plain");
        fs::write(&f, b"x").unwrap();
        assert!(read_children(&f).is_err());
    }
}
