//! JWalk-based sequential directory walker.

use std::fs::Metadata;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use globset::GlobSet;
use jwalk::{Parallelism, WalkDir};

use filetally_core::{ScanConfig, ScanError, ScanWarning, WarningKind};

/// A regular file found by the walker.
#[derive(Debug, Clone)]
pub struct FileEntry {
    /// Full path of the file.
    pub path: PathBuf,
    /// Size in bytes.
    pub size: u64,
    /// Last modification time, if the platform could report it.
    pub modified: Option<SystemTime>,
}

/// Walks a directory tree one entry at a time.
#[derive(Debug, Default)]
pub struct FileWalker;

impl FileWalker {
    /// Create a new walker.
    pub fn new() -> Self {
        Self
    }

    /// Start walking `config.root`.
    ///
    /// Fails if the root does not exist or is not a directory; every later
    /// problem is reported per entry through the returned iterator.
    pub fn walk(&self, config: &ScanConfig) -> Result<FileWalk, ScanError> {
        let root_path = config
            .root
            .canonicalize()
            .map_err(|e| ScanError::io(&config.root, e))?;

        if !root_path.is_dir() {
            return Err(ScanError::NotADirectory { path: root_path });
        }

        let matcher = config.ignore_matcher()?;

        // Serial + sorted keeps observation order stable across runs.
        let walker = WalkDir::new(&root_path)
            .parallelism(Parallelism::Serial)
            .sort(true)
            .skip_hidden(!config.include_hidden)
            .follow_links(config.follow_symlinks)
            .min_depth(1)
            .max_depth(config.max_depth.map(|d| d as usize).unwrap_or(usize::MAX));

        Ok(FileWalk {
            entries: Box::new(walker.into_iter()),
            root: root_path,
            matcher,
        })
    }
}

type EntryIter = Box<dyn Iterator<Item = Result<jwalk::DirEntry<((), ())>, jwalk::Error>>>;

/// Iterator over the files below a root.
pub struct FileWalk {
    entries: EntryIter,
    root: PathBuf,
    matcher: GlobSet,
}

impl FileWalk {
    /// Canonical root being walked.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn is_ignored(&self, path: &Path) -> bool {
        let relative = path.strip_prefix(&self.root).unwrap_or(path);
        ScanConfig::is_ignored(&self.matcher, relative)
    }
}

impl Iterator for FileWalk {
    type Item = Result<FileEntry, ScanWarning>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.entries.next()? {
                Ok(e) => e,
                Err(err) => {
                    let path = err.path().map(|p| p.to_path_buf()).unwrap_or_default();
                    return Some(Err(ScanWarning::new(
                        path,
                        err.to_string(),
                        WarningKind::ReadError,
                    )));
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();
            if self.is_ignored(&path) {
                continue;
            }

            let metadata = match file_metadata(&path) {
                Ok(m) => m,
                Err(warning) => return Some(Err(warning)),
            };

            let modified = match metadata.modified() {
                Ok(time) => Some(time),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "modification time unavailable");
                    None
                }
            };

            return Some(Ok(FileEntry {
                path,
                size: metadata.len(),
                modified,
            }));
        }
    }
}

/// Metadata of a file the walker already classified as regular.
fn file_metadata(path: &Path) -> Result<Metadata, ScanWarning> {
    std::fs::metadata(path).map_err(|err| ScanWarning::from_io(path, &err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_tree() -> TempDir {
        let temp = TempDir::new().unwrap();
        let root = temp.path();

        fs::create_dir(root.join("dir1")).unwrap();
        fs::create_dir(root.join("dir1/subdir")).unwrap();
        fs::create_dir(root.join("skipme")).unwrap();

        fs::write(root.join("b.txt"), "hello").unwrap();
        fs::write(root.join("a.pdf"), "pdf").unwrap();
        fs::write(root.join("dir1/c.log"), "world world").unwrap();
        fs::write(root.join("dir1/subdir/d.txt"), "test").unwrap();
        fs::write(root.join("skipme/e.txt"), "ignored").unwrap();
        fs::write(root.join(".hidden"), "secret").unwrap();

        temp
    }

    fn names(walk: FileWalk) -> Vec<String> {
        walk.filter_map(Result::ok)
            .map(|e| e.path.file_name().unwrap().to_string_lossy().to_string())
            .collect()
    }

    #[test]
    fn test_walk_yields_files_only() {
        let temp = create_test_tree();
        let config = ScanConfig::new(temp.path());

        let entries: Vec<FileEntry> = FileWalker::new()
            .walk(&config)
            .unwrap()
            .filter_map(Result::ok)
            .collect();

        assert_eq!(entries.len(), 6);
        assert!(entries.iter().all(|e| e.path.is_file()));
        assert!(entries.iter().all(|e| e.modified.is_some()));

        let pdf = entries.iter().find(|e| e.path.ends_with("a.pdf")).unwrap();
        assert_eq!(pdf.size, 3);
    }

    #[test]
    fn test_walk_order_is_stable() {
        let temp = create_test_tree();
        let config = ScanConfig::new(temp.path());
        let walker = FileWalker::new();

        let first = names(walker.walk(&config).unwrap());
        let second = names(walker.walk(&config).unwrap());
        assert_eq!(first, second);
    }

    #[test]
    fn test_skip_hidden() {
        let temp = create_test_tree();
        let config = ScanConfig::builder()
            .root(temp.path())
            .include_hidden(false)
            .build()
            .unwrap();

        let found = names(FileWalker::new().walk(&config).unwrap());
        assert!(!found.contains(&".hidden".to_string()));
        assert_eq!(found.len(), 5);
    }

    #[test]
    fn test_ignore_patterns_prune_subtree() {
        let temp = create_test_tree();
        let config = ScanConfig::builder()
            .root(temp.path())
            .ignore_patterns(vec!["skipme".to_string(), "*.log".to_string()])
            .build()
            .unwrap();

        let found = names(FileWalker::new().walk(&config).unwrap());
        assert!(!found.contains(&"e.txt".to_string()));
        assert!(!found.contains(&"c.log".to_string()));
        assert!(found.contains(&"d.txt".to_string()));
    }

    #[test]
    fn test_max_depth() {
        let temp = create_test_tree();
        let config = ScanConfig::builder()
            .root(temp.path())
            .max_depth(Some(1u32))
            .build()
            .unwrap();

        let mut found = names(FileWalker::new().walk(&config).unwrap());
        found.sort();
        assert_eq!(found, vec![".hidden", "a.pdf", "b.txt"]);
    }

    #[test]
    fn test_metadata_failure_is_classified() {
        let temp = TempDir::new().unwrap();
        let gone = temp.path().join("vanished.pdf");

        let warning = file_metadata(&gone).unwrap_err();
        assert_eq!(warning.path, gone);
        assert_eq!(warning.kind, WarningKind::MetadataError);
    }

    #[test]
    fn test_missing_root_is_fatal() {
        let temp = TempDir::new().unwrap();
        let config = ScanConfig::new(temp.path().join("nope"));

        let err = FileWalker::new().walk(&config).err().unwrap();
        assert!(matches!(err, ScanError::NotFound { .. }));
    }

    #[test]
    fn test_file_root_is_fatal() {
        let temp = create_test_tree();
        let config = ScanConfig::new(temp.path().join("a.pdf"));

        let err = FileWalker::new().walk(&config).err().unwrap();
        assert!(matches!(err, ScanError::NotADirectory { .. }));
    }
}
