use super::FileSystem;
use anyhow::{anyhow, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

/// In-memory file system for tests
pub struct MockFileSystem {
    files: RwLock<HashMap<PathBuf, String>>,
    root: PathBuf,
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self {
            files: RwLock::new(HashMap::new()),
            root: PathBuf::from("/mock"),
        }
    }

    pub fn with_root(root: PathBuf) -> Self {
        Self {
            files: RwLock::new(HashMap::new()),
            root,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn add_file(&self, path: impl AsRef<Path>, content: &str) {
        let path = self.normalize_path(path.as_ref());
        self.files.write().unwrap().insert(path, content.to_string());
    }

    fn normalize_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }
}

impl Default for MockFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for MockFileSystem {
    fn exists(&self, path: &Path) -> bool {
        let path = self.normalize_path(path);
        self.files.read().unwrap().contains_key(&path)
    }

    fn is_file(&self, path: &Path) -> bool {
        self.exists(path)
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        let path = self.normalize_path(path);
        self.files
            .read()
            .unwrap()
            .get(&path)
            .cloned()
            .ok_or_else(|| anyhow!("File not found: {:?}", path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_file() {
        let fs = MockFileSystem::new();
        fs.add_file("test.txt", "hello");

        assert!(fs.exists(Path::new("/mock/test.txt")));
        assert!(fs.is_file(Path::new("/mock/test.txt")));
    }

    #[test]
    fn test_read_to_string() {
        let fs = MockFileSystem::new();
        fs.add_file("test.txt", "hello world");

        let content = fs.read_to_string(Path::new("/mock/test.txt")).unwrap();
        assert_eq!(content, "hello world");
    }

    #[test]
    fn test_read_to_string_missing() {
        let fs = MockFileSystem::new();

        assert!(fs.read_to_string(Path::new("/mock/missing.txt")).is_err());
    }

    #[test]
    fn test_with_root() {
        let fs = MockFileSystem::with_root(PathBuf::from("/repo"));
        fs.add_file("package.json", "{}");

        assert!(fs.exists(Path::new("/repo/package.json")));
        let content = fs.read_to_string(Path::new("/repo/package.json")).unwrap();
        assert_eq!(content, "{}");
    }
}
