use std::collections::HashMap;
use std::io::{Error, ErrorKind};
use std::path::{Path, PathBuf};

use crate::config::FileSystem;

/// In-memory filesystem keyed by forward-slash paths.
pub struct MockFileSystem {
    files: HashMap<String, String>,
    current_dir: PathBuf,
    config_dir: Option<PathBuf>,
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self {
            files: HashMap::new(),
            current_dir: PathBuf::from("/project"),
            config_dir: Some(PathBuf::from("/home/user/.config/metric-trends")),
        }
    }

    pub fn with_file(mut self, path: &str, content: &str) -> Self {
        self.files.insert(key(Path::new(path)), content.to_string());
        self
    }

    pub fn with_current_dir(mut self, path: &str) -> Self {
        self.current_dir = PathBuf::from(path);
        self
    }

    pub fn with_config_dir(mut self, path: Option<&str>) -> Self {
        self.config_dir = path.map(PathBuf::from);
        self
    }
}

impl FileSystem for MockFileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        self.files
            .get(&key(path))
            .cloned()
            .ok_or_else(|| Error::new(ErrorKind::NotFound, "file not found"))
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(&key(path))
    }

    fn current_dir(&self) -> std::io::Result<PathBuf> {
        Ok(self.current_dir.clone())
    }

    fn config_dir(&self) -> Option<PathBuf> {
        self.config_dir.clone()
    }
}

fn key(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}
