use super::KvStore;
use crate::error::{GarbError, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }

    fn ensure_root(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(GarbError::Io)?;
        }
        Ok(())
    }
}

impl KvStore for FileStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path).map_err(GarbError::Io)?;
        Ok(Some(content))
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        self.ensure_root()?;
        fs::write(self.key_path(key), value).map_err(GarbError::Io)?;
        Ok(())
    }
}
