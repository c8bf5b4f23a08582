use std::path::{Path, PathBuf};
use reqwest::Url;
use crate::errors::{BridgeError, BridgeResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputFile {
    pub path: PathBuf,
    pub uri: Url,
    pub language: Option<String>,
}

impl InputFile {
    pub fn new(path: &Path, language: Option<&str>) -> BridgeResult<Self> {
        let uri = Url::from_file_path(path).map_err(|_| {
            BridgeError::system_error("file discovery", &format!("'{}' is not an absolute path", path.display()))
        })?;

        Ok(Self {
            path: path.to_path_buf(),
            uri,
            language: language.map(str::to_string),
        })
    }

    pub fn extension(&self) -> Option<&str> {
        self.path.extension().and_then(|ext| ext.to_str())
    }
}
