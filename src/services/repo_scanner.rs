use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use crate::config::constants::{HTML_LANGUAGE_KEY, SCANNER_IGNORED_DIRS};
use crate::enums::language::Language;
use crate::errors::{BridgeError, BridgeResult};
use crate::structs::host::input_file::InputFile;
use crate::structs::host::settings::Settings;

/// Finds the source files of a local directory tree, the way the host would index them.
pub struct RepoScanner {
    root: PathBuf,
    settings: Settings,
}

impl RepoScanner {
    pub fn new(root: &Path, settings: Settings) -> Self {
        Self {
            root: root.to_path_buf(),
            settings,
        }
    }

    fn load_ignore_patterns(&self) -> HashSet<String> {
        let mut patterns: HashSet<String> = SCANNER_IGNORED_DIRS.iter().map(|p| p.to_string()).collect();

        match fs::read_to_string(self.root.join(".gitignore")) {
            Ok(content) => patterns.extend(
                content
                    .lines()
                    .map(str::trim)
                    .filter(|line| !line.is_empty() && !line.starts_with('#') && !line.starts_with('!'))
                    .map(|line| line.trim_start_matches('/').to_string()),
            ),
            Err(_) => log::debug!("No .gitignore in {}, using default ignore patterns", self.root.display()),
        }

        patterns
    }

    pub fn scan_files(&self) -> BridgeResult<Vec<InputFile>> {
        let root = fs::canonicalize(&self.root).map_err(|e| BridgeError::ConfigurationFileError {
            path: self.root.display().to_string(),
            reason: e.to_string(),
        })?;
        if !root.is_dir() {
            return Err(BridgeError::config_error(
                &format!("'{}' is not a directory", root.display()),
                None,
                Some("Pass the root folder of the solution to analyze"),
            ));
        }

        let patterns = self.load_ignore_patterns();
        let mut files = Vec::new();
        self.collect_files(&root, &root, &patterns, &mut files);
        files.sort_by(|a, b| a.path.cmp(&b.path));

        log::info!("📂 Found {} source files under {}", files.len(), root.display());
        Ok(files)
    }

    fn collect_files(&self, dir: &Path, root: &Path, patterns: &HashSet<String>, files: &mut Vec<InputFile>) {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                log::warn!("⚠️ Cannot read directory {}: {}", dir.display(), e);
                return;
            }
        };

        for entry in entries.flatten() {
            let path = entry.path();
            let relative_path = path.strip_prefix(root).unwrap_or(&path).to_string_lossy().replace('\\', "/");
            let file_type = match entry.file_type() {
                Ok(file_type) => file_type,
                Err(e) => {
                    log::warn!("⚠️ Skipping {}: {}", path.display(), e);
                    continue;
                }
            };
            // Linked directories may point back at an ancestor; linked files are still indexed.
            if file_type.is_symlink() && path.is_dir() {
                log::debug!("Not following directory link {}", path.display());
                continue;
            }
            let is_dir = file_type.is_dir();

            if Self::is_ignored(&relative_path, is_dir, patterns) {
                continue;
            }

            if is_dir {
                self.collect_files(&path, root, patterns, files);
            } else if let Some(language) = self.language_of(&path) {
                match InputFile::new(&path, Some(language)) {
                    Ok(file) => files.push(file),
                    Err(e) => log::warn!("⚠️ Skipping {}: {}", path.display(), e),
                }
            }
        }
    }

    /// Razor views are indexed under the HTML language, like the host does.
    fn language_of(&self, path: &Path) -> Option<&'static str> {
        let language = Language::detect(path, &self.settings)?;
        let extension = path.extension().and_then(|ext| ext.to_str()).unwrap_or_default();

        if Language::ALL.iter().any(|l| extension.eq_ignore_ascii_case(l.razor_extension())) {
            Some(HTML_LANGUAGE_KEY)
        } else {
            Some(language.key())
        }
    }

    fn is_ignored(relative_path: &str, is_dir: bool, patterns: &HashSet<String>) -> bool {
        let file_name = relative_path.rsplit('/').next().unwrap_or(relative_path);

        patterns.iter().any(|pattern| match pattern.strip_suffix('/') {
            Some(dir_pattern) => is_dir && (Self::matches_glob(relative_path, dir_pattern) || Self::matches_glob(file_name, dir_pattern)),
            None => Self::matches_glob(relative_path, pattern) || Self::matches_glob(file_name, pattern),
        })
    }

    fn matches_glob(text: &str, pattern: &str) -> bool {
        match pattern.find('*') {
            None => text == pattern,
            Some(star) => {
                let (prefix, rest) = pattern.split_at(star);
                let suffix = rest.trim_start_matches('*');
                text.len() >= prefix.len() + suffix.len() && text.starts_with(prefix) && text.ends_with(suffix)
            }
        }
    }
}
