use std::fmt;
use std::path::Path;
use serde::{Deserialize, Serialize};
use crate::config::constants::{PLUGIN_PREFIX, PROP_PREFIX};
use crate::structs::host::settings::Settings;

/// Languages served by the analyzer server.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, Eq, Hash, PartialEq)]
pub enum Language {
    #[serde(rename = "cs")]
    CSharp,
    #[serde(rename = "vbnet")]
    VbNet,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::CSharp, Language::VbNet];

    pub fn key(&self) -> &'static str {
        match self {
            Self::CSharp => "cs",
            Self::VbNet => "vbnet",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::CSharp => "C#",
            Self::VbNet => "VB.NET",
        }
    }

    pub fn repository_key(&self) -> &'static str {
        match self {
            Self::CSharp => "csharpsquid",
            Self::VbNet => "vbnet",
        }
    }

    /// Razor views share their extension with the HTML language, so they are matched by extension.
    pub fn razor_extension(&self) -> &'static str {
        match self {
            Self::CSharp => "cshtml",
            Self::VbNet => "vbhtml",
        }
    }

    pub fn default_file_suffixes(&self) -> &'static str {
        match self {
            Self::CSharp => ".cs,.cshtml,.razor",
            Self::VbNet => ".vb,.vbhtml",
        }
    }

    pub fn file_suffixes_key(&self) -> String {
        format!("{}{}.{}file.suffixes", PROP_PREFIX, self.key(), PLUGIN_PREFIX)
    }

    /// Prefix shared by every analyzer setting of this language.
    pub fn settings_prefix(&self) -> String {
        format!("{}{}", PROP_PREFIX, self.key())
    }

    pub fn file_suffixes(&self, settings: &Settings) -> Vec<String> {
        settings
            .get_string_array(&self.file_suffixes_key())
            .filter(|suffixes| !suffixes.is_empty())
            .unwrap_or_else(|| {
                self.default_file_suffixes()
                    .split(',')
                    .map(str::to_string)
                    .collect()
            })
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|language| language.key() == key)
    }

    /// First language whose configured suffixes match the file name.
    pub fn detect(path: &Path, settings: &Settings) -> Option<Self> {
        let file_name = path.file_name()?.to_str()?.to_ascii_lowercase();

        Self::ALL.into_iter().find(|language| {
            language
                .file_suffixes(settings)
                .iter()
                .any(|suffix| file_name.ends_with(&suffix.to_ascii_lowercase()))
        })
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
