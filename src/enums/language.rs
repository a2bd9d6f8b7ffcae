use std::fmt;
use std::path::Path;
use std::str::FromStr;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use crate::config::constants::SUPPORTED_FILE_EXTENSIONS;

/// Languages accepted by the analysis service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Javascript,
    Typescript,
    Python,
    Java,
    Cpp,
    Csharp,
    Php,
    Ruby,
    Go,
    Rust,
    Swift,
    Kotlin,
    Scala,
    Html,
    Css,
    Sql,
}

impl Language {
    pub const ALL: [Self; 16] = [
        Self::Javascript,
        Self::Typescript,
        Self::Python,
        Self::Java,
        Self::Cpp,
        Self::Csharp,
        Self::Php,
        Self::Ruby,
        Self::Go,
        Self::Rust,
        Self::Swift,
        Self::Kotlin,
        Self::Scala,
        Self::Html,
        Self::Css,
        Self::Sql,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Javascript => "javascript",
            Self::Typescript => "typescript",
            Self::Python => "python",
            Self::Java => "java",
            Self::Cpp => "cpp",
            Self::Csharp => "csharp",
            Self::Php => "php",
            Self::Ruby => "ruby",
            Self::Go => "go",
            Self::Rust => "rust",
            Self::Swift => "swift",
            Self::Kotlin => "kotlin",
            Self::Scala => "scala",
            Self::Html => "html",
            Self::Css => "css",
            Self::Sql => "sql",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Javascript => "JavaScript",
            Self::Typescript => "TypeScript",
            Self::Python => "Python",
            Self::Java => "Java",
            Self::Cpp => "C++",
            Self::Csharp => "C#",
            Self::Php => "PHP",
            Self::Ruby => "Ruby",
            Self::Go => "Go",
            Self::Rust => "Rust",
            Self::Swift => "Swift",
            Self::Kotlin => "Kotlin",
            Self::Scala => "Scala",
            Self::Html => "HTML",
            Self::Css => "CSS",
            Self::Sql => "SQL",
        }
    }

    pub const fn icon(self) -> &'static str {
        match self {
            Self::Javascript | Self::Scala => "⚡",
            Self::Typescript => "🔷",
            Self::Python => "🐍",
            Self::Java => "☕",
            Self::Cpp => "⚙️",
            Self::Csharp => "🎯",
            Self::Php => "🐘",
            Self::Ruby => "💎",
            Self::Go => "🚀",
            Self::Rust => "🦀",
            Self::Swift => "🍎",
            Self::Kotlin => "📱",
            Self::Html => "🌐",
            Self::Css => "🎨",
            Self::Sql => "🗄️",
        }
    }

    /// Extensions mapped to this language.
    pub fn extensions(self) -> Vec<&'static str> {
        SUPPORTED_FILE_EXTENSIONS
            .iter()
            .filter(|(_, lang)| *lang == self.as_str())
            .map(|(ext, _)| *ext)
            .collect()
    }

    pub fn from_extension(extension: &str) -> Option<Self> {
        let extension = extension.trim_start_matches('.').to_ascii_lowercase();
        SUPPORTED_FILE_EXTENSIONS
            .iter()
            .find(|(ext, _)| *ext == extension)
            .and_then(|(_, lang)| lang.parse().ok())
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|lang| lang.as_str() == needle)
            .ok_or_else(|| format!("unsupported language: {s}"))
    }
}
