#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SuggestionCategory {
    Errors,
    Security,
    Refactor,
    Readability,
}

impl SuggestionCategory {
    pub const ALL: [Self; 4] = [Self::Errors, Self::Security, Self::Refactor, Self::Readability];

    pub const fn key(self) -> &'static str {
        match self {
            Self::Errors => "errors",
            Self::Security => "security",
            Self::Refactor => "refactor",
            Self::Readability => "readability",
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::Errors => "Errors / Bugs",
            Self::Security => "Security Vulnerabilities",
            Self::Refactor => "Refactor Suggestions",
            Self::Readability => "Readability Improvements",
        }
    }

    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Errors => "🚨",
            Self::Security => "🔒",
            Self::Refactor => "🔧",
            Self::Readability => "📖",
        }
    }
}
