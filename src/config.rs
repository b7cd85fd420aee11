use std::env;

/// A setting that can be supplied through the environment or a `.env` file.
pub trait FromEnv {
    /// The environment variable name for this setting
    const KEY_NAME: &'static str;

    /// Value used when neither the environment nor `.env` provide one
    const DEFAULT: &'static str;

    /// Look the setting up in the process environment; empty counts as unset
    fn find_value() -> Option<String> {
        env::var(Self::KEY_NAME).ok().filter(|v| !v.is_empty())
    }

    /// Resolve in order: explicit value, environment, default
    fn resolve(explicit: Option<String>) -> String {
        explicit
            .or_else(Self::find_value)
            .unwrap_or_else(|| Self::DEFAULT.to_string())
    }
}

/// Location of the JSON document to search.
pub struct DocumentPath;

impl FromEnv for DocumentPath {
    const KEY_NAME: &'static str = "PATHFIND_DOCUMENT";
    const DEFAULT: &'static str = "playlist.json";
}

/// Separator placed between path segments when printing.
pub struct Separator;

impl FromEnv for Separator {
    const KEY_NAME: &'static str = "PATHFIND_SEPARATOR";
    const DEFAULT: &'static str = ".";
}

/// Settings for one run of the `pathfind` binary after every source has been consulted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    pub document: String,
    pub separator: String,
}

impl SearchConfig {
    /// Load `.env` (searched from the working directory upwards, silently
    /// ignored if absent) into the environment, then resolve.
    ///
    /// Variables already set in the environment take precedence over `.env`.
    pub fn resolve(document: Option<String>, separator: Option<String>) -> Self {
        let _ = dotenvy::dotenv();

        Self::from_env(document, separator)
    }

    /// Resolve from explicit values and the process environment only.
    pub fn from_env(document: Option<String>, separator: Option<String>) -> Self {
        Self {
            document: DocumentPath::resolve(document),
            separator: Separator::resolve(separator),
        }
    }
}
