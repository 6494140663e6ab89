//! Extractor configuration (input and output locations).

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default location of the reference ReACT set.
pub const DEFAULT_REFERENCE_PATH: &str = "react_extractor/react_set.json";

/// Default location of the extraction output.
pub const DEFAULT_OUTPUT_PATH: &str = "output/extracted_react.json";

/// Month evaluated when none is given.
pub const DEFAULT_MONTH: i64 = 9;

/// Environment variable overriding the reference set path.
pub const REFERENCE_PATH_ENV: &str = "REACT_SET_PATH";

/// Environment variable overriding the output path.
pub const OUTPUT_PATH_ENV: &str = "REACT_OUTPUT_PATH";

/// Where the extractor reads its reference set and writes its output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractorConfig {
    pub reference_path: PathBuf,
    pub output_path: PathBuf,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            reference_path: PathBuf::from(DEFAULT_REFERENCE_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}

impl ExtractorConfig {
    /// Defaults, overridden by `REACT_SET_PATH` and `REACT_OUTPUT_PATH`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(path) = lookup(REFERENCE_PATH_ENV).filter(|p| !p.is_empty()) {
            config.reference_path = PathBuf::from(path);
        }
        if let Some(path) = lookup(OUTPUT_PATH_ENV).filter(|p| !p.is_empty()) {
            config.output_path = PathBuf::from(path);
        }
        config
    }

    /// Override the reference set path.
    pub fn with_reference_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.reference_path = path.into();
        self
    }

    /// Override the output path.
    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }
}
