//! Bulk operation kinds

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The kinds of bulk action an executor can be created for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationKind {
    /// Refresh subscriber/view statistics for a channel
    StatsFetch,
    /// Classify a channel's content type
    TypeGeneration,
    /// Generate search keywords for an item
    KeywordGeneration,
    /// Capture a screenshot of the item's reference URL
    ScreenshotCapture,
}

impl OperationKind {
    pub const ALL: [OperationKind; 4] = [
        Self::StatsFetch,
        Self::TypeGeneration,
        Self::KeywordGeneration,
        Self::ScreenshotCapture,
    ];

    /// Short name used on the command line and in config keys
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::StatsFetch => "stats",
            Self::TypeGeneration => "type",
            Self::KeywordGeneration => "keywords",
            Self::ScreenshotCapture => "screenshot",
        }
    }

    /// Backend function invoked unless the config overrides it
    pub fn default_function(&self) -> &'static str {
        match self {
            Self::StatsFetch => "fetch-channel-stats",
            Self::TypeGeneration => "generate-channel-type",
            Self::KeywordGeneration => "generate-keywords",
            Self::ScreenshotCapture => "capture-screenshot",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OperationKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stats" | "stats_fetch" => Ok(Self::StatsFetch),
            "type" | "type_generation" => Ok(Self::TypeGeneration),
            "keywords" | "keyword_generation" => Ok(Self::KeywordGeneration),
            "screenshot" | "screenshot_capture" => Ok(Self::ScreenshotCapture),
            other => Err(format!(
                "Unknown operation kind '{}' (expected one of: stats, type, keywords, screenshot)",
                other
            )),
        }
    }
}
