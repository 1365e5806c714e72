use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::decode::DEFAULT_ENCODING;
use crate::present::DEFAULT_FONT_PATH;
use crate::segment::SegmenterKind;
use crate::tokenize::{TaggedFieldTokenizer, TokenizerMode};

pub const DEFAULT_BAR_TOP_N: usize = 20;
pub const DEFAULT_CLOUD_TOP_N: usize = 50;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid settings document: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid setting `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaggedFieldSettings {
    pub marker: String,
    pub delimiter: char,
}

impl Default for TaggedFieldSettings {
    fn default() -> Self {
        Self {
            marker: TaggedFieldTokenizer::DEFAULT_MARKER.to_string(),
            delimiter: TaggedFieldTokenizer::DEFAULT_DELIMITER,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FreeTextSettings {
    pub segmenter: SegmenterKind,
    /// Start from the built-in Chinese function-word list.
    pub builtin_stopwords: bool,
    pub extra_stopwords: Vec<String>,
    pub lowercase: bool,
}

impl Default for FreeTextSettings {
    fn default() -> Self {
        Self {
            segmenter: SegmenterKind::default(),
            builtin_stopwords: true,
            extra_stopwords: Vec::new(),
            lowercase: false,
        }
    }
}

/// Every knob of one analysis run; missing JSON fields take defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisSettings {
    pub mode: TokenizerMode,
    /// Used when the caller supplies no hint. `None` means detect.
    pub encoding: Option<String>,
    pub tagged: TaggedFieldSettings,
    pub free_text: FreeTextSettings,
    pub bar_top_n: usize,
    pub cloud_top_n: usize,
    pub font_path: PathBuf,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            mode: TokenizerMode::default(),
            encoding: Some(DEFAULT_ENCODING.to_string()),
            tagged: TaggedFieldSettings::default(),
            free_text: FreeTextSettings::default(),
            bar_top_n: DEFAULT_BAR_TOP_N,
            cloud_top_n: DEFAULT_CLOUD_TOP_N,
            font_path: PathBuf::from(DEFAULT_FONT_PATH),
        }
    }
}

impl AnalysisSettings {
    /// Parse and validate a JSON settings document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tagged.marker.is_empty() {
            return Err(ConfigError::Invalid {
                field: "tagged.marker",
                reason: "marker cannot be empty".into(),
            });
        }
        if self.bar_top_n == 0 {
            return Err(ConfigError::Invalid {
                field: "bar_top_n",
                reason: "must be at least 1".into(),
            });
        }
        if self.cloud_top_n == 0 {
            return Err(ConfigError::Invalid {
                field: "cloud_top_n",
                reason: "must be at least 1".into(),
            });
        }
        if self.font_path.as_os_str().is_empty() {
            return Err(ConfigError::Invalid {
                field: "font_path",
                reason: "font path cannot be empty".into(),
            });
        }
        Ok(())
    }
}
