use serde::Deserialize;

use crate::scoring::{DEFAULT_LINK_LIMIT, DEFAULT_RELATED_LIMIT};
use crate::text::DEFAULT_WORDS_PER_MINUTE;

/// The only manifest format we understand.
pub const MANIFEST_VERSION: u32 = 1;

#[derive(Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct InputManifest {
    pub version: u32,
    /// Document JSON files, relative to the manifest's directory
    pub documents: Vec<String>,
    #[serde(default)]
    pub related: RelatedSettings,
    #[serde(default)]
    pub links: LinkSettings,
    /// Words per minute for reading-time estimates
    #[serde(default = "default_reading_speed")]
    pub reading_speed: usize,
}

#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct RelatedSettings {
    #[serde(default = "default_related_limit")]
    pub limit: usize,
}

impl Default for RelatedSettings {
    fn default() -> Self {
        Self {
            limit: DEFAULT_RELATED_LIMIT,
        }
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct LinkSettings {
    #[serde(default = "default_link_limit")]
    pub limit: usize,
}

impl Default for LinkSettings {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LINK_LIMIT,
        }
    }
}

fn default_related_limit() -> usize {
    DEFAULT_RELATED_LIMIT
}

fn default_link_limit() -> usize {
    DEFAULT_LINK_LIMIT
}

fn default_reading_speed() -> usize {
    DEFAULT_WORDS_PER_MINUTE
}

/// Resolved settings for one analysis run: manifest values with CLI overrides applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnalysisSettings {
    pub related_limit: usize,
    pub link_limit: usize,
    pub words_per_minute: usize,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            related_limit: DEFAULT_RELATED_LIMIT,
            link_limit: DEFAULT_LINK_LIMIT,
            words_per_minute: DEFAULT_WORDS_PER_MINUTE,
        }
    }
}

impl From<&InputManifest> for AnalysisSettings {
    fn from(manifest: &InputManifest) -> Self {
        Self {
            related_limit: manifest.related.limit,
            link_limit: manifest.links.limit,
            words_per_minute: manifest.reading_speed,
        }
    }
}

impl AnalysisSettings {
    /// Replace the related-posts limit if one was given on the command line.
    pub fn with_related_limit(mut self, limit: Option<usize>) -> Self {
        if let Some(limit) = limit {
            self.related_limit = limit;
        }
        self
    }

    /// Replace the link-suggestion limit if one was given on the command line.
    pub fn with_link_limit(mut self, limit: Option<usize>) -> Self {
        if let Some(limit) = limit {
            self.link_limit = limit;
        }
        self
    }
}
