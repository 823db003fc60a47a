//! Site document types
//!
//! Shape of the single JSON document the whole site is rendered from.

use serde::{Deserialize, Deserializer, Serialize};
use std::path::Path;

use super::error::{SiteError, SiteResult};
use crate::assets::{AssetKind, AssetRef};

/// Title used when the document does not carry one
pub const DEFAULT_TITLE: &str = "Studio Energiya";

/// Root of the site document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub socials: Vec<SocialLink>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub trainers: Vec<Trainer>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub achievements: Vec<AssetRef>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub gallery: Vec<AssetRef>,
}

/// Studio address shown in the footer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    #[serde(default, deserialize_with = "null_as_default")]
    pub map_link: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub address_text: String,
}

/// External profile button on the home page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
}

/// A trainer and their lessons
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trainer {
    /// Route key, used verbatim in `/trainer/{id}`
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub role: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub photo: AssetRef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub certs: Vec<AssetRef>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub videos: Vec<AssetRef>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub schedule: Vec<Lesson>,
}

/// A class a trainer teaches
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    /// Route key within the trainer's schedule
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub details: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_info: Option<Vec<String>>,
}

/// Explicit `null` reads the same as an absent key
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl SiteDocument {
    /// Parse a document from JSON text
    pub fn from_json(json: &str) -> SiteResult<Self> {
        let doc: SiteDocument = serde_json::from_str(json)?;
        tracing::debug!(
            trainers = doc.trainers.len(),
            achievements = doc.achievements.len(),
            gallery = doc.gallery.len(),
            "Parsed site document"
        );
        Ok(doc)
    }

    /// Read and parse a document from disk
    pub fn load(path: &Path) -> SiteResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| SiteError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::from_json(&content).map_err(|e| match e {
            SiteError::Parse { error, .. } => SiteError::Parse {
                path: Some(path.to_path_buf()),
                error,
            },
            other => other,
        })
    }

    pub fn title(&self) -> &str {
        self.title
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .unwrap_or(DEFAULT_TITLE)
    }

    /// Normalized achievement (cup) URLs in document order
    pub fn achievement_urls(&self) -> Vec<String> {
        self.achievements.iter().map(|a| a.url(AssetKind::Cup)).collect()
    }

    /// Normalized gallery URLs in document order
    pub fn gallery_urls(&self) -> Vec<String> {
        self.gallery.iter().map(|a| a.url(AssetKind::Gallery)).collect()
    }
}

impl Trainer {
    pub fn photo_url(&self) -> String {
        self.photo.url(AssetKind::Photo)
    }

    /// Normalized certificate URLs; empty when the trainer has none
    pub fn cert_urls(&self) -> Vec<String> {
        self.certs.iter().map(|c| c.url(AssetKind::Cert)).collect()
    }

    pub fn video_urls(&self) -> Vec<String> {
        self.videos.iter().map(|v| v.url(AssetKind::Video)).collect()
    }

    /// Instagram link, ignoring blank values
    pub fn instagram(&self) -> Option<&str> {
        self.instagram.as_deref().filter(|url| !url.trim().is_empty())
    }
}

impl Lesson {
    /// Price lines, `None` when absent or empty
    pub fn prices(&self) -> Option<&[String]> {
        self.price_info.as_deref().filter(|p| !p.is_empty())
    }
}
