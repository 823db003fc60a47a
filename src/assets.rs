//! Asset References
//!
//! Images and videos in the site document are referenced either by a bare
//! path or by a small wrapper object produced by the content editor, e.g.
//! `{"cert_item": "/uploads/certs/yoga.jpg"}`. Everything is resolved to one
//! flat public directory, so authored folder structure is discarded.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Public directory every local asset is served from
pub const ASSET_ROOT: &str = "images";

/// Returned whenever a reference is empty or cannot be resolved
pub const PLACEHOLDER_URL: &str = "/placeholder.jpg";

const ABSOLUTE_PREFIXES: [&str; 5] = ["http://", "https://", "//", "data:", "blob:"];

const VIDEO_EXTENSIONS: [&str; 5] = ["mp4", "webm", "mov", "m4v", "ogg"];

/// Context an asset appears in. Decides which wrapper field holds the path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKind {
    Photo,
    Cert,
    Gallery,
    Cup,
    Video,
}

impl AssetKind {
    /// Wrapper field name used by the content editor for this context
    pub fn field_name(&self) -> Option<&'static str> {
        match self {
            AssetKind::Photo => None,
            AssetKind::Cert => Some("cert_item"),
            AssetKind::Gallery => Some("gallery_item"),
            AssetKind::Cup => Some("cup_item"),
            AssetKind::Video => Some("video_item"),
        }
    }

    /// Parse a kind from its short name (`cert`, `gallery`, `cup`, `video`, `photo`)
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "photo" => Some(AssetKind::Photo),
            "cert" | "cert_item" => Some(AssetKind::Cert),
            "gallery" | "gallery_item" => Some(AssetKind::Gallery),
            "cup" | "cup_item" | "achievement" => Some(AssetKind::Cup),
            "video" | "video_item" => Some(AssetKind::Video),
            _ => None,
        }
    }
}

/// Wrapper object written by the content editor
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedAsset {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cert_item: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gallery_item: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cup_item: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_item: Option<String>,
}

impl TaggedAsset {
    fn field(&self, kind: AssetKind) -> Option<&str> {
        let value = match kind {
            AssetKind::Photo => None,
            AssetKind::Cert => self.cert_item.as_deref(),
            AssetKind::Gallery => self.gallery_item.as_deref(),
            AssetKind::Cup => self.cup_item.as_deref(),
            AssetKind::Video => self.video_item.as_deref(),
        };
        value.filter(|v| !v.trim().is_empty())
    }

    /// First non-empty field in declaration order
    fn any_field(&self) -> Option<&str> {
        [
            self.cert_item.as_deref(),
            self.gallery_item.as_deref(),
            self.cup_item.as_deref(),
            self.video_item.as_deref(),
        ]
        .into_iter()
        .flatten()
        .find(|v| !v.trim().is_empty())
    }
}

/// A reference to an image or video.
///
/// Deserialization never fails: any JSON shape other than a string or an
/// object becomes `Missing`, and wrapper fields that are not strings are
/// ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AssetRef {
    /// JSON `null`, or a value of an unusable shape
    Missing,
    /// Bare path or URL
    Path(String),
    /// Editor wrapper object
    Tagged(TaggedAsset),
}

impl Default for AssetRef {
    fn default() -> Self {
        AssetRef::Missing
    }
}

impl<'de> Deserialize<'de> for AssetRef {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(AssetRef::from_value(Value::deserialize(deserializer)?))
    }
}

impl From<&str> for AssetRef {
    fn from(path: &str) -> Self {
        AssetRef::Path(path.to_string())
    }
}

impl From<String> for AssetRef {
    fn from(path: String) -> Self {
        AssetRef::Path(path)
    }
}

impl AssetRef {
    /// Interpret an arbitrary JSON value as an asset reference
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Null => AssetRef::Missing,
            Value::String(path) => AssetRef::Path(path),
            Value::Object(map) => AssetRef::Tagged(TaggedAsset {
                cert_item: string_field(&map, "cert_item"),
                gallery_item: string_field(&map, "gallery_item"),
                cup_item: string_field(&map, "cup_item"),
                video_item: string_field(&map, "video_item"),
            }),
            other => {
                tracing::debug!(value = %other, "Ignoring asset reference of unusable shape");
                AssetRef::Missing
            }
        }
    }

    /// Raw authored string for the given context, before normalization.
    ///
    /// A wrapper without the context's field falls back to any other
    /// populated field.
    pub fn raw(&self, kind: AssetKind) -> Option<&str> {
        match self {
            AssetRef::Missing => None,
            AssetRef::Path(path) => Some(path.as_str()).filter(|p| !p.trim().is_empty()),
            AssetRef::Tagged(tagged) => tagged.field(kind).or_else(|| tagged.any_field()),
        }
    }

    /// Resolvable URL for this reference
    pub fn url(&self, kind: AssetKind) -> String {
        normalize(self, kind)
    }
}

fn string_field(map: &Map<String, Value>, key: &str) -> Option<String> {
    map.get(key).and_then(Value::as_str).map(str::to_string)
}

/// Resolve an asset reference to a URL. Never fails.
pub fn normalize(asset: &AssetRef, kind: AssetKind) -> String {
    match asset.raw(kind) {
        Some(raw) => normalize_path(raw),
        None => PLACEHOLDER_URL.to_string(),
    }
}

/// Resolve a raw path string to a URL.
///
/// Absolute URLs pass through untouched; local paths collapse to
/// `/<ASSET_ROOT>/<basename>`.
pub fn normalize_path(raw: &str) -> String {
    let raw = raw.trim();
    if raw.is_empty() {
        return PLACEHOLDER_URL.to_string();
    }
    if is_absolute(raw) {
        return raw.to_string();
    }

    match basename(raw) {
        Some(name) => format!("/{}/{}", ASSET_ROOT, name),
        None => PLACEHOLDER_URL.to_string(),
    }
}

/// Whether a string already carries a scheme (or is protocol-relative)
pub fn is_absolute(raw: &str) -> bool {
    let lower = raw.trim_start().to_ascii_lowercase();
    ABSOLUTE_PREFIXES.iter().any(|p| lower.starts_with(p))
}

/// Whether a URL points at a video file, judged by extension
pub fn is_video(url: &str) -> bool {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    path.rsplit_once('.')
        .map(|(_, ext)| {
            let ext = ext.to_ascii_lowercase();
            VIDEO_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

fn basename(path: &str) -> Option<&str> {
    path.rsplit(['/', '\\'])
        .next()
        .map(str::trim)
        .filter(|name| !name.is_empty() && *name != "." && *name != "..")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_placeholder() {
        assert_eq!(normalize(&AssetRef::Missing, AssetKind::Photo), PLACEHOLDER_URL);
        assert_eq!(normalize(&AssetRef::from(""), AssetKind::Photo), PLACEHOLDER_URL);
        assert_eq!(normalize(&AssetRef::from("   "), AssetKind::Cert), PLACEHOLDER_URL);
        assert_eq!(normalize_path("uploads/"), PLACEHOLDER_URL);
    }

    #[test]
    fn test_absolute_urls_pass_through() {
        assert_eq!(
            normalize_path("https://example.com/a.jpg"),
            "https://example.com/a.jpg"
        );
        assert_eq!(normalize_path("http://cdn.test/x/y.png"), "http://cdn.test/x/y.png");
        assert_eq!(normalize_path("//cdn.test/y.png"), "//cdn.test/y.png");
        assert_eq!(
            normalize(&AssetRef::from("HTTPS://Example.com/B.jpg"), AssetKind::Gallery),
            "HTTPS://Example.com/B.jpg"
        );
    }

    #[test]
    fn test_local_paths_are_flattened() {
        assert_eq!(normalize_path("photo.jpg"), "/images/photo.jpg");
        assert_eq!(normalize_path("/uploads/2024/photo.jpg"), "/images/photo.jpg");
        assert_eq!(normalize_path("./public/certs/a b.png"), "/images/a b.png");
        assert_eq!(normalize_path("assets\\cups\\gold.jpg"), "/images/gold.jpg");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for raw in ["a.jpg", "/uploads/a.jpg", "deep/er/path/v.mp4", "https://x.test/a.jpg"] {
            let once = normalize_path(raw);
            assert_eq!(normalize_path(&once), once, "not idempotent for {raw}");
        }
    }

    #[test]
    fn test_tagged_uses_context_field() {
        let asset: AssetRef =
            serde_json::from_str(r#"{"cert_item": "/uploads/cert1.jpg"}"#).unwrap();
        assert_eq!(asset.url(AssetKind::Cert), "/images/cert1.jpg");

        let asset: AssetRef = serde_json::from_str(
            r#"{"gallery_item": "g.jpg", "cup_item": "c.jpg"}"#,
        )
        .unwrap();
        assert_eq!(asset.url(AssetKind::Cup), "/images/c.jpg");
        assert_eq!(asset.url(AssetKind::Gallery), "/images/g.jpg");
    }

    #[test]
    fn test_tagged_falls_back_to_other_field() {
        let asset: AssetRef = serde_json::from_str(r#"{"video_item": "clip.mp4"}"#).unwrap();
        assert_eq!(asset.url(AssetKind::Cert), "/images/clip.mp4");

        let empty: AssetRef = serde_json::from_str(r#"{"something_else": "x.jpg"}"#).unwrap();
        assert_eq!(empty.url(AssetKind::Gallery), PLACEHOLDER_URL);
    }

    #[test]
    fn test_deserialize_variants() {
        let assets: Vec<AssetRef> =
            serde_json::from_str(r#"["a.jpg", null, {"cup_item": "b.jpg"}]"#).unwrap();
        assert_eq!(assets[0], AssetRef::Path("a.jpg".into()));
        assert_eq!(assets[1], AssetRef::Missing);
        assert!(matches!(assets[2], AssetRef::Tagged(_)));
    }

    #[test]
    fn test_unusable_shapes_become_placeholder() {
        let json = r#"[42, true, ["a.jpg"], {"cert_item": 5}, {"cert_item": 5, "cup_item": "c.jpg"}]"#;
        let assets: Vec<AssetRef> = serde_json::from_str(json).unwrap();
        assert_eq!(assets[0], AssetRef::Missing);
        assert_eq!(assets[1], AssetRef::Missing);
        assert_eq!(assets[2], AssetRef::Missing);
        assert_eq!(assets[3].url(AssetKind::Cert), PLACEHOLDER_URL);
        assert_eq!(assets[4].url(AssetKind::Cert), "/images/c.jpg");
    }

    #[test]
    fn test_is_video() {
        assert!(is_video("/images/clip.mp4"));
        assert!(is_video("https://x.test/v.WEBM?t=3"));
        assert!(!is_video("/images/photo.jpg"));
        assert!(!is_video(PLACEHOLDER_URL));
        assert!(!is_video("noextension"));
    }

    #[test]
    fn test_kind_from_name() {
        assert_eq!(AssetKind::from_name("cert"), Some(AssetKind::Cert));
        assert_eq!(AssetKind::from_name("Gallery_Item"), Some(AssetKind::Gallery));
        assert_eq!(AssetKind::from_name("achievement"), Some(AssetKind::Cup));
        assert_eq!(AssetKind::from_name("poster"), None);
        assert_eq!(AssetKind::Cup.field_name(), Some("cup_item"));
    }
}
