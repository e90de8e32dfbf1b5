use serde::Serialize;

pub mod error;
pub mod query;

/// One listed item under the source folder. Only the key comes from the
/// bucket; name and extension are derived views over it.
#[derive(Debug, Clone)]
pub struct ObjectEntry {
    pub key: String,
}

impl ObjectEntry {
    /// Final path segment of the key.
    pub fn name(&self) -> &str {
        self.key.rsplit('/').next().unwrap_or("")
    }

    /// Lower-cased text after the last `.` of the name, empty if none.
    pub fn extension(&self) -> String {
        match self.name().rsplit_once('.') {
            Some((_, ext)) => ext.to_ascii_lowercase(),
            None => String::new(),
        }
    }
}

/// Replace a non-empty trailing extension with `.jpg`. Names without an
/// extension (or with a bare trailing dot) pass through unchanged, so
/// `a.png` and `a.jpg` in the same folder collide on one thumbnail key.
pub fn thumb_name(name: &str) -> String {
    match name.rsplit_once('.') {
        Some((stem, ext)) if !ext.is_empty() => format!("{stem}.jpg"),
        _ => name.to_string(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThumbnailKind {
    Existing,
    Image,
}

#[derive(Debug, Clone, Serialize)]
pub struct ThumbnailRecord {
    pub original: String,
    pub thumbnail: String,
    #[serde(rename = "type")]
    pub kind: ThumbnailKind,
}

#[derive(Debug, Serialize)]
pub struct ThumbnailBatch {
    pub success: bool,
    pub thumbnails: Vec<ThumbnailRecord>,
    #[serde(rename = "thumbFolder")]
    pub thumb_folder: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_name_is_final_segment() {
        let entry = ObjectEntry { key: "photos/2024/beach.PNG".to_string() };
        assert_eq!(entry.name(), "beach.PNG");
    }

    #[test]
    fn extension_is_lowercased() {
        let entry = ObjectEntry { key: "photos/beach.PNG".to_string() };
        assert_eq!(entry.extension(), "png");
    }

    #[test]
    fn extension_empty_without_dot() {
        let entry = ObjectEntry { key: "photos/readme".to_string() };
        assert_eq!(entry.extension(), "");
    }

    #[test]
    fn thumb_name_replaces_extension() {
        assert_eq!(thumb_name("a.png"), "a.jpg");
        assert_eq!(thumb_name("a.b.c.png"), "a.b.c.jpg");
    }

    #[test]
    fn thumb_name_leaves_extensionless_names() {
        assert_eq!(thumb_name("readme"), "readme");
        assert_eq!(thumb_name("trailing."), "trailing.");
    }

    #[test]
    fn thumb_name_is_idempotent_for_jpg() {
        assert_eq!(thumb_name(&thumb_name("a.png")), "a.jpg");
    }

    #[test]
    fn record_serializes_with_original_field_names() {
        let record = ThumbnailRecord {
            original: "photos/a.png".to_string(),
            thumbnail: "photos_thumb/a.jpg".to_string(),
            kind: ThumbnailKind::Existing,
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["type"], "existing");
        assert_eq!(json["original"], "photos/a.png");
        assert_eq!(json["thumbnail"], "photos_thumb/a.jpg");
    }
}
