//! Picture-of-the-day record model.

use serde::{Deserialize, Serialize};

use super::date_key::DateKey;

/// Kind of media a record points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Image,
    Video,
    /// Anything the service labels with a media type this crate doesn't know.
    #[serde(other)]
    Other,
}

/// The remote service's payload for one [`DateKey`].
///
/// The resolver never interprets these fields; it stores and publishes the
/// record exactly as it was received. Field names follow the service's JSON
/// so the stored form and the wire form are the same document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Echo of the requested date
    pub date: DateKey,
    pub title: String,
    pub explanation: String,
    /// Media URL (image or embeddable video)
    #[serde(default)]
    pub url: String,
    /// High resolution image URL, images only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hdurl: Option<String>,
    pub media_type: MediaType,
    /// Copyright holder; public domain entries omit it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
}

impl Record {
    /// The URL worth opening for a full view: `hdurl` when present.
    pub fn best_url(&self) -> &str {
        self.hdurl.as_deref().unwrap_or(&self.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const IMAGE_BODY: &str = r#"{
        "copyright": "Jane Doe",
        "date": "2024-01-01",
        "explanation": "A nebula.",
        "hdurl": "https://apod.nasa.gov/apod/image/2401/nebula_big.jpg",
        "media_type": "image",
        "service_version": "v1",
        "title": "Nebula",
        "url": "https://apod.nasa.gov/apod/image/2401/nebula.jpg"
    }"#;

    #[test]
    fn test_deserialize_service_payload() {
        let record: Record = serde_json::from_str(IMAGE_BODY).unwrap();
        assert_eq!(record.date.to_string(), "2024-01-01");
        assert_eq!(record.media_type, MediaType::Image);
        assert_eq!(record.copyright.as_deref(), Some("Jane Doe"));
        assert_eq!(
            record.best_url(),
            "https://apod.nasa.gov/apod/image/2401/nebula_big.jpg"
        );
    }

    #[test]
    fn test_video_without_optional_fields() {
        let body = r#"{
            "date": "2023-03-03",
            "explanation": "A video.",
            "media_type": "video",
            "title": "Clip",
            "url": "https://www.youtube.com/embed/abc"
        }"#;
        let record: Record = serde_json::from_str(body).unwrap();
        assert_eq!(record.media_type, MediaType::Video);
        assert!(record.hdurl.is_none());
        assert!(record.copyright.is_none());
        assert_eq!(record.best_url(), "https://www.youtube.com/embed/abc");

        let json = serde_json::to_value(&record).unwrap();
        assert!(json.get("hdurl").is_none());
        assert!(json.get("copyright").is_none());
    }

    #[test]
    fn test_unknown_media_type_is_other() {
        let body = r#"{
            "date": "2021-01-05",
            "explanation": "Interactive.",
            "media_type": "interactive",
            "title": "Thing"
        }"#;
        let record: Record = serde_json::from_str(body).unwrap();
        assert_eq!(record.media_type, MediaType::Other);
        assert_eq!(record.url, "");
    }

    #[test]
    fn test_error_body_is_not_a_record() {
        let body = r#"{"code": 400, "msg": "Date must be between Jun 16, 1995 and today."}"#;
        assert!(serde_json::from_str::<Record>(body).is_err());
    }
}
