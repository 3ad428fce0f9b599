//! Text rendering of resolution snapshots.

use apod_core::record::{MediaType, Record};
use apod_core::resolution::{ResolutionSnapshot, ResolutionState};
use colored::Colorize;

pub const UNSELECTED_MESSAGE: &str = "Please select a date to view NASA's APOD";
pub const EMPTY_MESSAGE: &str = "No data found for this date. Try another one.";

pub fn snapshot(snapshot: &ResolutionSnapshot, detail: bool) -> String {
    let date = snapshot
        .key
        .map(|key| key.to_string())
        .unwrap_or_default();

    match (snapshot.state, &snapshot.record) {
        (ResolutionState::Resolved, Some(record)) => self::record(record, detail),
        (ResolutionState::Unselected, _) => UNSELECTED_MESSAGE.bright_black().to_string(),
        (ResolutionState::Loading, _) => format!("Loading {date}...").yellow().to_string(),
        (ResolutionState::Failed, _) => {
            let reason = snapshot.failure.as_deref().unwrap_or("unknown error");
            format!("Could not load {date}: {reason}\nSelect the date again to retry.")
                .red()
                .to_string()
        }
        (ResolutionState::Empty, _) | (ResolutionState::Resolved, None) => {
            EMPTY_MESSAGE.yellow().to_string()
        }
    }
}

/// Title block, media links, optional explanation, copyright footer.
pub fn record(record: &Record, detail: bool) -> String {
    let mut lines = vec![
        record.title.bright_magenta().bold().to_string(),
        record.date.to_string().bright_black().to_string(),
        String::new(),
        format!("{:<6} {}", media_label(record.media_type), record.url),
    ];
    if let Some(hdurl) = &record.hdurl {
        lines.push(format!("{:<6} {}", "hd", hdurl));
    }
    if let Some(thumbnail) = &record.thumbnail_url {
        lines.push(format!("{:<6} {}", "thumb", thumbnail));
    }

    if detail {
        lines.push(String::new());
        lines.push(record.explanation.clone());
    }

    lines.push(String::new());
    let footer = match &record.copyright {
        Some(holder) => format!("(c) {}", holder.trim()),
        None => "Public domain".to_string(),
    };
    lines.push(footer.bright_black().to_string());

    lines.join("\n")
}

fn media_label(media_type: MediaType) -> &'static str {
    match media_type {
        MediaType::Image => "image",
        MediaType::Video => "video",
        MediaType::Other => "media",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use apod_core::record::DateKey;

    fn sample() -> Record {
        Record {
            date: "2024-01-01".parse().unwrap(),
            title: "Lunar Halo".to_string(),
            explanation: "Ice crystals ring the Moon.".to_string(),
            url: "https://apod.nasa.gov/apod/image/halo.jpg".to_string(),
            hdurl: Some("https://apod.nasa.gov/apod/image/halo_big.jpg".to_string()),
            media_type: MediaType::Image,
            copyright: Some("\nJane Doe\n".to_string()),
            service_version: None,
            thumbnail_url: None,
        }
    }

    #[test]
    fn test_explanation_only_with_detail() {
        let closed = record(&sample(), false);
        let open = record(&sample(), true);

        assert!(closed.contains("Lunar Halo"));
        assert!(closed.contains("halo_big.jpg"));
        assert!(closed.contains("(c) Jane Doe"));
        assert!(!closed.contains("Ice crystals"));
        assert!(open.contains("Ice crystals"));
    }

    #[test]
    fn test_status_messages() {
        let key: DateKey = "2030-05-05".parse().unwrap();

        assert!(snapshot(&ResolutionSnapshot::unselected(), false).contains(UNSELECTED_MESSAGE));
        assert!(snapshot(&ResolutionSnapshot::loading(key), false).contains("Loading 2030-05-05"));
        assert!(snapshot(&ResolutionSnapshot::empty(key), false).contains(EMPTY_MESSAGE));

        let failed = snapshot(&ResolutionSnapshot::failed(key, "network down"), false);
        assert!(failed.contains("network down"));
        assert!(failed.contains("again to retry"));
    }

    #[test]
    fn test_resolved_renders_record() {
        let key: DateKey = "2024-01-01".parse().unwrap();
        let rendered = snapshot(&ResolutionSnapshot::resolved(key, sample()), false);
        assert!(rendered.contains("Lunar Halo"));
    }
}
