//! Display formatting for sizes, timestamps, and content categories.

use chrono::{DateTime, Utc};

const SIZE_UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Formats a byte count using the largest unit that keeps the scaled value below 1024.
///
/// Zero prints as `"0 B"`; every other size prints with one decimal. TB is the largest unit.
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 B".to_string();
    }
    let mut unit = 0;
    let mut scaled = bytes as f64;
    while scaled >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        scaled /= 1024.0;
        unit += 1;
    }
    format!("{scaled:.1} {}", SIZE_UNITS[unit])
}

/// Formats a creation timestamp for the listing.
pub fn format_created_at(created_at: &DateTime<Utc>) -> String {
    created_at.format("%Y-%m-%d %H:%M").to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Coarse content category used to pick a listing glyph.
pub enum FileCategory {
    /// `image/*`.
    Image,
    /// `video/*`.
    Video,
    /// `audio/*`.
    Audio,
    /// `text/*`, JSON, XML.
    Text,
    /// Zip, tar, gzip, 7z, rar.
    Archive,
    /// PDF and office documents.
    Document,
    /// Anything else.
    Other,
}

impl FileCategory {
    /// Classifies a MIME type.
    pub fn from_mime(mime_type: &str) -> Self {
        let mime_type = mime_type.to_ascii_lowercase();
        let (top, sub) = mime_type.split_once('/').unwrap_or((mime_type.as_str(), ""));
        match top {
            "image" => Self::Image,
            "video" => Self::Video,
            "audio" => Self::Audio,
            "text" => Self::Text,
            "application" => match sub {
                "json" | "xml" | "javascript" => Self::Text,
                "zip" | "gzip" | "x-tar" | "x-7z-compressed" | "vnd.rar" | "x-rar-compressed" => {
                    Self::Archive
                }
                "pdf" | "msword" | "rtf" => Self::Document,
                _ if sub.starts_with("vnd.openxmlformats-officedocument")
                    || sub.starts_with("vnd.oasis.opendocument")
                    || sub.starts_with("vnd.ms-") =>
                {
                    Self::Document
                }
                _ => Self::Other,
            },
            _ => Self::Other,
        }
    }

    /// Short glyph shown next to the file name.
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Image => "[img]",
            Self::Video => "[vid]",
            Self::Audio => "[aud]",
            Self::Text => "[txt]",
            Self::Archive => "[zip]",
            Self::Document => "[doc]",
            Self::Other => "[bin]",
        }
    }
}
