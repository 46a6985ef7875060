use std::fmt;

use serde::{Deserialize, Serialize};

/// Content kind declared by an inbound message.
///
/// Only some kinds can be re-sent as a broadcast; the rest are captured as
/// `Payload::Unsupported` and fail per recipient at send time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    Text,
    Photo,
    Video,
    VideoNote,
    Audio,
    Document,
    Voice,
    Sticker,
    Animation,
    Contact,
    Location,
    Poll,
    Unknown,
}

impl ContentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Photo => "photo",
            Self::Video => "video",
            Self::VideoNote => "video_note",
            Self::Audio => "audio",
            Self::Document => "document",
            Self::Voice => "voice",
            Self::Sticker => "sticker",
            Self::Animation => "animation",
            Self::Contact => "contact",
            Self::Location => "location",
            Self::Poll => "poll",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
