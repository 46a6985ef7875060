use crate::ContentKind;

use serde::{Deserialize, Serialize};

/// Content an operator asked to deliver to every recipient.
///
/// Media variants hold the provider's remote file handle, so re-sending never
/// re-uploads the bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Payload {
    Text {
        text: String,
    },
    Photo {
        file_id: String,
        caption: Option<String>,
    },
    Video {
        file_id: String,
        caption: Option<String>,
    },
    VideoNote {
        file_id: String,
    },
    Audio {
        file_id: String,
        caption: Option<String>,
    },
    Document {
        file_id: String,
        caption: Option<String>,
    },
    Unsupported {
        kind: ContentKind,
    },
}

impl Payload {
    /// Content kind this payload was captured from.
    pub fn kind(&self) -> ContentKind {
        match self {
            Self::Text { .. } => ContentKind::Text,
            Self::Photo { .. } => ContentKind::Photo,
            Self::Video { .. } => ContentKind::Video,
            Self::VideoNote { .. } => ContentKind::VideoNote,
            Self::Audio { .. } => ContentKind::Audio,
            Self::Document { .. } => ContentKind::Document,
            Self::Unsupported { kind } => *kind,
        }
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, Self::Unsupported { .. })
    }
}
