use crate::{Chat, FileRef, PhotoSize, User};

use bcast_core::{ContentKind, Payload};

use serde::{Deserialize, Serialize};

/// Incoming message. Only the content fields the bot can classify are kept.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Message {
    pub message_id: i64,
    pub from: Option<User>,
    pub chat: Chat,
    pub date: i64,
    pub text: Option<String>,
    pub caption: Option<String>,
    pub photo: Option<Vec<PhotoSize>>,
    pub animation: Option<FileRef>,
    pub video: Option<FileRef>,
    pub video_note: Option<FileRef>,
    pub audio: Option<FileRef>,
    pub document: Option<FileRef>,
    pub voice: Option<FileRef>,
    pub sticker: Option<FileRef>,
    pub contact: Option<serde_json::Value>,
    pub location: Option<serde_json::Value>,
    pub poll: Option<serde_json::Value>,
}

impl Message {
    /// What kind of content this message carries.
    pub fn content_kind(&self) -> ContentKind {
        // Animations also carry a `document` field, so they are checked first
        if self.text.is_some() {
            ContentKind::Text
        } else if self.photo.as_ref().is_some_and(|sizes| !sizes.is_empty()) {
            ContentKind::Photo
        } else if self.animation.is_some() {
            ContentKind::Animation
        } else if self.video.is_some() {
            ContentKind::Video
        } else if self.video_note.is_some() {
            ContentKind::VideoNote
        } else if self.audio.is_some() {
            ContentKind::Audio
        } else if self.document.is_some() {
            ContentKind::Document
        } else if self.voice.is_some() {
            ContentKind::Voice
        } else if self.sticker.is_some() {
            ContentKind::Sticker
        } else if self.contact.is_some() {
            ContentKind::Contact
        } else if self.location.is_some() {
            ContentKind::Location
        } else if self.poll.is_some() {
            ContentKind::Poll
        } else {
            ContentKind::Unknown
        }
    }

    /// Capture the message as a broadcast payload. Photos keep only the largest size.
    pub fn payload(&self) -> Payload {
        let caption = self.caption.clone();
        let file_id = |file: &Option<FileRef>| file.as_ref().map(|f| f.file_id.clone());

        match self.content_kind() {
            ContentKind::Text => Payload::Text {
                text: self.text.clone().unwrap_or_default(),
            },
            ContentKind::Photo => match self.largest_photo() {
                Some(photo) => Payload::Photo {
                    file_id: photo.file_id.clone(),
                    caption,
                },
                None => Payload::Unsupported {
                    kind: ContentKind::Photo,
                },
            },
            ContentKind::Video => match file_id(&self.video) {
                Some(file_id) => Payload::Video { file_id, caption },
                None => Payload::Unsupported {
                    kind: ContentKind::Video,
                },
            },
            ContentKind::VideoNote => match file_id(&self.video_note) {
                Some(file_id) => Payload::VideoNote { file_id },
                None => Payload::Unsupported {
                    kind: ContentKind::VideoNote,
                },
            },
            ContentKind::Audio => match file_id(&self.audio) {
                Some(file_id) => Payload::Audio { file_id, caption },
                None => Payload::Unsupported {
                    kind: ContentKind::Audio,
                },
            },
            ContentKind::Document => match file_id(&self.document) {
                Some(file_id) => Payload::Document { file_id, caption },
                None => Payload::Unsupported {
                    kind: ContentKind::Document,
                },
            },
            kind => Payload::Unsupported { kind },
        }
    }

    pub fn largest_photo(&self) -> Option<&PhotoSize> {
        self.photo
            .as_deref()
            .and_then(|sizes| sizes.iter().max_by_key(|size| size.area()))
    }

    /// Bot command in the text, without the leading '/' or a trailing "@botname".
    pub fn command(&self) -> Option<&str> {
        let text = self.text.as_deref()?.trim_start();
        let first = text.split_whitespace().next()?;
        let command = first.strip_prefix('/')?;
        let command = command.split('@').next().unwrap_or(command);
        (!command.is_empty()).then_some(command)
    }

    /// Id of the sender, falling back to the chat for anonymous posts.
    pub fn sender_id(&self) -> i64 {
        self.from.as_ref().map_or(self.chat.id, |user| user.id)
    }
}
