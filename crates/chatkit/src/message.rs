use chrono::{DateTime, Utc};

use crate::audio::AudioContent;
use crate::content::StyledText;
use crate::geometry::BubbleSize;
use crate::items::{ContactContent, ImageContent, LocationContent, MediaItem};
use crate::template::TemplateContent;

/// The author of a message
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Sender {
    pub sender_id: String,
    pub display_name: String,
}

impl Sender {
    pub fn new(sender_id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            sender_id: sender_id.into(),
            display_name: display_name.into(),
        }
    }
}

/// What a message carries. Exactly one kind per message.
#[derive(Debug, Clone, PartialEq)]
pub enum MessageKind {
    Text(String),
    StyledText(StyledText),
    Photo(ImageContent),
    Video(ImageContent),
    Location(LocationContent),
    /// Emoji-only text, drawn larger by the host
    Emoji(String),
    Audio(AudioContent),
    Contact(ContactContent),
    Template(TemplateContent),
}

impl MessageKind {
    /// Bubble size computed by this crate, or `None` for kinds the host sizes
    /// natively (plain and styled text, emoji, contacts).
    pub fn bubble_size(&self) -> Option<BubbleSize> {
        match self {
            MessageKind::Photo(item) | MessageKind::Video(item) => Some(item.size()),
            MessageKind::Location(item) => Some(item.size),
            MessageKind::Audio(item) => Some(item.size()),
            MessageKind::Template(item) => Some(item.size()),
            MessageKind::Text(_)
            | MessageKind::StyledText(_)
            | MessageKind::Emoji(_)
            | MessageKind::Contact(_) => None,
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            MessageKind::Text(_) => "text",
            MessageKind::StyledText(_) => "styled text",
            MessageKind::Photo(_) => "photo",
            MessageKind::Video(_) => "video",
            MessageKind::Location(_) => "location",
            MessageKind::Emoji(_) => "emoji",
            MessageKind::Audio(_) => "audio",
            MessageKind::Contact(_) => "contact",
            MessageKind::Template(_) => "template",
        }
    }
}

/// A message envelope: identity, author, time and content.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub message_id: String,
    pub sender: Sender,
    pub sent_date: DateTime<Utc>,
    pub kind: MessageKind,
}

impl Message {
    pub fn new(
        kind: MessageKind,
        sender: Sender,
        message_id: impl Into<String>,
        sent_date: DateTime<Utc>,
    ) -> Self {
        Self {
            message_id: message_id.into(),
            sender,
            sent_date,
            kind,
        }
    }

    pub fn text(
        text: impl Into<String>,
        sender: Sender,
        message_id: impl Into<String>,
        sent_date: DateTime<Utc>,
    ) -> Self {
        Self::new(MessageKind::Text(text.into()), sender, message_id, sent_date)
    }

    pub fn styled_text(
        text: StyledText,
        sender: Sender,
        message_id: impl Into<String>,
        sent_date: DateTime<Utc>,
    ) -> Self {
        Self::new(MessageKind::StyledText(text), sender, message_id, sent_date)
    }

    pub fn photo(
        item: ImageContent,
        sender: Sender,
        message_id: impl Into<String>,
        sent_date: DateTime<Utc>,
    ) -> Self {
        Self::new(MessageKind::Photo(item), sender, message_id, sent_date)
    }

    pub fn video_thumbnail(
        item: ImageContent,
        sender: Sender,
        message_id: impl Into<String>,
        sent_date: DateTime<Utc>,
    ) -> Self {
        Self::new(MessageKind::Video(item), sender, message_id, sent_date)
    }

    pub fn location(
        item: LocationContent,
        sender: Sender,
        message_id: impl Into<String>,
        sent_date: DateTime<Utc>,
    ) -> Self {
        Self::new(MessageKind::Location(item), sender, message_id, sent_date)
    }

    pub fn emoji(
        emoji: impl Into<String>,
        sender: Sender,
        message_id: impl Into<String>,
        sent_date: DateTime<Utc>,
    ) -> Self {
        Self::new(MessageKind::Emoji(emoji.into()), sender, message_id, sent_date)
    }

    pub fn audio(
        item: AudioContent,
        sender: Sender,
        message_id: impl Into<String>,
        sent_date: DateTime<Utc>,
    ) -> Self {
        Self::new(MessageKind::Audio(item), sender, message_id, sent_date)
    }

    pub fn contact(
        item: ContactContent,
        sender: Sender,
        message_id: impl Into<String>,
        sent_date: DateTime<Utc>,
    ) -> Self {
        Self::new(MessageKind::Contact(item), sender, message_id, sent_date)
    }

    pub fn template(
        item: TemplateContent,
        sender: Sender,
        message_id: impl Into<String>,
        sent_date: DateTime<Utc>,
    ) -> Self {
        Self::new(MessageKind::Template(item), sender, message_id, sent_date)
    }

    pub fn bubble_size(&self) -> Option<BubbleSize> {
        self.kind.bubble_size()
    }
}
