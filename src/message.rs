//! Conversation list message model.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::MessageKindError;

/// Kind of the last message in a conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MessageKind {
    #[default]
    Incoming,
    Outgoing,
    /// System events (assignment changes, status updates)
    Activity,
    Template,
}

impl MessageKind {
    pub fn code(self) -> u8 {
        match self {
            MessageKind::Incoming => 0,
            MessageKind::Outgoing => 1,
            MessageKind::Activity => 2,
            MessageKind::Template => 3,
        }
    }

    /// Unknown codes render like incoming messages.
    pub fn from_code_lossy(code: u64) -> Self {
        u8::try_from(code)
            .ok()
            .and_then(|c| MessageKind::try_from(c).ok())
            .unwrap_or(MessageKind::Incoming)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MessageKind::Incoming => "incoming",
            MessageKind::Outgoing => "outgoing",
            MessageKind::Activity => "activity",
            MessageKind::Template => "template",
        }
    }
}

impl TryFrom<u8> for MessageKind {
    type Error = MessageKindError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(MessageKind::Incoming),
            1 => Ok(MessageKind::Outgoing),
            2 => Ok(MessageKind::Activity),
            3 => Ok(MessageKind::Template),
            other => Err(MessageKindError(other.to_string())),
        }
    }
}

impl FromStr for MessageKind {
    type Err = MessageKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(code) = trimmed.parse::<u8>() {
            return MessageKind::try_from(code);
        }
        match trimmed.to_ascii_lowercase().as_str() {
            "incoming" => Ok(MessageKind::Incoming),
            "outgoing" => Ok(MessageKind::Outgoing),
            "activity" => Ok(MessageKind::Activity),
            "template" => Ok(MessageKind::Template),
            _ => Err(MessageKindError(s.to_string())),
        }
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for MessageKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.code())
    }
}

impl<'de> Deserialize<'de> for MessageKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Code(u64),
            Number(f64),
            Name(String),
            Other(serde::de::IgnoredAny),
        }

        // Anything unrecognised renders through the incoming branch
        let kind = match Raw::deserialize(deserializer)? {
            Raw::Code(code) => MessageKind::from_code_lossy(code),
            Raw::Number(n) if n >= 0.0 && n.fract() == 0.0 && n <= u64::MAX as f64 => {
                MessageKind::from_code_lossy(n as u64)
            }
            Raw::Number(n) => {
                tracing::debug!(value = n, "unknown message type, treating as incoming");
                MessageKind::Incoming
            }
            Raw::Name(name) => name.parse().unwrap_or_else(|e: MessageKindError| {
                tracing::debug!(error = %e, "treating as incoming");
                MessageKind::Incoming
            }),
            Raw::Other(_) => MessageKind::Incoming,
        };
        Ok(kind)
    }
}

/// The last message of a conversation, as shown in the conversation list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Message {
    pub content: Option<String>,
    #[serde(rename = "messageType")]
    pub kind: MessageKind,
    #[serde(rename = "isPrivate")]
    pub is_private: bool,
    #[serde(rename = "unReadCount")]
    pub unread_count: u32,
}

impl Message {
    pub fn new(content: impl Into<String>, kind: MessageKind) -> Self {
        Self {
            content: Some(content.into()),
            kind,
            is_private: false,
            unread_count: 0,
        }
    }

    pub fn private(mut self, is_private: bool) -> Self {
        self.is_private = is_private;
        self
    }

    pub fn with_unread(mut self, unread_count: u32) -> Self {
        self.unread_count = unread_count;
        self
    }
}
