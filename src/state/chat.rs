//! Assistant chat state: transcript plus canned reply selection.
//!
//! The "AI" is deliberately simple: lower-cased substring checks in a fixed
//! priority order. The transcript is append-only and insertion-ordered; it
//! is only cleared by a process restart.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::net::types::{Author, ChatMessage};
use crate::util::time::now_ms;

/// Opening message seeded into every transcript.
pub const GREETING: &str = "Hello! I'm your WebGIS AI assistant. I can help you select datasets, \
     create videos, and navigate the platform. What would you like to do today?";

const DATASET_REPLY: &str = "I can help you find the perfect dataset! We have BHUVAN for \
     high-resolution imagery, VEDAS for agricultural data, and MOSDAC for ocean monitoring. \
     Which type of analysis are you planning?";

const VIDEO_REPLY: &str = "Great! I can guide you through creating AI-enhanced videos. The \
     process involves selecting a time series dataset, choosing interpolation settings \
     (I recommend RIFE for best quality), and generating smooth animations. Would you like \
     to start with dataset selection?";

const MAP_REPLY: &str = "The interactive map supports WMS layers, bounding box selection, and \
     real-time data visualization. You can draw areas of interest, measure distances, and \
     overlay multiple datasets. Need help with a specific map function?";

const HELP_REPLY: &str = "I'm here to help! You can ask me about:\n\u{2022} Finding and selecting \
     datasets\n\u{2022} Creating video projects\n\u{2022} Using map tools\n\u{2022} Understanding AI \
     processing options\n\u{2022} Troubleshooting issues\n\nWhat specific topic interests you?";

const FALLBACK_REPLY: &str = "That's an interesting question! I can help you with dataset \
     selection, video generation, map navigation, and technical guidance. Could you provide \
     more details about what you'd like to accomplish?";

/// State for the assistant chat panel.
#[derive(Clone, Debug)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
}

impl Default for ChatState {
    fn default() -> Self {
        Self {
            messages: vec![ChatMessage {
                id: "greeting".to_owned(),
                author: Author::Bot,
                content: GREETING.to_owned(),
                timestamp: now_ms(),
                metadata: None,
            }],
        }
    }
}

impl ChatState {
    /// Append a user message. Blank input is a no-op (not an error) and
    /// returns `false`; anything else is appended verbatim.
    pub fn push_user_message(&mut self, content: &str) -> bool {
        if content.trim().is_empty() {
            return false;
        }
        self.messages.push(ChatMessage {
            id: uuid::Uuid::new_v4().to_string(),
            author: Author::User,
            content: content.to_owned(),
            timestamp: now_ms(),
            metadata: None,
        });
        true
    }

    /// Append a synthesized bot reply.
    pub fn push_bot_reply(&mut self, content: &str) {
        self.messages.push(ChatMessage {
            id: uuid::Uuid::new_v4().to_string(),
            author: Author::Bot,
            content: content.to_owned(),
            timestamp: now_ms(),
            metadata: None,
        });
    }
}

/// Pick the canned reply for a user message.
///
/// Checks run against the lower-cased input in this fixed priority order:
/// dataset/data, video/animation, map/location, help/how, then a generic
/// fallback. Earlier matches win even when later keywords are also present.
pub fn select_reply(input: &str) -> &'static str {
    let input = input.to_lowercase();

    if input.contains("dataset") || input.contains("data") {
        return DATASET_REPLY;
    }
    if input.contains("video") || input.contains("animation") {
        return VIDEO_REPLY;
    }
    if input.contains("map") || input.contains("location") {
        return MAP_REPLY;
    }
    if input.contains("help") || input.contains("how") {
        return HELP_REPLY;
    }
    FALLBACK_REPLY
}
