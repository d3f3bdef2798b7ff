use crate::model::{Outfit, WardrobeItem};

pub mod add;
pub mod generate;
pub mod list;
pub mod remove;
pub mod save;
pub mod saved;
pub mod stats;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub items: Vec<WardrobeItem>,
    pub outfits: Vec<Outfit>,
    pub stats: Option<stats::WardrobeStats>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_items(mut self, items: Vec<WardrobeItem>) -> Self {
        self.items = items;
        self
    }

    pub fn with_outfits(mut self, outfits: Vec<Outfit>) -> Self {
        self.outfits = outfits;
        self
    }

    pub fn with_stats(mut self, stats: stats::WardrobeStats) -> Self {
        self.stats = Some(stats);
        self
    }
}
