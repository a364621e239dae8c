//! Per-session anti-repetition history
//!
//! A bounded FIFO record of what a session has recently served. The
//! engine never stores this itself; the caller keeps one per logical
//! session and threads it into each selection call. One writer per
//! session, or window updates get lost.

use std::collections::VecDeque;

/// Recent item ids kept per session
pub const RECENT_IDS_WINDOW: usize = 100;

/// Recent skill tags kept per session
pub const RECENT_TAGS_WINDOW: usize = 5;

/// Bounded windows of recently served item ids and skill tags
#[derive(Debug, Clone, Default)]
pub struct SessionHistory {
    ids: VecDeque<String>,
    tags: VecDeque<String>,
}

impl SessionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a served item, evicting the oldest entries past the
    /// window bounds
    pub fn record(&mut self, id: &str, skill_tag: &str) {
        self.ids.push_back(id.to_string());
        if self.ids.len() > RECENT_IDS_WINDOW {
            self.ids.pop_front();
        }
        self.tags.push_back(skill_tag.to_string());
        if self.tags.len() > RECENT_TAGS_WINDOW {
            self.tags.pop_front();
        }
    }

    /// Recent item ids, oldest first
    pub fn recent_ids(&self) -> Vec<String> {
        self.ids.iter().cloned().collect()
    }

    /// Recent skill tags, oldest first
    pub fn recent_skill_tags(&self) -> Vec<String> {
        self.tags.iter().cloned().collect()
    }
}
