use std::collections::HashMap;
use std::sync::Arc;
use teloxide::types::ChatId;
use tokio::sync::RwLock;

use crate::models::UserPrefs;

type PrefsCache = Arc<RwLock<HashMap<ChatId, UserPrefs>>>;

/// Shared bot state: per-chat preferences kept in memory for the lifetime of
/// the process. Nothing here survives a restart.
#[derive(Clone, Default)]
pub struct BotState {
    prefs: PrefsCache,
}

impl BotState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the chat has toggled to imperial units (default is metric).
    pub async fn use_imperial(&self, chat_id: ChatId) -> bool {
        let prefs = self.prefs.read().await;
        prefs.get(&chat_id).copied().unwrap_or_default().use_imperial
    }

    /// Flip the unit preference for a chat and return the new value.
    pub async fn toggle_units(&self, chat_id: ChatId) -> bool {
        let mut prefs = self.prefs.write().await;
        let entry = prefs.entry(chat_id).or_default();
        entry.use_imperial = !entry.use_imperial;
        log::debug!("Units toggled for chat {}: imperial={}", chat_id, entry.use_imperial);
        entry.use_imperial
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn defaults_to_metric() {
        let state = BotState::new();
        assert!(!state.use_imperial(ChatId(1)).await);
    }

    #[tokio::test]
    async fn toggle_alternates() {
        let state = BotState::new();
        assert!(state.toggle_units(ChatId(1)).await);
        assert!(!state.toggle_units(ChatId(1)).await);
        assert!(state.toggle_units(ChatId(1)).await);
    }

    #[tokio::test]
    async fn toggle_is_per_chat() {
        let state = BotState::new();
        state.toggle_units(ChatId(1)).await;
        assert!(state.use_imperial(ChatId(1)).await);
        assert!(!state.use_imperial(ChatId(2)).await);
    }
}
