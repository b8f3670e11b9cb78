//! Boundary between the dialog core and whatever delivers chat messages.

use async_trait::async_trait;

use crate::error::Result;

/// One incoming text message.
#[derive(Debug, Clone)]
pub struct IncomingMessage {
    /// Stable id of the sender; dialog state is keyed by it.
    pub user_id: i64,
    /// Where replies go. Equal to `user_id` in private chats.
    pub chat_id: i64,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    /// Attach the main menu keyboard.
    pub menu: bool,
}

impl Reply {
    pub fn with_menu(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            menu: true,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            menu: false,
        }
    }
}

#[async_trait]
pub trait Messenger: Send + Sync {
    async fn send(&self, chat_id: i64, reply: Reply) -> Result<()>;
}
