//! Telegram transport: feeds text messages into the chat handler and
//! implements [`Messenger`] on top of the Bot API.

use std::sync::Arc;

use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::{KeyboardButton, KeyboardMarkup};

use crate::dialog::menu;
use crate::error::{AppError, Result};
use crate::handlers::chat::{self, ChatState};
use crate::messenger::{IncomingMessage, Messenger, Reply};

/// Bot API limit for one message, in UTF-16 code units.
pub const MESSAGE_LIMIT: usize = 4096;

const GENERIC_FAILURE: &str = "Something went wrong, please try again later.";

#[derive(Clone)]
pub struct TelegramMessenger {
    bot: Bot,
}

impl TelegramMessenger {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }
}

fn main_menu() -> KeyboardMarkup {
    let rows = menu::keyboard_rows()
        .into_iter()
        .map(|row| row.into_iter().map(KeyboardButton::new).collect::<Vec<_>>())
        .collect::<Vec<_>>();
    KeyboardMarkup::new(rows).resize_keyboard()
}

#[async_trait]
impl Messenger for TelegramMessenger {
    async fn send(&self, chat_id: i64, reply: Reply) -> Result<()> {
        for chunk in split_message(&reply.text, MESSAGE_LIMIT) {
            let request = self.bot.send_message(ChatId(chat_id), chunk);
            if reply.menu {
                request.reply_markup(main_menu()).await?;
            } else {
                request.await?;
            }
        }
        Ok(())
    }
}

/// Splits `text` into pieces that fit one message, breaking on line
/// boundaries where possible.
pub fn split_message(text: &str, limit: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for line in text.split('\n') {
        let line_len = line.encode_utf16().count();
        let needed = if current.is_empty() { line_len } else { line_len + 1 };

        if !current.is_empty() && current_len + needed > limit {
            chunks.push(std::mem::take(&mut current));
            current_len = 0;
        }

        if line_len > limit {
            for ch in line.chars() {
                if current_len + ch.len_utf16() > limit {
                    chunks.push(std::mem::take(&mut current));
                    current_len = 0;
                }
                current.push(ch);
                current_len += ch.len_utf16();
            }
            continue;
        }

        if !current.is_empty() {
            current.push('\n');
            current_len += 1;
        }
        current.push_str(line);
        current_len += line_len;
    }

    if !current.is_empty() || chunks.is_empty() {
        chunks.push(current);
    }
    chunks
}

async fn on_message(
    msg: Message,
    state: ChatState,
    messenger: Arc<TelegramMessenger>,
) -> std::result::Result<(), AppError> {
    let (Some(text), Some(from)) = (msg.text(), msg.from.as_ref()) else {
        return Ok(());
    };

    let incoming = IncomingMessage {
        user_id: from.id.0 as i64,
        chat_id: msg.chat.id.0,
        text: text.to_string(),
    };
    let user_id = incoming.user_id;
    let chat_id = incoming.chat_id;

    if let Err(e) = chat::handle_message(&state, messenger.as_ref(), incoming).await {
        tracing::error!(user_id, storage = e.is_storage(), "Failed to handle message: {}", e);
        if let Err(e) = messenger.send(chat_id, Reply::plain(GENERIC_FAILURE)).await {
            tracing::warn!(user_id, "Failed to report failure to user: {}", e);
        }
    }

    Ok(())
}

/// Long-polls Telegram until Ctrl-C. Updates from one chat are handled in
/// order; different chats run concurrently.
pub async fn run(bot: Bot, state: ChatState) {
    let messenger = Arc::new(TelegramMessenger::new(bot.clone()));
    let handler = Update::filter_message().endpoint(on_message);

    tracing::info!("Starting Telegram polling");

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![state, messenger])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_is_one_chunk() {
        assert_eq!(split_message("hello\nworld", 100), vec!["hello\nworld"]);
    }

    #[test]
    fn test_empty_text_is_one_empty_chunk() {
        assert_eq!(split_message("", 100), vec![""]);
    }

    #[test]
    fn test_splits_on_line_boundaries() {
        let chunks = split_message("aaaa\nbbbb\ncccc", 9);

        assert_eq!(chunks, vec!["aaaa\nbbbb", "cccc"]);
    }

    #[test]
    fn test_long_line_is_hard_split() {
        let chunks = split_message("abcdefghij", 4);

        assert_eq!(chunks, vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_limit_counts_utf16_units() {
        // Each emoji is two UTF-16 units.
        let chunks = split_message("💪💪💪", 4);

        assert_eq!(chunks, vec!["💪💪", "💪"]);
    }

    #[test]
    fn test_keyboard_matches_menu() {
        let keyboard = main_menu();
        let buttons: usize = keyboard.keyboard.iter().map(|row| row.len()).sum();

        assert_eq!(buttons, menu::keyboard_rows().into_iter().flatten().count());
    }
}
