#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use sporttracker::db::{create_memory_pool, DbPool};
use sporttracker::dialog::DialogStore;
use sporttracker::error::Result;
use sporttracker::handlers::chat::{handle_message, ChatState};
use sporttracker::messenger::{IncomingMessage, Messenger, Reply};
use sporttracker::migrations::run_migrations_for_tests;
use sporttracker::repositories::{
    AbsWorkoutRepository, ExerciseRepository, PullUpWorkoutRepository, SwimmingWorkoutRepository,
    UserRepository, WorkoutRepository,
};

pub fn setup_test_db() -> DbPool {
    let pool = create_memory_pool().expect("Failed to create test database");
    run_migrations_for_tests(&pool).expect("Failed to run migrations");
    pool
}

pub fn create_chat_state(pool: DbPool) -> ChatState {
    ChatState {
        dialogs: Arc::new(DialogStore::new()),
        user_repo: UserRepository::new(pool.clone()),
        exercise_repo: ExerciseRepository::new(pool.clone()),
        workout_repo: WorkoutRepository::new(pool.clone()),
        swimming_repo: SwimmingWorkoutRepository::new(pool.clone()),
        pull_up_repo: PullUpWorkoutRepository::new(pool.clone()),
        abs_repo: AbsWorkoutRepository::new(pool),
    }
}

/// Collects every reply instead of sending it anywhere.
#[derive(Default)]
pub struct RecordingMessenger {
    sent: Mutex<Vec<(i64, Reply)>>,
}

impl RecordingMessenger {
    pub fn texts(&self) -> Vec<String> {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .map(|(_, reply)| reply.text.clone())
            .collect()
    }

    pub fn last(&self) -> Option<String> {
        self.texts().pop()
    }

    pub fn count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

#[async_trait]
impl Messenger for RecordingMessenger {
    async fn send(&self, chat_id: i64, reply: Reply) -> Result<()> {
        self.sent.lock().unwrap().push((chat_id, reply));
        Ok(())
    }
}

/// A user chatting with the bot in a private chat.
pub struct TestChat {
    pub state: ChatState,
    pub messenger: RecordingMessenger,
    pub user_id: i64,
}

impl TestChat {
    pub fn new(pool: DbPool, user_id: i64) -> Self {
        Self {
            state: create_chat_state(pool),
            messenger: RecordingMessenger::default(),
            user_id,
        }
    }

    /// Another user talking to the same bot instance.
    pub fn other_user(&self, user_id: i64) -> Self {
        Self {
            state: self.state.clone(),
            messenger: RecordingMessenger::default(),
            user_id,
        }
    }

    /// Sends `text` and returns the bot's reply, if any.
    pub async fn say(&self, text: &str) -> Option<String> {
        let before = self.messenger.count();
        handle_message(
            &self.state,
            &self.messenger,
            IncomingMessage {
                user_id: self.user_id,
                chat_id: self.user_id,
                text: text.to_string(),
            },
        )
        .await
        .unwrap();
        if self.messenger.count() > before {
            self.messenger.last()
        } else {
            None
        }
    }

    pub async fn db_user_id(&self) -> i64 {
        self.state
            .user_repo
            .get_or_create_by_telegram_id(self.user_id)
            .await
            .unwrap()
            .id
    }
}
