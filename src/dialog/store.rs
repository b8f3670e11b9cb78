use dashmap::DashMap;

use super::DialogState;

/// In-memory dialog state per external user id.
///
/// Backed by a sharded map, so users never contend on a global lock. Nothing
/// is persisted; a restart drops every in-flight dialog.
#[derive(Debug, Default)]
pub struct DialogStore {
    states: DashMap<i64, DialogState>,
}

impl DialogStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, user_id: i64) -> Option<DialogState> {
        self.states.get(&user_id).map(|entry| entry.value().clone())
    }

    pub fn set(&self, user_id: i64, state: DialogState) {
        self.states.insert(user_id, state);
    }

    pub fn remove(&self, user_id: i64) -> Option<DialogState> {
        self.states.remove(&user_id).map(|(_, state)| state)
    }

    /// Stores `state`, or clears the entry when it is `None`.
    pub fn replace(&self, user_id: i64, state: Option<DialogState>) {
        match state {
            Some(state) => self.set(user_id, state),
            None => {
                self.remove(user_id);
            }
        }
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}
