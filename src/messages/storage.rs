use super::types::Message;
use parking_lot::RwLock;
use std::sync::Arc;

/// Ordered conversation history for one session. Cheap to clone; clones
/// share the same underlying list.
#[derive(Debug, Clone, Default)]
pub struct MessageStorage {
    messages: Arc<RwLock<Vec<Message>>>,
}

impl MessageStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message. Submission order is retained.
    pub fn add(&self, message: Message) {
        self.messages.write().push(message);
    }

    pub fn all(&self) -> Vec<Message> {
        self.messages.read().clone()
    }

    pub fn last(&self) -> Option<Message> {
        self.messages.read().last().cloned()
    }

    pub fn clear(&self) {
        self.messages.write().clear();
    }

    pub fn len(&self) -> usize {
        self.messages.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.read().is_empty()
    }
}
