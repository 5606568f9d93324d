//! Mock generation backend for deterministic testing.
//!
//! Returns pre-configured markup without making any HTTP calls.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::backend::GenerationBackend;
use howto_core::Result;

/// A mock backend that returns queued markup or errors in order.
///
/// # Example
/// ```
/// use howto_gen::mock::MockBackend;
/// let backend = MockBackend::new().with_markup("<h1>How to Test</h1>");
/// ```
pub struct MockBackend {
    replies: Arc<Mutex<Vec<MockReply>>>,
    /// Every query received, for assertions in tests.
    pub queries: Arc<Mutex<Vec<String>>>,
}

#[derive(Clone)]
enum MockReply {
    Markup(String),
    Error(String),
}

impl MockBackend {
    pub fn new() -> Self {
        Self {
            replies: Arc::new(Mutex::new(vec![])),
            queries: Arc::new(Mutex::new(vec![])),
        }
    }

    /// Queue a markup reply.
    pub fn with_markup(self, markup: &str) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push(MockReply::Markup(markup.to_string()));
        self
    }

    /// Queue an error reply.
    pub fn with_error(self, error: &str) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push(MockReply::Error(error.to_string()));
        self
    }

    /// All queries this backend has received so far.
    pub fn recorded_queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.queries.lock().unwrap().len()
    }

    fn next_reply(&self) -> MockReply {
        let mut replies = self.replies.lock().unwrap();
        if replies.is_empty() {
            MockReply::Markup("<h1>How to Mock</h1><p>No more queued replies.</p>".to_string())
        } else {
            replies.remove(0)
        }
    }
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GenerationBackend for MockBackend {
    fn name(&self) -> &str {
        "mock"
    }

    async fn generate_markup(&self, query: &str) -> Result<String> {
        self.queries.lock().unwrap().push(query.to_string());
        match self.next_reply() {
            MockReply::Markup(markup) => Ok(markup),
            MockReply::Error(error) => Err(howto_core::HowToError::Generation(error)),
        }
    }
}
