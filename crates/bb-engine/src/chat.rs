//! # Chat Pipeline
//!
//! The ordered message log and its two timers. A submission appends
//! immediately and schedules a fire-once scripted reply; typing activity
//! restarts a debounced indicator window. The log is persisted whole on
//! every append so an abrupt session end loses nothing.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use chrono::Utc;
use rand::Rng;
use tokio::task::JoinHandle;
use tokio::time::sleep;

use bb_core::models::{ChatMessage, TypingState};
use bb_core::traits::{keys, load_or, save, GuestNamer, KvStore};

use crate::scripted::{scripted_reply, RESPONDER_NAME};

/// Simulated responder latency. Deliberate, to mimic a live participant.
pub const REPLY_DELAY: Duration = Duration::from_millis(1500);
/// How long the typing indicator stays up after the last keystroke.
pub const TYPING_WINDOW: Duration = Duration::from_millis(2000);

/// Session-scoped guest identity: one random `User<n>` name drawn at
/// construction and reused for every submission.
pub struct RandomGuestNamer {
    name: String,
}

impl RandomGuestNamer {
    pub fn new() -> Self {
        let suffix: u16 = rand::rng().random_range(0..1000);
        Self {
            name: format!("User{suffix}"),
        }
    }
}

impl Default for RandomGuestNamer {
    fn default() -> Self {
        Self::new()
    }
}

impl GuestNamer for RandomGuestNamer {
    fn guest_name(&self) -> String {
        self.name.clone()
    }
}

/// Owns the message log and the typing overlay. The timer-driven methods
/// (`submit_message`, `notify_typing`) must run inside a tokio runtime,
/// since the delayed callbacks are spawned tasks.
pub struct ChatPipeline {
    log: Arc<Mutex<Vec<ChatMessage>>>,
    typing: Arc<Mutex<TypingState>>,
    typing_expiry: Mutex<Option<JoinHandle<()>>>,
    store: Arc<dyn KvStore>,
    namer: Arc<dyn GuestNamer>,
}

impl ChatPipeline {
    /// Loads the persisted log, substituting the fixed two-message seed on
    /// a first run or a corrupt record so the chat is never empty.
    pub fn new(store: Arc<dyn KvStore>, namer: Arc<dyn GuestNamer>) -> Self {
        let log = load_or(store.as_ref(), keys::CHAT_MESSAGES, seed_log);
        tracing::debug!(messages = log.len(), "chat log loaded");
        Self {
            log: Arc::new(Mutex::new(log)),
            typing: Arc::new(Mutex::new(TypingState::default())),
            typing_expiry: Mutex::new(None),
            store,
            namer,
        }
    }

    /// Appends a guest message and schedules the scripted reply.
    ///
    /// A whitespace-only submission is a silent no-op. Returns whether a
    /// message was appended. A second submission before a pending reply
    /// fires does not cancel it; replies land in their own fire order.
    pub fn submit_message(&self, text: &str) -> bool {
        let body = text.trim();
        if body.is_empty() {
            return false;
        }

        let message = ChatMessage::new(self.namer.guest_name(), body, false);
        tracing::info!(author = %message.author, "chat message submitted");
        {
            let mut log = lock(&self.log);
            log.push(message);
            save(self.store.as_ref(), keys::CHAT_MESSAGES, &*log);
        }
        self.schedule_reply(body.to_string());
        true
    }

    fn schedule_reply(&self, trigger: String) {
        let log = Arc::clone(&self.log);
        let store = Arc::clone(&self.store);
        tokio::spawn(async move {
            sleep(REPLY_DELAY).await;
            let mut log = lock(&log);
            let asker = log
                .iter()
                .rev()
                .find(|message| !message.is_automated)
                .map(|message| message.author.clone())
                .unwrap_or_else(|| "User".to_string());
            let body = scripted_reply(&trigger, &asker);
            log.push(ChatMessage::new(RESPONDER_NAME, body, true));
            save(store.as_ref(), keys::CHAT_MESSAGES, &*log);
        });
    }

    /// Raises the typing indicator and restarts its expiry window,
    /// cancelling the previous pending expiry. Debounce, not a queue.
    pub fn notify_typing(&self) {
        {
            let mut typing = lock(&self.typing);
            typing.is_typing = true;
            typing.expires_at = Some(Utc::now() + chrono::Duration::from_std(TYPING_WINDOW).unwrap_or_default());
        }
        let mut slot = lock(&self.typing_expiry);
        if let Some(pending) = slot.take() {
            pending.abort();
        }
        let typing = Arc::clone(&self.typing);
        *slot = Some(tokio::spawn(async move {
            sleep(TYPING_WINDOW).await;
            let mut typing = lock(&typing);
            typing.is_typing = false;
            typing.expires_at = None;
        }));
    }

    pub fn is_typing(&self) -> bool {
        lock(&self.typing).is_typing
    }

    /// Snapshot of the append-only log in append order.
    pub fn messages(&self) -> Vec<ChatMessage> {
        lock(&self.log).clone()
    }
}

// A poisoned mutex only means a panicked timer task; the protected state is
// still usable, so recover the guard instead of propagating the panic.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// First-load log: a welcome from the advisor plus one sample question.
fn seed_log() -> Vec<ChatMessage> {
    vec![
        ChatMessage::new(
            "HealthAdvisor",
            "Welcome to the live chat! Feel free to ask questions.",
            true,
        ),
        ChatMessage::new("Jane", "Has anyone tried the new fitness program?", false),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use bb_storage::MemoryStore;

    struct FixedNamer(&'static str);

    impl GuestNamer for FixedNamer {
        fn guest_name(&self) -> String {
            self.0.to_string()
        }
    }

    fn pipeline() -> ChatPipeline {
        ChatPipeline::new(Arc::new(MemoryStore::new()), Arc::new(FixedNamer("Maya")))
    }

    #[tokio::test(start_paused = true)]
    async fn first_run_starts_with_the_seed_log() {
        let chat = pipeline();
        let log = chat.messages();
        assert_eq!(log.len(), 2);
        assert_eq!(log[0].author, "HealthAdvisor");
        assert!(!log[1].is_automated);
    }

    #[tokio::test(start_paused = true)]
    async fn whitespace_submission_is_a_no_op() {
        let chat = pipeline();
        assert!(!chat.submit_message("   \t"));
        assert_eq!(chat.messages().len(), 2);
        // No reply is pending either.
        sleep(Duration::from_millis(2000)).await;
        assert_eq!(chat.messages().len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn hello_always_hits_the_keyword_entry() {
        let chat = pipeline();
        assert!(chat.submit_message("  Hello "));
        sleep(REPLY_DELAY + Duration::from_millis(100)).await;
        let log = chat.messages();
        assert_eq!(log.len(), 4);
        assert!(log[3].is_automated);
        assert_eq!(log[3].author, RESPONDER_NAME);
        assert_eq!(log[3].body, "Hello Maya, what can I help you with?");
    }

    #[tokio::test(start_paused = true)]
    async fn overlapping_submissions_each_get_a_reply() {
        let chat = pipeline();
        chat.submit_message("hello");
        sleep(Duration::from_millis(500)).await;
        chat.submit_message("bye");
        // First reply fires at t=1500, second at t=2000.
        sleep(Duration::from_millis(1100)).await;
        assert_eq!(chat.messages().len(), 5);
        sleep(Duration::from_millis(500)).await;
        let log = chat.messages();
        assert_eq!(log.len(), 6);
        assert_eq!(log[4].body, "Hello Maya, what can I help you with?");
        assert_eq!(log[5].body, "Goodbye, have a great day!");
    }

    #[tokio::test(start_paused = true)]
    async fn typing_window_restarts_on_each_keystroke() {
        let chat = pipeline();
        chat.notify_typing();
        sleep(Duration::from_millis(1000)).await;
        assert!(chat.is_typing());

        chat.notify_typing();
        // 1900 ms after the second call: still inside the window.
        sleep(Duration::from_millis(1900)).await;
        assert!(chat.is_typing());
        // 2100 ms after the second call: expired.
        sleep(Duration::from_millis(200)).await;
        assert!(!chat.is_typing());
    }

    #[tokio::test(start_paused = true)]
    async fn corrupt_history_is_replaced_by_the_seed_log() {
        let store = Arc::new(MemoryStore::new());
        store.preload(keys::CHAT_MESSAGES, "[{\"id\": 12}");
        let chat = ChatPipeline::new(store, Arc::new(FixedNamer("Maya")));
        assert_eq!(chat.messages().len(), 2);
    }
}
