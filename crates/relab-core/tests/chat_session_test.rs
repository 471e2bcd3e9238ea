//! Integration test: analyzer chat session boundary behavior.
//!
//! Verifies that:
//! 1. Responder failures and timeouts become the fallback reply and never propagate.
//! 2. The admission gate rejects a second submission while one is pending and is
//!    released after the fallback, so the user can retry.
//! 3. Blank submissions append nothing and never reach the responder.
//! 4. The responder sees only successful exchanges as context: no greeting, no fallbacks.
//! 5. An exchange whose caller is dropped still ends with a model turn.
//! 6. The HTTP responder's transport errors surface as the fallback.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use relab_core::{
    ChatMessage, ChatSession, ChatTranscript, Responder, ResponderError, Role, SubmitOutcome,
    OpenRouterResponder, FALLBACK_REPLY,
};
use tokio::sync::Notify;

struct FailingResponder {
    calls: AtomicUsize,
}

#[async_trait]
impl Responder for FailingResponder {
    async fn complete(&self, _prior: &[ChatMessage], _text: &str) -> Result<String, ResponderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(ResponderError::Provider(503, "upstream unavailable".to_string()))
    }

    fn name(&self) -> &str {
        "failing"
    }
}

struct SlowResponder;

#[async_trait]
impl Responder for SlowResponder {
    async fn complete(&self, _prior: &[ChatMessage], _text: &str) -> Result<String, ResponderError> {
        tokio::time::sleep(Duration::from_secs(5)).await;
        Ok("too late".to_string())
    }

    fn name(&self) -> &str {
        "slow"
    }
}

/// Holds each reply until `release` is notified.
struct GatedResponder {
    release: Arc<Notify>,
}

#[async_trait]
impl Responder for GatedResponder {
    async fn complete(&self, _prior: &[ChatMessage], text: &str) -> Result<String, ResponderError> {
        self.release.notified().await;
        Ok(format!("echo: {}", text))
    }

    fn name(&self) -> &str {
        "gated"
    }
}

/// Never answers.
struct StalledResponder;

#[async_trait]
impl Responder for StalledResponder {
    async fn complete(&self, _prior: &[ChatMessage], _text: &str) -> Result<String, ResponderError> {
        std::future::pending::<Result<String, ResponderError>>().await
    }

    fn name(&self) -> &str {
        "stalled"
    }
}

/// Records the context it was called with; fails on the text "fail".
#[derive(Default)]
struct RecordingResponder {
    seen: Mutex<Vec<(Vec<ChatMessage>, String)>>,
}

#[async_trait]
impl Responder for RecordingResponder {
    async fn complete(&self, prior: &[ChatMessage], text: &str) -> Result<String, ResponderError> {
        self.seen
            .lock()
            .unwrap()
            .push((prior.to_vec(), text.to_string()));
        if text == "fail" {
            return Err(ResponderError::Provider(500, "boom".to_string()));
        }
        Ok(format!("reply {}", prior.len()))
    }

    fn name(&self) -> &str {
        "recording"
    }
}

#[tokio::test]
async fn failure_yields_fallback_and_releases_gate() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let responder = Arc::new(FailingResponder {
        calls: AtomicUsize::new(0),
    });
    let session = ChatSession::new(responder.clone(), Duration::from_secs(1));

    let reply = session.request_reply(&[], "hello").await;
    assert_eq!(reply, FALLBACK_REPLY);

    assert_eq!(
        session.submit("hello").await,
        SubmitOutcome::Replied(FALLBACK_REPLY.to_string())
    );
    assert!(!session.is_typing());

    // Retry is admitted.
    assert_eq!(
        session.submit("again").await,
        SubmitOutcome::Replied(FALLBACK_REPLY.to_string())
    );
    assert_eq!(responder.calls.load(Ordering::SeqCst), 3);

    let messages = session.transcript().await;
    assert_eq!(messages.len(), 5);
    assert_eq!(messages[4], ChatMessage::model(FALLBACK_REPLY));
}

#[tokio::test]
async fn timeout_is_a_fallback() {
    let session = ChatSession::new(Arc::new(SlowResponder), Duration::from_millis(50));
    assert_eq!(
        session.submit("are you there?").await,
        SubmitOutcome::Replied(FALLBACK_REPLY.to_string())
    );
    assert!(!session.is_typing());
}

#[tokio::test]
async fn second_submission_while_pending_is_busy() {
    let release = Arc::new(Notify::new());
    let session = Arc::new(ChatSession::new(
        Arc::new(GatedResponder {
            release: release.clone(),
        }),
        Duration::from_secs(5),
    ));

    let first = {
        let session = Arc::clone(&session);
        tokio::spawn(async move { session.submit("first").await })
    };

    // Wait until the first submission holds the gate.
    while !session.is_typing() {
        tokio::task::yield_now().await;
    }

    assert_eq!(session.submit("second").await, SubmitOutcome::Busy);
    assert_eq!(session.submit("").await, SubmitOutcome::Ignored);

    release.notify_one();
    let outcome = first.await.unwrap();
    assert_eq!(outcome, SubmitOutcome::Replied("echo: first".to_string()));
    assert!(!session.is_typing());

    let messages = session.transcript().await;
    let user_turns: Vec<&str> = messages
        .iter()
        .filter(|m| m.role == Role::User)
        .map(|m| m.content.as_str())
        .collect();
    assert_eq!(user_turns, vec!["first"]);
}

#[tokio::test]
async fn blank_submission_never_reaches_responder() {
    let responder = Arc::new(FailingResponder {
        calls: AtomicUsize::new(0),
    });
    let session = ChatSession::with_transcript(
        responder.clone(),
        Duration::from_secs(1),
        ChatTranscript::new(),
    );
    assert_eq!(session.submit("").await, SubmitOutcome::Ignored);
    assert_eq!(session.submit(" \t ").await, SubmitOutcome::Ignored);
    assert!(session.transcript().await.is_empty());
    assert_eq!(responder.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn responder_context_skips_greeting_and_fallbacks() {
    let responder = Arc::new(RecordingResponder::default());
    let session = ChatSession::new(responder.clone(), Duration::from_secs(1));

    session.submit("one").await;
    assert_eq!(
        session.submit("fail").await,
        SubmitOutcome::Replied(FALLBACK_REPLY.to_string())
    );
    session.submit("two").await;

    let seen = responder.seen.lock().unwrap();
    assert_eq!(seen.len(), 3);
    // Greeting is display-only.
    assert!(seen[0].0.is_empty());
    assert_eq!(seen[0].1, "one");
    assert_eq!(
        seen[1].0,
        vec![ChatMessage::user("one"), ChatMessage::model("reply 0")]
    );
    // The failed turn and its fallback are not context.
    assert_eq!(seen[2].0, seen[1].0);
    assert_eq!(seen[2].1, "two");
    drop(seen);

    // The visible transcript still shows all of it.
    let messages = session.transcript().await;
    assert_eq!(messages.len(), 7);
    assert_eq!(messages[4], ChatMessage::model(FALLBACK_REPLY));
    assert_eq!(session.context().await.len(), 4);
}

#[tokio::test]
async fn dropped_submission_still_appends_model_turn() {
    let session = Arc::new(ChatSession::new(
        Arc::new(StalledResponder),
        Duration::from_millis(100),
    ));

    let pending = {
        let session = Arc::clone(&session);
        tokio::spawn(async move { session.submit("hello").await })
    };
    while !session.is_typing() {
        tokio::task::yield_now().await;
    }
    pending.abort();
    assert!(pending.await.unwrap_err().is_cancelled());

    // The exchange keeps running until its own timeout releases the gate.
    while session.is_typing() {
        tokio::time::sleep(Duration::from_millis(10)).await;
    }

    let messages = session.transcript().await;
    assert_eq!(messages.len(), 3);
    assert_eq!(messages[1], ChatMessage::user("hello"));
    assert_eq!(messages[2], ChatMessage::model(FALLBACK_REPLY));
    assert!(session.context().await.is_empty());
}

#[tokio::test]
async fn unreachable_provider_yields_fallback() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let responder = OpenRouterResponder::new("k").with_api_url("http://127.0.0.1:1/v1");
    let session = ChatSession::new(Arc::new(responder), Duration::from_secs(5));

    assert_eq!(
        session.submit("is anyone there?").await,
        SubmitOutcome::Replied(FALLBACK_REPLY.to_string())
    );
    assert!(!session.is_typing());
    assert_eq!(
        session.transcript().await.last(),
        Some(&ChatMessage::model(FALLBACK_REPLY))
    );
}
