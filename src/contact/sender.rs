use std::future::Future;
use std::time::Duration;

use thiserror::Error;

use super::FormFields;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SendError {
    #[error("message rejected: {0}")]
    Rejected(String),
    #[error("message service unavailable")]
    Unavailable,
}

/// Delivers a contact message somewhere outside the page.
pub trait MessageSender {
    fn send(&self, fields: FormFields) -> impl Future<Output = Result<(), SendError>>;
}

/// Stand-in for a real delivery service: waits, then reports a fixed outcome.
#[derive(Debug, Clone)]
pub struct SimulatedSender {
    latency: Duration,
    outcome: Result<(), SendError>,
}

impl SimulatedSender {
    pub fn new(latency: Duration) -> Self {
        Self {
            latency,
            outcome: Ok(()),
        }
    }

    pub fn failing(latency: Duration, err: SendError) -> Self {
        Self {
            latency,
            outcome: Err(err),
        }
    }
}

impl MessageSender for SimulatedSender {
    async fn send(&self, fields: FormFields) -> Result<(), SendError> {
        log::debug!(
            "sending contact message from {} <{}>",
            fields.name,
            fields.email
        );
        delay(self.latency).await;
        self.outcome.clone()
    }
}

/// Resolves after `duration` on the browser event loop.
///
/// A zero duration resolves immediately without touching the timer API.
pub async fn delay(duration: Duration) {
    if duration.is_zero() {
        return;
    }
    let (tx, rx) = futures::channel::oneshot::channel::<()>();
    leptos::prelude::set_timeout(
        move || {
            let _ = tx.send(());
        },
        duration,
    );
    // a dropped sender means the timer never fired; treat it as elapsed
    let _ = rx.await;
}
