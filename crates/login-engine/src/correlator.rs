//! Single-slot correlation between a waiting RPC call and the login
//! outcome the vendor delivers later.

use crate::{EngineError, LoginReply};
use std::sync::Mutex;
use tokio::sync::oneshot;
use tracing::{debug, warn};

struct PendingLogin {
    method: &'static str,
    tx: oneshot::Sender<LoginReply>,
}

/// Holds at most one pending login call at a time.
///
/// `begin` claims the slot and hands back the receiver the call waits on;
/// `resolve` empties it and wakes the caller. Outcomes that arrive with an
/// empty slot are ignored, which makes duplicate or late vendor callbacks
/// harmless.
pub struct ResultCorrelator {
    slot: Mutex<Option<PendingLogin>>,
}

impl ResultCorrelator {
    pub fn new() -> Self {
        Self {
            slot: Mutex::new(None),
        }
    }

    /// Claim the slot for `method`. Fails with [`EngineError::LoginInProgress`]
    /// while another call is still waiting.
    pub fn begin(
        &self,
        method: &'static str,
    ) -> Result<oneshot::Receiver<LoginReply>, EngineError> {
        let mut slot = self.slot.lock().unwrap();
        if let Some(pending) = slot.as_ref() {
            warn!(
                method,
                pending = pending.method,
                "Rejecting call, another login attempt is still pending"
            );
            return Err(EngineError::LoginInProgress);
        }

        let (tx, rx) = oneshot::channel();
        *slot = Some(PendingLogin { method, tx });
        Ok(rx)
    }

    /// Resolve the pending call with `reply`. Returns `false` when nothing
    /// was pending.
    pub fn resolve(&self, reply: LoginReply) -> bool {
        let pending = self.slot.lock().unwrap().take();
        let Some(pending) = pending else {
            debug!("Login outcome arrived with nothing pending, ignoring");
            return false;
        };

        debug!(method = pending.method, "Resolving pending login call");
        if pending.tx.send(reply).is_err() {
            warn!(
                method = pending.method,
                "Pending caller went away before its outcome arrived"
            );
        }
        true
    }

    /// Whether a call is currently waiting.
    pub fn is_pending(&self) -> bool {
        self.slot.lock().unwrap().is_some()
    }
}

impl Default for ResultCorrelator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bridge_protocol_types::LoginReplyBody;

    #[tokio::test]
    async fn test_begin_then_resolve_delivers_reply() {
        let correlator = ResultCorrelator::new();
        let rx = correlator.begin("logIn").unwrap();

        assert!(correlator.resolve(Ok(LoginReplyBody::CancelledByUser)));
        assert_eq!(rx.await.unwrap(), Ok(LoginReplyBody::CancelledByUser));
    }

    #[tokio::test]
    async fn test_second_begin_rejected_while_pending() {
        let correlator = ResultCorrelator::new();
        let _rx = correlator.begin("logIn").unwrap();

        let err = correlator.begin("logIn").unwrap_err();
        assert_eq!(err, EngineError::LoginInProgress);
    }

    #[tokio::test]
    async fn test_slot_is_free_again_after_resolution() {
        let correlator = ResultCorrelator::new();

        let rx = correlator.begin("logIn").unwrap();
        correlator.resolve(Ok(LoginReplyBody::CancelledByUser));
        rx.await.unwrap().unwrap();

        assert!(!correlator.is_pending());
        assert!(correlator.begin("logIn").is_ok());
    }

    #[tokio::test]
    async fn test_resolve_without_pending_call_is_ignored() {
        let correlator = ResultCorrelator::new();
        assert!(!correlator.resolve(Ok(LoginReplyBody::CancelledByUser)));
    }

    #[tokio::test]
    async fn test_resolve_is_exactly_once() {
        let correlator = ResultCorrelator::new();
        let _rx = correlator.begin("logIn").unwrap();

        assert!(correlator.resolve(Ok(LoginReplyBody::CancelledByUser)));
        assert!(!correlator.resolve(Ok(LoginReplyBody::CancelledByUser)));
    }

    #[tokio::test]
    async fn test_dropped_correlator_closes_the_channel() {
        let correlator = ResultCorrelator::new();
        let rx = correlator.begin("logIn").unwrap();
        drop(correlator);

        assert!(rx.await.is_err());
    }

    #[tokio::test]
    async fn test_is_pending_tracks_the_slot() {
        let correlator = ResultCorrelator::new();
        assert!(!correlator.is_pending());

        let _rx = correlator.begin("logIn").unwrap();
        assert!(correlator.is_pending());

        correlator.resolve(Ok(LoginReplyBody::CancelledByUser));
        assert!(!correlator.is_pending());
    }
}
