//! In-process sandbox implementation of the vendor SDK.
//!
//! The sandbox behaves like the vendor across its real async boundary:
//! `begin_login` returns immediately and the outcome lands on a separate
//! task, or through a UI result event when the decision is
//! [`SandboxDecision::Defer`]. The daemon runs against this implementation;
//! a real vendor adapter plugs in through the same trait.

use crate::{
    AccessToken, LoginBehavior, LoginOutcome, LoginSdk, OutcomeObserver, SdkError, UiEvent,
    UiHost, LOGIN_REQUEST_CODE, RESULT_CANCELLED, RESULT_OK,
};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::debug;
use uuid::Uuid;

/// How the sandbox completes each login attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SandboxDecision {
    /// Grant every requested permission.
    #[default]
    Grant,
    /// The user dismisses the login UI.
    Cancel,
    /// The vendor reports a failure.
    Fail,
    /// Complete only once a UI result event arrives.
    Defer,
}

/// Sandbox tokens mimic the vendor's sixty-day expiry.
const TOKEN_VALIDITY_DAYS: i64 = 60;

struct Inner {
    decision: SandboxDecision,
    user_id: String,
    behavior: Mutex<Option<LoginBehavior>>,
    current: Mutex<Option<AccessToken>>,
    observer: Mutex<Option<OutcomeObserver>>,
    /// Permissions of the attempt in flight, if any.
    attempt: Mutex<Option<Vec<String>>>,
}

/// In-process vendor SDK stand-in.
#[derive(Clone)]
pub struct SandboxLoginSdk {
    inner: Arc<Inner>,
}

impl SandboxLoginSdk {
    pub fn new() -> Self {
        Self::with_decision(SandboxDecision::Grant)
    }

    pub fn with_decision(decision: SandboxDecision) -> Self {
        Self {
            inner: Arc::new(Inner {
                decision,
                user_id: format!("sandbox-user-{}", Uuid::new_v4().simple()),
                behavior: Mutex::new(None),
                current: Mutex::new(None),
                observer: Mutex::new(None),
                attempt: Mutex::new(None),
            }),
        }
    }

    /// Behavior most recently configured through `set_behavior`.
    pub fn configured_behavior(&self) -> Option<LoginBehavior> {
        *self.inner.behavior.lock().unwrap()
    }
}

impl Default for SandboxLoginSdk {
    fn default() -> Self {
        Self::new()
    }
}

impl Inner {
    fn mint_token(&self, permissions: Vec<String>) -> AccessToken {
        AccessToken {
            token: format!("sandbox-{}", Uuid::new_v4().simple()),
            user_id: self.user_id.clone(),
            expires_at: chrono::Utc::now() + chrono::Duration::days(TOKEN_VALIDITY_DAYS),
            permissions,
            declined_permissions: Vec::new(),
        }
    }

    /// Close out the attempt in flight with `outcome`, if one exists.
    fn complete(&self, outcome: LoginOutcome) {
        if self.attempt.lock().unwrap().take().is_none() {
            debug!("No login attempt in flight, dropping outcome");
            return;
        }
        self.deliver(outcome);
    }

    fn deliver(&self, outcome: LoginOutcome) {
        if let LoginOutcome::Success(token) = &outcome {
            *self.current.lock().unwrap() = Some(token.clone());
        }

        let observer = self.observer.lock().unwrap().clone();
        match observer {
            Some(observer) => observer(outcome),
            None => debug!("No outcome observer registered, dropping outcome"),
        }
    }
}

impl LoginSdk for SandboxLoginSdk {
    fn set_behavior(&self, behavior: LoginBehavior) {
        *self.inner.behavior.lock().unwrap() = Some(behavior);
    }

    fn begin_login(&self, ui: &UiHost, permissions: &[String]) {
        debug!(
            ui = %ui.label(),
            decision = ?self.inner.decision,
            ?permissions,
            "Sandbox login starting"
        );
        *self.inner.attempt.lock().unwrap() = Some(permissions.to_vec());

        let outcome = match self.inner.decision {
            SandboxDecision::Grant => {
                Some(LoginOutcome::Success(self.inner.mint_token(permissions.to_vec())))
            }
            SandboxDecision::Cancel => Some(LoginOutcome::Cancelled),
            SandboxDecision::Fail => Some(LoginOutcome::Failure(SdkError::new(
                "sandbox_login_failed",
                "The sandbox was configured to fail login attempts",
            ))),
            // Defer waits for a UI result event.
            SandboxDecision::Defer => None,
        };

        if let Some(outcome) = outcome {
            let inner = self.inner.clone();
            tokio::spawn(async move {
                // Land off the caller's stack, the way the vendor does.
                tokio::time::sleep(Duration::from_millis(10)).await;
                inner.complete(outcome);
            });
        }
    }

    fn log_out(&self) {
        debug!("Sandbox logout");
        *self.inner.current.lock().unwrap() = None;
    }

    fn current_access_token(&self) -> Option<AccessToken> {
        self.inner.current.lock().unwrap().clone()
    }

    fn set_outcome_observer(&self, observer: OutcomeObserver) {
        *self.inner.observer.lock().unwrap() = Some(observer);
    }

    fn handle_ui_event(&self, event: &UiEvent) -> bool {
        if event.request_code != LOGIN_REQUEST_CODE {
            return false;
        }

        let Some(permissions) = self.inner.attempt.lock().unwrap().take() else {
            debug!("UI result with no login attempt in flight");
            return true;
        };

        let outcome = if event.result_code == RESULT_OK {
            // The payload may decline a subset of the requested permissions.
            let declined: Vec<String> = event
                .payload
                .as_ref()
                .and_then(|p| p.get("declinedPermissions"))
                .and_then(|v| v.as_array())
                .map(|values| {
                    values
                        .iter()
                        .filter_map(|v| v.as_str().map(String::from))
                        .collect()
                })
                .unwrap_or_default();

            let granted = permissions
                .iter()
                .filter(|p| !declined.contains(p))
                .cloned()
                .collect();

            let mut token = self.inner.mint_token(granted);
            token.declined_permissions = declined;
            LoginOutcome::Success(token)
        } else if event.result_code == RESULT_CANCELLED {
            LoginOutcome::Cancelled
        } else {
            LoginOutcome::Failure(SdkError::new(
                "sandbox_ui_error",
                &format!("UI flow ended with result code {}", event.result_code),
            ))
        };

        self.inner.deliver(outcome);
        true
    }
}
