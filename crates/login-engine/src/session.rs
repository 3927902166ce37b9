//! The login session facade.

use crate::correlator::ResultCorrelator;
use crate::reply::{login_reply, token_snapshot, LoginReply};
use crate::EngineError;
use bridge_protocol_types::{AccessTokenSnapshot, Method};
use login_sdk::{LoginBehavior, LoginSdk, UiEvent, UiHost};
use std::sync::{Arc, Mutex};
use tracing::{debug, info};

/// One login session over the vendor SDK.
///
/// Owns the SDK handle, the pending-call slot, and the UI host lifecycle.
/// All methods take `&self`; the daemon shares a session across connection
/// tasks behind an `Arc`.
pub struct LoginSession {
    sdk: Arc<dyn LoginSdk>,
    correlator: Arc<ResultCorrelator>,
    ui: Mutex<Option<UiHost>>,
}

impl LoginSession {
    /// Build a session over `sdk` and register the outcome observer that
    /// feeds the correlator. Replaces any observer the SDK already had.
    pub fn new(sdk: Arc<dyn LoginSdk>) -> Self {
        let correlator = Arc::new(ResultCorrelator::new());

        let resolver = correlator.clone();
        sdk.set_outcome_observer(Arc::new(move |outcome| {
            resolver.resolve(login_reply(outcome));
        }));

        Self {
            sdk,
            correlator,
            ui: Mutex::new(None),
        }
    }

    /// Run one interactive login and wait for its outcome.
    ///
    /// `behavior` is the raw wire token. The call fails synchronously when
    /// the token is unknown, no UI host is attached, or another login call
    /// is still waiting; otherwise it resolves with whatever the vendor
    /// eventually reports.
    pub async fn log_in(&self, behavior: &str, permissions: Vec<String>) -> LoginReply {
        let behavior =
            LoginBehavior::from_wire(behavior).ok_or_else(|| EngineError::UnknownLoginBehavior {
                token: behavior.to_string(),
            })?;

        let ui = self
            .ui
            .lock()
            .unwrap()
            .clone()
            .ok_or(EngineError::NoUiHost)?;

        let rx = self.correlator.begin(Method::LogIn.name())?;

        info!(behavior = behavior.as_wire(), ?permissions, "Starting interactive login");
        self.sdk.set_behavior(behavior);
        self.sdk.begin_login(&ui, &permissions);

        // A closed channel means the engine went away mid-flight.
        rx.await.unwrap_or(Err(EngineError::LoginInterrupted))
    }

    /// Clear the vendor session. Always succeeds.
    pub fn log_out(&self) {
        info!("Logging out");
        self.sdk.log_out();
    }

    /// Snapshot of the current token, if the vendor holds one.
    pub fn current_access_token(&self) -> Option<AccessTokenSnapshot> {
        self.sdk
            .current_access_token()
            .map(|token| token_snapshot(&token))
    }

    /// Attach the foreground surface logins present through.
    pub fn attach_ui(&self, ui: UiHost) {
        debug!(ui = %ui.label(), "UI host attached");
        *self.ui.lock().unwrap() = Some(ui);
    }

    /// Detach the current UI host. A pending login call stays pending; its
    /// outcome can still arrive through the SDK.
    pub fn detach_ui(&self) {
        debug!("UI host detached");
        *self.ui.lock().unwrap() = None;
    }

    /// Whether a UI host is currently attached.
    pub fn has_ui(&self) -> bool {
        self.ui.lock().unwrap().is_some()
    }

    /// Offer a platform UI result event to the vendor SDK.
    pub fn handle_ui_event(&self, event: &UiEvent) -> bool {
        self.sdk.handle_ui_event(event)
    }

    /// Whether a login call is waiting for its outcome.
    pub fn login_pending(&self) -> bool {
        self.correlator.is_pending()
    }
}
