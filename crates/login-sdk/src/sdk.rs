//! The vendor SDK surface the bridge integrates against.

use crate::{AccessToken, LoginBehavior, LoginOutcome, UiEvent, UiHost};
use std::sync::Arc;

/// Observer invoked with the terminal outcome of a login attempt.
///
/// Fired at most once per attempt, usually on a different call stack than
/// the [`LoginSdk::begin_login`] that started it.
pub type OutcomeObserver = Arc<dyn Fn(LoginOutcome) + Send + Sync>;

/// Surface of the vendor login SDK.
///
/// Implementations must be shareable across tasks; every method takes
/// `&self` and interior state is the implementation's concern.
pub trait LoginSdk: Send + Sync {
    /// Configure how the next login flow is presented.
    fn set_behavior(&self, behavior: LoginBehavior);

    /// Start an interactive login against `ui`. The outcome arrives later
    /// through the registered observer, or via [`LoginSdk::handle_ui_event`]
    /// when the flow ran out of process.
    fn begin_login(&self, ui: &UiHost, permissions: &[String]);

    /// Clear the vendor session. Synchronous and infallible.
    fn log_out(&self);

    /// The currently active token, if any.
    fn current_access_token(&self) -> Option<AccessToken>;

    /// Register the observer for login outcomes. Replaces any previous one.
    fn set_outcome_observer(&self, observer: OutcomeObserver);

    /// Offer a platform UI result event to the SDK. Returns `true` when the
    /// event belonged to the vendor's login flow and was consumed.
    fn handle_ui_event(&self, event: &UiEvent) -> bool;
}
