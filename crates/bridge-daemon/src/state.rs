//! Shared daemon state.

use login_engine::LoginSession;
use login_sdk::LoginSdk;
use std::sync::Arc;

/// State shared by every handler.
#[derive(Clone)]
pub struct BridgeState {
    pub session: Arc<LoginSession>,
}

impl BridgeState {
    /// Build the shared state over `sdk`.
    pub fn new(sdk: Arc<dyn LoginSdk>) -> Self {
        Self {
            session: Arc::new(LoginSession::new(sdk)),
        }
    }
}
