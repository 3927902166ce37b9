//! The login engine: a session facade over the vendor SDK plus the
//! correlation machinery that pairs each waiting RPC call with the login
//! outcome the vendor delivers later.
//!
//! [`LoginSession`] is the only type the daemon needs. It owns the vendor
//! SDK handle, the single-slot [`ResultCorrelator`], and the UI host
//! lifecycle, and exposes the three operations of the bridge surface:
//! `log_in`, `log_out`, and `current_access_token`.

mod correlator;
mod error;
mod reply;
mod session;

#[cfg(test)]
mod tests;

pub use correlator::ResultCorrelator;
pub use error::EngineError;
pub use reply::{login_reply, token_snapshot, LoginReply};
pub use session::LoginSession;
