//! Softgate bridge daemon.
//!
//! Serves the vendor login surface (`logIn`, `logOut`,
//! `getCurrentAccessToken`) plus `health` and `shutdown` over a Unix domain
//! socket. One [`login_engine::LoginSession`] backs every connection; the
//! vendor side is the sandbox SDK until a real adapter is wired in.

pub mod config;
pub mod ipc;
pub mod login;
pub mod state;

#[cfg(test)]
mod tests;

pub use config::BridgeConfig;
pub use state::BridgeState;
