//! Transport layer for bridge-host communication.
//!
//! This crate provides:
//! - Unix domain socket server
//! - JSON-RPC-like method call protocol
//! - Call/reply handling
//!
//! Protocol types are re-exported from `bridge-protocol-types`.

mod error;
mod paths;
mod server;

pub use bridge_protocol_types::{
    error_codes, AccessTokenSnapshot, LoginReplyBody, Method, MethodCall, Reply, ReplyError,
};
pub use error::{ChannelError, ChannelResult};
pub use paths::default_socket_path;
pub use server::{BridgeClient, BridgeServer, HandlerFn};
