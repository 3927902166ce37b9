//! IPC surface wiring.

pub mod health;
pub mod register;
