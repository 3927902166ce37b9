//! Daemon test suite: full wire scenarios over a temp socket.

mod login;
