//! Vendor login SDK abstraction.
//!
//! The bridge only ever talks to the vendor through the [`LoginSdk`] trait:
//! configure a login behavior, start an interactive login against a UI host,
//! read or clear the current token, and observe asynchronous outcomes. The
//! [`sandbox`] module ships an in-process implementation so the daemon and
//! the test suites can exercise the full async boundary without the vendor
//! binary.

mod sdk;
mod types;

pub mod sandbox;

pub use sdk::{LoginSdk, OutcomeObserver};
pub use types::{
    AccessToken, LoginBehavior, LoginOutcome, SdkError, UiEvent, UiHost, LOGIN_REQUEST_CODE,
    RESULT_CANCELLED, RESULT_OK,
};
