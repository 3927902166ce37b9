//! Engine test suite.

mod lifecycle;
