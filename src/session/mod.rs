//! Lab session: explicit state plus synchronous command dispatch.
//!
//! Every user action (measure, table, plot, reset) is a plain method call on
//! a [`Session`] that runs to completion before the next one. There is no
//! global state; front-ends own the session and pass it around.

mod config;
mod lab;

pub use config::SessionConfig;
pub use lab::{Outcome, Session};
