//! Command-line front-end: one invocation logs in, runs one screen action
//! and exits.

pub mod args;

pub use args::{Cli, Commands};
