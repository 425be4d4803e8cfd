//! Error plumbing shared by the agentdesk crates.

pub mod error;

pub use error::FromMessage;
