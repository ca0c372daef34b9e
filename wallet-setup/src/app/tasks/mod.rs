//! # Async Tasks
//!
//! Background calls to the wallet service. Each task reports back through
//! the workflow's event channel.

pub mod wallet;
