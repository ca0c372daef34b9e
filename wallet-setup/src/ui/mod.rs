//! # View Model
//!
//! Rendering-free projection of the workflow: which fields and controls are
//! on screen, which are enabled, and which feedback is visible. Any frontend
//! (terminal prompt, GUI, web) renders from a [`WorkflowView`].
//!
//! - **[`keys`]**: Lookup keys of all user-facing text
//! - **[`view`]**: [`WorkflowView`] and [`render`]

pub mod keys;
pub mod view;

pub use view::{render, Control, ControlView, FieldView, WorkflowView};
