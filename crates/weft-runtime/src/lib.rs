//! # weft-runtime
//!
//! Per-run state for the weft framework: the container tree, the ambient
//! stack of open scoped blocks, the per-run form registry set, the delta
//! queue, and session lifecycle.
//!
//! ## Modules
//!
//! - [`container`] - Container handles, block creation, scoping
//! - [`context`] - The per-run [`RunContext`]
//! - [`session`] - Sessions and script runs

pub mod container;
pub mod context;
pub mod session;

pub use container::{Container, FormData, RootContainer};
pub use context::RunContext;
pub use session::{ScriptRun, Session};
