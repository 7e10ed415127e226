//! TUI Chase (workspace facade crate).
//!
//! This package keeps a single `tui_chase::{audio,core,input,term,types}`
//! public API while the implementation lives in dedicated crates under
//! `crates/`.

pub use tui_chase_audio as audio;
pub use tui_chase_core as core;
pub use tui_chase_input as input;
pub use tui_chase_term as term;
pub use tui_chase_types as types;
