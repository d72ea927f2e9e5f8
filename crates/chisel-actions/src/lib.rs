//! The edit engine: a key-driven state machine over [`chisel_state::EditorState`].
//!
//! One decoded [`chisel_events::KeyEvent`] in, one deterministic state
//! transition out. The engine never fails — invalid or boundary input
//! degrades to clamped behavior or a no-op, and the buffer/cursor are valid
//! after every call.

pub mod dispatcher;

pub use dispatcher::{DispatchResult, dispatch};
