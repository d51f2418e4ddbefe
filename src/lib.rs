//! Snake Frame (workspace facade crate).
//!
//! Re-exports the member crates under short names so callers can write
//! `snake_frame::{core,term,types}` while the implementation lives in
//! dedicated crates under `crates/`.

pub mod cli;

pub use snake_frame_core as core;
pub use snake_frame_term as term;
pub use snake_frame_types as types;
