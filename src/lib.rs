//! Tetris brain (workspace facade crate).
//!
//! Re-exports the workspace crates under one roof as
//! `tetris_brain::{core, engine, types}`; the implementation lives under `crates/`.

pub use tetris_brain_core as core;
pub use tetris_brain_engine as engine;
pub use tetris_brain_types as types;
