//! Terminal Game of Life (workspace facade crate).
//!
//! Re-exports the workspace crates under one name and hosts the runtime
//! configuration used by the `tui-life` binary.

pub mod config;

pub use tui_life_core as core;
pub use tui_life_input as input;
pub use tui_life_level as level;
pub use tui_life_term as term;
pub use tui_life_types as types;

pub use config::LifeConfig;
