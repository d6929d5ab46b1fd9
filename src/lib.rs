//! Blockfall (workspace facade crate).
//!
//! Keeps stable `blockfall::{core,types}` public paths while the
//! implementation lives in dedicated crates under `crates/`.

pub use blockfall_core as core;
pub use blockfall_types as types;
