//======================================================================
// src/backends/mod.rs
// Backend selection for the block transform.
//======================================================================

mod soft;
pub(crate) use soft::*;
