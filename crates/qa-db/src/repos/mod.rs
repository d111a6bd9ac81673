//! Repository modules implementing the record store operations.
//!
//! Each module adds methods to `QaDb` via `impl QaDb` blocks.

pub mod record;
pub mod stats;
