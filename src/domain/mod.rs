//! Domain layer - Pure skill logic.
//!
//! No I/O happens here; collaborators are reached through `crate::ports`.

pub mod foundation;
pub mod skill;
