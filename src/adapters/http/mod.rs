//! HTTP adapters - The skill endpoint the voice platform calls.

pub mod skill;

pub use skill::{skill_router, SkillAppState};
